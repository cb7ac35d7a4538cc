//! Integration tests for CLI argument handling
//!
//! Runs the binary for argument errors and help output; lookups that need the
//! network are covered by the library tests.

use std::process::Command;

use tempfile::TempDir;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_timetable"))
        .args(args)
        .output()
        .expect("Failed to execute timetable")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("timetable"), "Help should mention timetable");
    assert!(stdout.contains("show"), "Help should mention the show command");
    assert!(stdout.contains("serve"), "Help should mention the serve command");
}

#[test]
fn test_missing_command_fails() {
    let output = run_cli(&[]);
    assert!(!output.status.success());
}

#[test]
fn test_show_requires_class() {
    let output = run_cli(&["show", "--table-id", "abc"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--class"), "Should name the missing flag: {}", stderr);
}

#[test]
fn test_show_invalid_weekday_prints_error_and_exits() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let cache_dir = temp_dir.path().to_string_lossy().to_string();

    let output = run_cli(&[
        "show",
        "--cache-dir",
        &cache_dir,
        "--table-id",
        "abc",
        "--class",
        "10а",
        "--days",
        "someday",
    ]);

    assert!(!output.status.success(), "Expected invalid weekday to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("someday"),
        "Should print error message about the weekday: {}",
        stderr
    );
}

#[test]
fn test_show_help_lists_weekday_aliases() {
    let output = run_cli(&["show", "--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--days"));
    assert!(stdout.contains("this_day"));
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use timetable::cli::{AppConfig, Cli, Command};

    #[test]
    fn test_cli_show_arguments() {
        let cli = Cli::parse_from(["timetable", "show", "--table-id", "abc", "--class", "11б"]);
        match cli.command {
            Command::Show {
                table_id, class, ..
            } => {
                assert_eq!(table_id, "abc");
                assert_eq!(class, "11б");
            }
            other => panic!("Unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_app_config_from_cli_with_cache_dir() {
        let cli = Cli::parse_from(["timetable", "-v", "--cache-dir", "/tmp/x", "serve"]);
        let config = AppConfig::from_cli(&cli).unwrap();
        assert!(config.verbose);
        assert_eq!(config.cache.dir().to_string_lossy(), "/tmp/x");
    }
}
