//! Timetable - school class schedules from a Google Sheets export
//!
//! Prints a class's lessons for the requested weekdays, or serves the same
//! lookups over HTTP.

use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use timetable::cli::{AppConfig, Cli, Command};
use timetable::data::normalize_week_days;
use timetable::fetch::SheetClient;
use timetable::server;
use timetable::service::ScheduleService;

/// Sets up log output on stderr; `RUST_LOG` overrides the default level
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli)?;
    init_tracing(config.verbose);

    let service = ScheduleService::new(config.cache, SheetClient::new());

    match cli.command {
        Command::Show {
            table_id,
            class,
            days,
        } => {
            let days = normalize_week_days(&days, Local::now().date_naive())?;
            let lessons = service.class_lessons(&table_id, &class, &days).await?;
            println!("{}", serde_json::to_string_pretty(&lessons)?);
        }
        Command::Serve { addr } => {
            server::serve(addr, service).await?;
        }
    }

    Ok(())
}
