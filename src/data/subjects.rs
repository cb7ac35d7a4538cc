//! Static subject abbreviation table
//!
//! Timetable authors abbreviate subject names to fit narrow columns. This
//! module expands the known abbreviations back to full Russian names.

/// Known subject abbreviations and their full names
///
/// Keys are matched against the lower-cased, trimmed cell text.
pub static SUBJECT_ABBREVIATIONS: [(&str, &str); 13] = [
    ("кл.час", "классный час"),
    ("матем", "математика"),
    ("рус.яз", "русский язык"),
    ("физкул", "физкультура"),
    ("географ", "география"),
    ("литер", "литература"),
    ("геометр", "геометрия"),
    ("биолог", "биология"),
    ("общест", "обществознание"),
    ("англ.яз", "английский язык"),
    (
        "физ(у)/инф(у)",
        "физика (углублённая)/информатика (углублённая)",
    ),
    ("инф(б)/физ(б)", "информатика (базовая)/физика (базовая)"),
    ("информ.(э)", "электив по информатике"),
];

/// Looks up the full name of an abbreviated subject
pub fn expand_abbreviation(abbreviation: &str) -> Option<&'static str> {
    SUBJECT_ABBREVIATIONS
        .iter()
        .find(|(short, _)| *short == abbreviation)
        .map(|(_, full)| *full)
}

/// Strips a trailing parenthesized qualifier, e.g. `"матем(б)"` -> `"матем"`
fn strip_qualifier(subject: &str) -> Option<&str> {
    let base = subject.strip_suffix(')')?;
    let open = base.rfind('(')?;
    let base = base[..open].trim_end();
    (!base.is_empty()).then_some(base)
}

/// Uppercases the first character and leaves the rest untouched
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Expands a known abbreviation and capitalizes the result
///
/// The subject is matched verbatim first, so table keys that contain
/// parentheses themselves still match. Otherwise a trailing qualifier is
/// stripped and the base is looked up. Unknown subjects pass through as-is.
pub fn normalize_subject(subject: &str) -> String {
    let expanded = expand_abbreviation(subject)
        .or_else(|| strip_qualifier(subject).and_then(expand_abbreviation))
        .unwrap_or(subject);

    capitalize(expanded)
}
