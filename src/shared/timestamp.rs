//! Display formatting for server timestamps.
//!
//! The server stores `YYYY-MM-DD HH:MM:SS` strings. They are parsed as ISO
//! date-times after swapping the separating space for `T` and rendered as
//! `Jan 5, 2024, 03:07 PM`.

use chrono::NaiveDateTime;

const DISPLAY_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Format a server timestamp for display.
///
/// Missing or empty input yields an empty string; input that does not parse
/// is returned unchanged.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let raw = match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return String::new(),
    };

    let iso = raw.replacen(' ', "T", 1);
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&iso, fmt).ok())
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Meta line shown under the editor title
pub fn meta_line(created_at: Option<&str>, updated_at: Option<&str>) -> String {
    format!(
        "Created: {} · Updated: {}",
        format_timestamp(created_at),
        format_timestamp(updated_at)
    )
}

/// Meta line for a note that was created a moment ago
pub const JUST_CREATED: &str = "Created: just now";
