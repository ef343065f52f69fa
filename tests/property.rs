//! Property-based tests for display rules

use proptest::prelude::*;

use liggs::shared::auth::Credentials;
use liggs::shared::note::{display_title, NoteDraft, DEFAULT_TITLE};
use liggs::shared::timestamp::format_timestamp;
use liggs::workspace::{KeyChord, Shortcut};

proptest! {
    #[test]
    fn test_blank_titles_become_default(spaces in "[ \t\n]{0,8}") {
        prop_assert_eq!(display_title(&spaces), DEFAULT_TITLE);
        prop_assert_eq!(NoteDraft::from_buffer(&spaces, "x").title, DEFAULT_TITLE);
    }

    #[test]
    fn test_non_blank_titles_kept_verbatim(title in " ?[A-Za-z0-9][A-Za-z0-9 ]{0,20}") {
        prop_assert_eq!(display_title(&title), title.as_str());
    }

    #[test]
    fn test_server_timestamps_always_format(
        year in 2000i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
        second in 0u32..60,
    ) {
        let raw = format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}");
        let shown = format_timestamp(Some(&raw));

        let hour12 = match hour % 12 { 0 => 12, h => h };
        let suffix = if hour < 12 { "AM" } else { "PM" };
        let expected_tail = format!(", {year}, {hour12:02}:{minute:02} {suffix}");
        prop_assert!(shown.ends_with(&expected_tail), "{} -> {}", raw, shown);
        let expected_day = format!(" {day},");
        prop_assert!(shown.contains(&expected_day), "{} -> {}", raw, shown);
    }

    #[test]
    fn test_unparseable_timestamps_pass_through(raw in "[a-z]{1,12}") {
        prop_assert_eq!(format_timestamp(Some(&raw)), raw);
    }

    #[test]
    fn test_credentials_reject_blank_username(spaces in " {0,5}", password in ".{0,10}") {
        prop_assert!(Credentials::normalized(&spaces, &password).is_none());
    }

    #[test]
    fn test_shortcuts_need_a_modifier(key in proptest::char::range('a', 'z')) {
        prop_assert_eq!(Shortcut::from_chord(KeyChord::new(key, false, false)), None);
    }
}
