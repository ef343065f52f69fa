//! Note Data Structures
//!
//! Wire types for the notes endpoints. The server owns every note; the client
//! keeps at most one fully loaded [`Note`] (the open one) plus a list of
//! [`NoteSummary`] rows for the directory.
//!
//! Optional fields tolerate being absent or `null` in server responses so that
//! a partially filled row never fails a whole directory load.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Title used whenever a note's title is blank
pub const DEFAULT_TITLE: &str = "Untitled";

/// Server-assigned note identity
///
/// Treated as opaque by the client: it is only compared, displayed, and
/// interpolated into request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub i64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fully loaded note (`GET /api/notes/{id}`, `POST`, `PUT` responses)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One directory row (`GET /api/notes`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    pub id: NoteId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub preview: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl NoteSummary {
    /// Title as it should be displayed
    pub fn display_title(&self) -> &str {
        display_title(&self.title)
    }
}

/// Request body for creating and updating notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    /// Body sent when the user asks for a new note
    pub fn blank() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            content: String::new(),
        }
    }

    /// Build a draft from an edit buffer, substituting the default title
    /// for a blank one.
    pub fn from_buffer(title: &str, content: &str) -> Self {
        Self {
            title: display_title(title).to_string(),
            content: content.to_string(),
        }
    }
}

/// `title`, or [`DEFAULT_TITLE`] when it is empty or whitespace only
pub fn display_title(title: &str) -> &str {
    if title.trim().is_empty() {
        DEFAULT_TITLE
    } else {
        title
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_defaults_blank() {
        assert_eq!(display_title(""), "Untitled");
        assert_eq!(display_title("   "), "Untitled");
        assert_eq!(display_title("Groceries"), "Groceries");
    }

    #[test]
    fn test_draft_from_buffer() {
        let draft = NoteDraft::from_buffer("", "body");
        assert_eq!(draft.title, "Untitled");
        assert_eq!(draft.content, "body");
    }

    #[test]
    fn test_blank_draft() {
        let draft = NoteDraft::blank();
        assert_eq!(draft.title, DEFAULT_TITLE);
        assert!(draft.content.is_empty());
    }

    #[test]
    fn test_note_id_is_transparent() {
        let id: NoteId = serde_json::from_str("42").unwrap();
        assert_eq!(id, NoteId(42));
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_summary_tolerates_nulls() {
        let json = r#"{"id": 3, "title": null, "preview": null, "updated_at": null}"#;
        let summary: NoteSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, NoteId(3));
        assert_eq!(summary.display_title(), "Untitled");
        assert!(summary.preview.is_empty());
        assert!(summary.updated_at.is_none());
    }

    #[test]
    fn test_note_from_server_row() {
        let json = r#"{
            "id": 7,
            "user_id": 1,
            "title": "Plans",
            "content": "go to the moon",
            "created_at": "2024-01-05 15:07:00",
            "updated_at": "2024-01-06 09:00:00"
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id, NoteId(7));
        assert_eq!(note.title, "Plans");
        assert_eq!(note.created_at.as_deref(), Some("2024-01-05 15:07:00"));
    }
}
