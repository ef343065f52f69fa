//! Render interface between the workspace controller and a UI.
//!
//! The controller never touches widgets. It describes what the user should
//! see through [`NotesView`], which the desktop shell implements over egui
//! and tests implement as a recorder.

use std::path::Path;
use tokio::sync::oneshot;

use crate::shared::note::{NoteId, NoteSummary};
use crate::shared::timestamp::format_timestamp;

/// Placeholder shown instead of an empty directory
pub const EMPTY_DIRECTORY_TEXT: &str = "No notes yet. Create your first note.";

/// Save indicator next to the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    Unsaved,
}

impl SaveStatus {
    pub fn label(self) -> &'static str {
        match self {
            SaveStatus::Saved => "● saved",
            SaveStatus::Unsaved => "● unsaved",
        }
    }
}

/// One row of the rendered directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub id: NoteId,
    pub title: String,
    pub preview: String,
    pub updated: String,
    pub active: bool,
}

impl DirectoryEntry {
    pub fn from_summary(summary: &NoteSummary, open: Option<NoteId>) -> Self {
        Self {
            id: summary.id,
            title: summary.display_title().to_string(),
            preview: summary.preview.clone(),
            updated: format_timestamp(summary.updated_at.as_deref()),
            active: open == Some(summary.id),
        }
    }
}

/// What the directory pane should display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// The query matched nothing
    Placeholder(&'static str),
    Entries(Vec<DirectoryEntry>),
}

/// Everything the controller asks of a UI
pub trait NotesView: Send {
    /// Show the credential forms
    fn show_credentials(&mut self);

    /// Reveal the note workspace for `username`
    fn show_workspace(&mut self, username: &str);

    /// Hide the note workspace
    fn hide_workspace(&mut self);

    fn show_auth_error(&mut self, message: &str);

    fn clear_auth_error(&mut self);

    /// Replace the whole directory listing
    fn render_directory(&mut self, listing: &Listing);

    /// Patch one directory row in place after a silent save
    fn patch_directory_entry(&mut self, id: NoteId, title: &str, updated: &str);

    /// Mark the row for `id` as active, un-marking every other row
    fn mark_active(&mut self, id: Option<NoteId>);

    /// Empty the directory pane entirely (no placeholder)
    fn clear_directory(&mut self);

    /// Load note `id`'s buffer into the editor pane and show it. Edits made
    /// in the pane must be sent back tagged with `id`.
    fn show_editor(&mut self, id: NoteId, title: &str, content: &str, meta: &str);

    /// Hide the editor pane and show the empty state
    fn show_empty_state(&mut self);

    /// Replace the created/updated line
    fn set_meta(&mut self, meta: &str);

    fn set_save_status(&mut self, status: SaveStatus);

    /// Move keyboard focus to the title field
    fn focus_title(&mut self);

    /// Ask the user a yes/no question. Dropping the sender counts as "no".
    fn confirm(&mut self, prompt: &str) -> oneshot::Receiver<bool>;

    /// An export finished and was written to `path`
    fn export_saved(&mut self, path: &Path);

    /// Transient message for the user
    fn show_notice(&mut self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_from_summary_marks_active() {
        let summary = NoteSummary {
            id: NoteId(4),
            title: String::new(),
            preview: "first line".to_string(),
            updated_at: Some("2024-01-05 15:07:00".to_string()),
        };

        let entry = DirectoryEntry::from_summary(&summary, Some(NoteId(4)));
        assert!(entry.active);
        assert_eq!(entry.title, "Untitled");
        assert_eq!(entry.updated, "Jan 5, 2024, 03:07 PM");

        let entry = DirectoryEntry::from_summary(&summary, Some(NoteId(5)));
        assert!(!entry.active);
    }

    #[test]
    fn test_save_status_labels() {
        assert_eq!(SaveStatus::Saved.label(), "● saved");
        assert_eq!(SaveStatus::Unsaved.label(), "● unsaved");
    }
}
