//! Shared view model
//!
//! The workspace thread writes into [`ViewModel`] through [`SharedView`]; the
//! egui thread reads it every frame and edits the editor buffer in place.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use eframe::egui;
use tokio::sync::oneshot;

use crate::shared::note::NoteId;
use crate::workspace::{Listing, NotesView, SaveStatus};

/// Which top-level screen is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    Credentials,
    Workspace,
}

/// The note loaded in the editor pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorPane {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub meta: String,
    pub status: SaveStatus,
}

/// A yes/no question waiting for the user
#[derive(Debug)]
pub struct PendingConfirm {
    pub prompt: String,
    reply: oneshot::Sender<bool>,
}

#[derive(Debug)]
pub struct ViewModel {
    pub screen: Screen,
    pub username: Option<String>,
    pub auth_error: Option<String>,
    /// `None` while the directory pane is cleared
    pub listing: Option<Listing>,
    pub active: Option<NoteId>,
    /// `None` shows the empty state
    pub editor: Option<EditorPane>,
    /// Set by the controller, consumed by the title field on the next frame
    pub focus_title: bool,
    pub confirm: Option<PendingConfirm>,
    pub notice: Option<String>,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewModel {
    pub fn new() -> Self {
        Self {
            screen: Screen::Intro,
            username: None,
            auth_error: None,
            listing: None,
            active: None,
            editor: None,
            focus_title: false,
            confirm: None,
            notice: None,
        }
    }

    /// Answer the pending confirmation, if any
    pub fn answer_confirm(&mut self, yes: bool) {
        if let Some(pending) = self.confirm.take() {
            let _ = pending.reply.send(yes);
        }
    }
}

/// [`NotesView`] over a shared [`ViewModel`], waking egui on every change
#[derive(Clone)]
pub struct SharedView {
    model: Arc<Mutex<ViewModel>>,
    ctx: Option<egui::Context>,
}

impl SharedView {
    pub fn new(model: Arc<Mutex<ViewModel>>, ctx: Option<egui::Context>) -> Self {
        Self { model, ctx }
    }

    fn update<F: FnOnce(&mut ViewModel)>(&mut self, f: F) {
        f(&mut lock(&self.model));
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }
}

/// Lock the model, recovering it if a previous holder panicked
pub fn lock(model: &Mutex<ViewModel>) -> MutexGuard<'_, ViewModel> {
    model.lock().unwrap_or_else(PoisonError::into_inner)
}

impl NotesView for SharedView {
    fn show_credentials(&mut self) {
        self.update(|m| m.screen = Screen::Credentials);
    }

    fn show_workspace(&mut self, username: &str) {
        self.update(|m| {
            m.screen = Screen::Workspace;
            m.username = Some(username.to_string());
            m.auth_error = None;
        });
    }

    fn hide_workspace(&mut self) {
        self.update(|m| {
            m.username = None;
            m.notice = None;
            if m.screen == Screen::Workspace {
                m.screen = Screen::Credentials;
            }
        });
    }

    fn show_auth_error(&mut self, message: &str) {
        self.update(|m| m.auth_error = Some(message.to_string()));
    }

    fn clear_auth_error(&mut self) {
        self.update(|m| m.auth_error = None);
    }

    fn render_directory(&mut self, listing: &Listing) {
        self.update(|m| m.listing = Some(listing.clone()));
    }

    fn patch_directory_entry(&mut self, id: NoteId, title: &str, updated: &str) {
        self.update(|m| {
            if let Some(Listing::Entries(entries)) = &mut m.listing {
                if let Some(entry) = entries.iter_mut().find(|e| e.id == id) {
                    entry.title = title.to_string();
                    entry.updated = updated.to_string();
                }
            }
        });
    }

    fn mark_active(&mut self, id: Option<NoteId>) {
        self.update(|m| {
            m.active = id;
            if let Some(Listing::Entries(entries)) = &mut m.listing {
                for entry in entries.iter_mut() {
                    entry.active = Some(entry.id) == id;
                }
            }
        });
    }

    fn clear_directory(&mut self) {
        self.update(|m| {
            m.listing = None;
            m.active = None;
        });
    }

    fn show_editor(&mut self, id: NoteId, title: &str, content: &str, meta: &str) {
        self.update(|m| {
            m.editor = Some(EditorPane {
                id,
                title: title.to_string(),
                content: content.to_string(),
                meta: meta.to_string(),
                status: SaveStatus::Saved,
            });
        });
    }

    fn show_empty_state(&mut self) {
        self.update(|m| {
            m.editor = None;
            m.focus_title = false;
        });
    }

    fn set_meta(&mut self, meta: &str) {
        self.update(|m| {
            if let Some(editor) = &mut m.editor {
                editor.meta = meta.to_string();
            }
        });
    }

    fn set_save_status(&mut self, status: SaveStatus) {
        self.update(|m| {
            if let Some(editor) = &mut m.editor {
                editor.status = status;
            }
        });
    }

    fn focus_title(&mut self) {
        self.update(|m| m.focus_title = true);
    }

    fn confirm(&mut self, prompt: &str) -> oneshot::Receiver<bool> {
        let (reply, rx) = oneshot::channel();
        self.update(|m| {
            // A newer question replaces an unanswered one, which counts as "no"
            m.confirm = Some(PendingConfirm {
                prompt: prompt.to_string(),
                reply,
            });
        });
        rx
    }

    fn export_saved(&mut self, path: &Path) {
        let message = format!("Exported to {}", path.display());
        self.update(|m| m.notice = Some(message));
    }

    fn show_notice(&mut self, message: &str) {
        self.update(|m| m.notice = Some(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::DirectoryEntry;

    fn shared() -> (Arc<Mutex<ViewModel>>, SharedView) {
        let model = Arc::new(Mutex::new(ViewModel::new()));
        (model.clone(), SharedView::new(model, None))
    }

    fn entry(id: i64, title: &str) -> DirectoryEntry {
        DirectoryEntry {
            id: NoteId(id),
            title: title.to_string(),
            preview: String::new(),
            updated: String::new(),
            active: false,
        }
    }

    #[test]
    fn test_starts_on_intro() {
        let (model, _) = shared();
        assert_eq!(lock(&model).screen, Screen::Intro);
    }

    #[test]
    fn test_workspace_and_back() {
        let (model, mut view) = shared();
        view.show_auth_error("Invalid credentials");
        view.show_workspace("ada");
        {
            let m = lock(&model);
            assert_eq!(m.screen, Screen::Workspace);
            assert_eq!(m.username.as_deref(), Some("ada"));
            assert!(m.auth_error.is_none());
        }

        view.hide_workspace();
        view.show_credentials();
        let m = lock(&model);
        assert_eq!(m.screen, Screen::Credentials);
        assert!(m.username.is_none());
    }

    #[test]
    fn test_patch_and_mark_active() {
        let (model, mut view) = shared();
        view.render_directory(&Listing::Entries(vec![entry(1, "a"), entry(2, "b")]));
        view.patch_directory_entry(NoteId(2), "b2", "Jan 5, 2024, 03:07 PM");
        view.mark_active(Some(NoteId(2)));

        let m = lock(&model);
        match &m.listing {
            Some(Listing::Entries(entries)) => {
                assert_eq!(entries[1].title, "b2");
                assert_eq!(entries[1].updated, "Jan 5, 2024, 03:07 PM");
                assert!(entries[1].active);
                assert!(!entries[0].active);
            }
            other => panic!("expected entries, got {:?}", other),
        }
    }

    #[test]
    fn test_status_follows_editor() {
        let (model, mut view) = shared();
        view.set_save_status(SaveStatus::Unsaved);
        assert!(lock(&model).editor.is_none());

        view.show_editor(NoteId(3), "t", "c", "Created: just now");
        view.set_save_status(SaveStatus::Unsaved);
        assert_eq!(lock(&model).editor.as_ref().unwrap().status, SaveStatus::Unsaved);

        view.show_empty_state();
        assert!(lock(&model).editor.is_none());
    }

    #[tokio::test]
    async fn test_confirm_round_trip() {
        let (model, mut view) = shared();
        let rx = view.confirm("Delete this note permanently?");
        assert_eq!(
            lock(&model).confirm.as_ref().unwrap().prompt,
            "Delete this note permanently?"
        );

        lock(&model).answer_confirm(true);
        assert!(rx.await.unwrap());
        assert!(lock(&model).confirm.is_none());
    }

    #[tokio::test]
    async fn test_replaced_confirm_counts_as_no() {
        let (_model, mut view) = shared();
        let first = view.confirm("first");
        let _second = view.confirm("second");
        assert!(first.await.is_err());
    }
}
