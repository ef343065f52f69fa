//! Note editor session
//!
//! Holds the open note's identity, its edit buffer, and the dirty flag, and
//! owns the autosave timer. Two states:
//!
//! - `Empty`: no note loaded, never dirty.
//! - `Editing(id)`: a note is loaded; dirty from the first keystroke until
//!   the next successful save.
//!
//! Before the open identity changes (open another note, create a note) any
//! dirty buffer is saved first, and the switch is abandoned if that save
//! fails. Deleting and logging out discard the buffer.

use std::path::Path;

use crate::client::NotesApi;
use crate::shared::note::{NoteDraft, NoteId};
use crate::shared::timestamp::{meta_line, JUST_CREATED};

use super::debounce::{Debouncer, Ticket};
use super::directory::NotesDirectory;
use super::export::write_export;
use super::view::{NotesView, SaveStatus};
use super::WorkspaceEvent;

pub const DELETE_PROMPT: &str = "Delete this note permanently?";

#[derive(Debug)]
pub struct EditorSession {
    open: Option<NoteId>,
    title: String,
    content: String,
    dirty: bool,
    autosave: Debouncer<WorkspaceEvent>,
}

impl EditorSession {
    pub fn new(autosave: Debouncer<WorkspaceEvent>) -> Self {
        Self {
            open: None,
            title: String::new(),
            content: String::new(),
            dirty: false,
            autosave,
        }
    }

    pub fn open_id(&self) -> Option<NoteId> {
        self.open
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_none()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn autosave_pending(&self) -> bool {
        self.autosave.is_pending()
    }

    /// A keystroke changed the buffer of note `id`: mark dirty and restart
    /// the autosave timer. Ignored unless `id` is the open note, since the
    /// pane may still show the previous note while a switch is in flight.
    pub fn on_edit<V>(&mut self, view: &mut V, id: NoteId, title: String, content: String)
    where
        V: NotesView + ?Sized,
    {
        if self.open != Some(id) {
            tracing::debug!(%id, open = ?self.open, "edit for a note that is not open dropped");
            return;
        }
        self.title = title;
        self.content = content;
        if !self.dirty {
            self.dirty = true;
            view.set_save_status(SaveStatus::Unsaved);
        }
        self.autosave.schedule(WorkspaceEvent::AutosaveDue);
    }

    /// The autosave timer fired.
    pub async fn autosave_due<A, V>(
        &mut self,
        ticket: Ticket,
        api: &A,
        view: &mut V,
        directory: &mut NotesDirectory,
    ) where
        A: NotesApi + ?Sized,
        V: NotesView + ?Sized,
    {
        if !self.autosave.fire(ticket) {
            tracing::debug!("stale autosave ticket dropped");
            return;
        }
        if self.dirty {
            self.save(api, view, directory, true).await;
        }
    }

    /// Persist the buffer. A silent save patches the directory row in place;
    /// an explicit one reloads the directory. Returns whether the save
    /// succeeded; with no open note there is nothing to do and it returns
    /// `true`.
    pub async fn save<A, V>(
        &mut self,
        api: &A,
        view: &mut V,
        directory: &mut NotesDirectory,
        silent: bool,
    ) -> bool
    where
        A: NotesApi + ?Sized,
        V: NotesView + ?Sized,
    {
        let Some(id) = self.open else {
            return true;
        };

        let draft = NoteDraft::from_buffer(&self.title, &self.content);
        match api.update_note(id, &draft).await {
            Ok(note) => {
                tracing::debug!(%id, silent, "note saved");
                view.set_meta(&meta_line(note.created_at.as_deref(), note.updated_at.as_deref()));
                self.mark_clean(view);
                if silent {
                    directory.patch(view, id, &draft.title, note.updated_at.as_deref());
                } else {
                    directory.reload(api, view, Some(id)).await;
                }
                true
            }
            Err(e) => {
                tracing::warn!(%id, "save failed, note stays dirty: {}", e);
                false
            }
        }
    }

    /// Save-before-switch guard: silently save a dirty buffer. Returns
    /// whether it is now safe to change the open identity.
    async fn flush<A, V>(&mut self, api: &A, view: &mut V, directory: &mut NotesDirectory) -> bool
    where
        A: NotesApi + ?Sized,
        V: NotesView + ?Sized,
    {
        if self.dirty && self.open.is_some() {
            self.save(api, view, directory, true).await
        } else {
            true
        }
    }

    /// Switch the editor to note `id`.
    pub async fn open<A, V>(
        &mut self,
        id: NoteId,
        api: &A,
        view: &mut V,
        directory: &mut NotesDirectory,
    ) -> bool
    where
        A: NotesApi + ?Sized,
        V: NotesView + ?Sized,
    {
        if !self.flush(api, view, directory).await {
            tracing::warn!(current = ?self.open, target = %id, "switch abandoned, unsaved edits");
            return false;
        }

        let note = match api.get_note(id).await {
            Ok(note) => note,
            Err(e) => {
                tracing::warn!(%id, "failed to open note: {}", e);
                return false;
            }
        };

        self.autosave.cancel();
        self.open = Some(id);
        self.title = note.title;
        self.content = note.content;
        view.show_editor(
            id,
            &self.title,
            &self.content,
            &meta_line(note.created_at.as_deref(), note.updated_at.as_deref()),
        );
        directory.mark_active(view, Some(id));
        self.mark_clean(view);
        tracing::debug!(%id, "note opened");
        true
    }

    /// Create a blank note on the server and open it.
    pub async fn create_new<A, V>(&mut self, api: &A, view: &mut V, directory: &mut NotesDirectory) -> bool
    where
        A: NotesApi + ?Sized,
        V: NotesView + ?Sized,
    {
        if !self.flush(api, view, directory).await {
            tracing::warn!(current = ?self.open, "new note abandoned, unsaved edits");
            return false;
        }

        let note = match api.create_note(&NoteDraft::blank()).await {
            Ok(note) => note,
            Err(e) => {
                tracing::warn!("failed to create note: {}", e);
                return false;
            }
        };

        self.autosave.cancel();
        self.open = Some(note.id);
        self.title.clear();
        self.content.clear();
        view.show_editor(note.id, "", "", JUST_CREATED);
        directory.reload(api, view, self.open).await;
        directory.mark_active(view, self.open);
        view.focus_title();
        self.mark_clean(view);
        tracing::info!(id = %note.id, "note created");
        true
    }

    /// Ask for confirmation, delete the open note, and go back to `Empty`.
    /// Returns whether the user confirmed.
    pub async fn delete<A, V>(&mut self, api: &A, view: &mut V, directory: &mut NotesDirectory) -> bool
    where
        A: NotesApi + ?Sized,
        V: NotesView + ?Sized,
    {
        let Some(id) = self.open else {
            return false;
        };

        let confirmed = view.confirm(DELETE_PROMPT).await.unwrap_or(false);
        if !confirmed {
            tracing::debug!(%id, "delete declined");
            return false;
        }

        if let Err(e) = api.delete_note(id).await {
            tracing::warn!(%id, "delete request failed: {}", e);
        }
        self.reset(view);
        directory.reload(api, view, None).await;
        tracing::info!(%id, "note deleted");
        true
    }

    /// Download the open note's export into `dir`.
    pub async fn export<A, V>(&self, api: &A, view: &mut V, dir: &Path)
    where
        A: NotesApi + ?Sized,
        V: NotesView + ?Sized,
    {
        let Some(id) = self.open else {
            return;
        };

        let result = match api.export_note(id).await {
            Ok(file) => write_export(dir, &file, &self.title, id).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(path) => view.export_saved(&path),
            Err(e) => {
                tracing::warn!(%id, "export failed: {}", e);
                view.show_notice(&format!("Export failed: {}", e));
            }
        }
    }

    /// Drop the open note and its buffer without saving.
    pub fn reset<V>(&mut self, view: &mut V)
    where
        V: NotesView + ?Sized,
    {
        self.autosave.cancel();
        self.open = None;
        self.title.clear();
        self.content.clear();
        self.dirty = false;
        view.show_empty_state();
    }

    fn mark_clean<V>(&mut self, view: &mut V)
    where
        V: NotesView + ?Sized,
    {
        self.dirty = false;
        self.autosave.cancel();
        view.set_save_status(SaveStatus::Saved);
    }
}
