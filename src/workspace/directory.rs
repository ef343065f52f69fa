//! Notes directory: the sidebar list of note summaries.
//!
//! Loading is best-effort. A failed fetch leaves whatever is on screen and is
//! only logged.

use crate::client::NotesApi;
use crate::shared::note::{display_title, NoteId, NoteSummary};
use crate::shared::timestamp::format_timestamp;

use super::view::{DirectoryEntry, Listing, NotesView, EMPTY_DIRECTORY_TEXT};

#[derive(Debug, Default)]
pub struct NotesDirectory {
    entries: Vec<NoteSummary>,
    query: Option<String>,
}

impl NotesDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch summaries matching `query` and replace the listing.
    ///
    /// The query is remembered for later [`reload`](Self::reload)s. Returns
    /// whether the listing was replaced.
    pub async fn load<A, V>(
        &mut self,
        api: &A,
        view: &mut V,
        query: Option<&str>,
        open: Option<NoteId>,
    ) -> bool
    where
        A: NotesApi + ?Sized,
        V: NotesView + ?Sized,
    {
        self.query = normalize_query(query);
        self.fetch(api, view, open).await
    }

    /// Fetch again with the remembered query.
    pub async fn reload<A, V>(&mut self, api: &A, view: &mut V, open: Option<NoteId>) -> bool
    where
        A: NotesApi + ?Sized,
        V: NotesView + ?Sized,
    {
        self.fetch(api, view, open).await
    }

    async fn fetch<A, V>(&mut self, api: &A, view: &mut V, open: Option<NoteId>) -> bool
    where
        A: NotesApi + ?Sized,
        V: NotesView + ?Sized,
    {
        match api.list_notes(self.query.as_deref()).await {
            Ok(entries) => {
                tracing::debug!(count = entries.len(), query = ?self.query, "directory loaded");
                self.entries = entries;
                view.render_directory(&self.listing(open));
                true
            }
            Err(e) => {
                tracing::warn!("directory load failed: {}", e);
                false
            }
        }
    }

    /// Patch the cached row for `id` and the rendered row, without a request.
    pub fn patch<V>(&mut self, view: &mut V, id: NoteId, title: &str, updated_at: Option<&str>)
    where
        V: NotesView + ?Sized,
    {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.title = title.to_string();
            entry.updated_at = updated_at.map(str::to_string);
        }
        view.patch_directory_entry(id, display_title(title), &format_timestamp(updated_at));
    }

    pub fn mark_active<V>(&self, view: &mut V, open: Option<NoteId>)
    where
        V: NotesView + ?Sized,
    {
        view.mark_active(open);
    }

    /// Forget the listing and the query and empty the pane.
    pub fn clear<V>(&mut self, view: &mut V)
    where
        V: NotesView + ?Sized,
    {
        self.entries.clear();
        self.query = None;
        view.clear_directory();
    }

    pub fn listing(&self, open: Option<NoteId>) -> Listing {
        if self.entries.is_empty() {
            return Listing::Placeholder(EMPTY_DIRECTORY_TEXT);
        }
        Listing::Entries(
            self.entries
                .iter()
                .map(|summary| DirectoryEntry::from_summary(summary, open))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[NoteSummary] {
        &self.entries
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

/// A blank query means no filter; anything else is sent as typed.
fn normalize_query(query: Option<&str>) -> Option<String> {
    query
        .filter(|q| !q.trim().is_empty())
        .map(str::to_string)
}
