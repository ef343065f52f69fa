//! Notes API Client
//!
//! [`NotesApi`] is the seam between the workspace controller and the notes
//! server. [`HttpNotesApi`] is the production implementation; tests provide
//! in-memory fakes.

use async_trait::async_trait;

use crate::shared::auth::{AuthResponse, Credentials, SessionStatus};
use crate::shared::error::ClientResult;
use crate::shared::note::{Note, NoteDraft, NoteId, NoteSummary};

pub mod http;

pub use http::HttpNotesApi;

/// A downloaded note export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// File name suggested by the server, if any
    pub filename: Option<String>,
    pub body: Vec<u8>,
}

/// Operations the notes server offers
#[async_trait]
pub trait NotesApi: Send + Sync {
    /// `GET /api/me`
    async fn session_status(&self) -> ClientResult<SessionStatus>;

    /// `POST /api/login`
    async fn login(&self, credentials: &Credentials) -> ClientResult<AuthResponse>;

    /// `POST /api/register`
    async fn register(&self, credentials: &Credentials) -> ClientResult<AuthResponse>;

    /// `POST /api/logout`
    async fn logout(&self) -> ClientResult<()>;

    /// `GET /api/notes`, with `?q=` when `query` is given
    async fn list_notes(&self, query: Option<&str>) -> ClientResult<Vec<NoteSummary>>;

    /// `GET /api/notes/{id}`
    async fn get_note(&self, id: NoteId) -> ClientResult<Note>;

    /// `POST /api/notes`
    async fn create_note(&self, draft: &NoteDraft) -> ClientResult<Note>;

    /// `PUT /api/notes/{id}`
    async fn update_note(&self, id: NoteId, draft: &NoteDraft) -> ClientResult<Note>;

    /// `DELETE /api/notes/{id}`
    async fn delete_note(&self, id: NoteId) -> ClientResult<()>;

    /// `GET /api/notes/{id}/export`
    async fn export_note(&self, id: NoteId) -> ClientResult<ExportFile>;
}
