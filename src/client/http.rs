//! reqwest-backed [`NotesApi`]
//!
//! The server identifies the session with a cookie, so the underlying client
//! keeps a cookie store for its whole lifetime. One `HttpNotesApi` therefore
//! corresponds to one browser-like session.

use async_trait::async_trait;
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::{ExportFile, NotesApi};
use crate::shared::auth::{AuthResponse, Credentials, ErrorBody, SessionStatus};
use crate::shared::config::AppConfig;
use crate::shared::error::{ClientError, ClientResult};
use crate::shared::note::{Note, NoteDraft, NoteId, NoteSummary};

/// Notes API client over HTTP
#[derive(Debug, Clone)]
pub struct HttpNotesApi {
    config: AppConfig,
    client: Client,
}

impl HttpNotesApi {
    pub fn new(config: AppConfig) -> ClientResult<Self> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    async fn post_credentials(&self, path: &str, credentials: &Credentials) -> ClientResult<AuthResponse> {
        let response = self.client.post(self.url(path)).json(credentials).send().await?;
        decode(check(response).await?).await
    }
}

/// Turn a non-success response into [`ClientError::Status`], keeping the
/// server's `error` text when the body carries one.
async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .map(|b| b.error);
    tracing::debug!(status = status.as_u16(), ?message, "request rejected");
    Err(ClientError::status(status.as_u16(), message))
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Extract the file name from a `Content-Disposition` header value
pub fn disposition_filename(header: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}

#[async_trait]
impl NotesApi for HttpNotesApi {
    async fn session_status(&self) -> ClientResult<SessionStatus> {
        let response = self.client.get(self.url("/api/me")).send().await?;
        decode(check(response).await?).await
    }

    async fn login(&self, credentials: &Credentials) -> ClientResult<AuthResponse> {
        self.post_credentials("/api/login", credentials).await
    }

    async fn register(&self, credentials: &Credentials) -> ClientResult<AuthResponse> {
        self.post_credentials("/api/register", credentials).await
    }

    async fn logout(&self) -> ClientResult<()> {
        let response = self.client.post(self.url("/api/logout")).send().await?;
        check(response).await?;
        Ok(())
    }

    async fn list_notes(&self, query: Option<&str>) -> ClientResult<Vec<NoteSummary>> {
        let mut request = self.client.get(self.url("/api/notes"));
        if let Some(q) = query {
            request = request.query(&[("q", q)]);
        }
        let response = request.send().await?;
        decode(check(response).await?).await
    }

    async fn get_note(&self, id: NoteId) -> ClientResult<Note> {
        let response = self
            .client
            .get(self.url(&format!("/api/notes/{}", id)))
            .send()
            .await?;
        decode(check(response).await?).await
    }

    async fn create_note(&self, draft: &NoteDraft) -> ClientResult<Note> {
        let response = self
            .client
            .post(self.url("/api/notes"))
            .json(draft)
            .send()
            .await?;
        decode(check(response).await?).await
    }

    async fn update_note(&self, id: NoteId, draft: &NoteDraft) -> ClientResult<Note> {
        let response = self
            .client
            .put(self.url(&format!("/api/notes/{}", id)))
            .json(draft)
            .send()
            .await?;
        decode(check(response).await?).await
    }

    async fn delete_note(&self, id: NoteId) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/notes/{}", id)))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn export_note(&self, id: NoteId) -> ClientResult<ExportFile> {
        let response = self
            .client
            .get(self.url(&format!("/api/notes/{}/export", id)))
            .send()
            .await?;
        let response = check(response).await?;
        let filename = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(disposition_filename);
        let body = response.bytes().await?.to_vec();
        Ok(ExportFile { filename, body })
    }
}
