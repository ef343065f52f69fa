//! Session gate
//!
//! Decides whether the workspace may be shown. The gate only tracks the
//! session; revealing or hiding the workspace is the controller's job.

use crate::client::NotesApi;
use crate::shared::auth::{AuthMode, Credentials, Session};

/// Shown when a credential field is left empty
pub const MISSING_FIELDS_TEXT: &str = "Please fill in all fields.";

#[derive(Debug, Default)]
pub struct SessionGate {
    session: Session,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Ask the server who we are. Any failure counts as anonymous.
    pub async fn check<A>(&mut self, api: &A) -> &Session
    where
        A: NotesApi + ?Sized,
    {
        self.session = match api.session_status().await {
            Ok(status) => Session::from(status),
            Err(e) => {
                tracing::warn!("session status check failed: {}", e);
                Session::Anonymous
            }
        };
        tracing::info!(authenticated = self.session.is_authenticated(), "session checked");
        &self.session
    }

    /// Log in or register. On success the session is established and the
    /// username returned; on failure the text to show the user.
    pub async fn submit<A>(
        &mut self,
        api: &A,
        mode: AuthMode,
        username: &str,
        password: &str,
    ) -> Result<String, String>
    where
        A: NotesApi + ?Sized,
    {
        let credentials = Credentials::normalized(username, password)
            .ok_or_else(|| MISSING_FIELDS_TEXT.to_string())?;

        let result = match mode {
            AuthMode::Login => api.login(&credentials).await,
            AuthMode::Register => api.register(&credentials).await,
        };

        match result {
            Ok(response) => {
                tracing::info!(username = %response.username, ?mode, "authenticated");
                self.session = Session::Authenticated {
                    username: response.username.clone(),
                };
                Ok(response.username)
            }
            Err(e) => {
                tracing::warn!(?mode, "authentication failed: {}", e);
                Err(e
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| mode.failure_text().to_string()))
            }
        }
    }

    /// End the session locally, telling the server on a best-effort basis.
    pub async fn logout<A>(&mut self, api: &A)
    where
        A: NotesApi + ?Sized,
    {
        if let Err(e) = api.logout().await {
            tracing::warn!("logout request failed: {}", e);
        }
        self.session = Session::Anonymous;
        tracing::info!("logged out");
    }
}
