//! Session and credential types
//!
//! Request/response bodies for the `/api/me`, `/api/login`, `/api/register`
//! endpoints, and the client-side [`Session`] they establish.

use serde::{Deserialize, Serialize};

/// Login / registration request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Trim the username and reject empty fields.
    ///
    /// Returns `None` when either field is empty after trimming the username;
    /// the password is sent exactly as typed.
    pub fn normalized(username: &str, password: &str) -> Option<Self> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// `GET /api/me` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub username: Option<String>,
}

/// Successful login / registration response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub username: String,
}

/// Error body the server returns alongside a non-2xx status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Which credential form a submission came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    /// Text shown when the server gives no reason for a rejection
    pub fn failure_text(self) -> &'static str {
        match self {
            AuthMode::Login => "Login failed",
            AuthMode::Register => "Registration failed",
        }
    }
}

/// Client-side view of the server session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { username: String },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Session::Authenticated { username } => Some(username),
            Session::Anonymous => None,
        }
    }
}

impl From<SessionStatus> for Session {
    fn from(status: SessionStatus) -> Self {
        match (status.authenticated, status.username) {
            (true, Some(username)) => Session::Authenticated { username },
            (true, None) => Session::Authenticated {
                username: String::new(),
            },
            (false, _) => Session::Anonymous,
        }
    }
}
