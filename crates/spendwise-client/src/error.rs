use std::sync::Arc;

use reqwest::StatusCode;

/// Longest body excerpt carried inside an error.
pub const BODY_SNIPPET_LIMIT: usize = 512;

#[derive(thiserror::Error, Debug, Clone)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(Arc<reqwest::Error>),
    #[error("request failed: {status} {body}")]
    Status { status: StatusCode, body: String },
    #[error("not authenticated: no refresh token stored")]
    NoRefreshToken,
    #[error("token storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("failed to encode request body: {0}")]
    Encode(String),
    #[error("failed to decode response: {message}")]
    Decode { message: String },
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid header value: {0}")]
    InvalidHeader(String),
    #[error("session refresh was abandoned before it finished")]
    RefreshAbandoned,
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::NoRefreshToken)
            || self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    pub(crate) fn decode(err: impl std::fmt::Display, body: &str) -> Self {
        Self::Decode {
            message: format!("{err}; body: {}", snippet(body)),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Arc::new(err))
    }
}

#[derive(thiserror::Error, Debug, Clone)]
pub enum StorageError {
    #[error("keyring error: {0}")]
    Keyring(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("invalid token file: {0}")]
    Format(String),
}

impl From<keyring::Error> for StorageError {
    fn from(err: keyring::Error) -> Self {
        Self::Keyring(err.to_string())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Format(err.to_string())
    }
}

pub(crate) fn snippet(body: &str) -> String {
    if body.chars().count() <= BODY_SNIPPET_LIMIT {
        return body.to_string();
    }
    let mut cut: String = body.chars().take(BODY_SNIPPET_LIMIT).collect();
    cut.push_str("...");
    cut
}
