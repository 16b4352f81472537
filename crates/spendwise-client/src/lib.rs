#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

//! Authenticated HTTP client for the Spendwise expense-tracker backend.
//!
//! Every call made through [`ApiClient`] carries the stored bearer token. A
//! 401 triggers one session refresh shared by all concurrent callers, after
//! which each affected request is re-issued once with the new token.

mod auth;
mod categories;
pub mod config;
pub mod error;
mod expenses;
mod http;
mod refresh;
mod reports;
pub mod storage;

use std::sync::Arc;

use tokio::sync::watch;

pub use crate::auth::AuthState;
pub use crate::config::ClientConfig;
pub use crate::error::{ClientError, StorageError};
pub use crate::http::RequestContext;
pub use crate::storage::{
    Credentials, FileTokenStore, KeyringTokenStore, MemoryTokenStore, TokenStore,
};

use crate::refresh::RefreshGate;

/// Cheap to clone; clones share the token store and the refresh gate.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

struct Inner {
    http: reqwest::Client,
    config: ClientConfig,
    credentials: Credentials,
    refresh: RefreshGate,
    auth_state: watch::Sender<AuthState>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, store: Arc<dyn TokenStore>) -> Result<Self, ClientError> {
        let http = config.build_http_client()?;
        Ok(Self::with_http_client(config, http, store))
    }

    pub fn with_http_client(
        config: ClientConfig,
        http: reqwest::Client,
        store: Arc<dyn TokenStore>,
    ) -> Self {
        let credentials = Credentials::new(store);
        let initial = AuthState::from_token(credentials.access_token().as_deref());
        let (auth_state, _) = watch::channel(initial);
        Self {
            inner: Arc::new(Inner {
                http,
                config,
                credentials,
                refresh: RefreshGate::default(),
                auth_state,
            }),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }
}
