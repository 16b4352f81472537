use spendwise_core::{paths, LoginRequest, TokenPair};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::error::ClientError;
use crate::http::{decode_json, ensure_success, RequestContext};
use crate::ApiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Authenticated,
    Unauthenticated,
}

impl AuthState {
    pub(crate) fn from_token(token: Option<&str>) -> Self {
        if token.is_some() {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }
}

impl ApiClient {
    /// Exchanges credentials for a token pair and stores it.
    ///
    /// The login call is sent without a bearer token and a 401 here is a
    /// plain failure, not a reason to refresh.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, ClientError> {
        let result = self.login_inner(username, password).await;
        match &result {
            Ok(_) => {
                info!(username = %username, "logged in");
                self.publish_auth_state(AuthState::Authenticated);
            }
            Err(err) => {
                warn!(username = %username, "login failed: {err}");
                self.publish_auth_state(AuthState::Unauthenticated);
            }
        }
        result
    }

    async fn login_inner(&self, username: &str, password: &str) -> Result<TokenPair, ClientError> {
        let ctx = RequestContext::post(paths::LOGIN).with_json(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })?;
        let response = ensure_success(self.send_once(&ctx, None).await?).await?;
        let pair: TokenPair = decode_json(response).await?;
        self.inner.credentials.persist(&pair)?;
        Ok(pair)
    }

    /// Clears both tokens. Storage failures are logged, never returned.
    pub fn logout(&self) {
        self.inner.credentials.clear();
        info!("logged out");
        self.publish_auth_state(AuthState::Unauthenticated);
    }

    pub fn access_token(&self) -> Option<String> {
        self.inner.credentials.access_token()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.inner.credentials.refresh_token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    pub fn is_refreshing(&self) -> bool {
        self.inner.refresh.is_refreshing()
    }

    pub fn auth_state(&self) -> AuthState {
        *self.inner.auth_state.borrow()
    }

    pub fn subscribe_auth(&self) -> watch::Receiver<AuthState> {
        self.inner.auth_state.subscribe()
    }

    pub(crate) fn publish_auth_state(&self, state: AuthState) {
        self.inner.auth_state.send_if_modified(|current| {
            if *current == state {
                return false;
            }
            *current = state;
            true
        });
    }
}
