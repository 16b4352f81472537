use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use spendwise_core::{paths, ListResponse, RefreshRequest, TokenPair};
use tracing::{debug, info, warn};

use crate::error::ClientError;
use crate::refresh::Ticket;
use crate::ApiClient;

/// One logical call: what to send, plus whether it has already been
/// re-issued after a refresh.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    retried: bool,
}

impl RequestContext {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            retried: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self, ClientError> {
        let value = serde_json::to_value(body)
            .map_err(|err| ClientError::Encode(err.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn retried(&self) -> bool {
        self.retried
    }
}

pub(crate) fn auth_headers(token: Option<&str>) -> Result<HeaderMap, ClientError> {
    let mut headers = HeaderMap::new();
    let Some(token) = token.filter(|token| !token.trim().is_empty()) else {
        return Ok(headers);
    };
    let value = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|err| ClientError::InvalidHeader(err.to_string()))?;
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status,
        body: crate::error::snippet(&body),
    })
}

pub(crate) async fn decode_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|err| ClientError::decode(err, &body))
}

impl ApiClient {
    /// Sends `ctx` with the stored bearer token, refreshing the session and
    /// re-issuing the request once if the server answers 401.
    pub async fn request(
        &self,
        mut ctx: RequestContext,
    ) -> Result<reqwest::Response, ClientError> {
        let mut token = self.inner.credentials.access_token();
        loop {
            let response = self.send_once(&ctx, token.as_deref()).await?;
            if response.status() != StatusCode::UNAUTHORIZED || ctx.retried {
                return ensure_success(response).await;
            }
            ctx.retried = true;
            info!(
                method = %ctx.method,
                path = %ctx.path,
                "request unauthorized; renewing session"
            );
            token = Some(self.renew_access_token(token.as_deref()).await?);
        }
    }

    pub async fn request_json<T: DeserializeOwned>(
        &self,
        ctx: RequestContext,
    ) -> Result<T, ClientError> {
        let response = self.request(ctx).await?;
        decode_json(response).await
    }

    pub(crate) async fn request_list<T: DeserializeOwned>(
        &self,
        ctx: RequestContext,
    ) -> Result<Vec<T>, ClientError> {
        let list: ListResponse<T> = self.request_json(ctx).await?;
        Ok(list.into_items())
    }

    pub(crate) async fn send_once(
        &self,
        ctx: &RequestContext,
        token: Option<&str>,
    ) -> Result<reqwest::Response, ClientError> {
        let raw = self.inner.config.url(&ctx.path);
        let url = reqwest::Url::parse(&raw)
            .map_err(|err| ClientError::InvalidUrl(format!("{raw}: {err}")))?;
        let headers = auth_headers(token)?;
        let mut builder = self
            .inner
            .http
            .request(ctx.method.clone(), url.clone())
            .headers(headers);
        if !ctx.query.is_empty() {
            builder = builder.query(&ctx.query);
        }
        if let Some(body) = &ctx.body {
            builder = builder.json(body);
        }
        debug!(method = %ctx.method, url = %url, retried = ctx.retried, "http request");
        let start = Instant::now();
        let response = builder.send().await?;
        debug!(
            method = %ctx.method,
            url = %url,
            status = %response.status(),
            elapsed_ms = start.elapsed().as_millis(),
            "http response"
        );
        Ok(response)
    }

    /// Returns an access token to retry with. Only one caller at a time talks
    /// to the refresh endpoint; everyone else waits for its result.
    async fn renew_access_token(&self, sent_with: Option<&str>) -> Result<String, ClientError> {
        let lease = match self.inner.refresh.acquire() {
            Ticket::Follower(rx) => {
                return rx.await.unwrap_or(Err(ClientError::RefreshAbandoned));
            }
            Ticket::Leader(lease) => lease,
        };

        if let Some(current) = self.inner.credentials.access_token() {
            if sent_with != Some(current.as_str()) {
                debug!("access token changed while request was in flight; reusing it");
                lease.finish(Ok(current.clone()));
                return Ok(current);
            }
        }

        let outcome = self.refresh_session().await;
        match &outcome {
            Ok(_) => {
                info!("session refreshed");
                self.publish_auth_state(crate::AuthState::Authenticated);
            }
            Err(err) => {
                warn!("session refresh failed: {err}");
                self.logout();
            }
        }
        lease.finish(outcome.clone());
        outcome
    }

    async fn refresh_session(&self) -> Result<String, ClientError> {
        let Some(refresh) = self.inner.credentials.refresh_token() else {
            return Err(ClientError::NoRefreshToken);
        };
        info!("refreshing session");
        let ctx = RequestContext::post(paths::REFRESH).with_json(&RefreshRequest { refresh })?;
        let response = ensure_success(self.send_once(&ctx, None).await?).await?;
        let pair: TokenPair = decode_json(response).await?;
        self.inner.credentials.persist(&pair)?;
        Ok(pair.access)
    }
}
