//! Request executor for the ReqRes demo API.
//!
//! All verbs funnel through `execute`, which attaches the bearer token
//! from the durable store, sends the request, and normalizes the
//! response body into a `serde_json::Value`.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client, Method};
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::{TokenStore, BEARER_TOKEN_KEY};

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while still failing eventually.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the ReqRes demo service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    store: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a new API client backed by the given token store.
    pub fn new(store: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client, store })
    }

    /// Issue one request and normalize its outcome.
    ///
    /// The token is re-read from the store on every call, so a login that
    /// completed since this client was built is picked up automatically.
    /// An empty success body resolves to `{}`; a non-success status fails
    /// with the response body text as the error message.
    pub async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        debug!(%method, url, "issuing request");

        let mut request = self
            .client
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json");

        let token = self.store.get(BEARER_TOKEN_KEY).unwrap_or_else(|err| {
            warn!(error = %err, "token store read failed, sending unauthenticated");
            None
        });
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response.text().await.unwrap_or_default();
            debug!(%status, url, "request failed");
            return Err(ApiError::request_failed(&body_text));
        }

        let text = response.text().await?;
        if text.is_empty() {
            // DELETE and 204 responses come back with no body
            return Ok(Value::Object(serde_json::Map::new()));
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// GET the given URL.
    pub async fn get(&self, url: &str) -> Result<Value, ApiError> {
        self.execute(Method::GET, url, None).await
    }

    /// POST a JSON body to the given URL.
    pub async fn post(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        self.execute(Method::POST, url, Some(body)).await
    }

    /// PUT a JSON body to the given URL.
    pub async fn put(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        self.execute(Method::PUT, url, Some(body)).await
    }

    /// DELETE the given URL.
    pub async fn remove(&self, url: &str) -> Result<Value, ApiError> {
        self.execute(Method::DELETE, url, None).await
    }
}
