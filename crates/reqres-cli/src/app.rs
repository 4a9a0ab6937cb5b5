//! Application state for the reqres demo client.
//!
//! This module contains the `App` struct that drives the demo flows:
//! logging in with the published ReqRes credentials, persisting the
//! session token, and exercising the user CRUD endpoints through the
//! shared call-state lifecycle.

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use serde_json::{json, Value};
use tracing::{error, info};

use reqres_core::api::{ApiClient, ApiError, CallState};
use reqres_core::auth::{TokenStore, BEARER_TOKEN_KEY};
use reqres_core::models::{LoginRequest, LoginResponse};

// ============================================================================
// Constants
// ============================================================================

/// Base URL for the ReqRes demo service
const DEFAULT_BASE_URL: &str = "https://reqres.in";

/// Demo credentials published by ReqRes for the login endpoint
const DEMO_EMAIL: &str = "eve.holt@reqres.in";
const DEMO_PASSWORD: &str = "cityslicka";

pub struct App {
    client: ApiClient,
    store: Arc<dyn TokenStore>,
    base_url: String,
    /// Token shown in the logged-in banner; None until a successful login
    pub token: Option<String>,
    /// Error message from the last failed login attempt
    pub login_error: Option<String>,
    /// Outcome of the most recent API call
    pub call: CallState,
}

impl App {
    /// Create an app talking to the real ReqRes service.
    pub fn new(store: Arc<dyn TokenStore>) -> Result<Self> {
        Self::with_base_url(store, DEFAULT_BASE_URL)
    }

    /// Create an app against an alternate base URL (used by tests to
    /// point at a mock server).
    pub fn with_base_url(store: Arc<dyn TokenStore>, base_url: impl Into<String>) -> Result<Self> {
        let client = ApiClient::new(Arc::clone(&store))?;
        Ok(Self {
            client,
            store,
            base_url: base_url.into(),
            token: None,
            login_error: None,
            call: CallState::default(),
        })
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Run one call through the call-state lifecycle: mark it pending,
    /// await it, record the outcome. `settle` runs on both paths.
    async fn track(
        &mut self,
        call: impl Future<Output = Result<Value, ApiError>>,
    ) -> Result<Value, ApiError> {
        self.call.begin();
        let outcome = call.await;
        self.call.settle(&outcome);
        outcome
    }

    /// Log in with the demo credentials and persist the returned token.
    pub async fn login(&mut self) -> Result<()> {
        let body = serde_json::to_value(LoginRequest {
            email: DEMO_EMAIL.to_string(),
            password: DEMO_PASSWORD.to_string(),
        })?;
        let url = self.url("/api/login");
        let client = self.client.clone();

        match self.track(async move { client.post(&url, &body).await }).await {
            Ok(value) => {
                let login: LoginResponse = serde_json::from_value(value)?;
                self.store.set(BEARER_TOKEN_KEY, &login.token)?;
                self.login_error = None;
                info!(token = %login.token, "logged in");
                self.token = Some(login.token);
                Ok(())
            }
            Err(err) => {
                self.login_error = Some(err.to_string());
                error!(error = %err, "login failed");
                Err(err.into())
            }
        }
    }

    /// Fetch the second page of the user listing.
    pub async fn fetch_users(&mut self) -> Result<Value, ApiError> {
        let url = self.url("/api/users?page=2");
        let client = self.client.clone();
        let outcome = self.track(async move { client.get(&url).await }).await;
        if let Err(ref err) = outcome {
            error!(error = %err, "failed to fetch users");
        }
        outcome
    }

    /// Create a demo user.
    pub async fn create_user(&mut self) -> Result<Value, ApiError> {
        let body = json!({ "name": "John Doe", "job": "Developer" });
        let url = self.url("/api/users");
        let client = self.client.clone();
        let outcome = self
            .track(async move { client.post(&url, &body).await })
            .await;
        if let Err(ref err) = outcome {
            error!(error = %err, "failed to create user");
        }
        outcome
    }

    /// Update user 2.
    pub async fn update_user(&mut self) -> Result<Value, ApiError> {
        let body = json!({ "name": "Jane Doe", "job": "Manager" });
        let url = self.url("/api/users/2");
        let client = self.client.clone();
        let outcome = self
            .track(async move { client.put(&url, &body).await })
            .await;
        if let Err(ref err) = outcome {
            error!(error = %err, "failed to update user");
        }
        outcome
    }

    /// Delete user 2. The endpoint returns an empty body, which the
    /// executor resolves to `{}`.
    pub async fn delete_user(&mut self) -> Result<Value, ApiError> {
        let url = self.url("/api/users/2");
        let client = self.client.clone();
        let outcome = self.track(async move { client.remove(&url).await }).await;
        if let Err(ref err) = outcome {
            error!(error = %err, "failed to delete user");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqres_core::auth::MemoryTokenStore;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_app(store: Arc<MemoryTokenStore>, base_url: String) -> App {
        App::with_base_url(store as Arc<dyn TokenStore>, base_url).unwrap()
    }

    #[tokio::test]
    async fn test_login_persists_token_and_updates_display_state() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(body_json(json!({
                "email": "eve.holt@reqres.in",
                "password": "cityslicka"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "t1"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let store = Arc::new(MemoryTokenStore::default());
        let mut app = test_app(store.clone(), mock_server.uri());
        assert!(!app.is_logged_in());

        app.login().await.unwrap();

        assert_eq!(store.get(BEARER_TOKEN_KEY).unwrap().as_deref(), Some("t1"));
        assert!(app.is_logged_in());
        assert_eq!(app.token.as_deref(), Some("t1"));
        assert!(app.login_error.is_none());
        assert!(!app.call.pending);
    }

    #[tokio::test]
    async fn test_failed_login_surfaces_error_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(400).set_body_string("user not found"))
            .mount(&mock_server)
            .await;

        let store = Arc::new(MemoryTokenStore::default());
        let mut app = test_app(store.clone(), mock_server.uri());

        assert!(app.login().await.is_err());

        assert_eq!(app.login_error.as_deref(), Some("user not found"));
        assert!(!app.is_logged_in());
        assert_eq!(store.get(BEARER_TOKEN_KEY).unwrap(), None);
        assert!(!app.call.pending);
        assert_eq!(app.call.failure.as_deref(), Some("user not found"));
    }

    #[tokio::test]
    async fn test_delete_resolves_empty_body_to_empty_object() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/users/2"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let store = Arc::new(MemoryTokenStore::default());
        let mut app = test_app(store, mock_server.uri());

        let result = app.delete_user().await.unwrap();

        assert_eq!(result, json!({}));
        assert_eq!(app.call.result, Some(json!({})));
        assert!(!app.call.pending);
    }

    #[tokio::test]
    async fn test_call_state_pending_clears_after_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let store = Arc::new(MemoryTokenStore::default());
        let mut app = test_app(store, mock_server.uri());

        assert!(app.fetch_users().await.is_err());
        assert!(!app.call.pending);
        assert_eq!(app.call.failure.as_deref(), Some("boom"));
        assert!(app.call.result.is_none());
    }
}
