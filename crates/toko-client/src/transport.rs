//! # API Transport
//!
//! The single configured HTTP client every service goes through.
//!
//! ## Request Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Request Pipeline                                 │
//! │                                                                         │
//! │  service call                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  attach x-request-id (correlation)                                     │
//! │  attach bearer token from SessionStore (when signed in)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  send ── network failure ──────────────────► Transport error           │
//! │       │                                                                 │
//! │       ├── 401, path NOT in auth allowlist ─► clear session,            │
//! │       │                                      AuthRequired{redirect_to} │
//! │       ├── 401, path IN allowlist ──────────► Api{401, message}         │
//! │       │     (failed login must not loop                                 │
//! │       │      back into the login view)                                  │
//! │       ├── other non-2xx ───────────────────► Api{status, message}      │
//! │       │                                                                 │
//! │       └── 2xx ─────────────────────────────► deserialize body          │
//! │                                                                         │
//! │  The allowlist is an explicit constructor parameter: exact path        │
//! │  matches, no URL substring heuristics.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::SessionStore;

/// Error body shape the API uses for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// The configured HTTP client for the storefront API.
///
/// One instance per application; services share it via `Arc`.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
    /// Paths whose 401 responses must NOT clear the session (the auth
    /// flow itself: a failed login is an answer, not a lost session).
    auth_exempt: HashSet<String>,
}

impl ApiClient {
    /// Builds the client.
    ///
    /// `auth_exempt` is the explicit allowlist of paths whose 401
    /// responses pass through untouched; the auth service supplies its
    /// login and register paths here.
    pub fn new(
        config: &ClientConfig,
        session: Arc<SessionStore>,
        auth_exempt: &[&str],
    ) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        Ok(ApiClient {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
            auth_exempt: auth_exempt.iter().map(|p| (*p).to_string()).collect(),
        })
    }

    /// The session store this client reads tokens from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.execute(Method::GET, path, None, &[]).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        self.execute(Method::GET, path, None, query).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.execute(Method::POST, path, Some(serde_json::to_value(body)?), &[])
            .await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.execute(Method::PUT, path, Some(serde_json::to_value(body)?), &[])
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.execute(Method::DELETE, path, None, &[]).await
    }

    /// Sends one request and resolves the response per the pipeline above.
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let request_id = Uuid::new_v4();

        let mut request = self
            .http
            .request(method.clone(), url.as_str())
            .header("x-request-id", request_id.to_string());

        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        if let Some(body) = &body {
            request = request.json(body);
        }

        debug!(%method, path, %request_id, "Dispatching API request");

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED && !self.is_auth_exempt(path) {
            warn!(path, %request_id, "Unauthorized outside auth flow; clearing session");
            self.session.logout();
            return Err(ClientError::AuthRequired {
                redirect_to: path.to_string(),
            });
        }

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            warn!(path, status = status.as_u16(), %request_id, "API request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// Exact-match allowlist check, never a substring heuristic.
    fn is_auth_exempt(&self, path: &str) -> bool {
        self.auth_exempt.contains(path)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("auth_exempt", &self.auth_exempt)
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
