//! Authentication service.
//!
//! Login and register are the two paths on the transport's 401 allowlist:
//! a failed credential check is an answer to show the user, not a lost
//! session to recover from.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use toko_core::validation::{validate_email, validate_nickname, validate_password, validate_phone};
use toko_core::{CoreError, Customer};

use crate::error::ClientResult;
use crate::session::Session;
use crate::transport::ApiClient;

/// Login endpoint path.
pub const LOGIN_PATH: &str = "/auth/login";

/// Registration endpoint path.
pub const REGISTER_PATH: &str = "/auth/register";

/// The allowlist of paths whose 401 responses must not clear the session.
/// Pass this to [`ApiClient::new`].
pub const AUTH_EXEMPT_PATHS: [&str; 2] = [LOGIN_PATH, REGISTER_PATH];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Registration payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub nickname: String,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    token: String,
    user: Customer,
}

/// Authentication service: login, register, profile.
pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        AuthService { client }
    }

    /// Signs in and establishes the session.
    ///
    /// Inputs are validated locally first; the API's credential check is
    /// authoritative. On success the returned token/user pair is stored
    /// through the session store's backend.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Customer> {
        validate_email(email).map_err(CoreError::from)?;

        let response: AuthResponse = self
            .client
            .post(LOGIN_PATH, &LoginRequest { email, password })
            .await?;

        info!(user_id = %response.user.id, "Logged in");

        self.client.session().login(Session {
            token: response.token,
            user: response.user.clone(),
        })?;

        Ok(response.user)
    }

    /// Registers a new customer account and signs it in.
    pub async fn register(&self, request: RegisterRequest) -> ClientResult<Customer> {
        validate_email(&request.email).map_err(CoreError::from)?;
        validate_password(&request.password).map_err(CoreError::from)?;
        validate_nickname(&request.nickname).map_err(CoreError::from)?;
        if let Some(phone) = &request.phone {
            validate_phone(phone).map_err(CoreError::from)?;
        }

        let response: AuthResponse = self.client.post(REGISTER_PATH, &request).await?;

        info!(user_id = %response.user.id, "Registered");

        self.client.session().login(Session {
            token: response.token,
            user: response.user.clone(),
        })?;

        Ok(response.user)
    }

    /// Fetches the signed-in user's profile from the API.
    pub async fn profile(&self) -> ClientResult<Customer> {
        self.client.get("/auth/me").await
    }

    /// Signs out locally: drops the in-memory session and the persisted
    /// copy. The bearer token is opaque; there is nothing to revoke
    /// client-side.
    pub fn logout(&self) {
        self.client.session().logout();
    }
}
