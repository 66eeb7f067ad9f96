//! User service.
//!
//! Profile updates for the signed-in customer and the admin customer
//! listing.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use toko_core::validation::{validate_nickname, validate_phone, validate_postal_code};
use toko_core::{CoreError, Customer};

use crate::error::ClientResult;
use crate::transport::ApiClient;

/// One page of customers (admin listing).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPage {
    pub items: Vec<Customer>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

/// Profile update payload; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub nickname: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
}

/// User service.
pub struct UserService {
    client: Arc<ApiClient>,
}

impl UserService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        UserService { client }
    }

    /// Lists customers (admin).
    pub async fn list_customers(&self, page: i64, per_page: i64) -> ClientResult<CustomerPage> {
        debug!(page, per_page, "Listing customers");
        self.client
            .get_with_query(
                "/users",
                &[("page", page.to_string()), ("perPage", per_page.to_string())],
            )
            .await
    }

    /// Updates the signed-in user's profile. Provided fields are
    /// validated locally before dispatch.
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> ClientResult<Customer> {
        if let Some(nickname) = &request.nickname {
            validate_nickname(nickname).map_err(CoreError::from)?;
        }
        if let Some(phone) = &request.phone {
            validate_phone(phone).map_err(CoreError::from)?;
        }
        if let Some(postal_code) = &request.postal_code {
            validate_postal_code(postal_code).map_err(CoreError::from)?;
        }

        self.client.put("/users/me", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::error::ClientError;
    use crate::session::{MemoryBackend, SessionStore};
    use crate::services::auth::AUTH_EXEMPT_PATHS;

    fn test_service() -> UserService {
        let session = Arc::new(SessionStore::new(Box::new(MemoryBackend::new())));
        let client =
            Arc::new(ApiClient::new(&ClientConfig::default(), session, &AUTH_EXEMPT_PATHS).unwrap());
        UserService::new(client)
    }

    #[tokio::test]
    async fn test_update_profile_rejects_bad_nickname_before_dispatch() {
        let service = test_service();

        let err = service
            .update_profile(&UpdateProfileRequest {
                nickname: Some("x".to_string()),
                ..UpdateProfileRequest::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Domain(_)));
    }

    #[tokio::test]
    async fn test_update_profile_rejects_bad_phone_before_dispatch() {
        let service = test_service();

        let err = service
            .update_profile(&UpdateProfileRequest {
                phone: Some("not-a-phone".to_string()),
                ..UpdateProfileRequest::default()
            })
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_update_request_skips_empty_fields_on_wire() {
        let json = serde_json::to_value(UpdateProfileRequest {
            nickname: Some("ani_88".to_string()),
            ..UpdateProfileRequest::default()
        })
        .unwrap();

        assert_eq!(json["nickname"], "ani_88");
        assert!(json["phone"].is_null());
    }
}
