//! # Client Error Types
//!
//! Error types for API client operations.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   Validation    │  │  Authentication │  │     Transport           │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Domain         │  │  AuthRequired   │  │  Transport              │ │
//! │  │  VoucherRejected│  │                 │  │  Serialization          │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐                              │
//! │  │   API-reported  │  │     Session     │                              │
//! │  │                 │  │                 │                              │
//! │  │  Api{status,msg}│  │  SessionLoad    │                              │
//! │  │                 │  │  SessionSave    │                              │
//! │  └─────────────────┘  └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers branch on variants (or the category predicates below), never on
//! message strings. No error here is fatal; every failure is scoped to the
//! single operation that raised it.

use thiserror::Error;
use toko_core::CoreError;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Client error type covering all API client failures.
#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Validation Failures (recoverable, no retry)
    // =========================================================================
    /// A business rule or input check failed before anything was dispatched.
    /// The Display string is the user-facing message.
    #[error("{0}")]
    Domain(#[from] CoreError),

    /// The API rejected a voucher; carries the server's user-facing reason.
    #[error("{message}")]
    VoucherRejected { message: String },

    // =========================================================================
    // Authentication
    // =========================================================================
    /// The operation needs a signed-in user. `redirect_to` preserves the
    /// path being attempted so the login view can return to it.
    #[error("Authentication required")]
    AuthRequired { redirect_to: String },

    // =========================================================================
    // API-reported Failures
    // =========================================================================
    /// The API answered with a non-success status (other than the 401
    /// case handled by the transport) and this message.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    // =========================================================================
    // Transport Failures
    // =========================================================================
    /// The request never completed: connect failure, timeout, TLS, etc.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A body failed to serialize or a response failed to deserialize.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    // =========================================================================
    // Session Persistence
    // =========================================================================
    /// Failed to load the persisted session.
    #[error("Failed to load session: {0}")]
    SessionLoadFailed(String),

    /// Failed to persist the session.
    #[error("Failed to save session: {0}")]
    SessionSaveFailed(String),

    // =========================================================================
    // Configuration
    // =========================================================================
    /// Client configuration is invalid (bad base URL, bad timeout).
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Serialization(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl ClientError {
    /// True for rejections the user can fix by changing their input.
    /// Shown as-is, never retried.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ClientError::Domain(_) | ClientError::VoucherRejected { .. }
        )
    }

    /// True when the caller should route the user to the login view.
    pub fn is_auth_required(&self) -> bool {
        matches!(self, ClientError::AuthRequired { .. })
    }

    /// True for failures of the network itself (as opposed to an answer
    /// the API gave). Callers may offer a manual retry; the client never
    /// retries on its own.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Transport(_) | ClientError::Serialization(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toko_core::Money;

    #[test]
    fn test_domain_errors_display_user_facing_message() {
        let err: ClientError = CoreError::VoucherNotFound.into();
        assert_eq!(err.to_string(), "Invalid voucher code.");

        let err: ClientError = CoreError::MinPurchaseNotMet {
            min: Money::from_rupiah(200_000),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "A minimum purchase of Rp200.000 is required to use this voucher"
        );
    }

    #[test]
    fn test_categorization() {
        assert!(ClientError::Domain(CoreError::VoucherNotFound).is_validation());
        assert!(ClientError::VoucherRejected {
            message: "Quota reached".to_string()
        }
        .is_validation());

        let auth = ClientError::AuthRequired {
            redirect_to: "/cart".to_string(),
        };
        assert!(auth.is_auth_required());
        assert!(!auth.is_validation());

        assert!(ClientError::Transport("connection refused".to_string()).is_transport());
        assert!(!ClientError::Api {
            status: 500,
            message: "boom".to_string()
        }
        .is_transport());
    }
}
