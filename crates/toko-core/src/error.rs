//! # Error Types
//!
//! Domain-specific error types for toko-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  toko-core errors (this file)                                          │
//! │  ├── CoreError        - Business rule rejections (voucher, cart)       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  toko-client errors (separate crate)                                   │
//! │  └── ClientError      - Transport / auth / API failures                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ClientError → caller              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Display strings ARE the user-facing messages; callers show them as-is
//! 3. Errors are enum variants, never String
//! 4. Every rejection is recoverable; nothing here aborts the process

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Voucher rejections and cart quantity rejections are recoverable: the
/// caller surfaces the message and dispatches no mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// No voucher in the catalog matches the (normalized) code.
    ///
    /// Empty and malformed codes land here too: they are "not found",
    /// not a distinct error class.
    #[error("Invalid voucher code.")]
    VoucherNotFound,

    /// The voucher's kill switch is off, independent of its validity window.
    #[error("This voucher is no longer active.")]
    VoucherInactive,

    /// The current instant lies outside `[valid_from, valid_until]`.
    #[error("This voucher has expired.")]
    VoucherExpired,

    /// Subtotal is below the voucher's minimum purchase requirement.
    ///
    /// The message embeds the required minimum formatted as currency,
    /// e.g. `Rp200.000`.
    #[error("A minimum purchase of {min} is required to use this voucher")]
    MinPurchaseNotMet { min: Money },

    /// The voucher's usage quota is exhausted (`used_count >= usage_limit`).
    #[error("Quota reached")]
    VoucherExhausted,

    /// Requested cart quantity exceeds the product's live stock.
    #[error("Not enough stock available")]
    InsufficientStock { available: i64, requested: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before any request is dispatched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., malformed email, non-numeric phone).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Checksum failure (credit card numbers).
    #[error("{field} failed checksum validation")]
    ChecksumFailed { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voucher_rejection_messages() {
        assert_eq!(CoreError::VoucherNotFound.to_string(), "Invalid voucher code.");
        assert_eq!(
            CoreError::VoucherInactive.to_string(),
            "This voucher is no longer active."
        );
        assert_eq!(CoreError::VoucherExpired.to_string(), "This voucher has expired.");
        assert_eq!(CoreError::VoucherExhausted.to_string(), "Quota reached");
    }

    #[test]
    fn test_min_purchase_message_embeds_formatted_currency() {
        let err = CoreError::MinPurchaseNotMet {
            min: Money::from_rupiah(200_000),
        };
        assert_eq!(
            err.to_string(),
            "A minimum purchase of Rp200.000 is required to use this voucher"
        );
    }

    #[test]
    fn test_stock_rejection_message() {
        let err = CoreError::InsufficientStock {
            available: 3,
            requested: 4,
        };
        assert_eq!(err.to_string(), "Not enough stock available");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "email".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
