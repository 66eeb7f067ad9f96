//! # Validation Module
//!
//! Input validation utilities for the storefront and back-office forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend form                                                │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (before any request leaves the client)           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: The API service (authoritative)                              │
//! │                                                                         │
//! │  Defense in depth: the API re-validates everything; this layer saves   │
//! │  a round trip and gives field-level messages                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use toko_core::validation::{validate_email, validate_password};
//!
//! assert!(validate_email("ani@toko.id").is_ok());
//! assert!(validate_password("rahasia123").is_ok());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Exactly one `@` with non-empty local and domain parts
/// - Domain must contain a dot and not start/end with one
/// - Maximum 254 characters
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if email.len() > 254 {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: 254,
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(invalid("must contain exactly one @")),
    };

    if local.is_empty() || domain.is_empty() {
        return Err(invalid("missing local part or domain"));
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid("domain must contain a dot"));
    }

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain whitespace"));
    }

    Ok(())
}

/// Validates a phone number.
///
/// ## Rules
/// - Optional leading `+`
/// - 8 to 15 digits (ITU E.164 upper bound)
/// - No other characters
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    let digits = phone.strip_prefix('+').unwrap_or(phone);

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits, optionally prefixed with +".to_string(),
        });
    }

    if digits.len() < 8 || digits.len() > 15 {
        return Err(ValidationError::OutOfRange {
            field: "phone".to_string(),
            min: 8,
            max: 15,
        });
    }

    Ok(())
}

/// Validates an Indonesian postal code (exactly 5 digits).
pub fn validate_postal_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "postal code".to_string(),
        });
    }

    if code.len() != 5 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "postal code".to_string(),
            reason: "must be exactly 5 digits".to_string(),
        });
    }

    Ok(())
}

/// Validates a public nickname.
///
/// ## Rules
/// - 3 to 20 characters
/// - Letters, digits and underscores only
pub fn validate_nickname(nickname: &str) -> ValidationResult<()> {
    let nickname = nickname.trim();

    if nickname.is_empty() {
        return Err(ValidationError::Required {
            field: "nickname".to_string(),
        });
    }

    if nickname.len() < 3 {
        return Err(ValidationError::TooShort {
            field: "nickname".to_string(),
            min: 3,
        });
    }

    if nickname.len() > 20 {
        return Err(ValidationError::TooLong {
            field: "nickname".to_string(),
            max: 20,
        });
    }

    if !nickname.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ValidationError::InvalidFormat {
            field: "nickname".to_string(),
            reason: "must contain only letters, numbers, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a password.
///
/// ## Rules
/// - 8 to 72 characters
/// - At least one letter and one digit
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    if password.len() < 8 {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: 8,
        });
    }

    if password.len() > 72 {
        return Err(ValidationError::TooLong {
            field: "password".to_string(),
            max: 72,
        });
    }

    let has_letter = password.chars().any(char::is_alphabetic);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !has_letter || !has_digit {
        return Err(ValidationError::InvalidFormat {
            field: "password".to_string(),
            reason: "must contain at least one letter and one digit".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Credit Card
// =============================================================================

/// Validates a credit card number.
///
/// ## Rules
/// - Spaces and dashes are stripped before checking
/// - 12 to 19 digits
/// - Must pass the Luhn checksum
///
/// ## Example
/// ```rust
/// use toko_core::validation::validate_credit_card;
///
/// assert!(validate_credit_card("4539 1488 0343 6467").is_ok());
/// assert!(validate_credit_card("4539 1488 0343 6468").is_err());
/// ```
pub fn validate_credit_card(number: &str) -> ValidationResult<()> {
    let digits: String = number
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if digits.is_empty() {
        return Err(ValidationError::Required {
            field: "card number".to_string(),
        });
    }

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "card number".to_string(),
            reason: "must contain only digits, spaces, and dashes".to_string(),
        });
    }

    if digits.len() < 12 || digits.len() > 19 {
        return Err(ValidationError::OutOfRange {
            field: "card number".to_string(),
            min: 12,
            max: 19,
        });
    }

    if !luhn_check(&digits) {
        return Err(ValidationError::ChecksumFailed {
            field: "card number".to_string(),
        });
    }

    Ok(())
}

/// Luhn checksum: double every second digit from the right, subtract 9
/// from results above 9, total must be divisible by 10.
fn luhn_check(digits: &str) -> bool {
    let sum: u32 = digits
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

// =============================================================================
// Sanitization
// =============================================================================

/// Sanitizes free-form user input before it is displayed or dispatched.
///
/// Trims surrounding whitespace and strips control characters; everything
/// else (including non-Latin scripts) passes through unchanged.
pub fn sanitize_input(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !c.is_control())
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
