//! # toko-core: Pure Business Logic for Toko
//!
//! This crate is the **heart** of the Toko storefront client. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Toko Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Storefront / Admin UI (TypeScript)                 │   │
//! │  │    Listing ──► Detail ──► Cart ──► Checkout ──► Orders          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    toko-client (services)                       │   │
//! │  │    auth, products, cart, orders, users, vouchers, dashboard    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ toko-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  voucher  │  │   cart    │  │   │
//! │  │   │  Product  │  │   Money   │  │ evaluator │  │  quantity │  │   │
//! │  │   │  Customer │  │  Rp math  │  │  rules    │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │                                ▼                                        │
//! │              Storefront REST API (external collaborator)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Customer, OrderStatus, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`voucher`] - Voucher catalog record and the discount evaluator
//! - [`cart`] - Cart model and quantity reconciliation rules
//! - [`validation`] - Form input validators and sanitization
//! - [`format`] - Date display helpers
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - the evaluator
//!    takes its clock as a parameter
//! 2. **No I/O**: Network, file system and persistence access is FORBIDDEN
//!    here; pricing, inventory and order state live behind the API
//! 3. **Integer Money**: All monetary values are whole rupiah (i64); the
//!    only division is an explicit floor
//! 4. **Explicit Errors**: All rejections are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use toko_core::cart::{reconcile_quantity, QuantityChange};
//!
//! // Stock is 3: an update to 2 dispatches, an update to 4 is rejected
//! assert_eq!(reconcile_quantity(2, 3).unwrap(), QuantityChange::Set(2));
//! assert!(reconcile_quantity(4, 3).is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod format;
pub mod money;
pub mod types;
pub mod validation;
pub mod voucher;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use toko_core::Money` instead of
// `use toko_core::money::Money`

pub use cart::{Cart, CartItem, QuantityChange};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use voucher::{AppliedVoucher, Voucher, VoucherKind};
