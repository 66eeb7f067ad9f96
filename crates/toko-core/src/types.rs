//! # Domain Types
//!
//! Core domain types shared by the storefront client and the API service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Customer     │   │   OrderStatus   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  Pending        │       │
//! │  │  name           │   │  email          │   │  Paid           │       │
//! │  │  price (live)   │   │  nickname       │   │  Shipped        │       │
//! │  │  stock (live)   │   │  role           │   │  Completed      │       │
//! │  └─────────────────┘   └─────────────────┘   │  Cancelled      │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │     Brand       │   │    Category     │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Live Price/Stock
//! `Product.price` and `Product.stock` are always the CURRENT values as
//! reported by the API. Cart lines reference products live: there is no
//! add-to-cart snapshot, so a price change is visible the next time the
//! cart is rendered or evaluated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available in the storefront catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name shown in listings and on the detail page.
    pub name: String,

    /// Optional long-form description.
    pub description: Option<String>,

    /// Current price in whole rupiah (live, not frozen).
    pub price: i64,

    /// Current stock level (live, not frozen).
    pub stock: i64,

    /// Primary image URL.
    pub image_url: Option<String>,

    /// Category this product belongs to.
    pub category_id: Option<String>,

    /// Brand this product belongs to.
    pub brand_id: Option<String>,

    /// Whether product is visible and purchasable (soft delete).
    pub is_active: bool,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the current price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_rupiah(self.price)
    }

    /// Checks if the product has any stock left.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Checks whether the current stock covers the requested quantity.
    #[inline]
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        quantity >= 1 && quantity <= self.stock
    }
}

// =============================================================================
// Brand & Category
// =============================================================================

/// A product brand (admin CRUD entity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
}

/// A product category (admin CRUD entity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
}

// =============================================================================
// Customer
// =============================================================================

/// Role of an authenticated account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular storefront customer.
    Customer,
    /// Back-office administrator.
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::Customer
    }
}

/// An authenticated user of the storefront or back-office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub email: String,
    /// Public display name.
    pub nickname: String,
    pub phone: Option<String>,
    /// Shipping address free text.
    pub address: Option<String>,
    /// Postal code of the shipping address.
    pub postal_code: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of an order as reported by the API.
///
/// State transitions are owned by the API; the client only displays and,
/// for admins, requests a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, awaiting payment.
    Pending,
    /// Payment confirmed.
    Paid,
    /// Handed to the courier.
    Shipped,
    /// Delivered and closed.
    Completed,
    /// Cancelled before shipment.
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
