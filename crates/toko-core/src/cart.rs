//! # Cart Model & Quantity Reconciliation
//!
//! The cart read model and the pure quantity rules applied before any
//! mutation is sent to the API.
//!
//! ## Reconciliation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Cart Quantity Reconciliation                           │
//! │                                                                         │
//! │  UI Action              Pure Check (this module)     Dispatch           │
//! │  ─────────              ────────────────────────     ────────           │
//! │                                                                         │
//! │  Set qty to 0/-1 ─────► reconcile_quantity ────────► (nothing; silent) │
//! │                              │ Keep                                     │
//! │                                                                         │
//! │  Set qty to 4,            reconcile_quantity ──────► (nothing; error   │
//! │  stock is 3     ─────►       │ InsufficientStock      surfaced to UI)  │
//! │                                                                         │
//! │  Set qty to 2,            reconcile_quantity ──────► PUT /cart/items   │
//! │  stock is 3     ─────►       │ Set(2)                                  │
//! │                                                                         │
//! │  The API returns the authoritative post-mutation cart; this model      │
//! │  only renders it and guards what gets dispatched.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Live Price/Stock
//! Unlike a point-of-sale snapshot cart, a cart line references the
//! product's CURRENT price and stock. Totals change when the catalog does,
//! and every quantity check runs against the stock figure fetched with the
//! cart, not one frozen at add time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the shopping cart.
///
/// Carries the full product record as returned alongside the cart, so
/// `product.price` and `product.stock` are live values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Line identifier assigned by the API.
    pub id: String,

    /// The referenced product with live price/stock.
    pub product: Product,

    /// Quantity in cart (integer ≥ 1).
    pub quantity: i64,
}

impl CartItem {
    /// Line total at the product's current price.
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart as last reported by the API.
///
/// ## Invariants
/// - Owned by exactly one user
/// - Lines are unique by product (adding an existing product merges)
/// - A line's quantity never exceeds the product's current stock; the
///   checks below reject violations before any mutation is dispatched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Owning user.
    pub user_id: String,

    /// Lines in the cart. Insertion order is irrelevant to totals.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Finds the line referencing `product_id`, if any.
    pub fn find_item(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Returns the number of lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Subtotal at current prices, before shipping and before any voucher.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, i| acc + i.line_total())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Quantity a fresh add of `quantity` × `product_id` would result in,
    /// merging into an existing line when present.
    pub fn merged_quantity(&self, product_id: &str, quantity: i64) -> i64 {
        match self.find_item(product_id) {
            Some(item) => item.quantity + quantity,
            None => quantity,
        }
    }
}

// =============================================================================
// Quantity Reconciliation
// =============================================================================

/// Outcome of a quantity-update check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// Requested quantity was below 1: keep the line as it is and
    /// dispatch nothing. Not an error; the UI disables the control
    /// instead of surfacing a message.
    Keep,

    /// Quantity is within bounds: dispatch this validated value.
    Set(i64),
}

/// Checks a requested quantity against live stock before an update.
///
/// ## Rules
/// - `requested < 1` → [`QuantityChange::Keep`] (silent no-op)
/// - `requested > stock` → `InsufficientStock`, nothing dispatched
/// - otherwise → [`QuantityChange::Set`] with the validated quantity
pub fn reconcile_quantity(requested: i64, stock: i64) -> CoreResult<QuantityChange> {
    if requested < 1 {
        return Ok(QuantityChange::Keep);
    }

    if requested > stock {
        return Err(CoreError::InsufficientStock {
            available: stock,
            requested,
        });
    }

    Ok(QuantityChange::Set(requested))
}

/// Clamps an add-to-cart quantity into `[1, stock]`.
///
/// An add can never request less than one unit nor more than the current
/// stock. A product with no stock at all cannot be clamped into range and
/// is rejected outright.
pub fn clamp_add_quantity(requested: i64, stock: i64) -> CoreResult<i64> {
    if stock < 1 {
        return Err(CoreError::InsufficientStock {
            available: stock,
            requested,
        });
    }

    Ok(requested.max(1).min(stock))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_product(id: &str, price: i64, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: None,
            price,
            stock,
            image_url: None,
            category_id: None,
            brand_id: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn test_item(line_id: &str, product: Product, quantity: i64) -> CartItem {
        CartItem {
            id: line_id.to_string(),
            product,
            quantity,
        }
    }

    #[test]
    fn test_line_total_uses_live_price() {
        let mut item = test_item("l1", test_product("p1", 50_000, 10), 3);
        assert_eq!(item.line_total(), Money::from_rupiah(150_000));

        // A price change is reflected immediately (no snapshot)
        item.product.price = 60_000;
        assert_eq!(item.line_total(), Money::from_rupiah(180_000));
    }

    #[test]
    fn test_cart_subtotal() {
        let cart = Cart {
            user_id: "u1".to_string(),
            items: vec![
                test_item("l1", test_product("p1", 50_000, 10), 2),
                test_item("l2", test_product("p2", 25_000, 5), 1),
            ],
        };

        assert_eq!(cart.subtotal(), Money::from_rupiah(125_000));
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_quantity(), 3);
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_merged_quantity() {
        let cart = Cart {
            user_id: "u1".to_string(),
            items: vec![test_item("l1", test_product("p1", 50_000, 10), 2)],
        };

        assert_eq!(cart.merged_quantity("p1", 3), 5);
        assert_eq!(cart.merged_quantity("p2", 3), 3);
    }

    #[test]
    fn test_reconcile_below_one_is_silent_noop() {
        // Property 6 (lower bound): no mutation dispatched, no error either
        assert_eq!(reconcile_quantity(0, 10).unwrap(), QuantityChange::Keep);
        assert_eq!(reconcile_quantity(-5, 10).unwrap(), QuantityChange::Keep);
    }

    #[test]
    fn test_reconcile_over_stock_rejected() {
        // Property 9: stock 3, request 4 → rejected, nothing dispatched
        let err = reconcile_quantity(4, 3).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientStock {
                available: 3,
                requested: 4,
            }
        );
        assert_eq!(err.to_string(), "Not enough stock available");
    }

    #[test]
    fn test_reconcile_within_bounds_passes_through() {
        assert_eq!(reconcile_quantity(1, 3).unwrap(), QuantityChange::Set(1));
        assert_eq!(reconcile_quantity(3, 3).unwrap(), QuantityChange::Set(3));
    }

    #[test]
    fn test_clamp_add_quantity() {
        // Never below 1
        assert_eq!(clamp_add_quantity(0, 5).unwrap(), 1);
        assert_eq!(clamp_add_quantity(-2, 5).unwrap(), 1);

        // Never above stock
        assert_eq!(clamp_add_quantity(10, 5).unwrap(), 5);

        // In-range passes through
        assert_eq!(clamp_add_quantity(3, 5).unwrap(), 3);
    }

    #[test]
    fn test_clamp_add_quantity_zero_stock_rejected() {
        let err = clamp_add_quantity(1, 0).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { available: 0, .. }));
    }
}
