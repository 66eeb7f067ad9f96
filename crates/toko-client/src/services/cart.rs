//! Cart service.
//!
//! Every mutation is bounds-checked through `toko-core` BEFORE it is
//! dispatched; the API's post-mutation cart is the authoritative state.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_item ──── session? ──── clamp [1, stock] ────► POST /cart/items   │
//! │  set_quantity ─ reconcile ── Keep → no call │ Set → PUT /cart/items/id │
//! │  remove_item ──────────────────────────────────────► DELETE            │
//! │  clear ────────────────────────────────────────────► DELETE /cart      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use toko_core::cart::{clamp_add_quantity, reconcile_quantity, QuantityChange};
use toko_core::{Cart, CartItem, Product};

use crate::error::{ClientError, ClientResult};
use crate::transport::ApiClient;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddItemRequest<'a> {
    product_id: &'a str,
    quantity: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateQuantityRequest {
    quantity: i64,
}

/// Cart service: fetch and mutate the signed-in user's cart.
pub struct CartService {
    client: Arc<ApiClient>,
}

impl CartService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        CartService { client }
    }

    /// Fetches the current cart with live product price/stock.
    pub async fn fetch(&self) -> ClientResult<Cart> {
        self.client.get("/cart").await
    }

    /// Adds a product to the cart.
    ///
    /// Requires a signed-in session; without one the caller receives
    /// `AuthRequired` and is expected to redirect to login. The quantity
    /// is clamped into `[1, stock]` before dispatch: it can never
    /// request less than one unit nor more than current stock.
    pub async fn add_item(&self, product: &Product, quantity: i64) -> ClientResult<Cart> {
        if !self.client.session().is_authenticated() {
            return Err(ClientError::AuthRequired {
                redirect_to: format!("/products/{}", product.id),
            });
        }

        let quantity = clamp_add_quantity(quantity, product.stock)?;
        debug!(product_id = %product.id, quantity, "Adding to cart");

        self.client
            .post(
                "/cart/items",
                &AddItemRequest {
                    product_id: &product.id,
                    quantity,
                },
            )
            .await
    }

    /// Updates a line's quantity after reconciling against live stock.
    ///
    /// ## Returns
    /// - `Ok(None)` when the request was below 1: silently kept as-is,
    ///   nothing dispatched (the UI disables the control instead)
    /// - `Ok(Some(cart))` with the authoritative post-mutation cart
    /// - `Err` with "Not enough stock available" when over stock; no
    ///   mutation was dispatched
    pub async fn set_quantity(
        &self,
        item: &CartItem,
        new_quantity: i64,
    ) -> ClientResult<Option<Cart>> {
        match reconcile_quantity(new_quantity, item.product.stock)? {
            QuantityChange::Keep => {
                debug!(item_id = %item.id, new_quantity, "Quantity below 1; keeping line unchanged");
                Ok(None)
            }
            QuantityChange::Set(quantity) => {
                debug!(item_id = %item.id, quantity, "Updating cart quantity");
                let cart = self
                    .client
                    .put(
                        &format!("/cart/items/{}", item.id),
                        &UpdateQuantityRequest { quantity },
                    )
                    .await?;
                Ok(Some(cart))
            }
        }
    }

    /// Removes a line unconditionally.
    pub async fn remove_item(&self, item_id: &str) -> ClientResult<Cart> {
        debug!(item_id, "Removing cart line");
        self.client.delete(&format!("/cart/items/{}", item_id)).await
    }

    /// Empties the cart.
    pub async fn clear(&self) -> ClientResult<Cart> {
        self.client.delete("/cart").await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
