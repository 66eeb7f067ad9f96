//! Order service.
//!
//! Placing an order hands the cart, shipping address, and an optional
//! voucher code to the API; all state transitions, pricing and voucher
//! redemption (including `used_count` bookkeeping) happen server-side.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use toko_core::validation::validate_postal_code;
use toko_core::{CoreError, Money, OrderStatus};

use crate::error::ClientResult;
use crate::transport::ApiClient;

/// A line on a placed order. Unlike cart lines, order lines ARE frozen:
/// the API snapshots name and unit price at placement time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub unit_price: i64,
    pub quantity: i64,
}

/// An order as reported by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub subtotal: i64,
    pub discount_amount: i64,
    pub shipping_cost: i64,
    pub total: i64,
    pub voucher_code: Option<String>,
    pub shipping_address: String,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_rupiah(self.total)
    }
}

/// Checkout payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub shipping_address: String,
    pub postal_code: String,
    /// Already-validated voucher code, if the user applied one.
    pub voucher_code: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateStatusRequest {
    status: OrderStatus,
}

/// Order service: checkout, history, admin status updates.
pub struct OrderService {
    client: Arc<ApiClient>,
}

impl OrderService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        OrderService { client }
    }

    /// Places an order from the current cart.
    ///
    /// The postal code is checked locally; the API re-validates the cart,
    /// recomputes every amount, and redeems the voucher atomically.
    pub async fn place(&self, request: &PlaceOrderRequest) -> ClientResult<Order> {
        validate_postal_code(&request.postal_code).map_err(CoreError::from)?;

        let order: Order = self.client.post("/orders", request).await?;
        info!(order_id = %order.id, total = order.total, "Order placed");
        Ok(order)
    }

    /// Lists the signed-in user's orders (admins see all orders).
    pub async fn list(&self) -> ClientResult<Vec<Order>> {
        self.client.get("/orders").await
    }

    /// Fetches one order.
    pub async fn get(&self, id: &str) -> ClientResult<Order> {
        self.client.get(&format!("/orders/{}", id)).await
    }

    /// Requests a status transition (admin). The API owns the transition
    /// rules and answers with the resulting order.
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> ClientResult<Order> {
        debug!(order_id = %id, ?status, "Requesting order status update");
        self.client
            .put(&format!("/orders/{}/status", id), &UpdateStatusRequest { status })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::error::ClientError;
    use crate::session::{MemoryBackend, SessionStore};
    use crate::services::auth::AUTH_EXEMPT_PATHS;

    fn test_service() -> OrderService {
        let session = Arc::new(SessionStore::new(Box::new(MemoryBackend::new())));
        let client =
            Arc::new(ApiClient::new(&ClientConfig::default(), session, &AUTH_EXEMPT_PATHS).unwrap());
        OrderService::new(client)
    }

    #[tokio::test]
    async fn test_place_rejects_bad_postal_code_before_dispatch() {
        let service = test_service();

        let err = service
            .place(&PlaceOrderRequest {
                shipping_address: "Jl. Braga No. 1, Bandung".to_string(),
                postal_code: "4013".to_string(),
                voucher_code: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Domain(_)));
    }

    #[test]
    fn test_order_wire_format() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "id": "o1",
            "userId": "ani",
            "status": "pending",
            "items": [
                { "productId": "p1", "name": "Kopi Luwak 250g", "unitPrice": 150_000, "quantity": 2 }
            ],
            "subtotal": 300_000,
            "discountAmount": 100_000,
            "shippingCost": 0,
            "total": 200_000,
            "voucherCode": "HELOBRO",
            "shippingAddress": "Jl. Braga No. 1, Bandung",
            "createdAt": "2025-08-01T10:00:00Z",
        }))
        .unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total(), Money::from_rupiah(200_000));
        assert_eq!(order.voucher_code.as_deref(), Some("HELOBRO"));
        assert_eq!(order.items[0].unit_price, 150_000);
    }
}
