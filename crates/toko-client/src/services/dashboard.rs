//! Dashboard service (admin).

use std::sync::Arc;

use serde::Deserialize;

use toko_core::Money;

use crate::error::ClientResult;
use crate::transport::ApiClient;

/// Back-office summary figures.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_customers: i64,
    pub total_products: i64,
    pub total_orders: i64,
    pub pending_orders: i64,
    /// Lifetime revenue in whole rupiah.
    pub total_revenue: i64,
}

impl DashboardStats {
    /// Lifetime revenue as Money.
    #[inline]
    pub fn revenue(&self) -> Money {
        Money::from_rupiah(self.total_revenue)
    }
}

/// Dashboard service.
pub struct DashboardService {
    client: Arc<ApiClient>,
}

impl DashboardService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        DashboardService { client }
    }

    /// Fetches the admin dashboard summary.
    pub async fn stats(&self) -> ClientResult<DashboardStats> {
        self.client.get("/dashboard/stats").await
    }
}
