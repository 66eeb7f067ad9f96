//! Product catalog service.
//!
//! Storefront listing/detail plus the admin CRUD endpoints for products,
//! brands, and categories.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use toko_core::{Brand, Category, Product};

use crate::error::ClientResult;
use crate::transport::ApiClient;

/// One page of catalog results.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

/// Payload for creating or updating a product (admin).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub stock: i64,
    pub image_url: Option<String>,
    pub category_id: Option<String>,
    pub brand_id: Option<String>,
    pub is_active: bool,
}

/// Product catalog service.
pub struct ProductService {
    client: Arc<ApiClient>,
}

impl ProductService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        ProductService { client }
    }

    /// Lists products, optionally filtered by a search query.
    pub async fn list(
        &self,
        page: i64,
        per_page: i64,
        search: Option<&str>,
    ) -> ClientResult<ProductPage> {
        let mut query = vec![("page", page.to_string()), ("perPage", per_page.to_string())];
        if let Some(search) = search {
            query.push(("search", search.to_string()));
        }

        debug!(page, per_page, ?search, "Listing products");
        self.client.get_with_query("/products", &query).await
    }

    /// Fetches one product with its live price and stock.
    pub async fn get(&self, id: &str) -> ClientResult<Product> {
        self.client.get(&format!("/products/{}", id)).await
    }

    /// Creates a product (admin).
    pub async fn create(&self, input: &ProductInput) -> ClientResult<Product> {
        self.client.post("/products", input).await
    }

    /// Updates a product (admin).
    pub async fn update(&self, id: &str, input: &ProductInput) -> ClientResult<Product> {
        self.client.put(&format!("/products/{}", id), input).await
    }

    /// Deletes a product (admin); returns the removed record.
    pub async fn delete(&self, id: &str) -> ClientResult<Product> {
        self.client.delete(&format!("/products/{}", id)).await
    }

    /// Lists all brands.
    pub async fn brands(&self) -> ClientResult<Vec<Brand>> {
        self.client.get("/brands").await
    }

    /// Creates a brand (admin).
    pub async fn create_brand(&self, name: &str) -> ClientResult<Brand> {
        self.client
            .post("/brands", &serde_json::json!({ "name": name }))
            .await
    }

    /// Deletes a brand (admin); returns the removed record.
    pub async fn delete_brand(&self, id: &str) -> ClientResult<Brand> {
        self.client.delete(&format!("/brands/{}", id)).await
    }

    /// Lists all categories.
    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        self.client.get("/categories").await
    }

    /// Creates a category (admin).
    pub async fn create_category(&self, name: &str) -> ClientResult<Category> {
        self.client
            .post("/categories", &serde_json::json!({ "name": name }))
            .await
    }

    /// Deletes a category (admin); returns the removed record.
    pub async fn delete_category(&self, id: &str) -> ClientResult<Category> {
        self.client.delete(&format!("/categories/{}", id)).await
    }
}
