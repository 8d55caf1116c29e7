//! Scripted [`CatalogApi`] for tests.
//!
//! Each endpoint is a [`MockSource`] keyed by its request, so a test can
//! answer searches out of order:
//!
//! ```rust
//! use storefront::api::{mock::MockCatalog, CatalogApi};
//!
//! #[tokio::main]
//! async fn main() {
//!     let catalog = MockCatalog::new();
//!     catalog.categories.expect(()).return_ok(vec!["Shirts".to_string()]);
//!
//!     assert_eq!(catalog.categories().await.unwrap(), vec!["Shirts"]);
//!     catalog.verify();
//! }
//! ```

use super::{ApiError, CatalogApi};
use crate::model::{FilterState, Product, ResultSet};
use async_trait::async_trait;
use screen_framework::mock::MockSource;

#[derive(Clone, Default)]
pub struct MockCatalog {
    pub search: MockSource<FilterState, ResultSet, ApiError>,
    pub categories: MockSource<(), Vec<String>, ApiError>,
    pub by_slug: MockSource<String, Product, ApiError>,
    pub by_id: MockSource<String, Product, ApiError>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verifies that every endpoint's expectations were met.
    pub fn verify(&self) {
        self.search.verify();
        self.categories.verify();
        self.by_slug.verify();
        self.by_id.verify();
    }
}

#[async_trait]
impl CatalogApi for MockCatalog {
    async fn search(&self, filters: &FilterState) -> Result<ResultSet, ApiError> {
        self.search.respond(filters).await
    }

    async fn categories(&self) -> Result<Vec<String>, ApiError> {
        self.categories.respond(&()).await
    }

    async fn product_by_slug(&self, slug: &str) -> Result<Product, ApiError> {
        self.by_slug.respond(&slug.to_string()).await
    }

    async fn product_by_id(&self, id: &str) -> Result<Product, ApiError> {
        self.by_id.respond(&id.to_string()).await
    }
}
