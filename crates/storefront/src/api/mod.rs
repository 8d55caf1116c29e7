//! # Catalog API
//!
//! The storefront talks to the product backend through the [`CatalogApi`]
//! trait. [`HttpCatalog`] is the real implementation over `reqwest`;
//! [`mock::MockCatalog`] scripts responses for tests.
//!
//! ## Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`CatalogApi::search`] | `GET /api/products/search?page=&query=&category=&price=&rating=&order=` |
//! | [`CatalogApi::categories`] | `GET /api/products/categories` |
//! | [`CatalogApi::product_by_slug`] | `GET /api/products/slug/{slug}` |
//! | [`CatalogApi::product_by_id`] | `GET /api/products/{id}` |
//!
//! Every failure comes back as an [`ApiError`] whose `Display` is the message
//! to put in front of the user.

pub mod error;
pub mod http;
pub mod mock;

pub use error::*;
pub use http::*;

use crate::model::{FilterState, Product, ResultSet};
use async_trait::async_trait;

/// Read access to the product catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn search(&self, filters: &FilterState) -> Result<ResultSet, ApiError>;

    async fn categories(&self) -> Result<Vec<String>, ApiError>;

    async fn product_by_slug(&self, slug: &str) -> Result<Product, ApiError>;

    /// Fresh copy of a product, used to check stock before adding to the cart.
    async fn product_by_id(&self, id: &str) -> Result<Product, ApiError>;
}
