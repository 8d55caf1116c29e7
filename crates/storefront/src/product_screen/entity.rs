//! [`Screen`] implementation for the product page.

use super::error::ProductError;
use crate::api::CatalogApi;
use crate::model::Product;
use async_trait::async_trait;
use screen_framework::Screen;
use std::sync::Arc;

/// Path prefix of product locations.
pub const PRODUCT_PATH: &str = "/product/";

/// The `/product/{slug}` screen. Parameters are the slug.
pub struct ProductScreen;

/// Slug named by a product location, empty when there is none.
pub fn slug_from_location(location: &str) -> String {
    let path = location
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or_default();
    let path = match path.find("://") {
        // Drop scheme and host of an absolute URL
        Some(start) => path[start + 3..].find('/').map_or("", |i| &path[start + 3 + i..]),
        None => path,
    };
    path.strip_prefix(PRODUCT_PATH)
        .unwrap_or_default()
        .trim_end_matches('/')
        .to_string()
}

#[async_trait]
impl Screen for ProductScreen {
    type Params = String;
    type Data = Product;
    type Error = ProductError;
    type Context = Arc<dyn CatalogApi>;

    fn params_from_location(location: &str) -> String {
        slug_from_location(location)
    }

    async fn load(slug: &String, api: &Arc<dyn CatalogApi>) -> Result<Product, ProductError> {
        if slug.is_empty() {
            return Err(ProductError::MissingSlug);
        }
        api.product_by_slug(slug)
            .await
            .map_err(ProductError::FetchFailed)
    }
}
