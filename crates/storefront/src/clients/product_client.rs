//! # Product Client
//!
//! High-level API for the product detail screen.
use crate::product_screen::{ProductError, ProductScreen, ProductView, PRODUCT_PATH};
use async_trait::async_trait;
use screen_framework::{Navigation, ScreenClient, ScreenHandle};
use tracing::{info, instrument};

#[derive(Clone)]
pub struct ProductClient {
    inner: ScreenClient<ProductScreen>,
}

impl ProductClient {
    pub fn new(inner: ScreenClient<ProductScreen>) -> Self {
        Self { inner }
    }

    /// Navigates to a product location such as `/product/slim-shirt`.
    #[instrument(skip(self))]
    pub async fn open(&self, location: &str) -> Result<Navigation<String>, ProductError> {
        let nav = self
            .inner
            .navigate(location)
            .await
            .map_err(Self::map_error)?;
        info!(slug = %nav.params, reloaded = nav.reloaded, "Navigated");
        Ok(nav)
    }

    pub async fn open_slug(&self, slug: &str) -> Result<Navigation<String>, ProductError> {
        self.open(&format!("{}{}", PRODUCT_PATH, slug)).await
    }

    pub async fn view(&self) -> Result<ProductView, ProductError> {
        Ok(ProductView::render(&self.snapshot().await?.state))
    }

    pub async fn settled_view(&self) -> Result<ProductView, ProductError> {
        Ok(ProductView::render(&self.settled().await?.state))
    }
}

#[async_trait]
impl ScreenHandle<ProductScreen> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ScreenClient<ProductScreen> {
        &self.inner
    }
}
