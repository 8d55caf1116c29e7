//! # Search Client
//!
//! High-level API for the search screen. Every filter interaction is turned
//! into a navigation to a location built from the current filters, so the
//! location stays the single source of truth.
use crate::model::{FilterOverrides, FilterState};
use crate::search_screen::{build_url, render, SearchError, SearchScreen, SearchView, SEARCH_PATH};
use async_trait::async_trait;
use screen_framework::{Navigation, ScreenClient, ScreenHandle};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Client for the search screen.
///
/// Holds the category list loaded when the screen was mounted; it is the
/// same for every navigation.
#[derive(Clone)]
pub struct SearchClient {
    inner: ScreenClient<SearchScreen>,
    categories: Arc<Vec<String>>,
}

impl SearchClient {
    pub fn new(inner: ScreenClient<SearchScreen>, categories: Vec<String>) -> Self {
        Self {
            inner,
            categories: Arc::new(categories),
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Navigates to `location`.
    #[instrument(skip(self))]
    pub async fn open(&self, location: &str) -> Result<Navigation<FilterState>, SearchError> {
        let nav = self
            .inner
            .navigate(location)
            .await
            .map_err(Self::map_error)?;
        info!(generation = nav.generation, reloaded = nav.reloaded, "Navigated");
        Ok(nav)
    }

    /// Filters currently in the location, the defaults before the first
    /// navigation.
    pub async fn filters(&self) -> Result<FilterState, SearchError> {
        Ok(self.snapshot().await?.params.unwrap_or_default())
    }

    /// Navigates to the current location with `overrides` applied.
    #[instrument(skip(self))]
    pub async fn apply_filter(&self, overrides: FilterOverrides) -> Result<Navigation<FilterState>, SearchError> {
        let current = self.filters().await?;
        let target = build_url(&current, &overrides);
        debug!(%target, "apply_filter");
        self.open(&target).await
    }

    pub async fn change_order(&self, order: &str) -> Result<Navigation<FilterState>, SearchError> {
        self.apply_filter(FilterOverrides::new().order(order)).await
    }

    pub async fn go_to_page(&self, page: u32) -> Result<Navigation<FilterState>, SearchError> {
        self.apply_filter(FilterOverrides::new().page(page)).await
    }

    pub async fn clear_filters(&self) -> Result<Navigation<FilterState>, SearchError> {
        self.open(SEARCH_PATH).await
    }

    /// Renders what the screen shows right now.
    pub async fn view(&self) -> Result<SearchView, SearchError> {
        let snapshot = self.snapshot().await?;
        let filters = snapshot.params.unwrap_or_default();
        Ok(render(&filters, &snapshot.state, &self.categories))
    }

    /// Waits for the current search to finish, then renders it.
    pub async fn settled_view(&self) -> Result<SearchView, SearchError> {
        let snapshot = self.settled().await?;
        let filters = snapshot.params.unwrap_or_default();
        Ok(render(&filters, &snapshot.state, &self.categories))
    }
}

#[async_trait]
impl ScreenHandle<SearchScreen> for SearchClient {
    type Error = SearchError;

    fn inner(&self) -> &ScreenClient<SearchScreen> {
        &self.inner
    }
}
