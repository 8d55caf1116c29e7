//! [`Screen`] implementation for the search page.

use super::error::SearchError;
use super::query::parse_filters;
use crate::api::CatalogApi;
use crate::model::{FilterState, ResultSet};
use async_trait::async_trait;
use screen_framework::Screen;
use std::sync::Arc;

/// The `/search` screen. Parameters are the [`FilterState`] in the URL, data
/// is one page of results.
pub struct SearchScreen;

#[async_trait]
impl Screen for SearchScreen {
    type Params = FilterState;
    type Data = ResultSet;
    type Error = SearchError;
    type Context = Arc<dyn CatalogApi>;

    fn params_from_location(location: &str) -> FilterState {
        parse_filters(location)
    }

    async fn load(filters: &FilterState, api: &Arc<dyn CatalogApi>) -> Result<ResultSet, SearchError> {
        api.search(filters).await.map_err(SearchError::FetchFailed)
    }
}
