//! Category sidebar loader.
//!
//! The category list is fetched once when the search page is mounted. A
//! failure is not an error for the page: the user gets a notification and
//! the sidebar offers only "Any".

use crate::api::CatalogApi;
use crate::notify::Notifier;
use crate::search_screen::SearchError;
use tracing::{info, warn};

pub async fn fetch_categories(api: &dyn CatalogApi) -> Result<Vec<String>, SearchError> {
    api.categories()
        .await
        .map_err(SearchError::CategoryFetchFailed)
}

/// Fetches the categories, or notifies and returns an empty list.
pub async fn load_categories(api: &dyn CatalogApi, notifier: &dyn Notifier) -> Vec<String> {
    match fetch_categories(api).await {
        Ok(categories) => {
            info!(count = categories.len(), "Categories loaded");
            categories
        }
        Err(e) => {
            warn!(error = %e, "Category fetch failed");
            notifier.error(&e.to_string());
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockCatalog;
    use crate::api::ApiError;
    use crate::notify::ChannelNotifier;

    #[tokio::test]
    async fn test_categories_loaded() {
        let catalog = MockCatalog::new();
        catalog
            .categories
            .expect(())
            .return_ok(vec!["Pants".into(), "Shirts".into()]);
        let (notifier, mut notices) = ChannelNotifier::new();

        let categories = load_categories(&catalog, &notifier).await;
        assert_eq!(categories, ["Pants", "Shirts"]);
        assert!(notices.try_recv().is_err());
        catalog.verify();
    }

    #[tokio::test]
    async fn test_failure_notifies_once_and_yields_empty() {
        let catalog = MockCatalog::new();
        catalog.categories.expect(()).return_err(ApiError::Status {
            status: 500,
            message: "Categories unavailable".into(),
        });
        let (notifier, mut notices) = ChannelNotifier::new();

        let categories = load_categories(&catalog, &notifier).await;
        assert!(categories.is_empty());
        assert_eq!(notices.try_recv().unwrap(), "Categories unavailable");
        assert!(notices.try_recv().is_err());
    }
}
