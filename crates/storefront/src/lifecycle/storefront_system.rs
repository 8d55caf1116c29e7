use crate::api::CatalogApi;
use crate::categories::load_categories;
use crate::clients::{ProductClient, SearchClient};
use crate::config::DEFAULT_SCREEN_BUFFER;
use crate::model::Product;
use crate::notify::Notifier;
use crate::session::{SessionError, SessionStore};
use std::sync::Arc;
use tracing::{error, info};

/// The running storefront: its screens, the session store and the API they
/// share.
///
/// # Example
///
/// ```ignore
/// let api: Arc<dyn CatalogApi> = Arc::new(HttpCatalog::new(base));
/// let session = SessionStore::hydrate(".storefront/session.json").await?;
/// let system = StorefrontSystem::start(api, session, &LogNotifier).await;
///
/// system.search_client.open("/search?category=Shirts").await?;
/// println!("{}", system.search_client.settled_view().await?);
///
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    pub search_client: SearchClient,
    pub product_client: ProductClient,
    pub session: Arc<SessionStore>,
    api: Arc<dyn CatalogApi>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    pub async fn start(api: Arc<dyn CatalogApi>, session: SessionStore, notifier: &dyn Notifier) -> Self {
        Self::start_with_buffer(api, session, notifier, DEFAULT_SCREEN_BUFFER).await
    }

    /// Loads the categories, then spawns the search and product screens with
    /// `api` as their context.
    pub async fn start_with_buffer(
        api: Arc<dyn CatalogApi>,
        session: SessionStore,
        notifier: &dyn Notifier,
        buffer_size: usize,
    ) -> Self {
        let categories = load_categories(api.as_ref(), notifier).await;

        // 1. Create screens (no dependencies yet)
        let (search_actor, search_client) = crate::search_screen::new(buffer_size);
        let (product_actor, product_client) = crate::product_screen::new(buffer_size);

        // 2. Start screens with the catalog injected
        let search_handle = tokio::spawn(search_actor.run(Arc::clone(&api)));
        let product_handle = tokio::spawn(product_actor.run(Arc::clone(&api)));

        info!(categories = categories.len(), "Storefront started");
        Self {
            search_client: SearchClient::new(search_client, categories),
            product_client: ProductClient::new(product_client),
            session: Arc::new(session),
            api,
            handles: vec![search_handle, product_handle],
        }
    }

    pub fn api(&self) -> &dyn CatalogApi {
        self.api.as_ref()
    }

    /// Adds `product` to the session's cart after a stock check.
    pub async fn add_to_cart(&self, product: &Product) -> Result<u32, SessionError> {
        self.session.add_to_cart(self.api.as_ref(), product).await
    }

    /// Stops every screen.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all screens shut down cleanly
    /// - `Err(String)` if a screen task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        // Dropping the clients closes the request channels
        drop(self.search_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Screen task failed: {:?}", e);
                return Err(format!("Screen task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete");
        Ok(())
    }
}
