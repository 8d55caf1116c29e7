//! # Storefront CLI
//!
//! Opens one storefront location against a running backend and prints what
//! the screen shows.
//!
//! ```bash
//! storefront '/search?category=Shirts&price=51-200' --order lowest
//! storefront /product/slim-shirt --add-to-cart
//! RUST_LOG=debug storefront /search?query=pants
//! ```

use clap::Parser;
use screen_framework::tracing::setup_tracing;
use screen_framework::LoadState;
use screen_framework::ScreenHandle;
use std::sync::Arc;
use storefront::api::{CatalogApi, HttpCatalog};
use storefront::config::Config;
use storefront::lifecycle::StorefrontSystem;
use storefront::notify::LogNotifier;
use storefront::session::SessionStore;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = Config::parse();
    config.validate().map_err(|e| e.to_string())?;
    let base = config.api_base().map_err(|e| e.to_string())?;

    let api: Arc<dyn CatalogApi> = Arc::new(HttpCatalog::new(base));
    let session = SessionStore::hydrate(&config.session)
        .await
        .map_err(|e| e.to_string())?;
    let system = StorefrontSystem::start_with_buffer(api, session, &LogNotifier, config.screen_buffer).await;

    let result = if config.opens_product() {
        show_product(&system, &config).await
    } else {
        show_search(&system, &config).await
    };
    if let Err(e) = &result {
        error!(error = %e, "Command failed");
    }

    system.shutdown().await?;
    result
}

async fn show_search(system: &StorefrontSystem, config: &Config) -> Result<(), String> {
    let client = &system.search_client;
    client.open(&config.location).await.map_err(|e| e.to_string())?;
    if let Some(order) = &config.order {
        client.change_order(order).await.map_err(|e| e.to_string())?;
    }

    let view = client.settled_view().await.map_err(|e| e.to_string())?;
    println!("{}", view);
    Ok(())
}

async fn show_product(system: &StorefrontSystem, config: &Config) -> Result<(), String> {
    let client = &system.product_client;
    client.open(&config.location).await.map_err(|e| e.to_string())?;

    let snapshot = client.settled().await.map_err(|e| e.to_string())?;
    println!("{}", storefront::product_screen::ProductView::render(&snapshot.state));

    if config.add_to_cart {
        if let LoadState::Success(product) = &snapshot.state {
            let quantity = system.add_to_cart(product).await.map_err(|e| e.to_string())?;
            info!(quantity, "Cart updated");
            println!("Cart: {} item(s)", system.session.cart_count().await);
        }
    }
    Ok(())
}
