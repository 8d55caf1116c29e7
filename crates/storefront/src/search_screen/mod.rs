//! # Search Screen
//!
//! The `/search` page: a product grid driven entirely by the URL's query
//! string.
//!
//! ## Structure
//!
//! - [`query`] - Location ⇄ [`FilterState`](crate::model::FilterState) ([`parse_filters`], [`build_url`])
//! - [`entity`] - [`Screen`](screen_framework::Screen) implementation for [`SearchScreen`]
//! - [`view`] - Turns filters, load state and categories into a [`SearchView`]
//! - [`error`] - [`SearchError`] type
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Flow
//!
//! Every interaction is a navigation. Clicking "Shirts" in the sidebar builds
//! `build_url(current, {category: "Shirts"})` and navigates there; the actor
//! parses it back into a `FilterState`, sees that it changed, enters
//! `Loading` and fetches. Results for filters that have since been replaced
//! are dropped.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront::api::{mock::MockCatalog, CatalogApi};
//! use storefront::model::{FilterState, ResultSet};
//! use storefront::search_screen;
//!
//! #[tokio::main]
//! async fn main() {
//!     let catalog = MockCatalog::new();
//!     let empty = ResultSet { products: vec![], page: 1, pages: 0, count_products: 0 };
//!     catalog.search.expect(FilterState::default()).return_ok(empty.clone());
//!
//!     let (actor, client) = search_screen::new(8);
//!     let api: Arc<dyn CatalogApi> = Arc::new(catalog);
//!     tokio::spawn(actor.run(api));
//!
//!     client.navigate("/search").await.unwrap();
//!     let snapshot = client.settled().await.unwrap();
//!     assert_eq!(snapshot.state.data(), Some(&empty));
//! }
//! ```

pub mod entity;
pub mod error;
pub mod query;
pub mod view;

pub use entity::*;
pub use error::*;
pub use query::*;
pub use view::*;

use screen_framework::{ScreenActor, ScreenClient};

/// Creates a new search screen actor and its client.
pub fn new(buffer_size: usize) -> (ScreenActor<SearchScreen>, ScreenClient<SearchScreen>) {
    ScreenActor::new(buffer_size)
}
