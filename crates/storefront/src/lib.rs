//! # Storefront
//!
//! Client-side core of an e-commerce storefront: search and filtering,
//! product details and the cart, all backed by the product REST API.
//!
//! ## Core Components
//!
//! - **[search_screen]**: the `/search` page. The URL's query string is the
//!   only filter state; every interaction is a navigation.
//! - **[product_screen]**: the `/product/{slug}` page.
//! - **[clients]**: typed wrappers ([`SearchClient`](clients::SearchClient),
//!   [`ProductClient`](clients::ProductClient)) over the screen actors.
//! - **[api]**: the [`CatalogApi`](api::CatalogApi) seam and its HTTP implementation.
//! - **[session]**: cart and user, persisted between runs.
//! - **[lifecycle]**: starts and stops everything.
//!
//! ## Testing
//!
//! [`api::mock::MockCatalog`] scripts the backend, including responses that
//! arrive out of order.

pub mod api;
pub mod categories;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod product_screen;
pub mod search_screen;
pub mod session;
