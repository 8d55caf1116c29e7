//! Screen-specific clients.
//!
//! Each wraps a generic [`ScreenClient`](screen_framework::ScreenClient) and
//! adds the screen's own vocabulary on top of the
//! [`ScreenHandle`](screen_framework::ScreenHandle) defaults.

pub mod product_client;
pub mod search_client;

pub use product_client::ProductClient;
pub use search_client::SearchClient;
