//! # Product Screen
//!
//! The `/product/{slug}` page. Runs on the same [`ScreenActor`] as the
//! search page, so it gets the same loading/error states and the same
//! protection against late responses when the user hops between products.
//!
//! ## Structure
//!
//! - [`entity`] - [`Screen`](screen_framework::Screen) implementation for [`ProductScreen`]
//! - [`error`] - [`ProductError`] type
//! - [`ProductView`] - what the page shows for a load state

pub mod entity;
pub mod error;

pub use entity::*;
pub use error::*;

use crate::model::Product;
use screen_framework::{LoadState, ScreenActor, ScreenClient};

/// Creates a new product screen actor and its client.
pub fn new(buffer_size: usize) -> (ScreenActor<ProductScreen>, ScreenClient<ProductScreen>) {
    ScreenActor::new(buffer_size)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductView {
    Loading,
    Failed(String),
    Details {
        product: Product,
        /// "In Stock" or "Unavailable".
        status: &'static str,
        can_add_to_cart: bool,
    },
}

impl ProductView {
    pub fn render(state: &LoadState<Product>) -> Self {
        match state {
            LoadState::Loading => ProductView::Loading,
            LoadState::Failed(message) => ProductView::Failed(message.clone()),
            LoadState::Success(product) => ProductView::Details {
                product: product.clone(),
                status: if product.in_stock() { "In Stock" } else { "Unavailable" },
                can_add_to_cart: product.in_stock(),
            },
        }
    }
}

impl std::fmt::Display for ProductView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductView::Loading => writeln!(f, "Loading..."),
            ProductView::Failed(message) => writeln!(f, "Error: {}", message),
            ProductView::Details { product, status, can_add_to_cart } => {
                writeln!(f, "{}", product.name)?;
                writeln!(f, "{:.1}/5 ({} reviews)", product.rating, product.num_reviews)?;
                writeln!(f, "Price: ${:.2}", product.price)?;
                if let Some(description) = &product.description {
                    writeln!(f, "{}", description)?;
                }
                writeln!(f, "Status: {}", status)?;
                if *can_add_to_cart {
                    writeln!(f, "[Add to cart]")?;
                }
                Ok(())
            }
        }
    }
}
