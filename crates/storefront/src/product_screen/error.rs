//! Error types for the product screen.

use crate::api::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The location did not name a product.
    #[error("Product Not Found")]
    MissingSlug,

    #[error("{0}")]
    FetchFailed(ApiError),

    #[error("Screen communication error: {0}")]
    Screen(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::Screen(msg)
    }
}
