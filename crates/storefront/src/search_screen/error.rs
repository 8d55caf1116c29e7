//! Error types for the search screen.

use crate::api::ApiError;
use thiserror::Error;

/// Errors that can occur on the search screen.
///
/// None of them is fatal: a failed search shows its message in place of the
/// grid, a failed category fetch leaves the sidebar with only "Any".
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SearchError {
    /// The product search request failed.
    #[error("{0}")]
    FetchFailed(ApiError),

    /// The category list request failed.
    #[error("{0}")]
    CategoryFetchFailed(ApiError),

    /// An error occurred while communicating with the screen actor.
    #[error("Screen communication error: {0}")]
    Screen(String),
}

impl From<String> for SearchError {
    fn from(msg: String) -> Self {
        SearchError::Screen(msg)
    }
}
