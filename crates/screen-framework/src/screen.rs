//! # Screen Trait
//!
//! The `Screen` trait is the contract every URL-driven view implements to be
//! run by the generic [`ScreenActor`](crate::ScreenActor). It names the
//! parameters a screen derives from its location, the data a load produces,
//! the loader's error type and the context (collaborators) injected when the
//! actor starts.
//!
//! # Architecture Note
//! The actor owns the *when* (adopting parameters, discarding stale loads,
//! committing results) and the screen owns the *what* (how to read a URL and
//! how to fetch for it). A search page and a product page share the same
//! loading/success/error machinery while keeping their own types.

use async_trait::async_trait;
use std::fmt::Debug;

/// A view whose content is a pure function of its location plus one
/// asynchronous load.
///
/// # Async & Context
/// `load` is async and receives the `Context` handed to
/// [`ScreenActor::run`](crate::ScreenActor::run). Dependencies such as an HTTP
/// client are bound at run time, not at construction time.
#[async_trait]
pub trait Screen: Send + Sync + 'static {
    /// Canonical parameters derived from a location. Two locations that
    /// produce equal parameters are the same screen state.
    type Params: Clone + PartialEq + Debug + Send + Sync + 'static;

    /// The data a successful load produces.
    type Data: Clone + Debug + Send + Sync + 'static;

    /// The loader's error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The runtime context (collaborators) shared by every load.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync + 'static;

    /// Derive parameters from a location (path and/or query string).
    /// Must be total: malformed input maps to defaults, never to an error.
    fn params_from_location(location: &str) -> Self::Params;

    /// Fetch the data for `params`.
    async fn load(params: &Self::Params, ctx: &Self::Context) -> Result<Self::Data, Self::Error>;

    /// Turn a load error into the message shown in place of the content.
    fn describe_error(error: &Self::Error) -> String {
        error.to_string()
    }
}
