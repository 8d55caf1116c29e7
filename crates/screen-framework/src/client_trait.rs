//! # ScreenHandle Trait
//!
//! Common interface for screen-specific clients: default `snapshot` and
//! `settled` methods built on top of a generic `ScreenClient`, with errors
//! mapped into the screen's own error type.
use crate::{FrameworkError, Screen, ScreenClient, Snapshot};
use async_trait::async_trait;

/// Trait for screen-specific clients to inherit the standard reads.
///
/// # Example
///
/// ```rust
/// use screen_framework::{Screen, ScreenClient, ScreenHandle};
/// use async_trait::async_trait;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct PageError(String);
///
/// impl From<String> for PageError {
///     fn from(s: String) -> Self { PageError(s) }
/// }
///
/// struct Page;
///
/// #[async_trait]
/// impl Screen for Page {
///     type Params = String;
///     type Data = usize;
///     type Error = PageError;
///     type Context = ();
///
///     fn params_from_location(location: &str) -> String { location.to_string() }
///     async fn load(params: &String, _: &()) -> Result<usize, PageError> { Ok(params.len()) }
/// }
///
/// struct PageClient {
///     inner: ScreenClient<Page>,
/// }
///
/// #[async_trait]
/// impl ScreenHandle<Page> for PageClient {
///     type Error = PageError;
///
///     fn inner(&self) -> &ScreenClient<Page> {
///         &self.inner
///     }
/// }
///
/// async fn usage(client: PageClient) {
///     // snapshot(), settled() and map_error() are provided automatically
///     let _ = client.snapshot().await;
///     let _ = client.settled().await;
/// }
/// ```
#[async_trait]
pub trait ScreenHandle<S: Screen>: Send + Sync {
    /// The screen-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ScreenClient.
    fn inner(&self) -> &ScreenClient<S>;

    /// Map framework errors to the screen-specific error type. Defaults to
    /// the error's `From<String>` conversion.
    fn map_error(e: FrameworkError) -> Self::Error {
        Self::Error::from(e.to_string())
    }

    /// Read the screen's current state without waiting.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<Snapshot<S::Params, S::Data>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Wait for the current load to commit, then read the state.
    #[tracing::instrument(skip(self))]
    async fn settled(&self) -> Result<Snapshot<S::Params, S::Data>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().settled().await.map_err(Self::map_error)
    }
}
