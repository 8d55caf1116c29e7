//! # Screen Messages
//!
//! The message types exchanged between a [`ScreenClient`](crate::ScreenClient)
//! and its [`ScreenActor`](crate::ScreenActor), plus the values they reply with.

use crate::error::FrameworkError;
use crate::screen::Screen;
use crate::state::LoadState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by screens.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Point-in-time view of a screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<P, D> {
    /// Parameters currently adopted, `None` before the first navigation.
    pub params: Option<P>,
    /// Generation of the adopted parameters. Bumped on every load start.
    pub generation: u64,
    /// What the screen shows for `params`.
    pub state: LoadState<D>,
    /// Number of completed loads thrown away because they were stale.
    pub discarded: u64,
}

/// Reply to a navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation<P> {
    /// Parameters adopted from the location.
    pub params: P,
    /// Generation after the navigation.
    pub generation: u64,
    /// Whether the navigation started a new load.
    pub reloaded: bool,
}

/// Requests a screen understands.
///
/// - **Navigate**: adopt the parameters of a new location; starts a load when
///   they differ from the current ones (or when the current load failed).
/// - **Snapshot**: read the current state without waiting.
/// - **Settled**: wait until the current parameters' load has committed.
#[derive(Debug)]
pub enum ScreenRequest<S: Screen> {
    Navigate {
        location: String,
        respond_to: Response<Navigation<S::Params>>,
    },
    Snapshot {
        respond_to: Response<Snapshot<S::Params, S::Data>>,
    },
    Settled {
        respond_to: Response<Snapshot<S::Params, S::Data>>,
    },
}
