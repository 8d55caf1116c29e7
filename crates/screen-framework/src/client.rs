//! # Generic Client
//!
//! This module defines the generic client for communicating with screens.

use crate::error::FrameworkError;
use crate::message::{Navigation, ScreenRequest, Snapshot};
use crate::screen::Screen;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for a running [`ScreenActor`](crate::ScreenActor).
///
/// Holds only a sender, so cloning is cheap and clones can be shared across
/// tasks. When the last clone is dropped the actor shuts down.
pub struct ScreenClient<S: Screen> {
    sender: mpsc::Sender<ScreenRequest<S>>,
}

impl<S: Screen> Clone for ScreenClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: Screen> ScreenClient<S> {
    pub fn new(sender: mpsc::Sender<ScreenRequest<S>>) -> Self {
        Self { sender }
    }

    /// Moves the screen to `location`. Returns once the parameters are
    /// adopted; the load itself continues in the background.
    pub async fn navigate(
        &self,
        location: impl Into<String>,
    ) -> Result<Navigation<S::Params>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ScreenRequest::Navigate {
                location: location.into(),
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn snapshot(&self) -> Result<Snapshot<S::Params, S::Data>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ScreenRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Waits until the load for the current parameters has committed.
    pub async fn settled(&self) -> Result<Snapshot<S::Params, S::Data>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ScreenRequest::Settled { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
