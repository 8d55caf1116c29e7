//! # Framework Errors
//!
//! Errors raised by the screen runtime itself, as opposed to the errors a
//! screen's own loader produces (those surface as `LoadState::Failed`).

/// Errors that can occur while talking to a running screen.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Screen closed")]
    ActorClosed,
    #[error("Screen dropped response channel")]
    ActorDropped,
}
