//! # Load State Machine
//!
//! `LoadState` is the tagged union a screen shows: a placeholder while a load
//! is in flight, the loaded data, or an error message. Transitions go through
//! [`LoadState::transition`] only.

/// What a screen currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// A load for the current parameters is in flight.
    Loading,
    /// The load for the current parameters succeeded.
    Success(T),
    /// The load for the current parameters failed with a display-ready message.
    Failed(String),
}

/// Events that drive [`LoadState`].
#[derive(Debug, Clone, PartialEq)]
pub enum LoadEvent<T> {
    /// New parameters were adopted and a load started.
    Requested,
    /// The load for the current parameters resolved with data.
    Succeeded(T),
    /// The load for the current parameters resolved with an error.
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    /// Applies `event` and returns the next state.
    ///
    /// `Requested` always enters `Loading`. A resolution is only accepted while
    /// `Loading`; resolving an already settled state leaves it unchanged.
    pub fn transition(self, event: LoadEvent<T>) -> Self {
        match (self, event) {
            (_, LoadEvent::Requested) => LoadState::Loading,
            (LoadState::Loading, LoadEvent::Succeeded(data)) => LoadState::Success(data),
            (LoadState::Loading, LoadEvent::Failed(message)) => LoadState::Failed(message),
            (settled, _) => settled,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
