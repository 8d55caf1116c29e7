//! # Generic Screen Actor
//!
//! This module defines the `ScreenActor`, the task that owns one screen's
//! state. It processes navigation and snapshot requests sequentially and
//! commits load results only when they belong to the parameters currently
//! adopted.

use crate::client::ScreenClient;
use crate::error::FrameworkError;
use crate::message::{Navigation, Response, ScreenRequest, Snapshot};
use crate::screen::Screen;
use crate::state::{LoadEvent, LoadState};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// A finished load, tagged with the generation it was started for.
struct Completion<S: Screen> {
    generation: u64,
    result: Result<S::Data, String>,
}

enum Event<S: Screen> {
    Request(Option<ScreenRequest<S>>),
    Loaded(Completion<S>),
}

/// The generic actor that runs one screen.
///
/// # Architecture Note
/// This struct is the "Server" half of a screen. It owns the adopted
/// parameters, the [`LoadState`] and the receiver end of the request channel.
///
/// **Concurrency Model**:
/// Requests are handled one at a time inside the actor task, so the state
/// needs no `Mutex`. Loads run in their own spawned tasks, each holding a
/// copy of the parameters it was started for, and report back on an internal
/// channel. Every adopted parameter set bumps `generation`; a completion with
/// an older generation is discarded. The visible state therefore always
/// belongs to the most recently adopted parameters, whatever order the loads
/// resolve in. Superseded loads are not aborted, only ignored.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ScreenActor::new()` returns the actor and its client.
/// 2.  **Wire**: pass the screen's collaborators into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use screen_framework::{Screen, ScreenActor};
/// use async_trait::async_trait;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("echo failed")]
/// struct EchoError;
///
/// struct Echo;
///
/// #[async_trait]
/// impl Screen for Echo {
///     type Params = String;
///     type Data = String;
///     type Error = EchoError;
///     type Context = ();
///
///     fn params_from_location(location: &str) -> String { location.to_string() }
///     async fn load(params: &String, _: &()) -> Result<String, EchoError> { Ok(params.to_uppercase()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ScreenActor::<Echo>::new(10);
///     tokio::spawn(actor.run(()));
///
///     client.navigate("/hello").await.unwrap();
///     let snapshot = client.settled().await.unwrap();
///     assert_eq!(snapshot.state.data().map(String::as_str), Some("/HELLO"));
/// }
/// ```
pub struct ScreenActor<S: Screen> {
    receiver: mpsc::Receiver<ScreenRequest<S>>,
    params: Option<S::Params>,
    generation: u64,
    state: LoadState<S::Data>,
    discarded: u64,
    waiters: Vec<Response<Snapshot<S::Params, S::Data>>>,
}

impl<S: Screen> ScreenActor<S> {
    /// Creates a new `ScreenActor` and its associated `ScreenClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the request channel. If the channel is
    ///   full, client calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ScreenClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            params: None,
            generation: 0,
            state: LoadState::Loading,
            discarded: 0,
            waiters: Vec::new(),
        };
        (actor, ScreenClient::new(sender))
    }

    /// Runs the screen's event loop until every client is dropped.
    ///
    /// # Context Injection
    /// `context` is shared by every load started by this screen.
    pub async fn run(mut self, context: S::Context) {
        // Extract just the type name (e.g., "SearchScreen" instead of the full path)
        let screen_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(screen_type, "Screen started");

        let context = Arc::new(context);
        let (completions, mut finished) = mpsc::unbounded_channel::<Completion<S>>();

        loop {
            let event = tokio::select! {
                msg = self.receiver.recv() => Event::Request(msg),
                Some(done) = finished.recv() => Event::Loaded(done),
            };

            match event {
                Event::Request(None) => break,
                Event::Request(Some(ScreenRequest::Navigate { location, respond_to })) => {
                    let params = S::params_from_location(&location);
                    debug!(screen_type, %location, ?params, "Navigate");

                    let changed = self.params.as_ref() != Some(&params);
                    let retry = !changed && matches!(self.state, LoadState::Failed(_));
                    let reloaded = changed || retry;
                    if reloaded {
                        self.start_load(screen_type, params.clone(), &context, &completions);
                    }
                    self.params = Some(params.clone());

                    let _ = respond_to.send(Ok(Navigation {
                        params,
                        generation: self.generation,
                        reloaded,
                    }));
                }
                Event::Request(Some(ScreenRequest::Snapshot { respond_to })) => {
                    let _ = respond_to.send(Ok(self.snapshot()));
                }
                Event::Request(Some(ScreenRequest::Settled { respond_to })) => {
                    if self.params.is_some() && self.state.is_loading() {
                        self.waiters.push(respond_to);
                    } else {
                        let _ = respond_to.send(Ok(self.snapshot()));
                    }
                }
                Event::Loaded(done) => {
                    if done.generation != self.generation {
                        self.discarded += 1;
                        debug!(
                            screen_type,
                            stale = done.generation,
                            current = self.generation,
                            "Stale load discarded"
                        );
                        continue;
                    }

                    let event = match done.result {
                        Ok(data) => {
                            info!(screen_type, generation = done.generation, "Load committed");
                            LoadEvent::Succeeded(data)
                        }
                        Err(message) => {
                            warn!(screen_type, generation = done.generation, error = %message, "Load failed");
                            LoadEvent::Failed(message)
                        }
                    };
                    self.state = std::mem::take(&mut self.state).transition(event);

                    let snapshot = self.snapshot();
                    for waiter in self.waiters.drain(..) {
                        let _ = waiter.send(Ok(snapshot.clone()));
                    }
                }
            }
        }

        for waiter in self.waiters.drain(..) {
            let _ = waiter.send(Err(FrameworkError::ActorClosed));
        }
        info!(screen_type, generation = self.generation, discarded = self.discarded, "Shutdown");
    }

    fn start_load(
        &mut self,
        screen_type: &str,
        params: S::Params,
        context: &Arc<S::Context>,
        completions: &mpsc::UnboundedSender<Completion<S>>,
    ) {
        self.generation += 1;
        self.state = std::mem::take(&mut self.state).transition(LoadEvent::Requested);
        info!(screen_type, generation = self.generation, "Load started");

        let generation = self.generation;
        let context = Arc::clone(context);
        let completions = completions.clone();
        let load = tokio::spawn(async move {
            S::load(&params, &context)
                .await
                .map_err(|e| S::describe_error(&e))
        });
        tokio::spawn(async move {
            // A panicking load still has to resolve the generation it owns
            let result = match load.await {
                Ok(result) => result,
                Err(e) => Err(format!("Load task failed: {}", e)),
            };
            // The actor may already be gone; nothing left to tell.
            let _ = completions.send(Completion { generation, result });
        });
    }

    fn snapshot(&self) -> Snapshot<S::Params, S::Data> {
        Snapshot {
            params: self.params.clone(),
            generation: self.generation,
            state: self.state.clone(),
            discarded: self.discarded,
        }
    }
}
