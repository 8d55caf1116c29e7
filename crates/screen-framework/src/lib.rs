//! # Screen Framework
//!
//! This crate provides the building blocks for URL-driven screens: views whose
//! content is a pure function of their location plus one asynchronous load.
//! Each screen runs as an **actor** that owns its load state machine, so
//! out-of-order responses can never overwrite newer data.
//!
//! ## Why Actors for Screens?
//!
//! A search page fires a fetch every time its filters change. When the user
//! clicks faster than the backend answers, several fetches are in flight at
//! once and they can resolve in any order. Putting the screen's state inside a
//! single task gives one place where every completion is checked against the
//! parameters currently adopted.
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each screen makes the stale check trivial
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Screen Layer** ([`Screen`]) - How to read a location and what to load for it
//! 2. **Runtime Layer** ([`ScreenActor`]) - Generations, stale discards and the [`LoadState`] machine
//! 3. **Interface Layer** ([`ScreenClient`], [`ScreenHandle`]) - Type-safe communication
//!
//! ## Core Abstractions
//!
//! ### [`Screen`] - The Domain Logic
//!
//! ```rust
//! use screen_framework::{LoadState, Screen, ScreenActor};
//! use async_trait::async_trait;
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("no such page")]
//! struct PageError;
//!
//! // Loads the length of the requested path
//! struct Length;
//!
//! #[async_trait]
//! impl Screen for Length {
//!     type Params = String;
//!     type Data = usize;
//!     type Error = PageError;
//!     type Context = ();
//!
//!     fn params_from_location(location: &str) -> String {
//!         location.split('?').next().unwrap_or("/").to_string()
//!     }
//!
//!     async fn load(params: &String, _ctx: &()) -> Result<usize, PageError> {
//!         Ok(params.len())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ScreenActor::<Length>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let nav = client.navigate("/abc?ignored=1").await.unwrap();
//!     assert!(nav.reloaded);
//!
//!     let snapshot = client.settled().await.unwrap();
//!     assert_eq!(snapshot.state, LoadState::Success(4));
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Collaborators (an HTTP client, a cache) are injected at **runtime** via
//! `run(context)`, not at construction time. Tests hand the same screen a
//! [`mock::MockSource`] instead of a real backend.
//!
//! ## Concurrency Model
//!
//! - Each screen runs in its own Tokio task
//! - Requests are processed **sequentially** within a screen
//! - Loads run in spawned tasks and report back tagged with a generation
//! - A completion from an older generation is discarded, never committed
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockSource`, a scripted data source whose
//! replies can be held back and released in any order. It makes the
//! stale-response cases deterministic.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod screen;
pub mod state;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ScreenActor;
pub use client::ScreenClient;
pub use client_trait::ScreenHandle;
pub use error::FrameworkError;
pub use message::{Navigation, Response, ScreenRequest, Snapshot};
pub use screen::Screen;
pub use state::{LoadEvent, LoadState};
