//! # System Lifecycle & Orchestration
//!
//! Starts the storefront's screens with their collaborators wired in, and
//! shuts them down again.
//!
//! ## Startup
//!
//! 1. **Categories** - fetched once; a failure only produces a notification
//! 2. **Screen Creation** - one actor per screen, plus its client
//! 3. **Dependency Injection** - each actor runs with the catalog API as its context
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the request channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for every actor task to finish
//!
//! Loads still in flight at that point finish on their own and are ignored.

pub mod storefront_system;

pub use storefront_system::*;
