//! # Observability & Tracing
//!
//! This module provides the tracing setup shared by every binary built on the
//! framework.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`). Screens identify themselves with a `screen_type`
//! field instead.
//!
//! ## What Gets Traced
//!
//! - **Screen Lifecycle**: startup and shutdown, with the final generation
//! - **Loads**: start, commit, failure, and stale discards
//! - **Client Calls**: spans from `#[instrument]` on client methods
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle and load outcomes
//! RUST_LOG=info storefront /search?query=shirt
//!
//! # Parsed parameters and stale discards as well
//! RUST_LOG=debug storefront /search?query=shirt
//! ```
//!
//! With `RUST_LOG=debug` a fast double navigation looks like:
//!
//! ```text
//! INFO Screen started screen_type="SearchScreen"
//! DEBUG Navigate screen_type="SearchScreen" location=/search?order=lowest params=FilterState { .. }
//! INFO Load started screen_type="SearchScreen" generation=1
//! DEBUG Navigate screen_type="SearchScreen" location=/search?order=highest params=FilterState { .. }
//! INFO Load started screen_type="SearchScreen" generation=2
//! INFO Load committed screen_type="SearchScreen" generation=2
//! DEBUG Stale load discarded screen_type="SearchScreen" stale=1 current=2
//! ```

/// Installs the global `tracing` subscriber.
///
/// Verbosity comes from `RUST_LOG`. Call it once, at the top of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
