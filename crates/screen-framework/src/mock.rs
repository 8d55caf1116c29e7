//! # Mock Data Source & Testing Guide
//!
//! `MockSource<K, V, E>` stands in for whatever a screen loads from (an HTTP
//! API, a database) in tests. Expectations are registered per key and can
//! reply immediately or be *deferred*: a deferred reply is held until the
//! test releases it, which lets a test decide the order in which concurrent
//! loads resolve.
//!
//! ## When to use Mocks vs a Real Backend
//!
//! | Feature | MockSource | Real backend |
//! |---------|------------|--------------|
//! | **Speed** | Instant (in-memory) | Network bound |
//! | **Ordering** | Chosen by the test | Whatever the network does |
//! | **Error Injection** | Easy (`return_err`) | Hard |
//!
//! ## Testing Out-of-Order Responses
//!
//! ```rust
//! use screen_framework::mock::MockSource;
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = MockSource::<&str, u32>::new();
//!     let slow = source.expect("first").deferred();
//!     source.expect("second").return_ok(2);
//!
//!     let first = {
//!         let source = source.clone();
//!         tokio::spawn(async move { source.respond(&"first").await })
//!     };
//!     assert_eq!(source.respond(&"second").await, Ok(2));
//!
//!     slow.resolve_ok(1);
//!     assert_eq!(first.await.unwrap(), Ok(1));
//!     source.verify();
//! }
//! ```
//!
//! Requests are matched by key, not by arrival order, so loads spawned
//! concurrently can reach the mock in any order.

use std::fmt::Debug;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::oneshot;

enum Reply<V, E> {
    Ready(Result<V, E>),
    Deferred(oneshot::Receiver<Result<V, E>>),
}

/// Represents an expected request and the reply it gets.
struct Expectation<K, V, E> {
    key: K,
    reply: Reply<V, E>,
}

type Expectations<K, V, E> = Arc<Mutex<Vec<Expectation<K, V, E>>>>;

/// A scripted data source with expectation tracking.
///
/// # Example
/// ```ignore
/// let source = MockSource::<FilterState, ResultSet, ApiError>::new();
/// source.expect(filters.clone()).return_ok(results);
/// let gate = source.expect(other.clone()).deferred();
/// // ... drive the code under test ...
/// gate.resolve_err(ApiError::Transport("down".into()));
/// source.verify(); // Ensures all expectations were met
/// ```
pub struct MockSource<K, V, E = String> {
    expectations: Expectations<K, V, E>,
}

impl<K, V, E> Clone for MockSource<K, V, E> {
    fn clone(&self) -> Self {
        Self {
            expectations: Arc::clone(&self.expectations),
        }
    }
}

impl<K, V, E> Default for MockSource<K, V, E>
where
    K: PartialEq + Debug,
    E: From<String>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, E> MockSource<K, V, E>
where
    K: PartialEq + Debug,
    E: From<String>,
{
    /// Creates a new mock source with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Expects one request for `key`.
    pub fn expect(&self, key: K) -> ExpectationBuilder<K, V, E> {
        ExpectationBuilder {
            key,
            expectations: Arc::clone(&self.expectations),
        }
    }

    /// Answers a request for `key` with the first matching expectation.
    ///
    /// A request nobody expected resolves to an error rather than panicking,
    /// so the failure shows up in the code under test.
    pub async fn respond(&self, key: &K) -> Result<V, E> {
        let expectation = {
            let mut exps = lock(&self.expectations);
            exps.iter()
                .position(|e| &e.key == key)
                .map(|index| exps.remove(index))
        };

        match expectation {
            None => Err(E::from(format!("Unexpected request: {:?}", key))),
            Some(Expectation {
                reply: Reply::Ready(result),
                ..
            }) => result,
            Some(Expectation {
                reply: Reply::Deferred(pending),
                ..
            }) => match pending.await {
                Ok(result) => result,
                Err(_) => Err(E::from(format!("Deferred reply dropped: {:?}", key))),
            },
        }
    }

    /// Number of expectations not consumed yet.
    pub fn pending(&self) -> usize {
        lock(&self.expectations).len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.pending();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

fn lock<K, V, E>(expectations: &Expectations<K, V, E>) -> MutexGuard<'_, Vec<Expectation<K, V, E>>> {
    // A panicking test thread must not hide the expectations from `verify`.
    expectations.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Builder for a single expectation.
pub struct ExpectationBuilder<K, V, E> {
    key: K,
    expectations: Expectations<K, V, E>,
}

impl<K, V, E> ExpectationBuilder<K, V, E> {
    /// Replies immediately with `value`.
    pub fn return_ok(self, value: V) {
        self.push(Reply::Ready(Ok(value)));
    }

    /// Replies immediately with `error`.
    pub fn return_err(self, error: E) {
        self.push(Reply::Ready(Err(error)));
    }

    /// Holds the reply until the returned [`Release`] is used.
    pub fn deferred(self) -> Release<V, E> {
        let (sender, receiver) = oneshot::channel();
        self.push(Reply::Deferred(receiver));
        Release { sender }
    }

    fn push(self, reply: Reply<V, E>) {
        lock(&self.expectations).push(Expectation {
            key: self.key,
            reply,
        });
    }
}

/// Releases a deferred reply.
pub struct Release<V, E> {
    sender: oneshot::Sender<Result<V, E>>,
}

impl<V, E> Release<V, E> {
    pub fn resolve_ok(self, value: V) {
        let _ = self.sender.send(Ok(value));
    }

    pub fn resolve_err(self, error: E) {
        let _ = self.sender.send(Err(error));
    }
}
