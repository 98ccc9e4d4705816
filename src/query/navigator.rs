//! Navigation collaborator abstraction.
//!
//! This module defines the [`Navigator`] trait that abstracts over the host's
//! routing primitive, allowing the controllers to be exercised against an
//! in-memory implementation in tests and embedded against a real router in
//! production.
//!
//! # Design Philosophy
//!
//! The trait is minimal: a read of the live query and a history-free rewrite.
//! The controllers never call it directly; they emit
//! [`Action::Replace`](crate::app::Action) values and the embedder executes
//! them here, keeping the handlers free of I/O.

use crate::query::params::Query;

/// Abstraction over the host's URL/navigation primitive.
///
/// # Implementations
///
/// - [`MemoryNavigator`]: holds path and query in memory (tests, headless hosts)
///
/// # Examples
///
/// ```
/// use facetsync::query::{MemoryNavigator, Navigator, Query};
///
/// let mut nav = MemoryNavigator::new();
/// let mut q = nav.current_query();
/// q.set("category", "Electronics");
/// nav.replace("/shop", &q);
/// assert_eq!(nav.current_query().get("category"), Some("Electronics"));
/// ```
pub trait Navigator {
    /// Returns the live query parameters as a mutable-copyable map.
    fn current_query(&self) -> Query;

    /// Rewrites the current URL to `path` + `query` without adding a
    /// browser-history entry and without a full reload.
    fn replace(&mut self, path: &str, query: &Query);
}

/// In-memory navigator holding the current path and query.
///
/// Each `replace` overwrites the stored location; a counter tracks how many
/// rewrites occurred so tests can assert that an operation was (or was not) a
/// navigation no-op.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    path: String,
    query: Query,
    replace_count: usize,
}

impl MemoryNavigator {
    /// Creates a navigator positioned at an empty path with no parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a navigator positioned at `path` with `query` already applied.
    #[must_use]
    pub fn with_location(path: impl Into<String>, query: Query) -> Self {
        Self {
            path: path.into(),
            query,
            replace_count: 0,
        }
    }

    /// The current path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Number of `replace` calls performed.
    #[must_use]
    pub fn replace_count(&self) -> usize {
        self.replace_count
    }
}

impl Navigator for MemoryNavigator {
    fn current_query(&self) -> Query {
        self.query.clone()
    }

    fn replace(&mut self, path: &str, query: &Query) {
        self.path = path.to_string();
        self.query = query.clone();
        self.replace_count += 1;
    }
}
