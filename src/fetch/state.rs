//! Reference-list load lifecycle.
//!
//! [`LoadState`] is the explicit tagged lifecycle for a once-per-session
//! reference list. It replaces the implicit "list is empty, so it must not be
//! loaded yet" check with a state that distinguishes a fetch that has not been
//! dispatched, one in flight, one that succeeded, and one that failed. The
//! distinction closes two holes: a fast re-mount can no longer double-dispatch
//! while the first fetch is in flight, and a failed fetch is visible as its own
//! state instead of an indefinite loading placeholder.

/// Lifecycle of an asynchronously loaded reference list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    /// No fetch has been dispatched yet.
    #[default]
    Idle,

    /// A fetch is in flight; dispatching another is forbidden.
    Loading,

    /// The list arrived and is held for the rest of the session.
    Loaded(T),

    /// The fetch failed. The payload is a human-readable message; a retry
    /// event transitions back to [`Loading`](Self::Loading).
    Failed(String),
}

impl<T> LoadState<T> {
    /// Returns `true` when no fetch has been dispatched.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns `true` while a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns `true` once the list has arrived.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Returns `true` when the fetch failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns the loaded value, if any.
    #[must_use]
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the failure message, if any.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
