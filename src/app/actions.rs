//! Actions representing side effects to be executed by the embedding runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handlers after processing user input or fetch
//! completions. Actions bridge pure state transformations and effectful
//! operations like rewriting the URL or dispatching a reference-list request.
//!
//! # Architecture
//!
//! Each handler returns a `Vec<Action>` after processing an event, allowing
//! multiple side effects to be queued atomically. The embedder executes them in
//! sequence: `Replace` against its [`Navigator`](crate::query::Navigator),
//! `Fetch` against whatever transport it wired in.

use crate::fetch::FetchRequest;
use crate::query::Query;

/// Commands representing side effects to be executed by the embedding runtime.
///
/// Actions are produced by the event handlers and executed by the embedder.
/// They are the boundary between pure state transformations and effectful
/// operations; nothing inside the handlers performs navigation or I/O.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Rewrites the current URL without adding a browser-history entry.
    ///
    /// Emitted whenever a facet selection changes the canonical query-string
    /// state. Synchronous from the caller's perspective.
    Replace {
        /// Destination path (the shop page).
        path: String,
        /// Full query to install, already mutated by the handler.
        query: Query,
    },

    /// Dispatches a reference-list request to the fetch transport.
    ///
    /// Emitted at most once per list per session: dispatch is gated on the
    /// list's [`LoadState`](crate::fetch::LoadState) being `Idle` (or `Failed`,
    /// for an explicit retry).
    Fetch(FetchRequest),
}
