//! Navigable URL state: query parameters and the navigation seam.
//!
//! The query string is the canonical store for the catalog filter facets.
//! This module supplies the two pieces the controllers need to treat it that
//! way: an ordered parameter map with platform-faithful mutation semantics
//! ([`Query`]) and the collaborator trait that reads and rewrites the live
//! URL ([`Navigator`]).
//!
//! # Modules
//!
//! - `params`: ordered query parameter map with percent-encoded serialization
//! - `navigator`: navigation trait and the in-memory implementation

pub mod navigator;
pub mod params;

pub use navigator::{MemoryNavigator, Navigator};
pub use params::Query;
