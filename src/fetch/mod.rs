//! Reference-list collaborator boundary.
//!
//! Both controllers consume an asynchronously loaded, immutable-for-the-session
//! reference list (categories for the sidebar, countries for the delivery
//! widget). This module holds everything about that boundary: the explicit load
//! lifecycle, the request/response protocol, and the tolerant decoding of the
//! upstream payload shapes.
//!
//! # Modules
//!
//! - `state`: the `Idle`/`Loading`/`Loaded`/`Failed` lifecycle
//! - `messages`: request/response protocol types
//! - `records`: raw wire shapes and mapping into domain types

pub mod messages;
pub mod records;
pub mod state;

pub use messages::{FetchRequest, FetchResponse};
pub use records::{decode_categories, decode_countries, default_selection};
pub use state::LoadState;
