//! Fetch collaborator message types.
//!
//! This module defines the request and response protocol between the
//! controllers and whatever transport the embedder wires in (an HTTP client, a
//! cache, a test stub). Controllers emit [`FetchRequest`] values inside
//! [`Action::Fetch`](crate::app::Action) and later receive a [`FetchResponse`]
//! via their `FetchArrived` event; they never touch the transport directly.
//!
//! Both types serialize with `serde` so hosts that move messages across a
//! boundary (worker thread, IPC, wasm bridge) can transport them as JSON.

use crate::domain::{Category, Location};
use serde::{Deserialize, Serialize};

/// Requests dispatched from a controller to the reference-list transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchRequest {
    /// Load the catalog category list.
    LoadCategories,

    /// Load the country list for the delivery widget.
    LoadCountries,
}

/// Completions delivered back to the controllers.
///
/// Success variants carry the already-decoded domain lists (see
/// [`records`](crate::fetch::records) for payload decoding); failure variants
/// carry a human-readable message that surfaces as
/// [`LoadState::Failed`](crate::fetch::LoadState).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FetchResponse {
    /// The category list arrived.
    CategoriesLoaded {
        /// Decoded categories in upstream order.
        categories: Vec<Category>,
    },

    /// The category fetch failed.
    CategoriesFailed {
        /// Human-readable failure description.
        message: String,
    },

    /// The country list arrived.
    CountriesLoaded {
        /// Decoded locations in upstream order.
        locations: Vec<Location>,
    },

    /// The country fetch failed.
    CountriesFailed {
        /// Human-readable failure description.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn responses_roundtrip_through_json() {
        let response = FetchResponse::CategoriesLoaded {
            categories: vec![Category::new("1", "Electronics")],
        };
        let json = serde_json::to_string(&response).unwrap();
        let back: FetchResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn requests_roundtrip_through_json() {
        let json = serde_json::to_string(&FetchRequest::LoadCountries).unwrap();
        let back: FetchRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FetchRequest::LoadCountries);
    }
}
