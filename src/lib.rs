//! Facetsync: a storefront browse-state synchronizer.
//!
//! Facetsync keeps user-selected catalog facets (category, price range, custom
//! price bounds) and a searched delivery location consistent with two external
//! stores: the address bar's query string and once-per-session reference lists
//! (categories, countries). It provides:
//!
//! - A category/price filter controller whose source of truth is the URL query
//!   string, with toggle-off single selection and last-write-wins price bounds
//! - A location search controller over component-local state with a computed
//!   default selection and case-insensitive substring search
//! - An explicit load lifecycle for reference lists with failure surfacing and
//!   retry, replacing implicit "list is empty" checks
//! - View-model computation deriving checked/skeleton/failed display state
//!   back out of the canonical stores
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Embedding Runtime (router, fetch transport, view)  │  ← Host
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machines
//! │  - Sidebar controller (URL-backed facets)           │
//! │  - Delivery controller (local selection)            │
//! │  - Action dispatching                               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Query Layer   │   │ Fetch Layer   │
//! │ (ui/)         │   │ (query/)      │   │ (fetch/)      │
//! │ - View models │   │ - Param map   │   │ - Protocol    │
//! │               │   │ - Navigator   │   │ - Load state  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Category, Location, price catalog, errors        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Control Flow
//!
//! Handlers run to completion in response to discrete events and return
//! `(should_render, Vec<Action>)`. The embedder executes the actions:
//! [`Action::Replace`](app::Action) against its [`query::Navigator`],
//! [`Action::Fetch`](app::Action) against its reference-list transport, whose
//! completion comes back later as a `FetchArrived` event. Reference-list
//! fetches are dispatched at most once per list per session, gated on the
//! list's [`fetch::LoadState`] rather than its emptiness.
//!
//! # Example
//!
//! ```
//! use facetsync::app::sidebar::{self, SidebarEvent};
//! use facetsync::app::Action;
//! use facetsync::query::{MemoryNavigator, Navigator};
//! use facetsync::{initialize, Config};
//!
//! let config = Config::default();
//! let (mut sidebar_state, _delivery_state) = initialize(&config);
//! let mut nav = MemoryNavigator::new();
//!
//! let event = SidebarEvent::SelectPricePreset { index: 2 };
//! let (_, actions) = sidebar::handle_event(&mut sidebar_state, &nav.current_query(), &event)?;
//! for action in actions {
//!     match action {
//!         Action::Replace { path, query } => nav.replace(&path, &query),
//!         Action::Fetch(_) => { /* hand to the fetch transport */ }
//!     }
//! }
//! assert_eq!(nav.current_query().get("startPrice"), Some("200"));
//! # Ok::<(), facetsync::domain::FacetsyncError>(())
//! ```

pub mod app;
pub mod domain;
pub mod fetch;
pub mod observability;
pub mod query;
pub mod ui;

pub use app::{Action, DeliveryEvent, DeliveryState, SidebarEvent, SidebarState, SingleSelect};
pub use domain::{Category, FacetsyncError, Location, PriceCatalog, Result};
pub use fetch::{FetchRequest, FetchResponse, LoadState};
pub use query::{MemoryNavigator, Navigator, Query};

use std::collections::BTreeMap;

/// Path of the catalog page, the destination of every facet navigation.
const DEFAULT_SHOP_PATH: &str = "/shop";

/// Country designated as the delivery widget's default selection.
const DEFAULT_COUNTRY: &str = "South Africa";

/// Crate configuration supplied by the embedding host.
///
/// All fields have working defaults; hosts that configure through an untyped
/// key/value channel can use [`Config::from_map`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Path navigated to on every facet change. Default: `"/shop"`.
    pub shop_path: String,

    /// Country matched (exactly, case-sensitively) for the delivery widget's
    /// default selection. Default: `"South Africa"`.
    pub default_country: String,

    /// Path to a TOML preset price catalog.
    ///
    /// Takes precedence over the built-in catalog; any load failure falls
    /// back to the built-in one. See [`domain::price`] for the file format.
    pub presets_file: Option<String>,

    /// Filter directive for the tracing subscriber.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shop_path: DEFAULT_SHOP_PATH.to_string(),
            default_country: DEFAULT_COUNTRY.to_string(),
            presets_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a host-provided string map.
    ///
    /// Hosts that carry configuration as `BTreeMap<String, String>` (plugin
    /// runtimes, env-style config layers) can hand it over directly. Unknown
    /// keys are ignored; missing keys fall back to defaults; empty values are
    /// treated as missing.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use facetsync::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("shop_path".to_string(), "/catalog".to_string());
    /// map.insert("default_country".to_string(), "Kenya".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.shop_path, "/catalog");
    /// assert_eq!(config.default_country, "Kenya");
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            map.get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
        };

        Self {
            shop_path: non_empty("shop_path").unwrap_or_else(|| DEFAULT_SHOP_PATH.to_string()),
            default_country: non_empty("default_country")
                .unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
            presets_file: non_empty("presets_file"),
            trace_level: non_empty("trace_level"),
        }
    }
}

/// Initializes fresh controller states from configuration.
///
/// Loads the preset price catalog (from `presets_file` if set, otherwise the
/// built-in catalog, falling back to built-in on any load error) and returns
/// unmounted sidebar and delivery states. Reference lists load later, when
/// each view mounts and dispatches its fetch.
///
/// # Example
///
/// ```
/// use facetsync::{initialize, Config};
///
/// let (sidebar, delivery) = initialize(&Config::default());
/// assert!(sidebar.categories.is_idle());
/// assert!(delivery.selection.is_none());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> (SidebarState, DeliveryState) {
    tracing::debug!("initializing facetsync controllers");

    let catalog = config.presets_file.as_ref().map_or_else(
        PriceCatalog::default,
        |path| {
            PriceCatalog::from_file(path).unwrap_or_else(|e| {
                tracing::debug!(presets_file = %path, error = %e, "failed to load preset catalog, using built-in");
                PriceCatalog::default()
            })
        },
    );

    (
        SidebarState::new(catalog, config.shop_path.clone()),
        DeliveryState::new(config.default_country.clone()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn from_map_falls_back_to_defaults() {
        let config = Config::from_map(&BTreeMap::new());
        assert_eq!(config.shop_path, "/shop");
        assert_eq!(config.default_country, "South Africa");
        assert!(config.presets_file.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn from_map_ignores_empty_values() {
        let mut map = BTreeMap::new();
        map.insert("shop_path".to_string(), "   ".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.shop_path, "/shop");
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn initialize_uses_built_in_catalog_by_default() {
        let (sidebar, _) = initialize(&Config::default());
        assert_eq!(sidebar.catalog, PriceCatalog::default());
        assert_eq!(sidebar.shop_path, "/shop");
    }

    #[test]
    fn initialize_loads_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[range]]
label = "Everything"
start_price = 1.0
end_price = 0.0
"#
        )
        .unwrap();

        let config = Config {
            presets_file: Some(file.path().to_string_lossy().into_owned()),
            ..Default::default()
        };
        let (sidebar, _) = initialize(&config);
        assert_eq!(sidebar.catalog.len(), 1);
    }

    #[test]
    fn initialize_falls_back_to_built_in_on_unreadable_file() {
        let config = Config {
            presets_file: Some("/definitely/not/a/file.toml".to_string()),
            ..Default::default()
        };
        let (sidebar, _) = initialize(&config);
        assert_eq!(sidebar.catalog, PriceCatalog::default());
    }
}
