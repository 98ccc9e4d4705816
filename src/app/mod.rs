//! Application layer: the two facet controllers and their shared machinery.
//!
//! This module defines the event-driven core of the crate, sitting between the
//! embedding runtime and the domain/query/fetch layers. Both controllers follow
//! the same unidirectional flow:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Fetch Completions ───────┘
//! ```
//!
//! The sidebar controller additionally receives a snapshot of the live query
//! string with every event, because the query string — not local state — is the
//! canonical store for its facets.
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handlers
//! - [`sidebar`]: Category/price filter controller (URL-backed)
//! - [`delivery`]: Location search controller (component-local)
//! - [`selection`]: Generic single-select-with-toggle-off state machine
//!
//! # Example
//!
//! ```
//! use facetsync::app::{sidebar, Action};
//! use facetsync::app::sidebar::{SidebarEvent, SidebarState};
//! use facetsync::domain::PriceCatalog;
//! use facetsync::query::{MemoryNavigator, Navigator, Query};
//!
//! let mut nav = MemoryNavigator::new();
//! let mut state = SidebarState::new(PriceCatalog::default(), "/shop");
//!
//! let event = SidebarEvent::SelectCategory { name: "Electronics".into() };
//! let (_, actions) = sidebar::handle_event(&mut state, &nav.current_query(), &event)?;
//! for action in actions {
//!     if let Action::Replace { path, query } = action {
//!         nav.replace(&path, &query);
//!     }
//! }
//! assert_eq!(nav.current_query().get("category"), Some("Electronics"));
//! # Ok::<(), facetsync::domain::FacetsyncError>(())
//! ```

pub mod actions;
pub mod delivery;
pub mod selection;
pub mod sidebar;

pub use actions::Action;
pub use delivery::{DeliveryEvent, DeliveryState};
pub use selection::SingleSelect;
pub use sidebar::{Key, PriceField, PriceSelection, SidebarEvent, SidebarState};
