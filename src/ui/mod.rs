//! Display-state derivation layer.
//!
//! Rendering itself is out of scope for this crate; what belongs here is the
//! declarative half of the contract: transforming controller state (and, for
//! the sidebar, the live query string) into view models that say exactly which
//! controls are checked, which list is a skeleton, and which failure is
//! retryable.
//!
//! ```text
//! SidebarState + Query → sidebar_view → SidebarView
//! DeliveryState        → delivery_view → DeliveryView
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types and their computation

pub mod viewmodel;

pub use viewmodel::{
    delivery_view, sidebar_view, CategoryListView, CategoryRow, DeliveryView, LocationRow,
    PriceRow, SidebarView,
};
