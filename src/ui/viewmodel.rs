//! View model types representing renderable widget state.
//!
//! This module defines immutable view models computed from controller state,
//! following the MVVM pattern. View models answer the one question this crate
//! is responsible for on the display side: which controls render as
//! selected/checked, and which list shows a skeleton, a failure, or rows.
//! They contain no business logic and perform no rendering.
//!
//! The sidebar view model is computed against the *live query string*, not the
//! controller's local state, because the query string is the canonical store
//! for the category facet: a reloaded URL must light up the same checkboxes
//! with no memory beyond query parsing.

use crate::app::delivery::DeliveryState;
use crate::app::sidebar::{PriceSelection, SidebarState, PARAM_CATEGORY};
use crate::domain::{Location, PriceBounds};
use crate::fetch::LoadState;
use crate::query::Query;

/// One category checkbox row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    /// Upstream category identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Whether the URL's `category` parameter selects this row.
    pub checked: bool,
}

/// Display state of the category list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryListView {
    /// Reference list not yet arrived; render loading skeletons.
    Skeleton,

    /// Reference-list fetch failed; render the message with a retry affordance.
    Failed {
        /// Human-readable failure description.
        message: String,
    },

    /// Reference list available.
    Rows(Vec<CategoryRow>),
}

/// One preset price checkbox row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRow {
    /// Preset display label.
    pub label: String,

    /// Whether this preset renders as checked.
    pub checked: bool,
}

/// Complete sidebar view model.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarView {
    /// Category list display state.
    pub categories: CategoryListView,

    /// Preset price rows in catalog order.
    pub price_rows: Vec<PriceRow>,

    /// Pending custom bounds to show in the min/max inputs.
    pub pending: PriceBounds,
}

/// Computes the sidebar view model from controller state and the live query.
///
/// Category checkmarks come from the query string alone; the price checkmark
/// comes from the controller's tagged selection, where `None` lights the
/// sentinel bucket and confirmed custom bounds light no preset at all.
#[must_use]
pub fn sidebar_view(state: &SidebarState, query: &Query) -> SidebarView {
    let categories = match &state.categories {
        LoadState::Idle | LoadState::Loading => CategoryListView::Skeleton,
        LoadState::Failed(message) => CategoryListView::Failed {
            message: message.clone(),
        },
        LoadState::Loaded(list) => {
            let param = query.get(PARAM_CATEGORY);
            CategoryListView::Rows(
                list.iter()
                    .map(|c| CategoryRow {
                        id: c.id.clone(),
                        name: c.name.clone(),
                        checked: param.is_some_and(|p| c.matches_param(p)),
                    })
                    .collect(),
            )
        }
    };

    let highlight = match state.price_selection {
        PriceSelection::None => Some(0),
        PriceSelection::Preset(index) => Some(index),
        PriceSelection::Custom { .. } => None,
    };

    let price_rows = state
        .catalog
        .ranges()
        .iter()
        .enumerate()
        .map(|(i, range)| PriceRow {
            label: range.label.clone(),
            checked: highlight == Some(i),
        })
        .collect();

    SidebarView {
        categories,
        price_rows,
        pending: state.pending_bounds,
    }
}

/// One location row in the open selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRow {
    /// Flag image URL, possibly empty.
    pub image_url: String,

    /// Country display name.
    pub country: String,
}

/// Complete delivery widget view model.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryView {
    /// No selection exists yet; render the loading placeholder. Persists
    /// until the default is computed or the user selects manually.
    Placeholder,

    /// Country fetch failed; render the message with a retry affordance.
    Failed {
        /// Human-readable failure description.
        message: String,
    },

    /// Widget is ready to render.
    Ready {
        /// Current selection shown on the trigger element.
        selection: Location,

        /// Whether the selection list is open.
        open: bool,

        /// Current search input content.
        search_input: String,

        /// Rows the open list should show (full list or filtered view).
        rows: Vec<LocationRow>,
    },
}

/// Computes the delivery widget view model from controller state.
#[must_use]
pub fn delivery_view(state: &DeliveryState) -> DeliveryView {
    if let Some(message) = state.countries.failure() {
        return DeliveryView::Failed {
            message: message.to_string(),
        };
    }

    let Some(selection) = state.selection.clone() else {
        return DeliveryView::Placeholder;
    };

    let rows = state
        .visible_locations()
        .iter()
        .map(|l| LocationRow {
            image_url: l.image_url.clone(),
            country: l.country.clone(),
        })
        .collect();

    DeliveryView::Ready {
        selection,
        open: state.open,
        search_input: state.search_input.clone(),
        rows,
    }
}
