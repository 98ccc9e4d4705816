//! Category/Price filter controller.
//!
//! This module implements the sidebar's event handler: it translates discrete
//! facet selections into URL query-parameter rewrites and keeps the local
//! highlight state consistent with what the address bar says. The query string
//! is the source of truth for both facets; local state is only the preset/custom
//! price highlight, the pending (unconfirmed) custom bounds, and the category
//! reference-list lifecycle.
//!
//! # Query parameters owned by this controller
//!
//! | Parameter    | Written by                                      |
//! |--------------|--------------------------------------------------|
//! | `category`   | [`SidebarEvent::SelectCategory`] (toggle on/off) |
//! | `startPrice` | preset selection or confirmed custom bounds      |
//! | `endPrice`   | preset selection or confirmed custom bounds      |
//!
//! Preset selection and custom bounds are last-write-wins over the same two
//! parameters; [`PriceSelection`] keeps the two inputs from ever disagreeing
//! about which one is active.

use crate::app::selection::SingleSelect;
use crate::app::Action;
use crate::domain::category::param_selects;
use crate::domain::error::Result;
use crate::domain::{Category, PriceBounds, PriceCatalog};
use crate::fetch::{FetchRequest, FetchResponse, LoadState};
use crate::query::Query;

/// Query parameter holding the selected category name.
pub const PARAM_CATEGORY: &str = "category";

/// Query parameter holding the lower price bound.
pub const PARAM_START_PRICE: &str = "startPrice";

/// Query parameter holding the upper price bound.
pub const PARAM_END_PRICE: &str = "endPrice";

/// Which price constraint currently backs the URL's price parameters.
///
/// A single tagged value instead of two independently writable fields: a
/// preset highlight and confirmed custom bounds can never disagree, because
/// only one of them exists at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PriceSelection {
    /// No price constraint; the sentinel "all prices" bucket is highlighted.
    #[default]
    None,

    /// The preset at this catalog index is active.
    Preset(usize),

    /// Explicitly confirmed custom bounds are active.
    Custom {
        /// Confirmed lower bound.
        start: f64,
        /// Confirmed upper bound.
        end: f64,
    },
}

impl PriceSelection {
    /// Projects the preset arm onto the generic single-select machine.
    ///
    /// `None` and `Custom` both read as "no preset selected" for toggle
    /// purposes.
    fn as_single_select(self) -> SingleSelect {
        match self {
            Self::Preset(index) => SingleSelect::SelectedAt(index),
            Self::None | Self::Custom { .. } => SingleSelect::Unselected,
        }
    }

    /// Returns the highlighted preset index, if a preset is active.
    #[must_use]
    pub fn preset_index(&self) -> Option<usize> {
        match self {
            Self::Preset(index) => Some(*index),
            _ => None,
        }
    }
}

/// Which custom price input field a keystroke targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceField {
    /// The minimum-price input.
    Start,
    /// The maximum-price input.
    End,
}

/// Key identity carried by the confirm event.
///
/// Only `Enter` confirms; everything else is deliberately collapsed into
/// `Other` because the handler treats all non-confirming keys identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// The confirmation key.
    Enter,
    /// Any other key.
    Other,
}

/// Events processed by the sidebar controller.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarEvent {
    /// The sidebar view mounted. Restores the price highlight from the live
    /// query and dispatches the category fetch if it has never run.
    ViewMounted,

    /// The sidebar view was torn down. Late fetch completions arriving after
    /// this are dropped.
    ViewDismissed,

    /// A category row was clicked.
    SelectCategory {
        /// Display name of the clicked category.
        name: String,
    },

    /// A preset price row was clicked.
    SelectPricePreset {
        /// Catalog index of the clicked preset.
        index: usize,
    },

    /// A keystroke changed one of the custom price inputs.
    PriceInput {
        /// Which input the keystroke targets.
        field: PriceField,
        /// Raw text content of the input after the keystroke.
        raw: String,
    },

    /// A key was pressed inside either custom price input.
    ConfirmPriceRange {
        /// The pressed key; only [`Key::Enter`] confirms.
        key: Key,
    },

    /// Re-dispatches the category fetch after a failure.
    RetryCategories,

    /// A fetch completion arrived from the transport.
    FetchArrived(FetchResponse),
}

/// Sidebar controller state.
///
/// Owned by a single view; independent sidebar instances share nothing. The
/// category list is held for the lifetime of the view, never mutated after
/// arrival.
#[derive(Debug, Clone)]
pub struct SidebarState {
    /// Category reference-list lifecycle.
    pub categories: LoadState<Vec<Category>>,

    /// Preset price ranges offered by this storefront.
    pub catalog: PriceCatalog,

    /// Which price constraint currently backs the URL parameters.
    pub price_selection: PriceSelection,

    /// Custom bounds typed but not yet confirmed. Never written to the URL
    /// until an Enter-confirmed validation passes.
    pub pending_bounds: PriceBounds,

    /// Path navigated to on every facet change.
    pub shop_path: String,

    /// Whether the owning view is live. Cleared on dismissal so a late fetch
    /// completion cannot update released state.
    pub active: bool,
}

impl SidebarState {
    /// Creates sidebar state for a view that has not mounted yet.
    #[must_use]
    pub fn new(catalog: PriceCatalog, shop_path: impl Into<String>) -> Self {
        Self {
            categories: LoadState::Idle,
            catalog,
            price_selection: PriceSelection::None,
            pending_bounds: PriceBounds::default(),
            shop_path: shop_path.into(),
            active: false,
        }
    }

    /// Re-derives the price highlight from URL-carried bounds.
    ///
    /// Both price parameters must be present and parse as floats; an exact
    /// match against a non-sentinel catalog entry restores that preset,
    /// anything else restores a custom highlight with the pending inputs
    /// seeded from the URL. Absent or unparseable parameters leave the
    /// highlight cleared.
    fn restore_price_highlight(&mut self, query: &Query) {
        let parsed = query
            .get(PARAM_START_PRICE)
            .zip(query.get(PARAM_END_PRICE))
            .and_then(|(s, e)| Some((s.parse::<f64>().ok()?, e.parse::<f64>().ok()?)));

        self.price_selection = match parsed {
            Some((start, end)) => match self.catalog.match_bounds(start, end) {
                Some(index) => PriceSelection::Preset(index),
                None => {
                    self.pending_bounds = PriceBounds::new(start, end);
                    PriceSelection::Custom { start, end }
                }
            },
            None => PriceSelection::None,
        };

        tracing::debug!(selection = ?self.price_selection, "price highlight restored from query");
    }
}

/// Processes a sidebar event against the live query snapshot.
///
/// Mutates controller state and returns `(should_render, actions)`: whether
/// the view needs repainting, and the side effects the embedder must execute
/// (`Replace` against its navigator, `Fetch` against its transport).
///
/// Malformed numeric input and failed validations are silent no-ops by
/// design: the query string and pending state are simply left untouched.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the handler signature uniform
/// across controllers and stable against future fallible transitions.
#[allow(clippy::unnecessary_wraps)]
pub fn handle_event(
    state: &mut SidebarState,
    query: &Query,
    event: &SidebarEvent,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("sidebar_event", event_type = ?event).entered();

    match event {
        SidebarEvent::ViewMounted => {
            state.active = true;
            state.restore_price_highlight(query);

            let mut actions = vec![];
            if state.categories.is_idle() {
                tracing::debug!("dispatching category fetch");
                state.categories = LoadState::Loading;
                actions.push(Action::Fetch(FetchRequest::LoadCategories));
            }
            Ok((true, actions))
        }

        SidebarEvent::ViewDismissed => {
            state.active = false;
            Ok((false, vec![]))
        }

        SidebarEvent::SelectCategory { name } => {
            let mut next = query.clone();
            let currently_selected = next
                .get(PARAM_CATEGORY)
                .is_some_and(|param| param_selects(name, param));

            if currently_selected {
                tracing::debug!(category = %name, "category toggled off");
                next.delete(PARAM_CATEGORY);
            } else {
                tracing::debug!(category = %name, "category selected");
                next.set(PARAM_CATEGORY, name.clone());
            }

            Ok((
                true,
                vec![Action::Replace {
                    path: state.shop_path.clone(),
                    query: next,
                }],
            ))
        }

        SidebarEvent::SelectPricePreset { index } => {
            let Some(range) = state.catalog.get(*index) else {
                tracing::debug!(index, "preset index out of catalog bounds");
                return Ok((false, vec![]));
            };
            let range = range.clone();

            let mut next = query.clone();
            let mut machine = state.price_selection.as_single_select();

            if !machine.select(*index) {
                tracing::debug!(index, "preset toggled off");
                state.price_selection = PriceSelection::None;
                next.delete(PARAM_START_PRICE);
                next.delete(PARAM_END_PRICE);
            } else if state.catalog.is_all_price(*index) {
                // The sentinel bucket always means "no constraint", whatever
                // its literal stored bounds say.
                tracing::debug!("all-price bucket selected, clearing bounds");
                state.price_selection = PriceSelection::None;
                next.delete(PARAM_START_PRICE);
                next.delete(PARAM_END_PRICE);
            } else {
                tracing::debug!(index, label = %range.label, "preset selected");
                state.price_selection = PriceSelection::Preset(*index);
                next.set(PARAM_START_PRICE, range.start_price.to_string());
                next.set(PARAM_END_PRICE, range.end_price.to_string());
            }

            Ok((
                true,
                vec![Action::Replace {
                    path: state.shop_path.clone(),
                    query: next,
                }],
            ))
        }

        SidebarEvent::PriceInput { field, raw } => {
            match raw.trim().parse::<f64>() {
                Ok(value) if !value.is_nan() => {
                    match field {
                        PriceField::Start => state.pending_bounds.start_price = value,
                        PriceField::End => state.pending_bounds.end_price = value,
                    }
                    Ok((true, vec![]))
                }
                _ => {
                    // Non-numeric input: keep the previous value, no error.
                    tracing::debug!(field = ?field, raw = %raw, "price input rejected");
                    Ok((false, vec![]))
                }
            }
        }

        SidebarEvent::ConfirmPriceRange { key } => {
            if *key != Key::Enter {
                return Ok((false, vec![]));
            }

            if !state.pending_bounds.is_valid() {
                tracing::debug!(bounds = ?state.pending_bounds, "custom bounds rejected");
                return Ok((false, vec![]));
            }

            let PriceBounds {
                start_price,
                end_price,
            } = state.pending_bounds;

            tracing::debug!(start = start_price, end = end_price, "custom bounds confirmed");
            state.price_selection = PriceSelection::Custom {
                start: start_price,
                end: end_price,
            };

            let mut next = query.clone();
            next.set(PARAM_START_PRICE, start_price.to_string());
            next.set(PARAM_END_PRICE, end_price.to_string());

            Ok((
                true,
                vec![Action::Replace {
                    path: state.shop_path.clone(),
                    query: next,
                }],
            ))
        }

        SidebarEvent::RetryCategories => {
            if state.categories.is_failed() {
                tracing::debug!("retrying category fetch");
                state.categories = LoadState::Loading;
                Ok((true, vec![Action::Fetch(FetchRequest::LoadCategories)]))
            } else {
                Ok((false, vec![]))
            }
        }

        SidebarEvent::FetchArrived(response) => {
            if !state.active {
                tracing::debug!("dropping fetch completion for dismissed view");
                return Ok((false, vec![]));
            }

            match response {
                FetchResponse::CategoriesLoaded { categories } => {
                    if !state.categories.is_loading() {
                        tracing::debug!("dropping duplicate category completion");
                        return Ok((false, vec![]));
                    }
                    tracing::debug!(count = categories.len(), "categories loaded");
                    state.categories = LoadState::Loaded(categories.clone());
                    Ok((true, vec![]))
                }
                FetchResponse::CategoriesFailed { message } => {
                    if !state.categories.is_loading() {
                        return Ok((false, vec![]));
                    }
                    tracing::debug!(error = %message, "category fetch failed");
                    state.categories = LoadState::Failed(message.clone());
                    Ok((true, vec![]))
                }
                // Country traffic belongs to the delivery controller.
                FetchResponse::CountriesLoaded { .. } | FetchResponse::CountriesFailed { .. } => {
                    Ok((false, vec![]))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{MemoryNavigator, Navigator};

    fn mounted_state() -> SidebarState {
        let mut state = SidebarState::new(PriceCatalog::default(), "/shop");
        let (_, _) = handle_event(&mut state, &Query::new(), &SidebarEvent::ViewMounted).unwrap();
        state
    }

    fn replace_query(actions: &[Action]) -> &Query {
        match actions.first() {
            Some(Action::Replace { query, .. }) => query,
            other => panic!("expected replace action, got {other:?}"),
        }
    }

    fn apply(nav: &mut MemoryNavigator, actions: Vec<Action>) {
        for action in actions {
            if let Action::Replace { path, query } = action {
                nav.replace(&path, &query);
            }
        }
    }

    #[test]
    fn mount_dispatches_category_fetch_exactly_once() {
        let mut state = SidebarState::new(PriceCatalog::default(), "/shop");
        let (_, actions) =
            handle_event(&mut state, &Query::new(), &SidebarEvent::ViewMounted).unwrap();
        assert_eq!(actions, vec![Action::Fetch(FetchRequest::LoadCategories)]);
        assert!(state.categories.is_loading());

        // A fast re-mount while the fetch is in flight must not re-dispatch.
        let (_, actions) =
            handle_event(&mut state, &Query::new(), &SidebarEvent::ViewMounted).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn selecting_category_sets_parameter() {
        let mut state = mounted_state();
        let (_, actions) = handle_event(
            &mut state,
            &Query::new(),
            &SidebarEvent::SelectCategory {
                name: "Electronics".to_string(),
            },
        )
        .unwrap();

        assert_eq!(replace_query(&actions).get("category"), Some("Electronics"));
    }

    #[test]
    fn selecting_current_category_removes_parameter() {
        let mut state = mounted_state();
        let query = Query::parse("category=Electronics&startPrice=200");
        let (_, actions) = handle_event(
            &mut state,
            &query,
            &SidebarEvent::SelectCategory {
                name: "Electronics".to_string(),
            },
        )
        .unwrap();

        let next = replace_query(&actions);
        assert_eq!(next.get("category"), None);
        // Unrelated parameters survive the rewrite.
        assert_eq!(next.get("startPrice"), Some("200"));
    }

    #[test]
    fn category_toggle_comparison_is_trimmed_and_case_insensitive() {
        let mut state = mounted_state();
        let query = Query::parse("category=+electronics+");
        let (_, actions) = handle_event(
            &mut state,
            &query,
            &SidebarEvent::SelectCategory {
                name: "Electronics".to_string(),
            },
        )
        .unwrap();

        assert_eq!(replace_query(&actions).get("category"), None);
    }

    #[test]
    fn selecting_other_category_replaces_parameter() {
        let mut state = mounted_state();
        let query = Query::parse("category=Electronics");
        let (_, actions) = handle_event(
            &mut state,
            &query,
            &SidebarEvent::SelectCategory {
                name: "Toys".to_string(),
            },
        )
        .unwrap();

        assert_eq!(replace_query(&actions).get("category"), Some("Toys"));
    }

    #[test]
    fn preset_selection_writes_catalog_bounds() {
        let mut state = mounted_state();
        let (_, actions) = handle_event(
            &mut state,
            &Query::new(),
            &SidebarEvent::SelectPricePreset { index: 2 },
        )
        .unwrap();

        let next = replace_query(&actions);
        assert_eq!(next.get("startPrice"), Some("200"));
        assert_eq!(next.get("endPrice"), Some("1000"));
        assert_eq!(state.price_selection, PriceSelection::Preset(2));
    }

    #[test]
    fn selecting_preset_twice_is_equivalent_to_never_selecting() {
        let mut state = mounted_state();
        let mut nav = MemoryNavigator::with_location("/shop", Query::new());

        let (_, actions) = handle_event(
            &mut state,
            &nav.current_query(),
            &SidebarEvent::SelectPricePreset { index: 3 },
        )
        .unwrap();
        apply(&mut nav, actions);
        assert_eq!(nav.current_query().get("startPrice"), Some("1000"));

        let (_, actions) = handle_event(
            &mut state,
            &nav.current_query(),
            &SidebarEvent::SelectPricePreset { index: 3 },
        )
        .unwrap();
        apply(&mut nav, actions);

        assert!(nav.current_query().is_empty());
        assert_eq!(state.price_selection, PriceSelection::None);
    }

    #[test]
    fn all_price_bucket_clears_previously_confirmed_custom_bounds() {
        let mut state = mounted_state();
        let query = Query::parse("startPrice=150&endPrice=900");
        state.price_selection = PriceSelection::Custom {
            start: 150.0,
            end: 900.0,
        };

        let (_, actions) = handle_event(
            &mut state,
            &query,
            &SidebarEvent::SelectPricePreset { index: 0 },
        )
        .unwrap();

        let next = replace_query(&actions);
        assert_eq!(next.get("startPrice"), None);
        assert_eq!(next.get("endPrice"), None);
        assert_eq!(state.price_selection, PriceSelection::None);
    }

    #[test]
    fn out_of_range_preset_index_is_a_no_op() {
        let mut state = mounted_state();
        let (rendered, actions) = handle_event(
            &mut state,
            &Query::new(),
            &SidebarEvent::SelectPricePreset { index: 99 },
        )
        .unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
    }

    #[test]
    fn price_input_updates_pending_bounds() {
        let mut state = mounted_state();
        handle_event(
            &mut state,
            &Query::new(),
            &SidebarEvent::PriceInput {
                field: PriceField::Start,
                raw: "100".to_string(),
            },
        )
        .unwrap();
        handle_event(
            &mut state,
            &Query::new(),
            &SidebarEvent::PriceInput {
                field: PriceField::End,
                raw: "500.5".to_string(),
            },
        )
        .unwrap();

        assert_eq!(state.pending_bounds, PriceBounds::new(100.0, 500.5));
    }

    #[test]
    fn malformed_price_input_keeps_previous_value() {
        let mut state = mounted_state();
        state.pending_bounds = PriceBounds::new(42.0, 0.0);

        for raw in ["abc", "", "nan", "12,5"] {
            let (rendered, actions) = handle_event(
                &mut state,
                &Query::new(),
                &SidebarEvent::PriceInput {
                    field: PriceField::Start,
                    raw: raw.to_string(),
                },
            )
            .unwrap();
            assert!(!rendered, "input {raw:?} should be rejected");
            assert!(actions.is_empty());
        }

        assert_eq!(state.pending_bounds.start_price, 42.0);
    }

    #[test]
    fn confirm_with_enter_writes_both_bounds() {
        let mut state = mounted_state();
        state.pending_bounds = PriceBounds::new(100.0, 500.0);

        let (_, actions) = handle_event(
            &mut state,
            &Query::new(),
            &SidebarEvent::ConfirmPriceRange { key: Key::Enter },
        )
        .unwrap();

        let next = replace_query(&actions);
        assert_eq!(next.get("startPrice"), Some("100"));
        assert_eq!(next.get("endPrice"), Some("500"));
        assert_eq!(
            state.price_selection,
            PriceSelection::Custom {
                start: 100.0,
                end: 500.0
            }
        );
    }

    #[test]
    fn confirm_with_other_key_is_a_no_op() {
        let mut state = mounted_state();
        state.pending_bounds = PriceBounds::new(100.0, 500.0);

        let (rendered, actions) = handle_event(
            &mut state,
            &Query::new(),
            &SidebarEvent::ConfirmPriceRange { key: Key::Other },
        )
        .unwrap();

        assert!(!rendered);
        assert!(actions.is_empty());
    }

    #[test]
    fn confirm_with_negative_bound_leaves_query_unchanged() {
        let mut state = mounted_state();
        state.pending_bounds = PriceBounds::new(-5.0, 10.0);

        let (rendered, actions) = handle_event(
            &mut state,
            &Query::parse("category=Toys"),
            &SidebarEvent::ConfirmPriceRange { key: Key::Enter },
        )
        .unwrap();

        assert!(!rendered);
        assert!(actions.is_empty());
        assert_eq!(state.price_selection, PriceSelection::None);
    }

    #[test]
    fn mount_restores_preset_highlight_from_query() {
        let mut state = SidebarState::new(PriceCatalog::default(), "/shop");
        let query = Query::parse("startPrice=200&endPrice=1000");
        handle_event(&mut state, &query, &SidebarEvent::ViewMounted).unwrap();
        assert_eq!(state.price_selection, PriceSelection::Preset(2));
    }

    #[test]
    fn mount_falls_back_to_custom_highlight_for_unmatched_bounds() {
        let mut state = SidebarState::new(PriceCatalog::default(), "/shop");
        let query = Query::parse("startPrice=150&endPrice=900");
        handle_event(&mut state, &query, &SidebarEvent::ViewMounted).unwrap();
        assert_eq!(
            state.price_selection,
            PriceSelection::Custom {
                start: 150.0,
                end: 900.0
            }
        );
        assert_eq!(state.pending_bounds, PriceBounds::new(150.0, 900.0));
    }

    #[test]
    fn mount_clears_highlight_for_absent_or_unparseable_bounds() {
        let mut state = SidebarState::new(PriceCatalog::default(), "/shop");
        handle_event(
            &mut state,
            &Query::parse("startPrice=abc&endPrice=10"),
            &SidebarEvent::ViewMounted,
        )
        .unwrap();
        assert_eq!(state.price_selection, PriceSelection::None);

        let mut state = SidebarState::new(PriceCatalog::default(), "/shop");
        handle_event(
            &mut state,
            &Query::parse("startPrice=10"),
            &SidebarEvent::ViewMounted,
        )
        .unwrap();
        assert_eq!(state.price_selection, PriceSelection::None);
    }

    #[test]
    fn categories_load_and_failures_follow_lifecycle() {
        let mut state = mounted_state();
        assert!(state.categories.is_loading());

        let (rendered, _) = handle_event(
            &mut state,
            &Query::new(),
            &SidebarEvent::FetchArrived(FetchResponse::CategoriesFailed {
                message: "timeout".to_string(),
            }),
        )
        .unwrap();
        assert!(rendered);
        assert!(state.categories.is_failed());

        let (_, actions) =
            handle_event(&mut state, &Query::new(), &SidebarEvent::RetryCategories).unwrap();
        assert_eq!(actions, vec![Action::Fetch(FetchRequest::LoadCategories)]);
        assert!(state.categories.is_loading());

        handle_event(
            &mut state,
            &Query::new(),
            &SidebarEvent::FetchArrived(FetchResponse::CategoriesLoaded {
                categories: vec![Category::new("1", "Electronics")],
            }),
        )
        .unwrap();
        assert!(state.categories.is_loaded());
    }

    #[test]
    fn retry_from_non_failed_state_is_a_no_op() {
        let mut state = mounted_state();
        let (rendered, actions) =
            handle_event(&mut state, &Query::new(), &SidebarEvent::RetryCategories).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
    }

    #[test]
    fn fetch_completion_after_dismissal_is_dropped() {
        let mut state = mounted_state();
        handle_event(&mut state, &Query::new(), &SidebarEvent::ViewDismissed).unwrap();

        let (rendered, _) = handle_event(
            &mut state,
            &Query::new(),
            &SidebarEvent::FetchArrived(FetchResponse::CategoriesLoaded {
                categories: vec![Category::new("1", "Electronics")],
            }),
        )
        .unwrap();

        assert!(!rendered);
        assert!(state.categories.is_loading());
    }

    #[test]
    fn country_traffic_is_ignored_by_the_sidebar() {
        let mut state = mounted_state();
        let (rendered, _) = handle_event(
            &mut state,
            &Query::new(),
            &SidebarEvent::FetchArrived(FetchResponse::CountriesLoaded { locations: vec![] }),
        )
        .unwrap();
        assert!(!rendered);
        assert!(state.categories.is_loading());
    }
}
