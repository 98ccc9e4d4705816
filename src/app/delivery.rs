//! Delivery location controller.
//!
//! This module implements the header widget's event handler: a searchable,
//! selectable country list with a computed default, kept entirely in
//! component-local state. Unlike the sidebar, nothing here touches the URL.
//!
//! # Derived-view sentinel
//!
//! An empty filtered view means "show the full reference list", not "show
//! nothing": clearing the search restores the complete list, and a query that
//! matches no country also falls back to the full list rather than an empty
//! one. [`DeliveryState::visible_locations`] encodes the rule in one place.

use crate::app::Action;
use crate::domain::error::Result;
use crate::domain::Location;
use crate::fetch::{default_selection, FetchRequest, FetchResponse, LoadState};

/// Events processed by the delivery location controller.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryEvent {
    /// The widget mounted. Dispatches the country fetch if it has never run.
    ViewMounted,

    /// The widget was torn down. Late fetch completions arriving after this
    /// are dropped.
    ViewDismissed,

    /// The trigger element was clicked, toggling the selection list.
    ToggleList,

    /// The user interacted outside the widget's bounds.
    OutsideInteraction,

    /// The trigger element lost focus.
    FocusLost,

    /// The search input changed.
    Search {
        /// Raw input text; trimmed before matching.
        input: String,
    },

    /// A location row was clicked.
    Select {
        /// The clicked location.
        location: Location,
    },

    /// Re-dispatches the country fetch after a failure.
    RetryCountries,

    /// A fetch completion arrived from the transport.
    FetchArrived(FetchResponse),
}

/// Delivery widget state.
///
/// Owned by a single view; the country list is held for the lifetime of the
/// view and only ever filtered into derived views, never mutated.
#[derive(Debug, Clone)]
pub struct DeliveryState {
    /// Country reference-list lifecycle.
    pub countries: LoadState<Vec<Location>>,

    /// Current selection. `None` until the default is computed or the user
    /// picks manually; the view shows a loading placeholder while `None`.
    pub selection: Option<Location>,

    /// Filtered view of the reference list. Empty is the sentinel for "show
    /// the full list".
    pub filtered: Vec<Location>,

    /// Trimmed search query currently applied.
    pub search_input: String,

    /// Whether the selection list is open.
    pub open: bool,

    /// Country name designated as the default selection, matched exactly and
    /// case-sensitively against loaded entries.
    pub default_country: String,

    /// Whether the owning view is live. Cleared on dismissal so a late fetch
    /// completion cannot update released state.
    pub active: bool,
}

impl DeliveryState {
    /// Creates widget state for a view that has not mounted yet.
    #[must_use]
    pub fn new(default_country: impl Into<String>) -> Self {
        Self {
            countries: LoadState::Idle,
            selection: None,
            filtered: Vec::new(),
            search_input: String::new(),
            open: false,
            default_country: default_country.into(),
            active: false,
        }
    }

    /// Returns the locations the open list should render.
    ///
    /// The filtered view when a search produced matches, otherwise the full
    /// reference list (or nothing while it has not loaded).
    #[must_use]
    pub fn visible_locations(&self) -> &[Location] {
        if self.filtered.is_empty() {
            match self.countries.loaded() {
                Some(locations) => locations.as_slice(),
                None => &[],
            }
        } else {
            &self.filtered
        }
    }
}

/// Processes a delivery widget event.
///
/// Mutates controller state and returns `(should_render, actions)`. The only
/// action this controller ever emits is a country [`FetchRequest`]; it never
/// navigates.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the handler signature uniform
/// across controllers and stable against future fallible transitions.
#[allow(clippy::unnecessary_wraps)]
pub fn handle_event(state: &mut DeliveryState, event: &DeliveryEvent) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("delivery_event", event_type = ?event).entered();

    match event {
        DeliveryEvent::ViewMounted => {
            state.active = true;

            let mut actions = vec![];
            if state.countries.is_idle() {
                tracing::debug!("dispatching country fetch");
                state.countries = LoadState::Loading;
                actions.push(Action::Fetch(FetchRequest::LoadCountries));
            }
            Ok((true, actions))
        }

        DeliveryEvent::ViewDismissed => {
            state.active = false;
            Ok((false, vec![]))
        }

        DeliveryEvent::ToggleList => {
            state.open = !state.open;
            Ok((true, vec![]))
        }

        DeliveryEvent::OutsideInteraction | DeliveryEvent::FocusLost => {
            // Close only; selection and search query stay as they are.
            if state.open {
                state.open = false;
                Ok((true, vec![]))
            } else {
                Ok((false, vec![]))
            }
        }

        DeliveryEvent::Search { input } => {
            let value = input.trim();
            state.search_input = value.to_string();

            if value.is_empty() {
                state.filtered.clear();
                return Ok((true, vec![]));
            }

            state.filtered = state
                .countries
                .loaded()
                .map(|locations| {
                    locations
                        .iter()
                        .filter(|l| l.country_contains(value))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default();

            tracing::debug!(query = %value, matches = state.filtered.len(), "location search applied");
            Ok((true, vec![]))
        }

        DeliveryEvent::Select { location } => {
            tracing::debug!(country = %location.country, "location selected");
            state.selection = Some(location.clone());
            state.open = false;
            state.filtered.clear();
            state.search_input.clear();
            Ok((true, vec![]))
        }

        DeliveryEvent::RetryCountries => {
            if state.countries.is_failed() {
                tracing::debug!("retrying country fetch");
                state.countries = LoadState::Loading;
                Ok((true, vec![Action::Fetch(FetchRequest::LoadCountries)]))
            } else {
                Ok((false, vec![]))
            }
        }

        DeliveryEvent::FetchArrived(response) => {
            if !state.active {
                tracing::debug!("dropping fetch completion for dismissed view");
                return Ok((false, vec![]));
            }

            match response {
                FetchResponse::CountriesLoaded { locations } => {
                    if !state.countries.is_loading() {
                        tracing::debug!("dropping duplicate country completion");
                        return Ok((false, vec![]));
                    }

                    state.selection =
                        default_selection(locations, &state.default_country).cloned();
                    tracing::debug!(
                        count = locations.len(),
                        default_found = state.selection.is_some(),
                        "countries loaded"
                    );
                    state.countries = LoadState::Loaded(locations.clone());
                    Ok((true, vec![]))
                }
                FetchResponse::CountriesFailed { message } => {
                    if !state.countries.is_loading() {
                        return Ok((false, vec![]));
                    }
                    tracing::debug!(error = %message, "country fetch failed");
                    state.countries = LoadState::Failed(message.clone());
                    Ok((true, vec![]))
                }
                // Category traffic belongs to the sidebar controller.
                FetchResponse::CategoriesLoaded { .. } | FetchResponse::CategoriesFailed { .. } => {
                    Ok((false, vec![]))
                }
            }
        }
    }
}
