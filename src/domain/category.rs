//! Category domain model and selection matching.
//!
//! This module defines the [`Category`] type representing a single catalog facet
//! option, sourced from the reference-list collaborator and never mutated locally.
//! Selection is not stored on the category itself: the URL's `category` parameter
//! is the source of truth, and [`Category::matches_param`] is the one comparison
//! used everywhere a checked state or a toggle decision is derived from it.

use serde::{Deserialize, Serialize};

/// A single catalog category, immutable for the session.
///
/// Categories carry an upstream identifier and a display name. The name doubles
/// as the value written to the `category` query parameter on selection, so the
/// comparison rules in [`matches_param`](Self::matches_param) are part of the
/// wire contract, not a display nicety.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Upstream identifier for the category.
    pub id: String,

    /// Display name, also used verbatim as the `category` query parameter value.
    pub name: String,
}

impl Category {
    /// Creates a category from an id and display name.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Returns whether the URL's `category` parameter selects this category.
    ///
    /// The stored name and the incoming parameter are both lower-cased and the
    /// parameter is trimmed first, so a reloaded URL with stray whitespace or
    /// different casing still highlights the right entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use facetsync::domain::Category;
    ///
    /// let cat = Category::new("64a1", "Home Appliance");
    /// assert!(cat.matches_param(" home appliance "));
    /// assert!(!cat.matches_param("electronics"));
    /// ```
    #[must_use]
    pub fn matches_param(&self, param: &str) -> bool {
        param_selects(&self.name, param)
    }
}

/// Returns whether the URL's `category` parameter selects the given category
/// name.
///
/// The shared comparison rule behind [`Category::matches_param`] and the
/// sidebar's toggle decision: stored name lower-cased, incoming parameter
/// trimmed and lower-cased.
#[must_use]
pub fn param_selects(name: &str, param: &str) -> bool {
    param.trim().to_lowercase() == name.to_lowercase()
}
