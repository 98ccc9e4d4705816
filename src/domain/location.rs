//! Location domain model for the delivery widget.
//!
//! A [`Location`] is one entry of the country reference list: loaded once per
//! session, never mutated, only filtered into derived views. The delivery
//! controller designates one entry as the default selection by an exact,
//! case-sensitive match on the country name (see
//! [`default_selection`](crate::fetch::records::default_selection)).

use serde::{Deserialize, Serialize};

/// A deliverable location, shaped from the raw country payload.
///
/// Fields the upstream payload may omit (`capital`, flag image) are substituted
/// with the empty string during mapping, so every stored `Location` is fully
/// populated and display code never needs an `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// URL of the flag image, empty if the payload carried none.
    pub image_url: String,

    /// ISO 3166-1 alpha-2 country code.
    pub cca2: String,

    /// Capital city, empty if the payload carried none.
    pub capital: String,

    /// Geographic region (e.g. "Africa").
    pub region: String,

    /// Common country name, the field searched and matched for defaulting.
    pub country: String,
}

impl Location {
    /// Returns whether this location's country contains `query` as a
    /// case-insensitive substring.
    ///
    /// This is the single matching rule of the location search: no fuzzy
    /// scoring, no reordering. Callers filter the reference list with it and
    /// keep the original list order.
    #[must_use]
    pub fn country_contains(&self, query: &str) -> bool {
        self.country.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(country: &str) -> Location {
        Location {
            image_url: String::new(),
            cca2: String::new(),
            capital: String::new(),
            region: String::new(),
            country: country.to_string(),
        }
    }

    #[test]
    fn country_contains_is_case_insensitive() {
        assert!(loc("South Africa").country_contains("south"));
        assert!(loc("South Africa").country_contains("AFRICA"));
        assert!(loc("South Africa").country_contains("th Af"));
    }

    #[test]
    fn country_contains_rejects_non_substrings() {
        assert!(!loc("Zambia").country_contains("zo"));
        assert!(!loc("Zimbabwe").country_contains("zam"));
    }
}
