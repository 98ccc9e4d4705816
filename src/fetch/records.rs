//! Raw wire records and their mapping into domain types.
//!
//! The reference-list collaborator delivers JSON payloads in upstream shapes:
//! the category service wraps its list in a `data` envelope, and the country
//! service returns a bare array with nested `flags`/`name` objects and an
//! optional `capital` array. This module decodes both, substituting empty
//! strings for anything the payload omits, so the rest of the crate only ever
//! sees fully populated domain values.

use crate::domain::error::{FacetsyncError, Result};
use crate::domain::{Category, Location};
use serde::Deserialize;

/// Envelope around the category list as delivered by the category service.
#[derive(Debug, Deserialize)]
struct CategoryEnvelope {
    data: Vec<RawCategory>,
}

/// One category record on the wire.
#[derive(Debug, Deserialize)]
struct RawCategory {
    #[serde(rename = "_id")]
    id: String,
    name: String,
}

/// Nested flag-image URLs on a country record.
#[derive(Debug, Default, Deserialize)]
struct RawFlags {
    #[serde(default)]
    png: Option<String>,
    #[serde(default)]
    svg: Option<String>,
}

/// Nested name object on a country record.
#[derive(Debug, Default, Deserialize)]
struct RawName {
    #[serde(default)]
    common: Option<String>,
}

/// One country record on the wire.
#[derive(Debug, Deserialize)]
struct RawCountry {
    #[serde(default)]
    flags: Option<RawFlags>,
    #[serde(default)]
    name: Option<RawName>,
    #[serde(default)]
    cca2: Option<String>,
    #[serde(default)]
    capital: Option<Vec<String>>,
    #[serde(default)]
    region: Option<String>,
}

impl RawCountry {
    /// Maps a raw record into a [`Location`], filling omitted fields with
    /// empty strings. The PNG flag is preferred; the SVG is the fallback.
    fn into_location(self) -> Location {
        let flags = self.flags.unwrap_or_default();
        let image_url = flags.png.or(flags.svg).unwrap_or_default();
        let country = self
            .name
            .and_then(|n| n.common)
            .unwrap_or_default();
        let capital = self
            .capital
            .and_then(|c| c.into_iter().next())
            .unwrap_or_default();

        Location {
            image_url,
            cca2: self.cca2.unwrap_or_default(),
            capital,
            region: self.region.unwrap_or_default(),
            country,
        }
    }
}

/// Decodes the category service payload into domain categories.
///
/// # Errors
///
/// Returns [`FacetsyncError::Payload`] if the JSON does not match the
/// enveloped category shape.
pub fn decode_categories(payload: &str) -> Result<Vec<Category>> {
    let envelope: CategoryEnvelope =
        serde_json::from_str(payload).map_err(|e| FacetsyncError::Payload(e.to_string()))?;

    Ok(envelope
        .data
        .into_iter()
        .map(|raw| Category::new(raw.id, raw.name))
        .collect())
}

/// Decodes the country service payload into domain locations, preserving
/// upstream order.
///
/// # Errors
///
/// Returns [`FacetsyncError::Payload`] if the JSON is not an array of country
/// records.
pub fn decode_countries(payload: &str) -> Result<Vec<Location>> {
    let raw: Vec<RawCountry> =
        serde_json::from_str(payload).map_err(|e| FacetsyncError::Payload(e.to_string()))?;

    Ok(raw.into_iter().map(RawCountry::into_location).collect())
}

/// Picks the default selection from a freshly loaded location list.
///
/// The match is exact and case-sensitive on the country name. Returns `None`
/// when no entry matches; the caller degrades to an empty selection rather
/// than treating the absence as an error.
#[must_use]
pub fn default_selection<'a>(locations: &'a [Location], country: &str) -> Option<&'a Location> {
    locations.iter().find(|l| l.country == country)
}
