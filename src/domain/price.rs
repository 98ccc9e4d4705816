//! Price range presets and custom bound validation.
//!
//! This module defines the ordered preset catalog the sidebar renders
//! ([`PriceCatalog`]), the individual named ranges within it ([`PriceRange`]),
//! and the user-typed custom bounds ([`PriceBounds`]) that compete with presets
//! for the same two query parameters.
//!
//! # The sentinel entry
//!
//! Index `0` of every catalog is the "no constraint" bucket ("All Price" in the
//! built-in catalog). Its literal stored bounds are never written to the URL:
//! selecting it always clears both price parameters. The literal values kept on
//! the entry (`start_price = 1`, `end_price = 0`) are the upstream sentinel and
//! are preserved for wire fidelity only.
//!
//! # Custom catalogs
//!
//! A catalog can be loaded from a TOML file, the same way the host supplies any
//! other optional asset: on any read or parse failure the caller falls back to
//! [`PriceCatalog::default`]. File format:
//!
//! ```toml
//! [[range]]
//! label = "All Price"
//! start_price = 1.0
//! end_price = 0.0
//!
//! [[range]]
//! label = "Under R100"
//! start_price = 1.0
//! end_price = 100.0
//! ```

use crate::domain::error::{FacetsyncError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named, predefined price range.
///
/// Presets are identified positionally within their catalog; the `id` field is
/// a stable 1-based ordinal kept for parity with the upstream data shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    /// 1-based ordinal within the catalog.
    pub id: u32,

    /// Display label (e.g. "R200 to R1000").
    pub label: String,

    /// Lower bound written to the `startPrice` parameter on selection.
    pub start_price: f64,

    /// Upper bound written to the `endPrice` parameter on selection.
    pub end_price: f64,
}

/// On-disk shape of one catalog entry. Ids are assigned from position.
#[derive(Debug, Deserialize)]
struct RangeDef {
    label: String,
    start_price: f64,
    end_price: f64,
}

/// On-disk shape of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    range: Vec<RangeDef>,
}

/// The ordered list of preset price ranges offered by the sidebar.
///
/// The catalog is immutable for the session. Entry `0` is the distinguished
/// no-constraint bucket (see module docs); the remaining entries carry real
/// bounds that selection writes to the query string.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCatalog {
    ranges: Vec<PriceRange>,
}

impl Default for PriceCatalog {
    /// The built-in seven-entry catalog shipped by the storefront.
    fn default() -> Self {
        let defs: [(&str, f64, f64); 7] = [
            ("All Price", 1.0, 0.0),
            ("Under R100", 1.0, 100.0),
            ("R200 to R1000", 200.0, 1000.0),
            ("R1000 to R5000", 1000.0, 5000.0),
            ("R5000 to R10000", 5000.0, 10000.0),
            ("R10000 to 100000", 10000.0, 100_000.0),
            ("R10000 to R200000", 10_000.0, 200_000.0),
        ];

        let ranges = defs
            .iter()
            .enumerate()
            .map(|(i, (label, start, end))| PriceRange {
                id: u32::try_from(i).unwrap_or(0) + 1,
                label: (*label).to_string(),
                start_price: *start,
                end_price: *end,
            })
            .collect();

        Self { ranges }
    }
}

impl PriceCatalog {
    /// Loads a catalog from a TOML file.
    ///
    /// Ids are assigned from entry position (1-based). An empty catalog is
    /// rejected: without an entry `0` there is no sentinel bucket and the
    /// sidebar's toggle semantics have nothing to reset to.
    ///
    /// # Errors
    ///
    /// Returns [`FacetsyncError::Io`] if the file cannot be read,
    /// [`FacetsyncError::Catalog`] if it fails to parse or contains no entries.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let file: CatalogFile =
            toml::from_str(&raw).map_err(|e| FacetsyncError::Catalog(e.to_string()))?;

        if file.range.is_empty() {
            return Err(FacetsyncError::Catalog(
                "catalog file contains no ranges".to_string(),
            ));
        }

        let ranges = file
            .range
            .into_iter()
            .enumerate()
            .map(|(i, def)| PriceRange {
                id: u32::try_from(i).unwrap_or(0) + 1,
                label: def.label,
                start_price: def.start_price,
                end_price: def.end_price,
            })
            .collect();

        Ok(Self { ranges })
    }

    /// Returns the preset at `index`, if in bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PriceRange> {
        self.ranges.get(index)
    }

    /// Returns all presets in catalog order.
    #[must_use]
    pub fn ranges(&self) -> &[PriceRange] {
        &self.ranges
    }

    /// Number of presets in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns `true` if the catalog has no entries.
    ///
    /// Never true for catalogs produced by this module; present for API
    /// completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns whether `index` addresses the no-constraint sentinel bucket.
    #[must_use]
    pub fn is_all_price(&self, index: usize) -> bool {
        index == 0
    }

    /// Finds the non-sentinel preset whose bounds equal `(start, end)` exactly.
    ///
    /// Used to re-derive the preset highlight from URL-carried bounds after a
    /// reload. The sentinel entry is skipped: its literal bounds are never
    /// written to the URL, so they can never be matched back.
    #[must_use]
    pub fn match_bounds(&self, start: f64, end: f64) -> Option<usize> {
        self.ranges
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, r)| r.start_price == start && r.end_price == end)
            .map(|(i, _)| i)
    }
}

/// User-typed custom price bounds, pending until explicitly confirmed.
///
/// Both fields default to `0` and are updated independently per keystroke;
/// nothing here touches the URL. Validation happens once, at confirmation
/// time, via [`is_valid`](Self::is_valid).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceBounds {
    /// Pending lower bound.
    pub start_price: f64,

    /// Pending upper bound.
    pub end_price: f64,
}

impl PriceBounds {
    /// Creates bounds from explicit values.
    #[must_use]
    pub fn new(start_price: f64, end_price: f64) -> Self {
        Self {
            start_price,
            end_price,
        }
    }

    /// Returns whether these bounds may be written to the query string.
    ///
    /// Both values must be finite and non-negative. An inverted range
    /// (`start_price > end_price`) is deliberately not rejected; the catalog
    /// view treats it as an empty result set rather than an input error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.start_price.is_finite()
            && self.end_price.is_finite()
            && self.start_price >= 0.0
            && self.end_price >= 0.0
    }
}
