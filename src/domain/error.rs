//! Error types for the facetsync crate.
//!
//! This module defines the centralized error type [`FacetsyncError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Controller-facing failures (a reference-list fetch that never came back, malformed
//! price input) are deliberately *not* errors: they are represented as state sentinels
//! per the event-driven design. The variants here cover the crate boundary:
//! configuration, catalog files, and transport plumbing.

use thiserror::Error;

/// The main error type for facetsync operations.
///
/// This enum consolidates all error conditions that can cross the crate boundary,
/// from catalog file parsing to configuration issues. Variants wrapping underlying
/// errors from external crates use `#[from]` for automatic conversion.
///
/// # Examples
///
/// ```
/// use facetsync::domain::FacetsyncError;
///
/// fn validate_config() -> Result<(), FacetsyncError> {
///     Err(FacetsyncError::Config("missing shop_path".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum FacetsyncError {
    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Price catalog file could not be parsed or is structurally invalid.
    ///
    /// Occurs when a TOML preset catalog fails to deserialize, or deserializes
    /// into a catalog that violates the sentinel-first ordering contract.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (catalog file reads).
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reference-list payload could not be decoded.
    ///
    /// Occurs when a fetch response payload fails JSON deserialization before
    /// it ever reaches a controller. The string contains the decoder's message.
    #[error("Fetch payload error: {0}")]
    Payload(String),
}

/// A specialized `Result` type for facetsync operations.
///
/// This is a type alias for `std::result::Result<T, FacetsyncError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, FacetsyncError>;
