//! Core error type.
//!
//! Sub-crates define their own error enums; `GfError` covers the failures
//! that can happen while constructing core values.  Bad sensor readings are
//! not errors: they are reported as `FixRejection`.

use thiserror::Error;

/// The top-level error type for `gf-core`.
#[derive(Debug, Error)]
pub enum GfError {
    #[error("invalid coordinate ({lat}, {lon}): latitude must be in [-90, 90] and longitude in [-180, 180]")]
    InvalidCoordinate { lat: f64, lon: f64 },
}

/// Shorthand result type for `gf-core`.
pub type GfResult<T> = Result<T, GfError>;
