//! Error types reported through return values.
//!
//! Nothing here is fatal; callers may ignore these and the plot keeps its
//! previous state.

use thiserror::Error;

use crate::view::Bounds;

/// Why a bounds update was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BoundsError {
    /// No bounds were set before and the update left an edge unspecified.
    #[error("bounds update is incomplete and no previous bounds exist")]
    Incomplete,
    /// The merged bounds violate `left < right` or `bottom < top`.
    #[error("invalid bounds: {0}")]
    Inverted(Bounds),
    /// The span is too small to produce a finite scale for the viewport.
    #[error("bounds too narrow for a finite scale: {0}")]
    Degenerate(Bounds),
}

/// Failure to parse a color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string was empty after stripping its prefix.
    #[error("empty color string")]
    Empty,
    /// Only 6 (`RRGGBB`) or 8 (`RRGGBBAA`) hex digits are accepted.
    #[error("expected 6 or 8 hex digits, found {0}")]
    Length(usize),
    /// A character was not a hex digit.
    #[error("invalid hex color: {0:?}")]
    Digit(String),
}

/// Failure to load plot options.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON or mismatched fields.
    #[error("invalid plot options: {0}")]
    Json(#[from] serde_json::Error),
}
