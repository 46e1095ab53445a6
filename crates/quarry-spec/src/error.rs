//! Errors raised while building specifications.

use thiserror::Error;

/// Errors raised while constructing a specification.
///
/// Evaluation never fails; a malformed leaf is rejected before it can be
/// combined or evaluated.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// A floating point bound with no decimal representation (NaN, infinity,
    /// or outside the decimal range).
    #[error("price bound {0} cannot be represented as a decimal")]
    InvalidDecimal(f64),
}

/// Result type for spec construction.
pub type Result<T> = std::result::Result<T, SpecError>;
