//! Error types for the sounding-hodograph crate.
use thiserror::Error;

/// Error type for the crate.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum HodographError {
    /// A profile that is required to build the hodograph is missing.
    #[error("missing profile required for the hodograph")]
    MissingProfile,
    /// Not enough data available for analysis
    #[error("not enough data available for analysis")]
    NotEnoughData,
    /// Bad or invalid input, such as parallel profiles with different lengths.
    #[error("invalid input")]
    InvalidInput,
    /// The target was not bracketed by the data, or it would have been extrapolation.
    #[error("target value not bracketed during interpolation")]
    InterpolationError,
}

/// Shorthand for results.
pub type Result<T> = std::result::Result<T, HodographError>;
