//! Typed errors for the aggregation core.

use thiserror::Error;

/// Failure modes of the pure series operations.
///
/// Load-phase failures are handled elsewhere: a mandatory dataset aborts
/// initialization, an optional one collapses to `None`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    /// Nearest-index lookup over zero timestamps.
    #[error("empty timestamp sequence")]
    EmptyInput,

    /// An aggregation operation name outside sum/avg/max/min.
    #[error("unknown aggregation operation: {0}")]
    UnknownOperation(String),

    /// Parallel arrays of different lengths.
    #[error("length mismatch: {times} timestamps vs {values} values")]
    LengthMismatch { times: usize, values: usize },

    /// A timestamp that does not parse as a calendar instant.
    #[error("unparseable timestamp: {0}")]
    BadTimestamp(String),
}
