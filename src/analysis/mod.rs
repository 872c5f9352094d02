//! Pure time-series aggregation core.
//!
//! Operates on the parallel time/value arrays of the loaded datasets:
//! nearest-instant lookup, per-day reduction, label-axis alignment,
//! windowed slicing, and the derived cross-location comparisons. Nothing
//! here reads ambient state or mutates its inputs.

pub mod aggregate;
pub mod align;
pub mod compare;
pub mod error;
pub mod monthly;
pub mod nearest;
pub mod utility;
pub mod window;
