//! Error handling for the configurator core.
//!
//! The geometry and validation functions themselves are total and never
//! fail; `ConfigError` exists for callers that want a hard accept/reject
//! decision over a whole parameter set instead of per-field
//! [`Validation`](crate::dimensions::Validation) values.

use thiserror::Error;

/// Configuration error type
///
/// Represents a parameter set that cannot produce a buildable conveyor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Axis length is not a positive finite number
    #[error("Invalid axis length: {length_mm} mm")]
    InvalidLength {
        /// The rejected length value.
        length_mm: f64,
    },

    /// Belt width is not a positive finite number
    #[error("Invalid belt width: {width_mm} mm")]
    InvalidWidth {
        /// The rejected width value.
        width_mm: f64,
    },

    /// Side-guide height outside the 15..=250 mm range
    #[error("Side guide height {height_mm} mm outside valid range 15-250 mm")]
    SideGuideHeightOutOfRange {
        /// The rejected height value.
        height_mm: f64,
    },

    /// Per-side stop-button count outside the model's limits
    #[error("Stop button count {count} outside valid range {min}-{max}")]
    StopButtonCountOutOfRange {
        /// The rejected count.
        count: u32,
        /// Model minimum (inclusive).
        min: u32,
        /// Model maximum (inclusive).
        max: u32,
    },
}
