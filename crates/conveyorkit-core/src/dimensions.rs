//! Dimension derivation and accessory validation.
//!
//! Maps the two user inputs (axis length L, belt width N) plus the selected
//! model to the derived totals (total length D, total width R), and validates
//! accessory parameters (side-guide height, per-side stop-button counts).
//!
//! Every function here is pure, total, and deterministic: no panics, no
//! allocation on the happy path, safe to call on every keystroke.

use crate::constants::{SIDE_GUIDE_MAX_HEIGHT_MM, SIDE_GUIDE_MIN_HEIGHT_MM, WIDTH_MARGIN_MM};
use crate::model::{ConveyorModel, StopButtonSide};
use crate::units::format_length;
use serde::{Deserialize, Serialize};

/// Derived frame totals, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Total frame length D = L + offset(model).
    pub total_length_mm: f64,
    /// Total frame width R = N + 67, for every model.
    pub total_width_mm: f64,
}

/// Result of a keystroke-rate validation check.
///
/// The calling UI decides whether to reject the edit or surface the message;
/// nothing here throws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    /// Whether the value is acceptable.
    pub valid: bool,
    /// Human-readable reason when invalid.
    pub error: Option<String>,
}

impl Validation {
    /// A passing validation.
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    /// A failing validation with a reason.
    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(reason.into()),
        }
    }
}

/// Derive the total frame dimensions from the user inputs.
///
/// `model == None` means the configuration has not selected a model yet; the
/// total length degrades to `0.0` (documented default, not an error) while
/// the width formula still applies. Callers treat a zero length as
/// "not yet configured".
pub fn calculate_dimensions(
    length_mm: f64,
    width_mm: f64,
    model: Option<ConveyorModel>,
) -> Dimensions {
    debug_assert!(
        length_mm.is_finite() && width_mm.is_finite(),
        "dimensions must be finite: length={length_mm}, width={width_mm}"
    );
    let total_length_mm = match model {
        Some(m) => length_mm + m.length_offset_mm(),
        None => 0.0,
    };
    Dimensions {
        total_length_mm,
        total_width_mm: width_mm + WIDTH_MARGIN_MM,
    }
}

/// Validate a side-guide height against the 15..=250 mm range.
pub fn validate_side_guide_height(height_mm: f64) -> Validation {
    if height_mm >= SIDE_GUIDE_MIN_HEIGHT_MM && height_mm <= SIDE_GUIDE_MAX_HEIGHT_MM {
        Validation::ok()
    } else {
        Validation::fail(format!(
            "Side guide height must be between {} and {}, got {}",
            format_length(SIDE_GUIDE_MIN_HEIGHT_MM),
            format_length(SIDE_GUIDE_MAX_HEIGHT_MM),
            format_length(height_mm)
        ))
    }
}

/// Validate a per-side stop-button count against the model's limits.
pub fn validate_stop_button_count(
    count: u32,
    model: ConveyorModel,
    side: StopButtonSide,
) -> Validation {
    let limits = model.stop_button_limits();
    if limits.contains(count) {
        Validation::ok()
    } else {
        Validation::fail(format!(
            "{:?} side allows between {} and {} stop buttons on {}, got {}",
            side, limits.min, limits.max, model, count
        ))
    }
}
