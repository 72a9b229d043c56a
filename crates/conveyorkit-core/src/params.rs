//! The conveyor parameter set - single source of truth for a configuration.
//!
//! `ConveyorParams` is owned by the configuration UI and replaced wholesale
//! on every field edit. The derived totals (D, R) are never stored here:
//! [`ConveyorParams::dimensions`] recomputes them from L, N, and the model
//! on every call, so they can never drift out of sync.

use crate::dimensions::{calculate_dimensions, validate_side_guide_height, Dimensions};
use crate::error::ConfigError;
use crate::model::{ConveyorModel, EndPreference, EngineType, StopButtonSide};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Side-guide accessory parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideGuideParams {
    /// Whether side guides are fitted.
    pub enabled: bool,
    /// Guide height above the belt, millimeters.
    pub height_mm: f64,
}

impl Default for SideGuideParams {
    fn default() -> Self {
        Self {
            enabled: false,
            height_mm: 100.0,
        }
    }
}

impl SideGuideParams {
    /// True when guides are enabled and the height is within the valid range.
    ///
    /// Both slot generation and filtering gate on this, so an out-of-range
    /// height silently produces no bracket slots rather than an error.
    pub fn is_active(&self) -> bool {
        self.enabled && validate_side_guide_height(self.height_mm).valid
    }
}

/// Stop-button accessory parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopButtonParams {
    /// Which side(s) receive buttons; `None` disables the accessory.
    pub side: Option<StopButtonSide>,
    /// Which end(s) the current placement interaction targets.
    pub end: EndPreference,
    /// Requested button count on the motor side.
    pub motor_count: u32,
    /// Requested button count on the opposite side.
    pub opposite_count: u32,
}

impl Default for StopButtonParams {
    fn default() -> Self {
        Self {
            side: None,
            end: EndPreference::Both,
            motor_count: 1,
            opposite_count: 1,
        }
    }
}

/// Full parametric description of one conveyor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConveyorParams {
    /// Selected product line; `None` until the user picks one.
    pub model: Option<ConveyorModel>,
    /// Ordered axis length L, millimeters.
    pub length_mm: f64,
    /// Ordered belt width N, millimeters.
    pub width_mm: f64,
    /// Selected drive engine; `None` until the user picks one.
    pub engine_type: Option<EngineType>,
    /// Side-guide accessory.
    pub side_guide: SideGuideParams,
    /// Stop-button accessory.
    pub stop_buttons: StopButtonParams,
    /// Whether the supporting frame (legs and wheels) is fitted.
    pub supporting_frame: bool,
}

impl ConveyorParams {
    /// Create a parameter set for a model with the given ordered dimensions.
    /// Accessories start disabled.
    pub fn new(model: ConveyorModel, length_mm: f64, width_mm: f64) -> Self {
        debug_assert!(
            length_mm.is_finite() && width_mm.is_finite(),
            "params must be finite: length={length_mm}, width={width_mm}"
        );
        Self {
            model: Some(model),
            length_mm,
            width_mm,
            engine_type: None,
            side_guide: SideGuideParams::default(),
            stop_buttons: StopButtonParams::default(),
            supporting_frame: false,
        }
    }

    /// Derive the total frame dimensions. Always recomputed, never cached.
    pub fn dimensions(&self) -> Dimensions {
        calculate_dimensions(self.length_mm, self.width_mm, self.model)
    }

    /// Requested stop-button count for the motor side, honoring the side
    /// selection. Zero when the motor side is not selected.
    pub fn motor_stop_buttons(&self) -> u32 {
        match self.stop_buttons.side {
            Some(side) if side.includes_motor() => self.stop_buttons.motor_count,
            _ => 0,
        }
    }

    /// Requested stop-button count for the opposite side.
    pub fn opposite_stop_buttons(&self) -> u32 {
        match self.stop_buttons.side {
            Some(side) if side.includes_opposite() => self.stop_buttons.opposite_count,
            _ => 0,
        }
    }

    /// Hard validation over the whole parameter set.
    ///
    /// The placement engine never needs this - it degrades silently on odd
    /// values - but callers persisting a configuration want a single
    /// accept/reject decision.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_inner().inspect_err(|e| {
            debug!(error = %e, "configuration rejected");
        })
    }

    fn validate_inner(&self) -> Result<(), ConfigError> {
        if !self.length_mm.is_finite() || self.length_mm <= 0.0 {
            return Err(ConfigError::InvalidLength {
                length_mm: self.length_mm,
            });
        }
        if !self.width_mm.is_finite() || self.width_mm <= 0.0 {
            return Err(ConfigError::InvalidWidth {
                width_mm: self.width_mm,
            });
        }
        if self.side_guide.enabled && !validate_side_guide_height(self.side_guide.height_mm).valid
        {
            return Err(ConfigError::SideGuideHeightOutOfRange {
                height_mm: self.side_guide.height_mm,
            });
        }
        if let (Some(model), Some(side)) = (self.model, self.stop_buttons.side) {
            let limits = model.stop_button_limits();
            for count in [
                side.includes_motor().then_some(self.stop_buttons.motor_count),
                side.includes_opposite()
                    .then_some(self.stop_buttons.opposite_count),
            ]
            .into_iter()
            .flatten()
            {
                if !limits.contains(count) {
                    return Err(ConfigError::StopButtonCountOutOfRange {
                        count,
                        min: limits.min,
                        max: limits.max,
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for ConveyorParams {
    fn default() -> Self {
        Self {
            model: None,
            length_mm: 0.0,
            width_mm: 0.0,
            engine_type: None,
            side_guide: SideGuideParams::default(),
            stop_buttons: StopButtonParams::default(),
            supporting_frame: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ConveyorParams {
        ConveyorParams::new(ConveyorModel::Dps50, 1000.0, 500.0)
    }

    #[test]
    fn test_dimensions_always_recomputed() {
        let mut params = base();
        assert_eq!(params.dimensions().total_length_mm, 1055.0);
        params.model = Some(ConveyorModel::Dps96);
        assert_eq!(params.dimensions().total_length_mm, 1100.0);
        params.length_mm = 2000.0;
        assert_eq!(params.dimensions().total_length_mm, 2100.0);
    }

    #[test]
    fn test_stop_button_counts_honor_side() {
        let mut params = base();
        params.stop_buttons.motor_count = 5;
        params.stop_buttons.opposite_count = 3;

        assert_eq!(params.motor_stop_buttons(), 0);
        assert_eq!(params.opposite_stop_buttons(), 0);

        params.stop_buttons.side = Some(StopButtonSide::Motor);
        assert_eq!(params.motor_stop_buttons(), 5);
        assert_eq!(params.opposite_stop_buttons(), 0);

        params.stop_buttons.side = Some(StopButtonSide::Both);
        assert_eq!(params.motor_stop_buttons(), 5);
        assert_eq!(params.opposite_stop_buttons(), 3);
    }

    #[test]
    fn test_validate_rejects_bad_length() {
        let mut params = base();
        params.length_mm = -1.0;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_guide() {
        let mut params = base();
        params.side_guide.enabled = true;
        params.side_guide.height_mm = 300.0;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::SideGuideHeightOutOfRange { .. })
        ));
        params.side_guide.height_mm = 200.0;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_excess_stop_buttons() {
        let mut params = base();
        params.stop_buttons.side = Some(StopButtonSide::Motor);
        params.stop_buttons.motor_count = 7;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::StopButtonCountOutOfRange { max: 6, .. })
        ));
        // Opposite count is out of range too, but that side is not
        // selected so it is ignored.
        params.stop_buttons.motor_count = 6;
        params.stop_buttons.opposite_count = 99;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut params = base();
        params.engine_type = Some(EngineType::Central);
        params.side_guide.enabled = true;
        let json = serde_json::to_string(&params).unwrap();
        let back: ConveyorParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn test_side_guide_active_gating() {
        let mut guide = SideGuideParams {
            enabled: true,
            height_mm: 100.0,
        };
        assert!(guide.is_active());
        guide.height_mm = 14.0;
        assert!(!guide.is_active());
        guide.height_mm = 100.0;
        guide.enabled = false;
        assert!(!guide.is_active());
    }
}
