//! Product-line and accessory enumerations.
//!
//! This module provides:
//! - The three conveyor models (SKUs) and their per-model constants
//! - Engine type selection (normal, reductor, central)
//! - Stop-button side and end preferences
//! - Rail side identification for width-edge accessories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Conveyor product line (SKU).
///
/// The model determines the length offset added to the ordered axis length
/// and the per-side stop-button limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConveyorModel {
    /// DPS50 - light duty line.
    Dps50,
    /// DPS60 - medium duty line.
    Dps60,
    /// DPS96 - heavy duty line.
    Dps96,
}

impl ConveyorModel {
    /// Offset added to the axis length L to obtain the total length D.
    pub fn length_offset_mm(&self) -> f64 {
        match self {
            ConveyorModel::Dps50 => 55.0,
            ConveyorModel::Dps60 => 70.0,
            ConveyorModel::Dps96 => 100.0,
        }
    }

    /// Per-side stop-button count limits for this model.
    pub fn stop_button_limits(&self) -> StopButtonLimits {
        match self {
            ConveyorModel::Dps50 => StopButtonLimits { min: 1, max: 6 },
            ConveyorModel::Dps60 | ConveyorModel::Dps96 => StopButtonLimits { min: 1, max: 12 },
        }
    }

    /// All known models, in catalog order.
    pub fn all() -> [ConveyorModel; 3] {
        [
            ConveyorModel::Dps50,
            ConveyorModel::Dps60,
            ConveyorModel::Dps96,
        ]
    }
}

impl fmt::Display for ConveyorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConveyorModel::Dps50 => write!(f, "DPS50"),
            ConveyorModel::Dps60 => write!(f, "DPS60"),
            ConveyorModel::Dps96 => write!(f, "DPS96"),
        }
    }
}

impl FromStr for ConveyorModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DPS50" => Ok(ConveyorModel::Dps50),
            "DPS60" => Ok(ConveyorModel::Dps60),
            "DPS96" => Ok(ConveyorModel::Dps96),
            _ => Err(format!("Unknown conveyor model: {}", s)),
        }
    }
}

/// Inclusive per-side stop-button count bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopButtonLimits {
    /// Minimum count per side.
    pub min: u32,
    /// Maximum count per side.
    pub max: u32,
}

impl StopButtonLimits {
    /// Check whether a count is within bounds (inclusive).
    pub fn contains(&self, count: u32) -> bool {
        count >= self.min && count <= self.max
    }
}

/// Drive engine variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EngineType {
    /// Standard side-mounted engine.
    Normal,
    /// Side-mounted engine with reduction gearbox.
    Reductor,
    /// Single engine mounted under the frame center.
    Central,
}

impl fmt::Display for EngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineType::Normal => write!(f, "normal"),
            EngineType::Reductor => write!(f, "reductor"),
            EngineType::Central => write!(f, "central"),
        }
    }
}

/// Which long side(s) of the frame receive stop buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StopButtonSide {
    /// Motor side only.
    Motor,
    /// Side opposite the motor only.
    Opposite,
    /// Both long sides.
    Both,
}

impl StopButtonSide {
    /// Whether the motor side is included.
    pub fn includes_motor(&self) -> bool {
        matches!(self, StopButtonSide::Motor | StopButtonSide::Both)
    }

    /// Whether the opposite side is included.
    pub fn includes_opposite(&self) -> bool {
        matches!(self, StopButtonSide::Opposite | StopButtonSide::Both)
    }
}

/// Which end(s) of the frame a placement interaction targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EndPreference {
    /// Start end of the length axis.
    Start,
    /// End of the length axis.
    End,
    /// No end restriction.
    Both,
}

impl Default for EndPreference {
    fn default() -> Self {
        EndPreference::Both
    }
}

/// Left/right rail of the frame, looking along the length axis.
///
/// `Right` is the motor side (+Z in scene coordinates), `Left` the
/// opposite side (-Z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RailSide {
    Left,
    Right,
}

impl fmt::Display for RailSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RailSide::Left => write!(f, "left"),
            RailSide::Right => write!(f, "right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_offsets() {
        assert_eq!(ConveyorModel::Dps50.length_offset_mm(), 55.0);
        assert_eq!(ConveyorModel::Dps60.length_offset_mm(), 70.0);
        assert_eq!(ConveyorModel::Dps96.length_offset_mm(), 100.0);
    }

    #[test]
    fn test_stop_button_limits() {
        assert_eq!(
            ConveyorModel::Dps50.stop_button_limits(),
            StopButtonLimits { min: 1, max: 6 }
        );
        assert_eq!(
            ConveyorModel::Dps60.stop_button_limits(),
            StopButtonLimits { min: 1, max: 12 }
        );
        assert_eq!(
            ConveyorModel::Dps96.stop_button_limits(),
            StopButtonLimits { min: 1, max: 12 }
        );
    }

    #[test]
    fn test_limits_contains() {
        let limits = ConveyorModel::Dps50.stop_button_limits();
        assert!(!limits.contains(0));
        assert!(limits.contains(1));
        assert!(limits.contains(6));
        assert!(!limits.contains(7));
    }

    #[test]
    fn test_model_from_str() {
        assert_eq!("DPS50".parse::<ConveyorModel>(), Ok(ConveyorModel::Dps50));
        assert_eq!("dps96".parse::<ConveyorModel>(), Ok(ConveyorModel::Dps96));
        assert!("DPS42".parse::<ConveyorModel>().is_err());
    }

    #[test]
    fn test_model_serde_roundtrip() {
        let json = serde_json::to_string(&ConveyorModel::Dps60).unwrap();
        assert_eq!(json, "\"DPS60\"");
        let back: ConveyorModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ConveyorModel::Dps60);
    }

    #[test]
    fn test_stop_button_side_inclusion() {
        assert!(StopButtonSide::Motor.includes_motor());
        assert!(!StopButtonSide::Motor.includes_opposite());
        assert!(StopButtonSide::Both.includes_motor());
        assert!(StopButtonSide::Both.includes_opposite());
    }
}
