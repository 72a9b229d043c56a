//! The slot data model.
//!
//! A slot is a procedurally generated 3D attachment point: a position, a
//! unit normal, an "up" reference, a side/zone classification, and a small
//! kind-specific detail record. A slot's geometry is fully determined by
//! the conveyor parameters and the slot's own identity; occupancy is the
//! only mutable field and lives only within one generation.

use crate::placed::ComponentId;
use conveyorkit_core::RailSide;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six kinds of attachment point the generator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotKind {
    /// Drive engine mounting point.
    EngineMount,
    /// Emergency stop button on a side rail.
    StopButton,
    /// Photo sensor near a frame end.
    Sensor,
    /// Side-guide mounting bracket along a rail.
    SideGuideBracket,
    /// Supporting-frame wheel at a corner.
    Wheel,
    /// Supporting-frame leg along a rail.
    FrameLeg,
}

impl SlotKind {
    /// Stable lowercase tag used in slot identifiers.
    pub fn tag(&self) -> &'static str {
        match self {
            SlotKind::EngineMount => "engine_mount",
            SlotKind::StopButton => "stop_button",
            SlotKind::Sensor => "sensor",
            SlotKind::SideGuideBracket => "side_guide",
            SlotKind::Wheel => "wheel",
            SlotKind::FrameLeg => "frame_leg",
        }
    }

    /// Parse a kind from its identifier tag.
    pub fn from_tag(tag: &str) -> Option<SlotKind> {
        match tag {
            "engine_mount" => Some(SlotKind::EngineMount),
            "stop_button" => Some(SlotKind::StopButton),
            "sensor" => Some(SlotKind::Sensor),
            "side_guide" => Some(SlotKind::SideGuideBracket),
            "wheel" => Some(SlotKind::Wheel),
            "frame_leg" => Some(SlotKind::FrameLeg),
            _ => None,
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Side/zone classification used by the placement rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotZone {
    /// Motor side rail (+Z).
    Motor,
    /// Rail opposite the motor (-Z).
    Opposite,
    /// Frame center.
    Center,
    /// Start end of the length axis.
    Start,
    /// Far end of the length axis.
    End,
    /// Left rail (-Z), used by width-edge accessories.
    Left,
    /// Right rail (+Z).
    Right,
}

impl SlotZone {
    /// Stable lowercase tag used in slot identifiers.
    pub fn tag(&self) -> &'static str {
        match self {
            SlotZone::Motor => "motor",
            SlotZone::Opposite => "opposite",
            SlotZone::Center => "center",
            SlotZone::Start => "start",
            SlotZone::End => "end",
            SlotZone::Left => "left",
            SlotZone::Right => "right",
        }
    }

    /// Parse a zone from its identifier tag.
    pub fn from_tag(tag: &str) -> Option<SlotZone> {
        match tag {
            "motor" => Some(SlotZone::Motor),
            "opposite" => Some(SlotZone::Opposite),
            "center" => Some(SlotZone::Center),
            "start" => Some(SlotZone::Start),
            "end" => Some(SlotZone::End),
            "left" => Some(SlotZone::Left),
            "right" => Some(SlotZone::Right),
            _ => None,
        }
    }
}

impl From<RailSide> for SlotZone {
    fn from(rail: RailSide) -> Self {
        match rail {
            RailSide::Left => SlotZone::Left,
            RailSide::Right => SlotZone::Right,
        }
    }
}

/// Position of a slot along the length axis, relative to its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EndTag {
    Start,
    Center,
    End,
}

/// Kind-specific slot detail.
///
/// A closed variant per kind, so every filter handles each kind's extra
/// fields exhaustively instead of probing an open key/value map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotDetail {
    EngineMount,
    StopButton { index: u32, end: EndTag },
    Sensor { end: EndTag },
    SideGuideBracket { rail: RailSide, index: u32 },
    Wheel { rail: RailSide, end: EndTag },
    FrameLeg { rail: RailSide, index: u32 },
}

/// Deterministic slot identifier, `kind.zone.index`.
///
/// Identity is semantic, not positional: regenerating slots for the same
/// parameters yields the same ids, and a slot that survives a parameter
/// change (same kind, zone, and index) keeps its id even when its geometry
/// moves. Occupancy re-mapping across regenerations relies on this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(String);

impl SlotId {
    /// Build the identifier for a slot.
    pub fn new(kind: SlotKind, zone: SlotZone, index: u32) -> Self {
        Self(format!("{}.{}.{}", kind.tag(), zone.tag(), index))
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The kind encoded in the identifier, if well-formed.
    pub fn kind(&self) -> Option<SlotKind> {
        self.0.split('.').next().and_then(SlotKind::from_tag)
    }

    /// The zone encoded in the identifier, if well-formed.
    ///
    /// The stop-button per-side cap counts placed components by the side
    /// their slot id encodes, so this parse is part of the filter contract.
    pub fn zone(&self) -> Option<SlotZone> {
        self.0.split('.').nth(1).and_then(SlotZone::from_tag)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate attachment point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Stable identifier, derived from kind/zone/index.
    pub id: SlotId,
    /// What can attach here.
    pub kind: SlotKind,
    /// Attachment position, scene units.
    pub position: Point3<f64>,
    /// Unit outward normal.
    pub normal: Vector3<f64>,
    /// Unit "up" reference. Not guaranteed perpendicular to the normal;
    /// the orientation solver re-orthogonalizes.
    pub up: Vector3<f64>,
    /// Side/zone classification for filtering.
    pub zone: SlotZone,
    /// Kind-specific detail.
    pub detail: SlotDetail,
    /// Component currently occupying this slot, if any.
    pub occupant: Option<ComponentId>,
}

impl Slot {
    /// True when no component occupies this slot.
    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }
}
