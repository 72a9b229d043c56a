//! Placed component records.
//!
//! A placed component is a user-placed instance occupying exactly one slot.
//! Its transform is derived from the slot at placement time: position copied
//! from the slot, rotation from the orientation solver. The record is what
//! the surrounding application hands to its persistence layer; the slot set
//! itself is never persisted.

use crate::orientation::{slot_orientation, Euler};
use crate::slot::{Slot, SlotId, SlotKind};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a placed component.
pub type ComponentId = Uuid;

/// A user-placed component instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedComponent {
    /// Unique instance id.
    pub id: ComponentId,
    /// What was placed.
    pub kind: SlotKind,
    /// The slot this component occupies.
    pub slot_id: SlotId,
    /// World position, copied from the slot, scene units.
    pub position: Point3<f64>,
    /// Rotation solved from the slot's normal/up pair.
    pub rotation: Euler,
}

impl PlacedComponent {
    /// Create a placed component seated on the given slot, with a fresh id.
    pub fn place(slot: &Slot) -> Self {
        Self::place_with_id(Uuid::new_v4(), slot)
    }

    /// Create a placed component seated on the given slot, reusing an id.
    /// Used when re-seating a surviving component after slot regeneration.
    pub fn place_with_id(id: ComponentId, slot: &Slot) -> Self {
        Self {
            id,
            kind: slot.kind,
            slot_id: slot.id.clone(),
            position: slot.position,
            rotation: slot_orientation(slot),
        }
    }
}
