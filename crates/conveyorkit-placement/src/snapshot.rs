//! The placement snapshot: an explicit, immutable store object.
//!
//! The surrounding application holds exactly one `PlacementSnapshot` and
//! replaces it wholesale on every parameter edit or placement change;
//! concurrent readers (render callbacks mid-frame) keep whatever snapshot
//! they already hold. Nothing here mutates in place.
//!
//! Regenerating slots after a geometry-affecting edit re-maps occupancy by
//! the stable semantic slot id: a placed component whose slot id survives
//! keeps its slot with refreshed geometry, one whose id disappeared (e.g. a
//! stop button past the new count) is dropped and reported so the UI can
//! warn the user.

use crate::error::PlacementError;
use crate::filter::valid_slots;
use crate::generator::generate_slots;
use crate::matcher::nearest_free_slot_default;
use crate::occupancy::{release_slot, reserve_slot};
use crate::placed::{ComponentId, PlacedComponent};
use crate::slot::{Slot, SlotId, SlotKind};
use conveyorkit_core::ConveyorParams;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One immutable generation of slots plus the components placed on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementSnapshot {
    /// The parameters this generation was derived from.
    pub params: ConveyorParams,
    /// The full slot catalog for `params`, with occupancy.
    pub slots: Vec<Slot>,
    /// Components placed in this generation.
    pub components: Vec<PlacedComponent>,
}

/// Result of regenerating a snapshot for new parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Regenerated {
    /// The new snapshot, with surviving occupancy re-applied.
    pub snapshot: PlacementSnapshot,
    /// Components whose slot no longer exists; the caller should surface
    /// these to the user.
    pub orphaned: Vec<ComponentId>,
}

impl PlacementSnapshot {
    /// Build the initial snapshot for a parameter set.
    pub fn new(params: ConveyorParams) -> Self {
        let slots = generate_slots(&params);
        Self {
            params,
            slots,
            components: Vec::new(),
        }
    }

    /// Regenerate for new parameters, re-mapping occupancy by slot id.
    pub fn with_params(&self, params: ConveyorParams) -> Regenerated {
        let new_slots = generate_slots(&params);

        let mut snapshot = Self {
            params,
            slots: new_slots,
            components: Vec::new(),
        };
        let mut orphaned = Vec::new();

        for component in &self.components {
            match snapshot.slots.iter().find(|s| s.id == component.slot_id) {
                Some(slot) => {
                    // Re-seat on the new slot: same identity, geometry
                    // refreshed from the regenerated catalog.
                    let reseated = PlacedComponent::place_with_id(component.id, slot);
                    snapshot.slots =
                        reserve_slot(&snapshot.slots, &reseated.slot_id, reseated.id);
                    snapshot.components.push(reseated);
                }
                None => orphaned.push(component.id),
            }
        }

        if !orphaned.is_empty() {
            warn!(
                orphaned = orphaned.len(),
                "placed components lost their slots on regeneration"
            );
        }

        Regenerated { snapshot, orphaned }
    }

    /// Slots on which `kind` may be placed right now.
    pub fn valid_slots(&self, kind: SlotKind) -> Vec<&Slot> {
        valid_slots(kind, &self.slots, &self.params, &self.components)
    }

    /// Nearest free slot within the default snap radius of a drag point.
    pub fn nearest_free_slot(&self, point: &Point3<f64>) -> Option<&Slot> {
        nearest_free_slot_default(point, &self.slots)
    }

    /// Place a component of `kind` on the slot with `slot_id`.
    ///
    /// Returns the next snapshot and the new component's id. The previous
    /// snapshot is untouched.
    pub fn place(
        &self,
        kind: SlotKind,
        slot_id: &SlotId,
    ) -> Result<(Self, ComponentId), PlacementError> {
        let slot = self
            .slots
            .iter()
            .find(|s| s.id == *slot_id)
            .ok_or_else(|| PlacementError::UnknownSlot(slot_id.clone()))?;
        if !slot.is_free() {
            return Err(PlacementError::SlotOccupied(slot_id.clone()));
        }
        if !self.valid_slots(kind).iter().any(|s| s.id == *slot_id) {
            return Err(PlacementError::NotPlaceable {
                kind,
                slot: slot_id.clone(),
            });
        }

        let component = PlacedComponent::place(slot);
        let component_id = component.id;
        let mut next = self.clone();
        next.slots = reserve_slot(&next.slots, slot_id, component_id);
        next.components.push(component);
        Ok((next, component_id))
    }

    /// Remove a placed component, freeing its slot.
    pub fn remove(&self, component_id: ComponentId) -> Result<Self, PlacementError> {
        let component = self
            .components
            .iter()
            .find(|c| c.id == component_id)
            .ok_or(PlacementError::UnknownComponent(component_id))?;

        let mut next = self.clone();
        next.slots = release_slot(&next.slots, &component.slot_id);
        next.components.retain(|c| c.id != component_id);
        Ok(next)
    }
}
