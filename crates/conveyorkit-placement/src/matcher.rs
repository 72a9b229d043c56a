//! Spatial matching: snap a dragged point to the nearest free slot.
//!
//! Called once per pointer-move frame during a drag, against the latest
//! slot snapshot. Distance is planar - measured on the X/Z ground plane,
//! ignoring height - which matches how the drag position tracks the floor
//! of the scene.

use crate::slot::Slot;
use conveyorkit_core::constants::SNAP_RADIUS_SCENE;
use nalgebra::Point3;

/// Planar (X/Z) distance between two points, ignoring Y.
fn planar_distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    (dx * dx + dz * dz).sqrt()
}

/// Find the nearest unoccupied slot strictly within `snap_radius` of
/// `point`, or `None` when every free slot is at least that far away.
///
/// Ties resolve to the first slot in array order; exact geometric ties are
/// not given special handling.
pub fn nearest_free_slot<'a>(
    point: &Point3<f64>,
    slots: &'a [Slot],
    snap_radius: f64,
) -> Option<&'a Slot> {
    let mut best: Option<(&Slot, f64)> = None;
    for slot in slots {
        if !slot.is_free() {
            continue;
        }
        let distance = planar_distance(point, &slot.position);
        if distance < snap_radius && best.map_or(true, |(_, d)| distance < d) {
            best = Some((slot, distance));
        }
    }
    best.map(|(slot, _)| slot)
}

/// [`nearest_free_slot`] with the default snap radius (0.04 scene units).
pub fn nearest_free_slot_default<'a>(point: &Point3<f64>, slots: &'a [Slot]) -> Option<&'a Slot> {
    nearest_free_slot(point, slots, SNAP_RADIUS_SCENE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placed::PlacedComponent;
    use crate::slot::{EndTag, SlotDetail, SlotId, SlotKind, SlotZone};
    use nalgebra::Vector3;

    fn slot_at(x: f64, z: f64, index: u32) -> Slot {
        Slot {
            id: SlotId::new(SlotKind::Sensor, SlotZone::Motor, index),
            kind: SlotKind::Sensor,
            position: Point3::new(x, 0.0, z),
            normal: Vector3::z(),
            up: Vector3::y(),
            zone: SlotZone::Motor,
            detail: SlotDetail::Sensor { end: EndTag::Start },
            occupant: None,
        }
    }

    #[test]
    fn test_nearest_within_radius() {
        let slots = vec![slot_at(0.0, 0.0, 0), slot_at(1.0, 0.0, 1)];
        let found = nearest_free_slot(&Point3::new(0.99, 0.0, 0.0), &slots, 0.04);
        assert_eq!(found.unwrap().id, slots[1].id);
    }

    #[test]
    fn test_none_outside_radius() {
        let slots = vec![slot_at(0.0, 0.0, 0)];
        assert!(nearest_free_slot(&Point3::new(0.05, 0.0, 0.0), &slots, 0.04).is_none());
    }

    #[test]
    fn test_radius_is_strict() {
        let slots = vec![slot_at(0.0, 0.0, 0)];
        // Exactly at the radius does not snap.
        assert!(nearest_free_slot(&Point3::new(0.04, 0.0, 0.0), &slots, 0.04).is_none());
        assert!(nearest_free_slot(&Point3::new(0.039, 0.0, 0.0), &slots, 0.04).is_some());
    }

    #[test]
    fn test_occupied_slots_skipped() {
        let mut near = slot_at(0.0, 0.0, 0);
        let far = slot_at(0.03, 0.0, 1);
        near.occupant = Some(PlacedComponent::place(&near).id);
        let slots = vec![near, far.clone()];
        let found = nearest_free_slot(&Point3::new(0.0, 0.0, 0.0), &slots, 0.04);
        assert_eq!(found.unwrap().id, far.id);
    }

    #[test]
    fn test_distance_is_planar() {
        // Large Y separation must not matter.
        let mut slot = slot_at(0.0, 0.0, 0);
        slot.position.y = -1.5;
        let slots = vec![slot];
        assert!(nearest_free_slot(&Point3::new(0.01, 5.0, 0.01), &slots, 0.04).is_some());
    }

    #[test]
    fn test_first_wins_on_tie() {
        let slots = vec![slot_at(-0.01, 0.0, 0), slot_at(0.01, 0.0, 1)];
        let found = nearest_free_slot(&Point3::new(0.0, 0.0, 0.0), &slots, 0.04);
        assert_eq!(found.unwrap().id, slots[0].id);
    }

    #[test]
    fn test_empty_slot_set() {
        assert!(nearest_free_slot(&Point3::origin(), &[], 0.04).is_none());
    }

    #[test]
    fn test_default_radius_wrapper() {
        let slots = vec![slot_at(0.0, 0.0, 0)];
        // 0.04 scene units, same strict bound as the explicit form.
        let found = nearest_free_slot_default(&Point3::new(0.039, 0.0, 0.0), &slots);
        assert_eq!(found.unwrap().id, slots[0].id);
        assert!(nearest_free_slot_default(&Point3::new(0.04, 0.0, 0.0), &slots).is_none());
    }
}
