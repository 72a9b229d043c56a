//! Occupancy tracking as pure state transitions.
//!
//! Both operations return a new slot array and leave the input untouched:
//! the owning application re-renders off the previous immutable snapshot
//! while the replacement propagates, so in-place mutation is off the table.
//! An id that matches no slot yields an output deep-equal to the input.

use crate::placed::ComponentId;
use crate::slot::{Slot, SlotId};

/// Return a copy of `slots` with the slot matching `slot_id` occupied by
/// `component_id`.
pub fn reserve_slot(slots: &[Slot], slot_id: &SlotId, component_id: ComponentId) -> Vec<Slot> {
    slots
        .iter()
        .map(|slot| {
            if slot.id == *slot_id {
                let mut reserved = slot.clone();
                reserved.occupant = Some(component_id);
                reserved
            } else {
                slot.clone()
            }
        })
        .collect()
}

/// Return a copy of `slots` with the slot matching `slot_id` freed.
pub fn release_slot(slots: &[Slot], slot_id: &SlotId) -> Vec<Slot> {
    slots
        .iter()
        .map(|slot| {
            if slot.id == *slot_id {
                let mut released = slot.clone();
                released.occupant = None;
                released
            } else {
                slot.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_slots;
    use conveyorkit_core::{ConveyorModel, ConveyorParams};
    use uuid::Uuid;

    fn slots() -> Vec<Slot> {
        generate_slots(&ConveyorParams::new(ConveyorModel::Dps50, 1000.0, 500.0))
    }

    #[test]
    fn test_reserve_marks_only_target() {
        let slots = slots();
        let id = slots[1].id.clone();
        let component = Uuid::new_v4();

        let reserved = reserve_slot(&slots, &id, component);
        for (before, after) in slots.iter().zip(reserved.iter()) {
            if after.id == id {
                assert_eq!(after.occupant, Some(component));
            } else {
                assert_eq!(before, after);
            }
        }
        // Input untouched.
        assert!(slots.iter().all(Slot::is_free));
    }

    #[test]
    fn test_reserve_then_release_restores_original() {
        let slots = slots();
        let id = slots[2].id.clone();
        let roundtrip = release_slot(&reserve_slot(&slots, &id, Uuid::new_v4()), &id);
        assert_eq!(roundtrip, slots);
    }

    #[test]
    fn test_unknown_id_is_a_noop_copy() {
        let slots = slots();
        let unknown = SlotId::new(
            crate::slot::SlotKind::Wheel,
            crate::slot::SlotZone::Left,
            9,
        );
        assert_eq!(reserve_slot(&slots, &unknown, Uuid::new_v4()), slots);
        assert_eq!(release_slot(&slots, &unknown), slots);
    }
}
