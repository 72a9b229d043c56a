//! Placement policy: which slots are legally placeable right now.
//!
//! Narrows the generated slot set for a requested component kind against
//! the current parameters and the already-placed components. Validity is
//! never cached - the owning application re-invokes this on every change to
//! the dragged kind, the parameters, or the component set.

use crate::placed::PlacedComponent;
use crate::slot::{Slot, SlotDetail, SlotKind, SlotZone};
use conveyorkit_core::{ConveyorParams, EndPreference, EngineType, StopButtonSide};

/// Return the slots on which `kind` may be placed right now.
///
/// Base narrowing keeps unoccupied slots of the requested kind; the
/// kind-specific policy then applies side/end/count constraints and
/// accessory gating. An unselected prerequisite (no engine type, no
/// stop-button side) yields an empty result rather than an error.
pub fn valid_slots<'a>(
    kind: SlotKind,
    slots: &'a [Slot],
    params: &ConveyorParams,
    placed: &[PlacedComponent],
) -> Vec<&'a Slot> {
    let candidates = slots.iter().filter(|s| s.kind == kind && s.is_free());
    match kind {
        SlotKind::EngineMount => match params.engine_type {
            None => Vec::new(),
            Some(EngineType::Central) => {
                candidates.filter(|s| s.zone == SlotZone::Center).collect()
            }
            Some(_) => candidates.filter(|s| s.zone != SlotZone::Center).collect(),
        },
        SlotKind::StopButton => filter_stop_buttons(candidates, params, placed),
        SlotKind::SideGuideBracket => {
            if params.side_guide.is_active() {
                candidates.collect()
            } else {
                Vec::new()
            }
        }
        // Sensors, wheels, and frame legs carry no policy beyond "must be
        // an unoccupied slot of the right kind".
        SlotKind::Sensor | SlotKind::Wheel | SlotKind::FrameLeg => candidates.collect(),
    }
}

/// Stop-button policy: side preference, per-side cap, end preference.
fn filter_stop_buttons<'a>(
    candidates: impl Iterator<Item = &'a Slot>,
    params: &ConveyorParams,
    placed: &[PlacedComponent],
) -> Vec<&'a Slot> {
    let Some(side) = params.stop_buttons.side else {
        return Vec::new();
    };

    let side_allowed = |zone: SlotZone| match side {
        StopButtonSide::Motor => zone == SlotZone::Motor,
        StopButtonSide::Opposite => zone == SlotZone::Opposite,
        StopButtonSide::Both => matches!(zone, SlotZone::Motor | SlotZone::Opposite),
    };

    // A side is closed once the placed stop buttons whose slot id encodes
    // that side reach the model's per-side maximum.
    let side_open = |zone: SlotZone| match params.model {
        Some(model) => placed_on_side(placed, zone) < model.stop_button_limits().max as usize,
        None => true,
    };

    let end_allowed = |slot: &Slot| {
        let SlotDetail::StopButton { end, .. } = slot.detail else {
            return false;
        };
        match params.stop_buttons.end {
            EndPreference::Both => true,
            EndPreference::Start => end == crate::slot::EndTag::Start,
            EndPreference::End => end == crate::slot::EndTag::End,
        }
    };

    candidates
        .filter(|s| side_allowed(s.zone) && side_open(s.zone) && end_allowed(s))
        .collect()
}

/// Count placed stop buttons on a side by the zone their slot id encodes.
fn placed_on_side(placed: &[PlacedComponent], zone: SlotZone) -> usize {
    placed
        .iter()
        .filter(|c| c.kind == SlotKind::StopButton && c.slot_id.zone() == Some(zone))
        .count()
}
