//! Procedural slot generation.
//!
//! Emits the complete catalog of attachment slots for a parameter set:
//! engine mounts, stop buttons, sensors, side-guide brackets, wheels, and
//! frame legs. Generation is conditional per accessory and purely a
//! function of the parameters - no hidden state - so the caller can discard
//! and regenerate the full slot list on every relevant parameter change and
//! always obtain bit-identical geometry for identical input.

use crate::slot::{EndTag, Slot, SlotDetail, SlotId, SlotKind, SlotZone};
use conveyorkit_core::constants::{
    FRAME_BODY_DEPTH_MM, FRAME_LEG_PITCH_MM, FRAME_LEG_THRESHOLD_MM, SENSOR_INSET_MM,
    SIDE_GUIDE_PITCH_MM,
};
use conveyorkit_core::{mm_to_scene, ConveyorParams, EngineType, RailSide};
use nalgebra::{Point3, Vector3};
use tracing::debug;

/// Frame extents in scene units, derived once per generation.
struct FrameExtents {
    half_len: f64,
    half_width: f64,
    /// Y of the frame underside where wheels and legs attach.
    underside_y: f64,
}

impl FrameExtents {
    /// Z coordinate of a rail. Right (+Z) is the motor side.
    fn rail_z(&self, rail: RailSide) -> f64 {
        match rail {
            RailSide::Left => -self.half_width,
            RailSide::Right => self.half_width,
        }
    }

    /// Z coordinate and outward normal for a motor/opposite side zone.
    fn side_z(&self, zone: SlotZone) -> f64 {
        match zone {
            SlotZone::Motor => self.half_width,
            _ => -self.half_width,
        }
    }
}

/// Outward side normal for a Z rail coordinate.
fn outward(z: f64) -> Vector3<f64> {
    if z >= 0.0 {
        Vector3::new(0.0, 0.0, 1.0)
    } else {
        Vector3::new(0.0, 0.0, -1.0)
    }
}

fn up_y() -> Vector3<f64> {
    Vector3::y()
}

fn down_y() -> Vector3<f64> {
    -Vector3::y()
}

fn along_x() -> Vector3<f64> {
    Vector3::x()
}

/// Generate the full slot catalog for the given parameters.
///
/// Pure and idempotent: two calls with identical params produce identical
/// `(id, position, normal, up, zone)` for every element. A configuration
/// without a selected model derives a zero total length and generates no
/// slots at all - callers treat that as "not yet configured".
pub fn generate_slots(params: &ConveyorParams) -> Vec<Slot> {
    let dims = params.dimensions();
    if dims.total_length_mm <= 0.0 || dims.total_width_mm <= 0.0 {
        debug!(
            total_length_mm = dims.total_length_mm,
            "degenerate configuration, no slots generated"
        );
        return Vec::new();
    }

    let frame = FrameExtents {
        half_len: mm_to_scene(dims.total_length_mm) / 2.0,
        half_width: mm_to_scene(dims.total_width_mm) / 2.0,
        underside_y: -mm_to_scene(FRAME_BODY_DEPTH_MM),
    };

    let mut slots = Vec::new();
    push_engine_mounts(params, &frame, &mut slots);
    push_stop_buttons(params, &frame, &mut slots);
    push_sensors(&frame, &mut slots);
    push_side_guides(params, dims.total_length_mm, &frame, &mut slots);
    push_supporting_frame(params, dims.total_length_mm, &frame, &mut slots);

    debug!(
        slots = slots.len(),
        total_length_mm = dims.total_length_mm,
        total_width_mm = dims.total_width_mm,
        "generated slot catalog"
    );
    slots
}

/// One center mount for a central engine, otherwise two side mounts
/// mirrored across the width axis at mid-length.
fn push_engine_mounts(params: &ConveyorParams, frame: &FrameExtents, slots: &mut Vec<Slot>) {
    match params.engine_type {
        Some(EngineType::Central) => {
            slots.push(Slot {
                id: SlotId::new(SlotKind::EngineMount, SlotZone::Center, 0),
                kind: SlotKind::EngineMount,
                position: Point3::new(0.0, frame.underside_y, 0.0),
                normal: down_y(),
                up: along_x(),
                zone: SlotZone::Center,
                detail: SlotDetail::EngineMount,
                occupant: None,
            });
        }
        Some(EngineType::Normal) | Some(EngineType::Reductor) => {
            for zone in [SlotZone::Motor, SlotZone::Opposite] {
                let z = frame.side_z(zone);
                slots.push(Slot {
                    id: SlotId::new(SlotKind::EngineMount, zone, 0),
                    kind: SlotKind::EngineMount,
                    position: Point3::new(0.0, 0.0, z),
                    normal: outward(z),
                    up: up_y(),
                    zone,
                    detail: SlotDetail::EngineMount,
                    occupant: None,
                });
            }
        }
        None => {}
    }
}

/// `count` slots per requested side, evenly spaced over the full length:
/// slot i at `x = -len/2 + i * len/(count-1)` for count > 1, a single slot
/// centered at x = 0. First and last are tagged Start/End, interior slots
/// (and the lone centered slot) Center.
fn push_stop_buttons(params: &ConveyorParams, frame: &FrameExtents, slots: &mut Vec<Slot>) {
    let sides = [
        (SlotZone::Motor, params.motor_stop_buttons()),
        (SlotZone::Opposite, params.opposite_stop_buttons()),
    ];
    for (zone, count) in sides {
        if count == 0 {
            continue;
        }
        let z = frame.side_z(zone);
        for i in 0..count {
            let x = if count > 1 {
                -frame.half_len + (i as f64) * (2.0 * frame.half_len) / ((count - 1) as f64)
            } else {
                0.0
            };
            let end = if count == 1 {
                EndTag::Center
            } else if i == 0 {
                EndTag::Start
            } else if i == count - 1 {
                EndTag::End
            } else {
                EndTag::Center
            };
            slots.push(Slot {
                id: SlotId::new(SlotKind::StopButton, zone, i),
                kind: SlotKind::StopButton,
                position: Point3::new(x, 0.0, z),
                normal: outward(z),
                up: up_y(),
                zone,
                detail: SlotDetail::StopButton { index: i, end },
                occupant: None,
            });
        }
    }
}

/// Always exactly four sensor slots, {motor, opposite} x {start, end}, at a
/// fixed inset from the frame ends, independent of every accessory toggle.
fn push_sensors(frame: &FrameExtents, slots: &mut Vec<Slot>) {
    let inset = mm_to_scene(SENSOR_INSET_MM);
    for zone in [SlotZone::Motor, SlotZone::Opposite] {
        let z = frame.side_z(zone);
        for (index, end, x) in [
            (0, EndTag::Start, -(frame.half_len - inset)),
            (1, EndTag::End, frame.half_len - inset),
        ] {
            slots.push(Slot {
                id: SlotId::new(SlotKind::Sensor, zone, index),
                kind: SlotKind::Sensor,
                position: Point3::new(x, 0.0, z),
                normal: outward(z),
                up: up_y(),
                zone,
                detail: SlotDetail::Sensor { end },
                occupant: None,
            });
        }
    }
}

/// Bracket slots at a fixed 300 mm pitch on both rails, run centered on the
/// frame; `count = floor(total_length / pitch)` per rail. Emitted only when
/// the side guide is enabled with a height inside the valid range.
fn push_side_guides(
    params: &ConveyorParams,
    total_length_mm: f64,
    frame: &FrameExtents,
    slots: &mut Vec<Slot>,
) {
    if !params.side_guide.is_active() {
        return;
    }
    let count = (total_length_mm / SIDE_GUIDE_PITCH_MM).floor() as u32;
    if count == 0 {
        return;
    }
    let pitch = mm_to_scene(SIDE_GUIDE_PITCH_MM);
    for rail in [RailSide::Left, RailSide::Right] {
        let z = frame.rail_z(rail);
        for i in 0..count {
            let x = (i as f64 - (count - 1) as f64 / 2.0) * pitch;
            slots.push(Slot {
                id: SlotId::new(SlotKind::SideGuideBracket, rail.into(), i),
                kind: SlotKind::SideGuideBracket,
                position: Point3::new(x, 0.0, z),
                normal: outward(z),
                up: up_y(),
                zone: rail.into(),
                detail: SlotDetail::SideGuideBracket { rail, index: i },
                occupant: None,
            });
        }
    }
}

/// Wheels and frame legs, emitted only when the supporting frame is fitted.
///
/// Wheels: exactly 4, one per corner. Legs: the 4 corners always, plus
/// `floor(D/1000) - 1` intermediate legs per rail whenever the total length
/// exceeds 2000 mm, evenly dividing the span.
fn push_supporting_frame(
    params: &ConveyorParams,
    total_length_mm: f64,
    frame: &FrameExtents,
    slots: &mut Vec<Slot>,
) {
    if !params.supporting_frame {
        return;
    }

    for rail in [RailSide::Left, RailSide::Right] {
        let z = frame.rail_z(rail);
        for (index, end, x) in [
            (0, EndTag::Start, -frame.half_len),
            (1, EndTag::End, frame.half_len),
        ] {
            slots.push(Slot {
                id: SlotId::new(SlotKind::Wheel, rail.into(), index),
                kind: SlotKind::Wheel,
                position: Point3::new(x, frame.underside_y, z),
                normal: down_y(),
                up: along_x(),
                zone: rail.into(),
                detail: SlotDetail::Wheel { rail, end },
                occupant: None,
            });
        }
    }

    let intermediate = if total_length_mm > FRAME_LEG_THRESHOLD_MM {
        ((total_length_mm / FRAME_LEG_PITCH_MM).floor() as u32).saturating_sub(1)
    } else {
        0
    };
    let spans = intermediate + 1;
    for rail in [RailSide::Left, RailSide::Right] {
        let z = frame.rail_z(rail);
        // Index 0 and spans are the corner legs; 1..spans the intermediates.
        for i in 0..=spans {
            let x = -frame.half_len + (i as f64) * (2.0 * frame.half_len) / (spans as f64);
            slots.push(Slot {
                id: SlotId::new(SlotKind::FrameLeg, rail.into(), i),
                kind: SlotKind::FrameLeg,
                position: Point3::new(x, frame.underside_y, z),
                normal: down_y(),
                up: along_x(),
                zone: rail.into(),
                detail: SlotDetail::FrameLeg { rail, index: i },
                occupant: None,
            });
        }
    }
}
