//! Error handling for the placement engine.
//!
//! The pure slot functions are total: bad input surfaces as an empty slot
//! list or an unchanged array, never as an error. `PlacementError` exists
//! only at the snapshot-store boundary, where placing on an occupied slot
//! or removing an unknown component is a genuine caller mistake.

use crate::placed::ComponentId;
use crate::slot::{SlotId, SlotKind};
use thiserror::Error;

/// Placement error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlacementError {
    /// No slot with this id exists in the current generation
    #[error("Unknown slot: {0}")]
    UnknownSlot(SlotId),

    /// The slot is already occupied by another component
    #[error("Slot {0} is already occupied")]
    SlotOccupied(SlotId),

    /// The slot exists but the business rules reject placing this kind
    /// on it right now
    #[error("Slot {slot} is not a valid placement for {kind}")]
    NotPlaceable {
        /// The kind the caller tried to place.
        kind: SlotKind,
        /// The rejected slot.
        slot: SlotId,
    },

    /// No placed component with this id exists
    #[error("Unknown component: {0}")]
    UnknownComponent(ComponentId),
}
