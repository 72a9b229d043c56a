//! # Conveyorkit Placement
//!
//! The slot-based placement engine for the conveyor configurator.
//!
//! Given a parametric conveyor description this crate procedurally derives
//! the set of valid 3D attachment points ("slots"), filters them by the
//! business rules tied to the current configuration, snaps a dragged point
//! to the nearest free slot, tracks occupancy, and solves the rotation a
//! placed component needs to sit on its slot.
//!
//! ## Components
//!
//! - [`generator`]: the full slot catalog for a parameter set
//! - [`filter`]: which of those slots are legally placeable right now
//! - [`matcher`]: nearest free slot within the snap radius, per drag frame
//! - [`occupancy`]: pure reserve/release state transitions
//! - [`orientation`]: normal/up pair to Euler rotation
//! - [`snapshot`]: the immutable store the owning application replaces
//!   wholesale on every parameter or placement change
//!
//! ## Coordinate convention
//!
//! X runs along the conveyor length, Y is up, Z across the belt width. The
//! frame's top plane sits at `y = 0`; the motor side is `+Z`. All geometry
//! is in scene units (1 unit = 100 mm), converted once from the millimeter
//! parameters before anything else is computed.
//!
//! Every exposed function is pure and synchronous; mutation is expressed as
//! "replace the array", so callers re-rendering off a previous snapshot
//! always see a consistent view.

pub mod error;
pub mod filter;
pub mod generator;
pub mod matcher;
pub mod occupancy;
pub mod orientation;
pub mod placed;
pub mod slot;
pub mod snapshot;

pub use error::PlacementError;
pub use filter::valid_slots;
pub use generator::generate_slots;
pub use matcher::{nearest_free_slot, nearest_free_slot_default};
pub use occupancy::{release_slot, reserve_slot};
pub use orientation::{orthonormal_basis, slot_orientation, Euler};
pub use placed::{ComponentId, PlacedComponent};
pub use slot::{EndTag, Slot, SlotDetail, SlotId, SlotKind, SlotZone};
pub use snapshot::{PlacementSnapshot, Regenerated};
