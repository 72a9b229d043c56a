//! Fixed geometry and validation constants shared across the configurator.
//!
//! All lengths are millimeters unless the name says otherwise. The scene
//! scale itself lives in [`crate::units`].

/// Margin added to the belt width to obtain the total frame width,
/// identical for every model: `R = N + 67`.
pub const WIDTH_MARGIN_MM: f64 = 67.0;

/// Minimum valid side-guide height (inclusive).
pub const SIDE_GUIDE_MIN_HEIGHT_MM: f64 = 15.0;

/// Maximum valid side-guide height (inclusive).
pub const SIDE_GUIDE_MAX_HEIGHT_MM: f64 = 250.0;

/// Spacing between consecutive side-guide mounting brackets.
pub const SIDE_GUIDE_PITCH_MM: f64 = 300.0;

/// Distance from each frame end to its sensor mounting point.
pub const SENSOR_INSET_MM: f64 = 100.0;

/// Target spacing between intermediate supporting-frame legs.
pub const FRAME_LEG_PITCH_MM: f64 = 1000.0;

/// Total length above which intermediate legs are added.
pub const FRAME_LEG_THRESHOLD_MM: f64 = 2000.0;

/// Vertical drop from the frame's top plane to the underside where
/// wheels and legs attach.
pub const FRAME_BODY_DEPTH_MM: f64 = 150.0;

/// Maximum planar distance, in scene units, within which a dragged
/// point snaps to a slot.
pub const SNAP_RADIUS_SCENE: f64 = 0.04;
