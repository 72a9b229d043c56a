//! Unit conversion between millimeters and scene units.
//!
//! The configurator's parameters are entered in millimeters; the 3D scene
//! works in scene units with a fixed global scale. All geometry is computed
//! in scene units after converting once at the boundary.

/// Millimeters per scene unit: 1 scene unit = 100 mm.
pub const MM_PER_SCENE_UNIT: f64 = 100.0;

/// Convert a length in millimeters to scene units.
pub fn mm_to_scene(mm: f64) -> f64 {
    mm / MM_PER_SCENE_UNIT
}

/// Convert a length in scene units back to millimeters.
pub fn scene_to_mm(units: f64) -> f64 {
    units * MM_PER_SCENE_UNIT
}

/// Format a millimeter length for display (3 decimal places, mm suffix).
pub fn format_length(value_mm: f64) -> String {
    format!("{:.3} mm", value_mm)
}
