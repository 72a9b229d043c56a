//! Orientation solving: from a slot's normal/up pair to Euler angles.
//!
//! Slot up-vectors are authored by hand per slot family and are not
//! guaranteed perpendicular to the normal, so the solver re-orthogonalizes
//! with a Gram-Schmidt step before extracting angles: derive a right vector
//! from `up x normal`, then a corrected up from `normal x right`, and build
//! the rotation from that orthonormal basis.

use crate::slot::Slot;
use nalgebra::{Matrix3, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

/// Euler angles in radians (rotations about X, Y, Z), ready for a scene
/// transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Euler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Euler {
    /// The identity rotation.
    pub fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

/// Threshold below which up and normal are treated as parallel.
const PARALLEL_EPSILON: f64 = 1e-9;

/// Compute the orthonormal (right, up, normal) basis for a slot.
///
/// The stored up vector is only a reference: the returned up is re-derived
/// so the three axes are exactly mutually orthogonal. A stored up that is
/// parallel to the normal falls back to a world axis (+Y, or +X when the
/// normal itself points along Y) instead of producing a degenerate basis.
pub fn orthonormal_basis(slot: &Slot) -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) {
    let normal = slot.normal.normalize();
    let mut up = slot.up.normalize();

    let mut right = up.cross(&normal);
    if right.norm() < PARALLEL_EPSILON {
        up = if normal.y.abs() > 0.9 {
            Vector3::x()
        } else {
            Vector3::y()
        };
        right = up.cross(&normal);
    }
    let right = right.normalize();
    let corrected_up = normal.cross(&right);

    (right, corrected_up, normal)
}

/// Solve the rotation that seats a component on `slot`.
pub fn slot_orientation(slot: &Slot) -> Euler {
    let (right, up, normal) = orthonormal_basis(slot);
    let basis = Matrix3::from_columns(&[right, up, normal]);
    let rotation = Rotation3::from_matrix_unchecked(basis);
    let (x, y, z) = rotation.euler_angles();
    Euler { x, y, z }
}
