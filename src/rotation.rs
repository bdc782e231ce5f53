//! Euler-angle rotation builder for model transforms.
//!
//! This module turns three Euler angles in degrees into a column-major 4x4
//! rotation matrix, the shape a graphics pipeline wants in its
//! model-view-projection slot. Typical use is one call per frame, fed by
//! whatever drives the orientation (UI sliders, an animation value, fixed
//! test vectors):
//!
//! ```
//! use eulermat::{EulerAngles, rotation};
//!
//! let mvp = rotation(EulerAngles::new(30.0, 45.0, 0.0));
//! // Hand mvp.as_slice() straight to the mat4 uniform upload.
//! assert_eq!(mvp.as_slice().len(), 16);
//! ```
//!
//! # Convention
//!
//! The combined rotation is `Rz(psi) * Ry(theta) * Rx(phi)`: the X rotation
//! acts on a vector first, then Y, then Z. Signs follow the passive
//! convention of the elementary constructors on
//! [`TransformMatrix`](crate::TransformMatrix), so `rotation` of
//! `(90, 0, 0)` takes `(0, 1, 0)` to `(0, 0, -1)`. Handedness here is an
//! assumption pinned by the tests, not something callers can configure.
//!
//! Angles are taken as-is: no wraparound or normalization is applied, and
//! any value a caller passes (including far outside `[0, 360)`) still
//! produces an orthonormal rotation block. Non-finite input is not guarded.

use glam::Vec3;

use crate::matrix::TransformMatrix;

/// Three Euler angles in degrees, one per axis.
///
/// A transient value type: build one per orientation change and pass it by
/// value. `phi` rotates about X, `theta` about Y, `psi` about Z.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EulerAngles {
    /// Rotation about the X-axis, in degrees.
    pub phi: f32,
    /// Rotation about the Y-axis, in degrees.
    pub theta: f32,
    /// Rotation about the Z-axis, in degrees.
    pub psi: f32,
}

impl EulerAngles {
    /// No rotation about any axis.
    pub const ZERO: Self = Self {
        phi: 0.0,
        theta: 0.0,
        psi: 0.0,
    };

    /// Creates an angle triple from degrees about X, Y, and Z.
    pub fn new(phi: f32, theta: f32, psi: f32) -> Self {
        Self { phi, theta, psi }
    }

    /// Returns the three angles converted to radians, in (X, Y, Z) order.
    pub fn to_radians(self) -> (f32, f32, f32) {
        (
            self.phi.to_radians(),
            self.theta.to_radians(),
            self.psi.to_radians(),
        )
    }
}

impl From<(f32, f32, f32)> for EulerAngles {
    fn from((phi, theta, psi): (f32, f32, f32)) -> Self {
        Self::new(phi, theta, psi)
    }
}

impl From<Vec3> for EulerAngles {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Writes the rotation for `angles` into a caller-owned 16-float array.
///
/// The array is filled completely, in column-major order, with the combined
/// rotation `Rz(psi) * Ry(theta) * Rx(phi)`: orthonormal 3x3 block in the
/// top-left, zero translation column, homogeneous entry 1.
///
/// This is the allocation-free form of [`rotation`] for callers that keep a
/// uniform staging buffer around.
pub fn write_rotation(angles: EulerAngles, out: &mut [f32; 16]) {
    let (x, y, z) = angles.to_radians();
    let (s1, c1) = x.sin_cos();
    let (s2, c2) = y.sin_cos();
    let (s3, c3) = z.sin_cos();

    // Direct expansion of the product Rz * Ry * Rx of the elementary
    // matrices documented on TransformMatrix. Term grouping is
    // left-to-right; the per-column layout below mirrors the storage order.
    out[0] = c3 * c2;
    out[1] = -s3 * c2;
    out[2] = s2;
    out[3] = 0.0;
    out[4] = s3 * c1 + c3 * s2 * s1;
    out[5] = c3 * c1 - s3 * s2 * s1;
    out[6] = -c2 * s1;
    out[7] = 0.0;
    out[8] = s3 * s1 - c3 * s2 * c1;
    out[9] = c3 * s1 + s3 * s2 * c1;
    out[10] = c2 * c1;
    out[11] = 0.0;
    out[12] = 0.0;
    out[13] = 0.0;
    out[14] = 0.0;
    out[15] = 1.0;
}

/// Builds the rotation matrix for `angles`.
///
/// See [`write_rotation`] for the exact layout and convention. Zero angles
/// return the exact identity matrix.
pub fn rotation(angles: EulerAngles) -> TransformMatrix {
    let mut elements = [0.0; 16];
    write_rotation(angles, &mut elements);
    TransformMatrix::from_array(elements)
}
