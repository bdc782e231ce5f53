//! Column-major 4x4 homogeneous transform matrices.
//!
//! This module provides [`TransformMatrix`], the output type of the
//! Euler-rotation builder in [`crate::rotation`] and the value that gets
//! handed to a graphics API's uniform upload.
//!
//! # Storage Layout
//!
//! Elements are stored column-major, the order OpenGL and wgpu expect for a
//! `mat4` uniform: consecutive array elements fill one column before moving
//! to the next, so element index `i` holds row `i % 4` of column `i / 4`.
//!
//! ```text
//! | e0  e4  e8  e12 |
//! | e1  e5  e9  e13 |
//! | e2  e6  e10 e14 |
//! | e3  e7  e11 e15 |
//! ```
//!
//! The struct is `#[repr(C)]` and implements [`bytemuck::Pod`], so a matrix
//! can be cast straight to bytes for a buffer write:
//!
//! ```
//! use eulermat::TransformMatrix;
//!
//! let m = TransformMatrix::IDENTITY;
//! let bytes: &[u8] = bytemuck::bytes_of(&m);
//! assert_eq!(bytes.len(), 64);
//! ```
//!
//! # Rotation Conventions
//!
//! The elementary constructors [`rotation_x`](TransformMatrix::rotation_x),
//! [`rotation_y`](TransformMatrix::rotation_y), and
//! [`rotation_z`](TransformMatrix::rotation_z) take radians and use the
//! passive convention: a positive angle rotates counterclockwise when looking
//! from the positive axis toward the origin. Concretely, `rotation_z(PI/2)`
//! takes the vector `(1, 0, 0)` to `(0, -1, 0)`.

use glam::{Mat4, Vec3, Vec4};

/// A 4x4 homogeneous transform matrix in column-major order.
///
/// For a proper rotation the upper-left 3x3 block is orthonormal with
/// determinant 1, the translation column is zero, and the homogeneous entry
/// is 1. [`is_rotation`](Self::is_rotation) checks this within a tolerance.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformMatrix {
    elements: [f32; 16],
}

impl TransformMatrix {
    /// The identity transform. Leaves every vector unchanged.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self {
        elements: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Creates a matrix from 16 column-major elements.
    ///
    /// No validation is performed. Use [`is_rotation`](Self::is_rotation)
    /// if you need to check that the result is a proper rotation.
    pub fn from_array(elements: [f32; 16]) -> Self {
        Self { elements }
    }

    /// Returns the 16 column-major elements by value.
    pub fn to_array(self) -> [f32; 16] {
        self.elements
    }

    /// Returns the elements as a slice, ready for a uniform upload.
    ///
    /// The slice is column-major and 16 elements long, matching what
    /// `glUniformMatrix4fv` (with `transpose = false`) or a wgpu buffer
    /// write expects for a `mat4`.
    pub fn as_slice(&self) -> &[f32] {
        &self.elements
    }

    /// Returns the element at the given row and column.
    ///
    /// Indices are 0-based. Panics if `row >= 4` or `col >= 4`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.elements[col * 4 + row]
    }

    /// Sets the element at the given row and column.
    ///
    /// Indices are 0-based. Panics if `row >= 4` or `col >= 4`.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.elements[col * 4 + row] = value;
    }

    /// Rotation about the X-axis by `angle` radians.
    ///
    /// ```text
    /// Rx = | 1    0      0    |
    ///      | 0   cos    sin   |
    ///      | 0  -sin    cos   |
    /// ```
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        #[rustfmt::skip]
        let elements = [
            1.0, 0.0, 0.0, 0.0,
            0.0,   c,  -s, 0.0,
            0.0,   s,   c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        Self { elements }
    }

    /// Rotation about the Y-axis by `angle` radians.
    ///
    /// ```text
    /// Ry = | cos   0  -sin |
    ///      |  0    1    0  |
    ///      | sin   0   cos |
    /// ```
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        #[rustfmt::skip]
        let elements = [
              c, 0.0,   s, 0.0,
            0.0, 1.0, 0.0, 0.0,
             -s, 0.0,   c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        Self { elements }
    }

    /// Rotation about the Z-axis by `angle` radians.
    ///
    /// ```text
    /// Rz = |  cos  sin   0 |
    ///      | -sin  cos   0 |
    ///      |   0    0    1 |
    /// ```
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        #[rustfmt::skip]
        let elements = [
              c,  -s, 0.0, 0.0,
              s,   c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        Self { elements }
    }

    /// Multiplies this matrix by another, returning `self * other`.
    ///
    /// The product applies `other` first, then `self`, when the result is
    /// used on column vectors. Also available as the `*` operator.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut elements = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.get(row, k) * other.get(k, col);
                }
                elements[col * 4 + row] = sum;
            }
        }
        Self { elements }
    }

    /// Applies this transform to a homogeneous vector.
    pub fn transform(&self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.get(0, 0) * v.x + self.get(0, 1) * v.y + self.get(0, 2) * v.z + self.get(0, 3) * v.w,
            self.get(1, 0) * v.x + self.get(1, 1) * v.y + self.get(1, 2) * v.z + self.get(1, 3) * v.w,
            self.get(2, 0) * v.x + self.get(2, 1) * v.y + self.get(2, 2) * v.z + self.get(2, 3) * v.w,
            self.get(3, 0) * v.x + self.get(3, 1) * v.y + self.get(3, 2) * v.z + self.get(3, 3) * v.w,
        )
    }

    /// Applies this transform to a point, treating it as `(x, y, z, 1)`.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.transform(p.extend(1.0)).truncate()
    }

    /// Returns the transpose.
    ///
    /// For a pure rotation (zero translation) the transpose is the inverse,
    /// which is cheaper and more stable than a general matrix inversion.
    pub fn transposed(&self) -> Self {
        let mut elements = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                elements[col * 4 + row] = self.get(col, row);
            }
        }
        Self { elements }
    }

    /// Determinant of the upper-left 3x3 linear block.
    ///
    /// For a proper rotation this is +1. A value of -1 indicates a
    /// reflection; values far from either indicate a non-orthogonal block.
    pub fn linear_determinant(&self) -> f32 {
        let m = |r, c| self.get(r, c);

        m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
            - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
            + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
    }

    /// Checks whether this matrix is a rigid rotation within a tolerance.
    ///
    /// Verifies that the upper-left 3x3 block is orthonormal with
    /// determinant +1, the translation column and bottom row are zero, and
    /// the homogeneous entry is 1.
    pub fn is_rotation(&self, tolerance: f32) -> bool {
        if (self.linear_determinant() - 1.0).abs() > tolerance {
            return false;
        }

        // Block orthonormality: R * R^T == I.
        for i in 0..3 {
            for j in 0..3 {
                let mut dot = 0.0;
                for k in 0..3 {
                    dot += self.get(i, k) * self.get(j, k);
                }
                let expected = if i == j { 1.0 } else { 0.0 };
                if (dot - expected).abs() > tolerance {
                    return false;
                }
            }
        }

        for i in 0..3 {
            if self.get(i, 3).abs() > tolerance || self.get(3, i).abs() > tolerance {
                return false;
            }
        }
        (self.get(3, 3) - 1.0).abs() <= tolerance
    }

    /// Converts to a [`glam::Mat4`].
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_cols_array(&self.elements)
    }

    /// Creates a matrix from a [`glam::Mat4`].
    pub fn from_mat4(m: Mat4) -> Self {
        Self {
            elements: m.to_cols_array(),
        }
    }
}

impl Default for TransformMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::ops::Mul for TransformMatrix {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<Vec4> for TransformMatrix {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform(rhs)
    }
}

impl std::ops::Index<(usize, usize)> for TransformMatrix {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.elements[col * 4 + row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const TOLERANCE: f32 = 1e-6;

    fn assert_vec3_close(v: Vec3, expected: [f32; 3]) {
        assert!(
            (v.x - expected[0]).abs() < TOLERANCE
                && (v.y - expected[1]).abs() < TOLERANCE
                && (v.z - expected[2]).abs() < TOLERANCE,
            "got {v:?}, expected {expected:?}"
        );
    }

    #[test]
    fn identity_leaves_vectors_unchanged() {
        let v = Vec4::new(1.0, -2.0, 3.0, 1.0);
        assert_eq!(TransformMatrix::IDENTITY.transform(v), v);
    }

    #[test]
    fn identity_layout() {
        let m = TransformMatrix::IDENTITY;
        for row in 0..4 {
            for col in 0..4 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_eq!(m.get(row, col), expected);
            }
        }
    }

    #[test]
    fn get_is_column_major() {
        let mut elements = [0.0; 16];
        for (i, e) in elements.iter_mut().enumerate() {
            *e = i as f32;
        }
        let m = TransformMatrix::from_array(elements);
        // Element 6 sits in column 1, row 2.
        assert_eq!(m.get(2, 1), 6.0);
        assert_eq!(m[(2, 1)], 6.0);
    }

    #[test]
    fn rotation_x_quarter_turn() {
        let m = TransformMatrix::rotation_x(FRAC_PI_2);
        assert_vec3_close(m.transform_point(Vec3::Y), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn rotation_y_quarter_turn() {
        let m = TransformMatrix::rotation_y(FRAC_PI_2);
        assert_vec3_close(m.transform_point(Vec3::Z), [-1.0, 0.0, 0.0]);
    }

    #[test]
    fn rotation_z_quarter_turn() {
        let m = TransformMatrix::rotation_z(FRAC_PI_2);
        assert_vec3_close(m.transform_point(Vec3::X), [0.0, -1.0, 0.0]);
    }

    #[test]
    fn multiply_by_identity() {
        let m = TransformMatrix::rotation_z(0.7);
        assert_eq!(m * TransformMatrix::IDENTITY, m);
        assert_eq!(TransformMatrix::IDENTITY * m, m);
    }

    #[test]
    fn multiply_applies_rightmost_first() {
        // Rz then Rx differs from Rx then Rz.
        let a = TransformMatrix::rotation_x(FRAC_PI_2) * TransformMatrix::rotation_z(FRAC_PI_2);
        let b = TransformMatrix::rotation_z(FRAC_PI_2) * TransformMatrix::rotation_x(FRAC_PI_2);

        // a: X -> -Y (by Rz) -> +Z (by Rx).
        assert_vec3_close(a.transform_point(Vec3::X), [0.0, 0.0, 1.0]);
        // b: X -> X (by Rx) -> -Y (by Rz).
        assert_vec3_close(b.transform_point(Vec3::X), [0.0, -1.0, 0.0]);
    }

    #[test]
    fn transpose_inverts_rotations() {
        let m = TransformMatrix::rotation_y(0.4) * TransformMatrix::rotation_x(1.1);
        let product = m * m.transposed();
        for row in 0..4 {
            for col in 0..4 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert!((product.get(row, col) - expected).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn elementary_rotations_are_rotations() {
        assert!(TransformMatrix::rotation_x(0.3).is_rotation(TOLERANCE));
        assert!(TransformMatrix::rotation_y(-2.0).is_rotation(TOLERANCE));
        assert!(TransformMatrix::rotation_z(5.5).is_rotation(TOLERANCE));
    }

    #[test]
    fn scale_is_not_a_rotation() {
        let mut m = TransformMatrix::IDENTITY;
        m.set(0, 0, 2.0);
        assert!(!m.is_rotation(TOLERANCE));
        assert!((m.linear_determinant() - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn mat4_round_trip() {
        let m = TransformMatrix::rotation_z(0.25);
        let back = TransformMatrix::from_mat4(m.to_mat4());
        assert_eq!(m, back);
    }

    #[test]
    fn matches_glam_vector_transform() {
        let m = TransformMatrix::rotation_x(0.8) * TransformMatrix::rotation_z(-0.3);
        let v = Vec4::new(0.5, -1.5, 2.0, 1.0);
        let ours = m.transform(v);
        let glams = m.to_mat4() * v;
        assert!((ours - glams).abs().max_element() < TOLERANCE);
    }

    #[test]
    fn pod_cast_is_64_bytes() {
        let m = TransformMatrix::IDENTITY;
        let bytes: &[u8] = bytemuck::bytes_of(&m);
        assert_eq!(bytes.len(), 64);
        assert_eq!(bytes[0..4], 1.0f32.to_ne_bytes());
    }
}
