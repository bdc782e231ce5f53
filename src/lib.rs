//! # Eulermat
//!
//! **Euler-angle rotation matrices for GPU model transforms.**
//!
//! Turn three angles in degrees into a column-major 4x4 matrix and hand it
//! straight to your `mat4` uniform. No pipeline, no ceremony, just the math
//! between an orientation and the upload call.
//!
//! ## Quick Start
//!
//! ```
//! use eulermat::{EulerAngles, rotation};
//!
//! // Orientation for this frame, e.g. from UI sliders.
//! let angles = EulerAngles::new(30.0, 45.0, 0.0);
//!
//! let mvp = rotation(angles);
//!
//! // Column-major, 16 floats: exactly what glUniformMatrix4fv or a
//! // wgpu buffer write expects.
//! upload(mvp.as_slice());
//! # fn upload(m: &[f32]) { assert_eq!(m.len(), 16); }
//! ```
//!
//! ## Conventions
//!
//! - Angles are degrees about X (`phi`), Y (`theta`), and Z (`psi`).
//! - The combined rotation is `Rz * Ry * Rx`: X acts on a vector first.
//! - Signs are passive: a positive angle rotates counterclockwise when
//!   looking from the positive axis toward the origin, so 90 degrees about
//!   X takes `(0, 1, 0)` to `(0, 0, -1)`.
//!
//! Inputs are taken as-is, with no wraparound and no validation. The builder
//! is a total pure function over finite floats.

mod matrix;
mod rotation;

pub use matrix::TransformMatrix;
pub use rotation::{EulerAngles, rotation, write_rotation};

// Re-export glam math types for convenience
pub use glam::{Mat4, Vec3, Vec4};
