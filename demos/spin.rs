//! Steps a model orientation through a spin about Y and prints each matrix.

use eulermat::{EulerAngles, rotation};

fn main() {
    for step in 0..8 {
        let angles = EulerAngles::new(0.0, step as f32 * 45.0, 0.0);
        let m = rotation(angles);

        println!(
            "theta = {:6.1} deg  (orthonormal: {})",
            angles.theta,
            m.is_rotation(1e-5)
        );
        for row in 0..4 {
            println!(
                "  [{:8.4} {:8.4} {:8.4} {:8.4}]",
                m.get(row, 0),
                m.get(row, 1),
                m.get(row, 2),
                m.get(row, 3)
            );
        }

        // This slice is what would go into the mat4 uniform upload.
        let _upload: &[f32] = m.as_slice();
    }
}
