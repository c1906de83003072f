//! Matrix → TRS decomposition

use crate::float_types::{Real, tolerance};
use crate::trs::Trs;
use nalgebra::{Matrix3, Matrix4, Vector3};

/// Recovers translation, Euler rotation (degrees), and per-axis scale from a
/// 4×4 affine transform, inverting [`crate::compose()`] for shear-free input.
///
/// Translation is read from the rightmost column, scale as the Euclidean norm
/// of each column of the upper-left 3×3 block, and the rotation block is that
/// block with the scale divided back out. The bottom row is assumed to be
/// `[0, 0, 0, 1]` and is not checked; a sheared block is accepted and produces
/// values that do not round-trip.
///
/// Two lossy cases are inherent to this extraction:
/// - Column norms cannot recover a negative (mirrored) scale; a matrix built
///   with scale `(-1, 1, 1)` comes back as scale `(1, 1, 1)` plus a rotation.
/// - At gimbal lock (`y ≈ ±90°`) the x and z angles are confounded; z is
///   pinned to zero and the net rotation is carried entirely by x.
///
/// A near-zero scale column leaves Infinity/NaN in the rotation angles rather
/// than raising an error.
///
/// ```
/// # use nalgebra::Vector3;
/// let m = trs4::compose(
///     &Vector3::new(1.0, 2.0, 3.0),
///     &Vector3::new(0.0, 45.0, 0.0),
///     &Vector3::new(2.0, 2.0, 2.0),
/// );
/// let trs = trs4::decompose(&m);
/// assert!((trs.rotation.y - 45.0).abs() < 1e-9);
/// ```
pub fn decompose(m: &Matrix4<Real>) -> Trs {
    let translation = Vector3::new(m[(0, 3)], m[(1, 3)], m[(2, 3)]);

    let linear: Matrix3<Real> = m.fixed_view::<3, 3>(0, 0).into_owned();
    let scale = Vector3::new(
        linear.column(0).norm(),
        linear.column(1).norm(),
        linear.column(2).norm(),
    );

    // Divide the scale back out of each column, leaving the rotation block.
    let r = Matrix3::from_columns(&[
        linear.column(0) / scale.x,
        linear.column(1) / scale.y,
        linear.column(2) / scale.z,
    ]);

    // Inverse of the rz * ry * rx composition. sy is |cos(y)|; when it
    // vanishes the x and z axes align and one degree of freedom is lost.
    let sy = (r[(0, 0)] * r[(0, 0)] + r[(1, 0)] * r[(1, 0)]).sqrt();
    let singular = sy < tolerance();

    let (x, y, z) = if !singular {
        (
            r[(2, 1)].atan2(r[(2, 2)]),
            (-r[(2, 0)]).atan2(sy),
            r[(1, 0)].atan2(r[(0, 0)]),
        )
    } else {
        (
            (-r[(1, 2)]).atan2(r[(1, 1)]),
            (-r[(2, 0)]).atan2(sy),
            0.0,
        )
    };

    Trs {
        translation,
        rotation: Vector3::new(x.to_degrees(), y.to_degrees(), z.to_degrees()),
        scale,
    }
}
