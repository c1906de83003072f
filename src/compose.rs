//! TRS → matrix composition

use crate::float_types::Real;
use nalgebra::{Matrix4, Rotation3, Translation3, Vector3};

/// Builds the rotation block for Euler angles given in degrees.
///
/// The elementary rotations are composed as `rz * ry * rx`: a column vector is
/// rotated about x first, then y, then z. [`crate::decompose()`] inverts exactly
/// this order.
pub fn euler_to_rotation(rotation_degrees: &Vector3<Real>) -> Rotation3<Real> {
    let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), rotation_degrees.x.to_radians());
    let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), rotation_degrees.y.to_radians());
    let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), rotation_degrees.z.to_radians());

    rz * ry * rx
}

/// Composes a 4×4 affine transform from translation, Euler rotation in degrees,
/// and per-axis scale.
///
/// The result is `T · R · S` acting on column vectors: scale first, then rotate,
/// then translate. The bottom row is exactly `[0, 0, 0, 1]`. Composition is total
/// over all real inputs; zero scale yields a singular matrix rather than an
/// error, and NaN or infinite inputs propagate into the result.
///
/// ```
/// # use nalgebra::Vector3;
/// let m = trs4::compose(
///     &Vector3::new(2.0, -3.0, 5.0),
///     &Vector3::zeros(),
///     &Vector3::new(1.0, 1.0, 1.0),
/// );
/// assert_eq!(m[(0, 3)], 2.0);
/// assert_eq!(m[(3, 3)], 1.0);
/// ```
pub fn compose(
    translation: &Vector3<Real>,
    rotation_degrees: &Vector3<Real>,
    scale: &Vector3<Real>,
) -> Matrix4<Real> {
    let t = Translation3::from(*translation).to_homogeneous();
    let r = euler_to_rotation(rotation_degrees).to_homogeneous();
    let s = Matrix4::new_nonuniform_scaling(scale);

    t * r * s
}
