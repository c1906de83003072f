//! The decomposed transform value type

use crate::compose::compose;
use crate::decompose::decompose;
use crate::float_types::Real;
use nalgebra::{Matrix4, Vector3};

/// A decomposed affine transform: translation, Euler rotation, and per-axis scale.
///
/// Rotation angles are in degrees and are applied in the order `Rz · Ry · Rx`
/// (x first, then y, then z when acting on a column vector). `Trs` is a plain
/// value; nothing is normalized or validated on construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trs {
    /// Translation along x, y, z
    pub translation: Vector3<Real>,
    /// Euler angles in degrees
    pub rotation: Vector3<Real>,
    /// Per-axis scale factors
    pub scale: Vector3<Real>,
}

impl Trs {
    pub const fn new(
        translation: Vector3<Real>,
        rotation: Vector3<Real>,
        scale: Vector3<Real>,
    ) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// The identity transform: zero translation, zero rotation, unit scale.
    pub fn identity() -> Self {
        Self {
            translation: Vector3::zeros(),
            rotation: Vector3::zeros(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    /// Build the 4×4 matrix `T · R · S` for this transform.
    ///
    /// ```
    /// # use trs4::Trs;
    /// assert_eq!(Trs::identity().to_matrix(), nalgebra::Matrix4::identity());
    /// ```
    pub fn to_matrix(&self) -> Matrix4<Real> {
        compose(&self.translation, &self.rotation, &self.scale)
    }

    /// Recover a `Trs` from a 4×4 affine transform. See [`decompose`] for the
    /// assumptions this makes about `m`.
    pub fn from_matrix(m: &Matrix4<Real>) -> Self {
        decompose(m)
    }
}

impl Default for Trs {
    fn default() -> Self {
        Self::identity()
    }
}
