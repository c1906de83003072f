//! Test support library
//! Provides various helper functions & utilities for tests.

#![allow(dead_code)]

use nalgebra::{Matrix3, Matrix4, Vector3};
use trs4::float_types::Real;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Componentwise vector comparison with a formatted failure message.
pub fn assert_vec3_approx_eq(a: &Vector3<Real>, b: &Vector3<Real>, eps: Real) {
    assert!(
        (a - b).norm() < eps,
        "Vectors {a:?} and {b:?} are not approximately equal within tolerance {eps}"
    );
}

pub fn assert_mat3_approx_eq(a: &Matrix3<Real>, b: &Matrix3<Real>, eps: Real) {
    assert!(
        (a - b).norm() < eps,
        "Matrices are not approximately equal within tolerance {eps}:\n{a}\n{b}"
    );
}

pub fn assert_mat4_approx_eq(a: &Matrix4<Real>, b: &Matrix4<Real>, eps: Real) {
    assert!(
        (a - b).norm() < eps,
        "Matrices are not approximately equal within tolerance {eps}:\n{a}\n{b}"
    );
}
