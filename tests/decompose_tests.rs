mod support;

use nalgebra::{Matrix4, Vector3};
use trs4::float_types::Real;
use trs4::{compose, decompose};

use crate::support::{approx_eq, assert_vec3_approx_eq};

#[test]
fn translation_reads_rightmost_column() {
    let mut m = Matrix4::identity();
    m[(0, 3)] = 4.0;
    m[(1, 3)] = -2.0;
    m[(2, 3)] = 0.5;

    let trs = decompose(&m);
    assert_eq!(trs.translation, Vector3::new(4.0, -2.0, 0.5));
}

#[test]
fn scale_extraction_ignores_translation() {
    let translations = [
        Vector3::zeros(),
        Vector3::new(10.0, -20.0, 30.0),
        Vector3::new(-1e3, 0.25, 7.0),
    ];

    for translation in translations {
        let mut m = Matrix4::identity();
        m[(0, 0)] = 2.0;
        m[(1, 1)] = 3.0;
        m[(2, 2)] = 4.0;
        m[(0, 3)] = translation.x;
        m[(1, 3)] = translation.y;
        m[(2, 3)] = translation.z;

        let trs = decompose(&m);
        assert_eq!(trs.translation, translation);
        assert_vec3_approx_eq(&trs.scale, &Vector3::new(2.0, 3.0, 4.0), 1e-12);
        assert_vec3_approx_eq(&trs.rotation, &Vector3::zeros(), 1e-12);
    }
}

#[test]
fn negative_scale_folds_into_rotation() {
    let m = compose(
        &Vector3::zeros(),
        &Vector3::zeros(),
        &Vector3::new(-1.0, 1.0, 1.0),
    );
    let trs = decompose(&m);

    // Column norms are sign-blind: the mirror shows up as a half-turn about z
    assert_vec3_approx_eq(&trs.scale, &Vector3::new(1.0, 1.0, 1.0), 1e-12);
    assert!(approx_eq(trs.rotation.x, 0.0, 1e-9));
    assert!(approx_eq(trs.rotation.y, 0.0, 1e-9));
    assert!(approx_eq(trs.rotation.z.abs(), 180.0, 1e-9));

    // The original reflection is not recoverable
    let recomposed = compose(&trs.translation, &trs.rotation, &trs.scale);
    assert!((recomposed - m).norm() > 1.0);
}

#[test]
fn sheared_block_passes_through_lossily() {
    let mut m = Matrix4::identity();
    m[(0, 1)] = 0.5;

    let trs = decompose(&m);
    assert!(trs.rotation.iter().all(|v| v.is_finite()));
    assert!(approx_eq(trs.scale.y, Real::sqrt(1.25), 1e-12));

    // Sheared input does not round-trip and is not flagged
    let recomposed = compose(&trs.translation, &trs.rotation, &trs.scale);
    assert!((recomposed - m).norm() > 1e-3);
}

#[test]
fn zero_scale_column_yields_non_finite_rotation() {
    let m = compose(
        &Vector3::zeros(),
        &Vector3::zeros(),
        &Vector3::new(0.0, 1.0, 1.0),
    );
    let trs = decompose(&m);

    assert_eq!(trs.scale.x, 0.0);
    assert!(trs.rotation.y.is_nan());
}
