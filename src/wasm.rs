//! `wasm-bindgen` exports for JS hosts.
//!
//! Matrices cross the boundary as flat row-major `f64` arrays, matching the
//! `Float32Array` layout the hosting engine consumes.

use crate::compose::compose;
use crate::decompose::decompose;
use crate::float_types::Real;
use nalgebra::{Matrix4, Vector3};
use wasm_bindgen::prelude::*;

/// Compose a transform from translation, Euler rotation in degrees, and scale.
/// Returns the 16 matrix values in row-major order.
#[wasm_bindgen]
pub fn compose_js(
    tx: f64,
    ty: f64,
    tz: f64,
    rx: f64,
    ry: f64,
    rz: f64,
    sx: f64,
    sy: f64,
    sz: f64,
) -> Vec<f64> {
    let m = compose(
        &Vector3::new(tx as Real, ty as Real, tz as Real),
        &Vector3::new(rx as Real, ry as Real, rz as Real),
        &Vector3::new(sx as Real, sy as Real, sz as Real),
    );

    let mut out = Vec::with_capacity(16);
    for row in 0..4 {
        for col in 0..4 {
            out.push(m[(row, col)] as f64);
        }
    }
    out
}

/// Decompose 16 row-major matrix values into
/// `[tx, ty, tz, rx, ry, rz, sx, sy, sz]` (rotation in degrees).
#[wasm_bindgen]
pub fn decompose_js(values: &[f64]) -> Result<Vec<f64>, JsValue> {
    if values.len() != 16 {
        return Err(JsValue::from_str(&format!(
            "A 4x4 matrix needs 16 values, got {}",
            values.len()
        )));
    }

    let reals: Vec<Real> = values.iter().map(|v| *v as Real).collect();
    let trs = decompose(&Matrix4::from_row_slice(&reals));

    Ok(vec![
        trs.translation.x as f64,
        trs.translation.y as f64,
        trs.translation.z as f64,
        trs.rotation.x as f64,
        trs.rotation.y as f64,
        trs.rotation.z as f64,
        trs.scale.x as f64,
        trs.scale.y as f64,
        trs.scale.z as f64,
    ])
}
