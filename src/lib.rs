//! Bidirectional conversion between a **4×4 homogeneous affine transform** and its
//! decomposed translation/rotation/scale (TRS) representation, including Euler-angle
//! extraction with gimbal-lock handling.
//!
//! The two core operations are [`compose()`] and [`decompose()`]. Rotation angles cross
//! the API boundary in degrees and are applied in the fixed order `Rz · Ry · Rx`; the
//! full matrix is `T · R · S` applied to column vectors. [`decompose()`] is the
//! approximate inverse of [`compose()`] for shear-free matrices.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **wasm**: `wasm-bindgen` exports for JS hosts

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod compose;
pub mod decompose;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod trs;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use compose::{compose, euler_to_rotation};
pub use decompose::decompose;
pub use errors::ShapeError;
pub use io::{format_matrix_literal, parse_matrix_literal, to_float32_array_snippet};
pub use trs::Trs;

#[cfg(feature = "wasm")]
pub mod wasm;
