//! Boundary errors
//!
//! A properly typed [`nalgebra::Matrix4`] has no error path through the core;
//! [`ShapeError`] only arises where externally supplied text is turned into a matrix.

use std::fmt::Display;

/// Malformed matrix shape at the textual boundary
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// (TokenCount) The literal does not split into exactly 16 numeric tokens
    TokenCount(usize),
    /// (InvalidScalar) A token could not be parsed as a scalar
    InvalidScalar(String),
}

impl Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::TokenCount(found) => write!(f, "(TokenCount) A 4x4 matrix literal must contain 16 numeric tokens, found: {}", found),
            ShapeError::InvalidScalar(token) => write!(f, "(InvalidScalar) Token is not a number: {}", token),
        }
    }
}
