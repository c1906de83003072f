//! Textual matrix-literal boundary
//!
//! The surrounding tooling moves matrices around as source-embeddable literals:
//! 16 scalars in row-major order, grouped as 4 rows of 4, each scalar printed
//! with 6 fractional digits. Parsing is a strict tokenizer: anything that does
//! not reduce to exactly 16 numeric tokens is a [`ShapeError`] and never
//! reaches [`crate::decompose()`].

use crate::errors::ShapeError;
use crate::float_types::Real;
use nalgebra::Matrix4;

/// Parse a matrix literal into a 4×4 matrix.
///
/// Square brackets and whitespace are stripped, the remainder is split on
/// commas, and empty tokens are dropped (so a trailing comma is tolerated).
/// Exactly 16 tokens must remain, each parseable as a scalar; they fill the
/// matrix row-major. Any other punctuation is left in place and fails token
/// parsing rather than being silently cleaned.
///
/// ```
/// let m = trs4::parse_matrix_literal(
///     "[1.0, 0.0, 0.0, 4.0,
///       0.0, 1.0, 0.0, -2.0,
///       0.0, 0.0, 1.0, 0.5,
///       0.0, 0.0, 0.0, 1.0]",
/// ).unwrap();
/// assert_eq!(m[(1, 3)], -2.0);
/// ```
pub fn parse_matrix_literal(text: &str) -> Result<Matrix4<Real>, ShapeError> {
    let cleaned: String = text
        .chars()
        .filter(|c| *c != '[' && *c != ']' && !c.is_whitespace())
        .collect();
    let tokens: Vec<&str> = cleaned.split(',').filter(|t| !t.is_empty()).collect();

    if tokens.len() != 16 {
        return Err(ShapeError::TokenCount(tokens.len()));
    }

    let values = tokens
        .iter()
        .map(|token| {
            token
                .parse::<Real>()
                .map_err(|_| ShapeError::InvalidScalar((*token).to_string()))
        })
        .collect::<Result<Vec<Real>, ShapeError>>()?;

    Ok(Matrix4::from_row_slice(&values))
}

fn format_row(m: &Matrix4<Real>, row: usize) -> String {
    (0..4)
        .map(|col| format!("{:.6}", m[(row, col)]))
        .collect::<Vec<String>>()
        .join(", ")
}

/// Format a matrix in the literal layout: four lines of four comma-separated
/// scalars, row-major, 6 fractional digits, a trailing comma after each line
/// but the last. [`parse_matrix_literal`] accepts the output for any finite
/// matrix.
pub fn format_matrix_literal(m: &Matrix4<Real>) -> String {
    let mut out = String::new();
    for row in 0..4 {
        out.push_str(&format_row(m, row));
        if row < 3 {
            out.push(',');
        }
        out.push('\n');
    }
    out
}

/// Render a matrix as the `new Float32Array([...]);` snippet pasted into the
/// hosting engine's source, indentation included.
pub fn to_float32_array_snippet(m: &Matrix4<Real>) -> String {
    let mut out = String::from("            new Float32Array(\n                [\n");
    for row in 0..4 {
        out.push_str("                ");
        out.push_str(&format_row(m, row));
        if row < 3 {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("                ]\n            );");
    out
}
