//! Error type for hull construction.

use std::fmt;

/// Errors surfaced by hull construction.
///
/// Degenerate geometry (collinear or duplicate points) is not an error; it
/// yields a degenerate but valid hull.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// The point sequence was empty.
    EmptyInput,
    /// A coordinate is NaN or infinite; `index` is the position in the input.
    NonFiniteCoordinate { index: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::EmptyInput => write!(f, "invalid input: point set is empty"),
            HullError::NonFiniteCoordinate { index } => {
                write!(f, "invalid input: point {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for HullError {}
