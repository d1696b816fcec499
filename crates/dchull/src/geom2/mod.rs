//! 2D geometry primitives for hull construction.
//!
//! Purpose
//! - Provide the tagged input point `Point2<T>` and the exact orientation
//!   predicate every tangent walk depends on.
//! - Keep the sign convention in one place: `orientation(a, b, c) > 0` is a
//!   clockwise turn in a y-up frame.
//!
//! Code cross-refs: `hull::merge` (tangent walks), `hull::check` (convexity).

mod predicates;
pub mod rand;
mod types;

pub use predicates::{extends_beyond, lexicographic_cmp, orientation};
pub use types::Point2;

#[cfg(test)]
mod tests;
