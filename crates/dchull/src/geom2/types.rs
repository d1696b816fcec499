//! Input point type carried through hull construction.
//!
//! - `Point2<T>`: a coordinate plus an opaque caller tag.
//!
//! The tag is whatever the caller needs to map a hull vertex back to its own
//! representation (a row index, a handle, a widget point). The hull code moves
//! it around but never looks inside.

use nalgebra::Vector2;

/// A 2D input point with an opaque caller tag.
///
/// Two points with equal coordinates are still distinct inputs; identity is
/// decided by position in the hull arena, never by comparing `pos`.
#[derive(Clone, Debug, PartialEq)]
pub struct Point2<T> {
    pub pos: Vector2<f64>,
    pub tag: T,
}

impl<T> Point2<T> {
    #[inline]
    pub fn new(x: f64, y: f64, tag: T) -> Self {
        Self {
            pos: Vector2::new(x, y),
            tag,
        }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.pos.x.is_finite() && self.pos.y.is_finite()
    }
}

impl<T> From<(f64, f64, T)> for Point2<T> {
    #[inline]
    fn from((x, y, tag): (f64, f64, T)) -> Self {
        Self::new(x, y, tag)
    }
}
