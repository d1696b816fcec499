//! Orientation and ordering predicates shared by the merge engine and checks.

use std::cmp::Ordering;

use nalgebra::Vector2;

/// Signed turn of `a → b → c`: `(c.x−a.x)(b.y−a.y) − (b.x−a.x)(c.y−a.y)`.
///
/// - `orientation > 0`: clockwise turn in a y-up frame (counterclockwise on a y-down screen)
/// - `orientation < 0`: counterclockwise turn in a y-up frame
/// - `orientation == 0`: collinear
///
/// This is the negated standard cross product `(b−a)×(c−a)`. The sign is exact:
/// it is evaluated with adaptive-precision arithmetic, the magnitude is the
/// (approximately rounded) determinant.
#[inline]
pub fn orientation(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    use robust::Coord;
    -robust::orient2d(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
    )
}

/// True if `c` lies strictly beyond `b` when travelling from `a` through `b`.
///
/// Only meaningful when `a`, `b`, `c` are collinear; used to break
/// `orientation == 0` ties in favour of the farther point.
#[inline]
pub fn extends_beyond(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
    (c - b).dot(&(b - a)) > 0.0
}

/// Compares two points first by `x`, then by `y`.
///
/// Callers reject non-finite coordinates first; NaN compares as equal here.
#[inline]
pub fn lexicographic_cmp(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}
