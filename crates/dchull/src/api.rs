//! Edge-list entry point for callers that only draw the hull.
//!
//! `compute_hull` takes `(x, y, tag)` triples and returns the directed hull
//! edges as tag pairs, `clockwise` order. Callers needing node-level access
//! use `ConvexHull` directly.

use crate::error::HullError;
use crate::geom2::Point2;
use crate::hull::ConvexHull;

/// Pre: `points` is non-empty and every coordinate is finite.
/// Post: one `(a, b)` per hull vertex `a` with `b = a.clockwise`; a single
/// distinct point yields no edges, two yield `(A, B)` and `(B, A)`.
pub fn compute_hull<T, I>(points: I) -> Result<Vec<(T, T)>, HullError>
where
    I: IntoIterator<Item = (f64, f64, T)>,
    T: Clone,
{
    let points: Vec<Point2<T>> = points.into_iter().map(Point2::from).collect();
    let hull = ConvexHull::from_points(points)?;
    Ok(hull
        .edge_tags()
        .into_iter()
        .map(|(a, b)| (a.clone(), b.clone()))
        .collect())
}
