//! Structural and geometric checks on a finished hull.
//!
//! Used by tests and by the CLI `--verify` flag.

use nalgebra::Vector2;

use super::driver::ConvexHull;
use crate::geom2::orientation;

/// `clockwise` and `counterclockwise` are exact inverses over the boundary and
/// following `clockwise` from the first vertex visits every vertex once.
pub fn is_consistent<T>(hull: &ConvexHull<T>) -> bool {
    let ids = hull.vertex_ids();
    let Some(&first) = ids.first() else {
        return false;
    };
    if ids.len() == 1 {
        let node = hull.node(first);
        return node.clockwise.is_none() && node.counterclockwise.is_none();
    }
    let links_match = ids.iter().all(|&id| {
        hull.clockwise(id)
            .and_then(|next| hull.counterclockwise(next))
            == Some(id)
    });
    links_match && hull.arena().cycle_from(first) == ids
}

/// Every consecutive `clockwise` triple turns strictly clockwise (y-up frame).
///
/// Points and segments are trivially convex.
pub fn is_convex<T>(hull: &ConvexHull<T>) -> bool {
    let ids = hull.vertex_ids();
    let n = ids.len();
    if n < 3 {
        return true;
    }
    (0..n).all(|i| {
        let a = hull.arena().pos(ids[i]);
        let b = hull.arena().pos(ids[(i + 1) % n]);
        let c = hull.arena().pos(ids[(i + 2) % n]);
        orientation(a, b, c) > 0.0
    })
}

/// `p` lies inside the hull or on its boundary.
pub fn encloses<T>(hull: &ConvexHull<T>, p: Vector2<f64>) -> bool {
    let verts: Vec<Vector2<f64>> = hull.vertices().map(|v| v.pos).collect();
    match verts.as_slice() {
        [] => false,
        [a] => *a == p,
        [a, b] => orientation(*a, *b, p) == 0.0 && (p - a).dot(&(p - b)) <= 0.0,
        _ => (0..verts.len()).all(|i| {
            let a = verts[i];
            let b = verts[(i + 1) % verts.len()];
            orientation(a, b, p) >= 0.0
        }),
    }
}
