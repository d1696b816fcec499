//! Tangent search and splice for two separated convex hulls.
//!
//! Both inputs are cycles in the arena, `left` strictly before `right` in
//! `(x, y)` order. The upper and lower tangents are found by walking one
//! endpoint at a time until a full pass moves neither; the splice then
//! rewrites exactly four links and orphans the hidden chains.
//!
//! Collinear ties (`orientation == 0`) advance only when the candidate lies
//! beyond the moving endpoint on the tangent line, so hulls keep extreme
//! points only.

use super::arena::{HullArena, NodeId};
use super::observer::MergeObserver;
use crate::geom2::{extends_beyond, lexicographic_cmp, orientation};

/// Tangent endpoints as `(left node, right node)` pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tangents {
    pub upper: (NodeId, NodeId),
    pub lower: (NodeId, NodeId),
}

#[derive(Clone, Copy, Debug)]
enum Turn {
    /// `orientation < 0`
    Counterclockwise,
    /// `orientation > 0`
    Clockwise,
}

impl Turn {
    #[inline]
    fn matches(self, o: f64) -> bool {
        match self {
            Turn::Counterclockwise => o < 0.0,
            Turn::Clockwise => o > 0.0,
        }
    }
}

/// Whether the endpoint `moving` should step to `cand` while `fixed` holds.
#[inline]
fn advances<T>(
    arena: &HullArena<T>,
    fixed: NodeId,
    moving: NodeId,
    cand: NodeId,
    turn: Turn,
) -> bool {
    let (a, b, c) = (arena.pos(fixed), arena.pos(moving), arena.pos(cand));
    let o = orientation(a, b, c);
    turn.matches(o) || (o == 0.0 && extends_beyond(a, b, c))
}

fn upper_tangent<T>(arena: &HullArena<T>, mut p: NodeId, mut q: NodeId) -> (NodeId, NodeId) {
    loop {
        let (p_start, q_start) = (p, q);
        while let Some(next) = arena.clockwise(q) {
            if !advances(arena, p, q, next, Turn::Counterclockwise) {
                break;
            }
            q = next;
        }
        while let Some(prev) = arena.counterclockwise(p) {
            if !advances(arena, q, p, prev, Turn::Clockwise) {
                break;
            }
            p = prev;
        }
        if p == p_start && q == q_start {
            return (p, q);
        }
    }
}

fn lower_tangent<T>(arena: &HullArena<T>, mut p: NodeId, mut q: NodeId) -> (NodeId, NodeId) {
    loop {
        let (p_start, q_start) = (p, q);
        while let Some(prev) = arena.counterclockwise(q) {
            if !advances(arena, p, q, prev, Turn::Clockwise) {
                break;
            }
            q = prev;
        }
        while let Some(next) = arena.clockwise(p) {
            if !advances(arena, q, p, next, Turn::Counterclockwise) {
                break;
            }
            p = next;
        }
        if p == p_start && q == q_start {
            return (p, q);
        }
    }
}

/// Find both tangents between `left` and `right`. `None` if either is empty.
pub fn find_tangents<T>(
    arena: &HullArena<T>,
    left: &[NodeId],
    right: &[NodeId],
) -> Option<Tangents> {
    let p = left
        .iter()
        .copied()
        .max_by(|a, b| lexicographic_cmp(&arena.pos(*a), &arena.pos(*b)))?;
    let q = right
        .iter()
        .copied()
        .min_by(|a, b| lexicographic_cmp(&arena.pos(*a), &arena.pos(*b)))?;
    Some(Tangents {
        upper: upper_tangent(arena, p, q),
        lower: lower_tangent(arena, p, q),
    })
}

/// Rewrite the four tangent links, fusing both cycles into one.
pub fn splice<T>(arena: &mut HullArena<T>, tangents: &Tangents) {
    let (p_top, q_top) = tangents.upper;
    let (p_bot, q_bot) = tangents.lower;
    arena.set_clockwise(p_top, q_top);
    arena.set_counterclockwise(q_top, p_top);
    arena.set_counterclockwise(p_bot, q_bot);
    arena.set_clockwise(q_bot, p_bot);
}

/// Merge two hulls; returns the fused cycle starting at the lower right
/// tangent endpoint, in `clockwise` order.
pub fn merge_hulls<T, O>(
    arena: &mut HullArena<T>,
    left: &[NodeId],
    right: &[NodeId],
    observer: &mut O,
) -> Vec<NodeId>
where
    O: MergeObserver<T> + ?Sized,
{
    let Some(tangents) = find_tangents(arena, left, right) else {
        return left.iter().chain(right).copied().collect();
    };
    observer.tangents_found(arena, &tangents);
    splice(arena, &tangents);
    let hull = arena.cycle_from(tangents.lower.1);
    observer.hull_merged(arena, &hull);
    hull
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::Point2;

    fn arena(pts: &[(f64, f64)]) -> HullArena<usize> {
        HullArena::from_points(
            pts.iter()
                .enumerate()
                .map(|(i, &(x, y))| Point2::new(x, y, i)),
        )
    }

    fn ids(v: &[usize]) -> Vec<NodeId> {
        v.iter().map(|&i| NodeId(i)).collect()
    }

    #[test]
    fn two_singles_form_a_two_cycle() {
        let mut a = arena(&[(0.0, 0.0), (1.0, 0.0)]);
        let hull = merge_hulls(&mut a, &ids(&[0]), &ids(&[1]), &mut ());
        assert_eq!(hull, ids(&[1, 0]));
        assert_eq!(a.clockwise(NodeId(0)), Some(NodeId(1)));
        assert_eq!(a.clockwise(NodeId(1)), Some(NodeId(0)));
        assert_eq!(a.counterclockwise(NodeId(0)), Some(NodeId(1)));
        assert_eq!(a.counterclockwise(NodeId(1)), Some(NodeId(0)));
    }

    #[test]
    fn segment_plus_point_gives_triangle() {
        // Sorted: (0,0), (0,4), (2,2).
        let mut a = arena(&[(0.0, 0.0), (0.0, 4.0), (2.0, 2.0)]);
        let left = merge_hulls(&mut a, &ids(&[0]), &ids(&[1]), &mut ());
        let t = find_tangents(&a, &left, &ids(&[2])).unwrap();
        assert_eq!(t.upper, (NodeId(1), NodeId(2)));
        assert_eq!(t.lower, (NodeId(0), NodeId(2)));
        let hull = merge_hulls(&mut a, &left, &ids(&[2]), &mut ());
        assert_eq!(hull, ids(&[2, 0, 1]));
        // Clockwise in a y-up frame.
        assert!(orientation(a.pos(NodeId(2)), a.pos(NodeId(0)), a.pos(NodeId(1))) > 0.0);
    }

    #[test]
    fn collinear_merge_keeps_extremes_only() {
        let mut a = arena(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let left = merge_hulls(&mut a, &ids(&[0]), &ids(&[1]), &mut ());
        let hull = merge_hulls(&mut a, &left, &ids(&[2]), &mut ());
        assert_eq!(hull, ids(&[2, 0]));
        assert_eq!(a.clockwise(NodeId(0)), Some(NodeId(2)));
        assert_eq!(a.clockwise(NodeId(2)), Some(NodeId(0)));
    }

    #[test]
    fn collinear_segments_merge_to_outer_endpoints() {
        let mut a = arena(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        let left = merge_hulls(&mut a, &ids(&[0]), &ids(&[1]), &mut ());
        let right = merge_hulls(&mut a, &ids(&[2]), &ids(&[3]), &mut ());
        let t = find_tangents(&a, &left, &right).unwrap();
        assert_eq!(t.upper, (NodeId(0), NodeId(3)));
        assert_eq!(t.lower, (NodeId(0), NodeId(3)));
        let hull = merge_hulls(&mut a, &left, &right, &mut ());
        assert_eq!(hull, ids(&[3, 0]));
    }

    #[test]
    fn point_against_triangle_skips_hidden_vertex() {
        // Left: single (0,0). Right: triangle (2,0), (3,-1), (3,1); (2,0) is hidden.
        let mut a = arena(&[(0.0, 0.0), (2.0, 0.0), (3.0, -1.0), (3.0, 1.0)]);
        let r = merge_hulls(&mut a, &ids(&[1]), &ids(&[2]), &mut ());
        let right = merge_hulls(&mut a, &r, &ids(&[3]), &mut ());
        assert_eq!(right.len(), 3);
        let hull = merge_hulls(&mut a, &ids(&[0]), &right, &mut ());
        assert_eq!(hull.len(), 3);
        assert!(!hull.contains(&NodeId(1)));
        assert_eq!(hull, ids(&[2, 0, 3]));
    }

    #[test]
    fn empty_side_is_passthrough() {
        let mut a = arena(&[(0.0, 0.0)]);
        assert!(find_tangents(&a, &[], &ids(&[0])).is_none());
        let hull = merge_hulls(&mut a, &[], &ids(&[0]), &mut ());
        assert_eq!(hull, ids(&[0]));
    }
}
