//! Index-based node storage for circular hull lists.
//!
//! Every input point gets exactly one `HullNode` for the lifetime of the
//! arena. Hull lists are cycles of `NodeId`s threaded through the nodes'
//! `clockwise`/`counterclockwise` links; merging only rewrites links.

use crate::geom2::Point2;
use nalgebra::Vector2;

/// Identity of a node; stable for the lifetime of its arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// A point plus its neighbor links inside the current hull.
///
/// Both links `None` means a one-point hull.
#[derive(Clone, Debug)]
pub struct HullNode<T> {
    pub point: Point2<T>,
    pub clockwise: Option<NodeId>,
    pub counterclockwise: Option<NodeId>,
}

impl<T> HullNode<T> {
    #[inline]
    fn isolated(point: Point2<T>) -> Self {
        Self {
            point,
            clockwise: None,
            counterclockwise: None,
        }
    }
}

/// Dense node storage addressed by `NodeId`.
#[derive(Clone, Debug)]
pub struct HullArena<T> {
    nodes: Vec<HullNode<T>>,
}

impl<T> HullArena<T> {
    /// One isolated node per point, ids assigned in iteration order.
    pub fn from_points(points: impl IntoIterator<Item = Point2<T>>) -> Self {
        Self {
            nodes: points.into_iter().map(HullNode::isolated).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Panics if `id` did not come from this arena.
    #[inline]
    pub fn node(&self, id: NodeId) -> &HullNode<T> {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn point(&self, id: NodeId) -> &Point2<T> {
        &self.nodes[id.0].point
    }

    #[inline]
    pub fn pos(&self, id: NodeId) -> Vector2<f64> {
        self.nodes[id.0].point.pos
    }

    #[inline]
    pub fn clockwise(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].clockwise
    }

    #[inline]
    pub fn counterclockwise(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].counterclockwise
    }

    #[inline]
    pub(crate) fn set_clockwise(&mut self, id: NodeId, next: NodeId) {
        self.nodes[id.0].clockwise = Some(next);
    }

    #[inline]
    pub(crate) fn set_counterclockwise(&mut self, id: NodeId, prev: NodeId) {
        self.nodes[id.0].counterclockwise = Some(prev);
    }

    /// Ids of the cycle through `start`, following `clockwise` links.
    ///
    /// An isolated node yields `[start]`. Stops after `len()` steps so a
    /// corrupted link structure cannot spin forever.
    pub fn cycle_from(&self, start: NodeId) -> Vec<NodeId> {
        let mut out = vec![start];
        let mut cur = start;
        while let Some(next) = self.clockwise(cur) {
            if next == start || out.len() >= self.nodes.len() {
                break;
            }
            out.push(next);
            cur = next;
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &HullNode<T>)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena3() -> HullArena<char> {
        HullArena::from_points(vec![
            Point2::new(0.0, 0.0, 'a'),
            Point2::new(1.0, 0.0, 'b'),
            Point2::new(0.0, 1.0, 'c'),
        ])
    }

    #[test]
    fn nodes_start_isolated() {
        let arena = arena3();
        assert_eq!(arena.len(), 3);
        for (id, node) in arena.iter() {
            assert!(node.clockwise.is_none() && node.counterclockwise.is_none());
            assert_eq!(arena.cycle_from(id), vec![id]);
        }
        assert_eq!(arena.point(NodeId(2)).tag, 'c');
    }

    #[test]
    fn cycle_follows_clockwise_links() {
        let mut arena = arena3();
        let (a, b, c) = (NodeId(0), NodeId(1), NodeId(2));
        for (from, to) in [(a, c), (c, b), (b, a)] {
            arena.set_clockwise(from, to);
            arena.set_counterclockwise(to, from);
        }
        assert_eq!(arena.cycle_from(a), vec![a, c, b]);
        assert_eq!(arena.cycle_from(b), vec![b, a, c]);
        assert_eq!(arena.counterclockwise(a), Some(b));
    }

    #[test]
    fn cycle_walk_is_bounded_on_broken_links() {
        let mut arena = arena3();
        // a → b → c → b ... never returns to a.
        arena.set_clockwise(NodeId(0), NodeId(1));
        arena.set_clockwise(NodeId(1), NodeId(2));
        arena.set_clockwise(NodeId(2), NodeId(1));
        assert_eq!(arena.cycle_from(NodeId(0)).len(), 3);
    }
}
