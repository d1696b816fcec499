//! Recursive divide-and-conquer driver and the `ConvexHull` result type.

use super::arena::{HullArena, HullNode, NodeId};
use super::merge::merge_hulls;
use super::observer::MergeObserver;
use crate::error::HullError;
use crate::geom2::{lexicographic_cmp, Point2};

/// Convex hull of a finite point set as a `clockwise` cycle of arena nodes.
///
/// The arena holds one node per input point, sorted by `(x, y)`. Points not on
/// the hull keep whatever links they had when they were orphaned; only the
/// ids in `vertex_ids()` form the hull.
#[derive(Clone, Debug)]
pub struct ConvexHull<T> {
    arena: HullArena<T>,
    boundary: Vec<NodeId>,
}

impl<T> ConvexHull<T> {
    /// Computes the hull of `points`.
    pub fn from_points(points: Vec<Point2<T>>) -> Result<Self, HullError> {
        Self::with_observer(points, &mut ())
    }

    /// Computes the hull of `points`, reporting every merge to `observer`.
    pub fn with_observer<O>(points: Vec<Point2<T>>, observer: &mut O) -> Result<Self, HullError>
    where
        O: MergeObserver<T> + ?Sized,
    {
        if points.is_empty() {
            return Err(HullError::EmptyInput);
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(HullError::NonFiniteCoordinate { index });
        }
        let mut points = points;
        // Stable: exact duplicates keep input order.
        points.sort_by(|a, b| lexicographic_cmp(&a.pos, &b.pos));
        let mut arena = HullArena::from_points(points);
        let ids = distinct_ids(&arena);
        let boundary = recursive_hull(&mut arena, &ids, observer);
        Ok(Self { arena, boundary })
    }

    /// Hull vertex ids in `clockwise` order.
    #[inline]
    pub fn vertex_ids(&self) -> &[NodeId] {
        &self.boundary
    }

    /// Hull vertices in `clockwise` order.
    pub fn vertices(&self) -> impl Iterator<Item = &Point2<T>> + '_ {
        self.boundary.iter().map(|&id| self.arena.point(id))
    }

    /// Number of hull vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.boundary.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boundary.is_empty()
    }

    /// Fewer than three vertices: a point or a segment.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.boundary.len() < 3
    }

    /// Directed hull edges `(a, a.clockwise)`; empty for a one-point hull.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        self.boundary
            .iter()
            .filter_map(|&id| self.arena.clockwise(id).map(|next| (id, next)))
            .collect()
    }

    /// Directed hull edges as pairs of caller tags.
    pub fn edge_tags(&self) -> Vec<(&T, &T)> {
        self.edges()
            .into_iter()
            .map(|(a, b)| (&self.arena.point(a).tag, &self.arena.point(b).tag))
            .collect()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &HullNode<T> {
        self.arena.node(id)
    }

    #[inline]
    pub fn clockwise(&self, id: NodeId) -> Option<NodeId> {
        self.arena.clockwise(id)
    }

    #[inline]
    pub fn counterclockwise(&self, id: NodeId) -> Option<NodeId> {
        self.arena.counterclockwise(id)
    }

    /// All nodes, hull members and orphans alike.
    #[inline]
    pub fn arena(&self) -> &HullArena<T> {
        &self.arena
    }
}

/// First id of every run of equal coordinates in the sorted arena.
fn distinct_ids<T>(arena: &HullArena<T>) -> Vec<NodeId> {
    let mut ids: Vec<NodeId> = Vec::with_capacity(arena.len());
    for (id, node) in arena.iter() {
        match ids.last() {
            Some(&last) if arena.pos(last) == node.point.pos => {}
            _ => ids.push(id),
        }
    }
    ids
}

/// Hull of the sorted range `ids`: split at `(n-1)/2`, recurse, merge.
fn recursive_hull<T, O>(arena: &mut HullArena<T>, ids: &[NodeId], observer: &mut O) -> Vec<NodeId>
where
    O: MergeObserver<T> + ?Sized,
{
    if ids.len() <= 1 {
        return ids.to_vec();
    }
    let mid = (ids.len() - 1) / 2;
    let (left, right) = ids.split_at(mid + 1);
    let left = recursive_hull(arena, left, observer);
    let right = recursive_hull(arena, right, observer);
    merge_hulls(arena, &left, &right, observer)
}
