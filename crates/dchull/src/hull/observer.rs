//! Merge event hooks.
//!
//! The driver reports every merge twice: once when both tangents are known
//! (before the splice) and once with the fused boundary. Visualisers and
//! loggers hang off these; `()` ignores them.

use super::arena::{HullArena, NodeId};
use super::merge::Tangents;

/// Receives merge events during hull construction. All methods default to no-ops.
pub trait MergeObserver<T> {
    fn tangents_found(&mut self, _arena: &HullArena<T>, _tangents: &Tangents) {}
    fn hull_merged(&mut self, _arena: &HullArena<T>, _hull: &[NodeId]) {}
}

impl<T> MergeObserver<T> for () {}

/// One completed merge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeRecord {
    pub tangents: Tangents,
    pub hull: Vec<NodeId>,
}

/// Records every merge in order.
#[derive(Clone, Debug, Default)]
pub struct MergeLog {
    pub records: Vec<MergeRecord>,
    pending: Option<Tangents>,
}

impl MergeLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> MergeObserver<T> for MergeLog {
    fn tangents_found(&mut self, _arena: &HullArena<T>, tangents: &Tangents) {
        self.pending = Some(*tangents);
    }

    fn hull_merged(&mut self, _arena: &HullArena<T>, hull: &[NodeId]) {
        if let Some(tangents) = self.pending.take() {
            self.records.push(MergeRecord {
                tangents,
                hull: hull.to_vec(),
            });
        }
    }
}
