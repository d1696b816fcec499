//! Divide-and-conquer convex hull over an index arena.
//!
//! Purpose
//! - Sort once by `(x, y)`, split the sorted ids at `(n-1)/2`, build both
//!   halves recursively, and fuse them by tangent search + splice.
//! - Represent every hull as a circular doubly-linked list of `NodeId`s;
//!   merging rewires links and never allocates replacement nodes.
//!
//! Conventions
//! - Following `clockwise` links, every triple satisfies
//!   `orientation(a, b, c) > 0` (clockwise in a y-up frame) once the hull
//!   has three or more vertices.
//! - Hulls keep extreme points only: collinear boundary points and exact
//!   duplicates are left out.
//!
//! Code cross-refs: `geom2::orientation`, `api::compute_hull`.

mod arena;
pub mod check;
mod driver;
mod merge;
mod observer;

pub use arena::{HullArena, HullNode, NodeId};
pub use driver::ConvexHull;
pub use merge::{find_tangents, merge_hulls, splice, Tangents};
pub use observer::{MergeLog, MergeObserver, MergeRecord};
