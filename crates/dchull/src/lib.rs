//! Divide-and-conquer convex hulls in the plane.
//!
//! The hull is built by sorting the input once, splitting it recursively, and
//! fusing sub-hulls through their upper and lower tangents. Every hull is a
//! circular doubly-linked list of arena nodes in `clockwise` order; merges
//! only rewrite neighbor links.
//!
//! Layout
//! - `geom2`: tagged points, the exact orientation predicate, seeded clouds.
//! - `hull`: arena, tangent search + splice, recursive driver, checks.
//! - `api`: the edge-list entry point `compute_hull`.

pub mod api;
pub mod error;
pub mod geom2;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use api::compute_hull;
pub use error::HullError;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::compute_hull;
    pub use crate::error::HullError;
    pub use crate::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::geom2::{orientation, Point2};
    pub use crate::hull::{ConvexHull, MergeLog, MergeObserver, NodeId, Tangents};
    pub use nalgebra::Vector2 as Vec2;
}
