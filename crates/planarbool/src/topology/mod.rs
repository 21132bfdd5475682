//! Topology collaborators run before classification.
//!
//! Purpose
//! - `Merge`: turn independently inserted curves into one planar arrangement. The
//!   default joins nodes whose origins coincide within tolerance and orders every vertex
//!   loop by angle. Curve/curve crossings must already be explicit shared points.
//! - `Regularize`: restore a single connected component so one flood from the seed face
//!   reaches every face. The default bridges each component leftward to its neighbour.
//!
//! Callers with their own intersection or regularization machinery implement the traits
//! and hand them to `boolean::BooleanEngine`.

mod merge;
mod regularize;

use crate::graph::PlanarGraph;

pub use merge::{merge_coincident_vertices, CoincidentVertexMerge};
pub use regularize::{component_count, RayBridge};

/// Resolves inserted curves into a planar arrangement.
pub trait Merge {
    fn merge(&mut self, graph: &mut PlanarGraph);
}

/// Re-stitches a disconnected graph into one component.
pub trait Regularize {
    fn regularize(&mut self, graph: &mut PlanarGraph);
}

/// Leaves the graph untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoMerge;

impl Merge for NoMerge {
    fn merge(&mut self, _graph: &mut PlanarGraph) {}
}
