//! Planar-arrangement Boolean engine over a half-edge graph.
//!
//! Purpose
//! - Combine the regions bounded by 2D curve loops (union, intersection, symmetric
//!   difference, difference) by propagating winding numbers across a connected
//!   half-edge graph, then drop every edge that no longer separates differently
//!   classified space.
//! - Overlay a uniform grid on the same graph and synthesize connector edges through
//!   the cells no curve passes near.
//!
//! Layout
//! - `graph`: arena-backed half-edge data model, mask pool, scratch stacks,
//!   construction primitives and coordinate queries.
//! - `topology`: the merge and regularization collaborators (traits + defaults).
//! - `boolean`: seed face, connectivity guard, winding pass, rules, simplifier,
//!   orchestrators.
//! - `grid`: lattice occupancy and connector synthesis.
//!
//! Conventions
//! - Faces lie to the left of their nodes; bounded faces of counterclockwise loops have
//!   positive area, the unbounded face has the most negative area.
//! - Inserted curves carry `Mask::ORIGINAL_CURVE` on their right-hand side only, which
//!   makes `mask(n) - mask(mate(n))` the depth change when stepping across an edge.

pub mod boolean;
pub mod cfg;
pub mod error;
pub mod graph;
pub mod grid;
pub mod topology;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{GridCfg, RegularizeCfg, Tolerance, WindingCfg};
pub use error::BoolError;
pub use graph::{Mask, NodeId, Periods, PlanarGraph, Range2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::boolean::{
        complement, difference, intersection, symmetric_difference, union, BooleanEngine,
        BooleanSummary, FaceSummary, Rule,
    };
    pub use crate::cfg::{GridCfg, RegularizeCfg, Tolerance, WindingCfg};
    pub use crate::error::BoolError;
    pub use crate::graph::{Mask, NodeId, Periods, PlanarGraph, Range2};
    pub use crate::grid::{build_grid_overlay, build_grid_overlay_with, GridOverlay};
    pub use crate::topology::{CoincidentVertexMerge, Merge, RayBridge, Regularize};
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
