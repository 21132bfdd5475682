//! Region Boolean operations over a merged planar graph.
//!
//! Purpose
//! - Classify every face of an arrangement of closed loops as inside or outside the result
//!   of a union, intersection, symmetric difference or difference, then drop the edges that
//!   no longer separate inside from outside.
//!
//! Pipeline (per orchestrator call)
//! - merge (`topology::Merge`) → connectivity guard (`ensure_connected`) → winding pass
//!   (`winding_number_pass`) → rule classification (`classify`) → simplification
//!   (`remove_non_separating_edges`) → complement for inverted rules.
//!
//! Conventions
//! - Input loops are counterclockwise; a difference subtrahend is inserted clockwise.
//! - The result lives in the graph: `Mask::EXTERIOR` marks sides outside the region.
//! - Depth is the signed enclosure count; the unbounded face has depth zero.
//!
//! Code cross-refs: `graph::PlanarGraph::{with_mask, with_stack, mark_face_and_area}`.

mod classify;
mod connect;
mod ops;
mod seed;
mod simplify;
mod winding;

pub use classify::{classify, Rule};
pub use connect::{ensure_connected, is_connected};
pub use ops::{
    complement, difference, exterior_faces, interior_faces, intersection,
    symmetric_difference, union, BooleanEngine, BooleanSummary, FaceSummary,
};
pub use seed::{find_seed_face, find_seed_face_with};
pub use simplify::{complement_mask, remove_non_separating_edges};
pub use winding::{winding_number_pass, winding_number_pass_with};
