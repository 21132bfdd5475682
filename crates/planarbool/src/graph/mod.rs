//! Planar half-edge graph (arena of directed nodes).
//!
//! Purpose
//! - Own every node of a planar arrangement together with its mask bits, scratch depth,
//!   face successor and mate. Faces and vertices are implicit: a face is the `fsucc`
//!   cycle through a node, a vertex is the `vsucc = fsucc ∘ mate` cycle.
//! - Provide the construction primitives the Boolean and grid algorithms rely on
//!   (curve insertion, vertex joins, edge split/delete) and the coordinate queries the
//!   classification needs (signed face area, ranges, centroids).
//!
//! Conventions
//! - Each face lies to the left of its nodes. Counterclockwise bounded faces have positive
//!   area; the unbounded face of a connected graph has the most negative area.
//! - Scratch resources (mask bits, node stacks) are borrowed through scoped helpers.
//!
//! Code cross-refs: `boolean::{winding_number_pass, find_seed_face}`, `grid::build_grid_overlay`.

mod arena;
mod build;
mod coords;
mod scratch;
mod types;

pub use arena::{FaceLoop, PlanarGraph, VertexLoop};
pub use coords::Axis;
pub use types::{Mask, NodeId, Periods, Range2};

#[cfg(test)]
mod tests;
