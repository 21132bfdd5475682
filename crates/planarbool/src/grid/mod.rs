//! Grid overlay: a uniform lattice of connector edges through the free space of a graph.
//!
//! Purpose
//! - Mark lattice cells that existing edges pass through or near (approximate scan
//!   conversion; only the free cells matter afterwards).
//! - Join the centres of axis-adjacent free cells with new edges, one vertex per centre.
//! - Tell connectors enclosed by free space (inside a free 2×2 block) from the rest.
//!
//! Conventions
//! - Periodic axes span `[0, period)`; occupancy indices wrap, connectors do not cross
//!   the seam.
//! - A lattice with zero cells or zero extent is not built (`None`).

mod overlay;
mod stride;

pub use overlay::{
    build_grid_overlay, build_grid_overlay_with, GridCell, GridOverlay, EAST, NORTH, SOUTH,
    WEST,
};
pub use stride::Stride;
