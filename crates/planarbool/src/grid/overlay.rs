//! Occupancy scan and connector synthesis.

use nalgebra::{Vector2, Vector3};
use tracing::debug;

use super::stride::Stride;
use crate::cfg::GridCfg;
use crate::graph::{Mask, NodeId, PlanarGraph};

/// Connector slots of a cell, counterclockwise from east.
pub const EAST: usize = 0;
pub const NORTH: usize = 1;
pub const WEST: usize = 2;
pub const SOUTH: usize = 3;

/// One lattice cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridCell {
    /// Some pre-existing edge passes through or near the cell.
    pub occupied: bool,
    /// Outgoing connector node at the cell centre, per direction.
    pub connectors: [Option<NodeId>; 4],
}

/// Result of `build_grid_overlay`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridOverlay {
    pub x: Stride,
    pub y: Stride,
    /// Row-major: cell `(i, j)` is `cells[j * x.count + i]`.
    pub cells: Vec<GridCell>,
    pub occupied: usize,
    /// Synthesized edges.
    pub connectors: usize,
    pub interior: usize,
    pub exterior: usize,
}

impl GridOverlay {
    #[inline]
    pub fn cell(&self, i: usize, j: usize) -> &GridCell {
        &self.cells[j * self.x.count + i]
    }

    #[inline]
    pub fn center(&self, i: usize, j: usize) -> Vector2<f64> {
        Vector2::new(self.x.center(i), self.y.center(j))
    }
}

/// `build_grid_overlay_with` using `GridCfg::default()`.
pub fn build_grid_overlay(
    graph: &mut PlanarGraph,
    nx: usize,
    ny: usize,
    interior: Option<Mask>,
    exterior: Option<Mask>,
) -> Option<GridOverlay> {
    build_grid_overlay_with(graph, nx, ny, interior, exterior, &GridCfg::default())
}

/// Lay an `nx` × `ny` lattice over the graph and connect the centres of adjacent cells
/// that no existing edge comes near.
///
/// The lattice spans `cfg.domain`, else the graph range; a periodic axis spans
/// `[0, period)` instead. Synthesized edges carry `Mask::GRID` on both sides and the
/// connectors meeting at a cell centre form one vertex. Every connector of a 2×2 block
/// of free cells is counted interior (and gets `interior`, if given); every other
/// connector is counted exterior (and gets `exterior`).
///
/// `None` when either axis has zero cells or zero extent, or when `nx * ny` overflows;
/// the graph is then unchanged.
pub fn build_grid_overlay_with(
    graph: &mut PlanarGraph,
    nx: usize,
    ny: usize,
    interior: Option<Mask>,
    exterior: Option<Mask>,
    cfg: &GridCfg,
) -> Option<GridOverlay> {
    let periods = graph.periods();
    let range = cfg.domain.unwrap_or_else(|| graph.graph_range());
    let (Some(x), Some(y)) = (
        Stride::new(range.min.x, range.max.x, nx, periods.x),
        Stride::new(range.min.y, range.max.y, ny, periods.y),
    ) else {
        debug!(nx, ny, "grid overlay skipped: empty lattice");
        return None;
    };

    let Some(len) = nx.checked_mul(ny) else {
        debug!(nx, ny, "grid overlay skipped: cell count overflows");
        return None;
    };
    let mut cells = vec![GridCell::default(); len];
    mark_occupied(graph, &x, &y, cfg.near_boundary_frac.abs(), &mut cells);
    let occupied = cells.iter().filter(|c| c.occupied).count();
    let connectors = add_connectors(graph, &x, &y, &mut cells);
    let (n_interior, n_exterior) = mark_connectors(graph, nx, ny, &cells, interior, exterior);
    debug!(
        nx,
        ny,
        occupied,
        connectors,
        interior = n_interior,
        exterior = n_exterior,
        "grid overlay"
    );
    Some(GridOverlay {
        x,
        y,
        cells,
        occupied,
        connectors,
        interior: n_interior,
        exterior: n_exterior,
    })
}

/// Inclusive range of cell indices touched by lattice coordinate `c`.
fn cells_near(c: f64, near: f64) -> (i64, i64) {
    let f = c.floor();
    let frac = c - f;
    let i = f as i64;
    (
        if frac < near { i - 1 } else { i },
        if frac > 1.0 - near { i + 1 } else { i },
    )
}

fn mark_occupied(graph: &PlanarGraph, x: &Stride, y: &Stride, near: f64, cells: &mut [GridCell]) {
    let to_lattice = |p: Vector2<f64>| Vector2::new(x.lattice(p.x), y.lattice(p.y));
    let mut mark = |u: i64, v: i64| {
        if let (Some(i), Some(j)) = (x.index(u), y.index(v)) {
            cells[j * x.count + i].occupied = true;
        }
    };
    for e in graph.edge_ids() {
        let a = to_lattice(graph.xy(e));
        let b = to_lattice(graph.xy(graph.mate(e)));
        scan_edge(a, b, near, x, y, &mut mark);
    }
}

/// Approximate scan conversion of segment `ab` (lattice units).
///
/// Walks the dominant axis one lattice line at a time and marks, per piece, every
/// minor-axis cell between the piece's end values, plus neighbours within `near`.
fn scan_edge(
    a: Vector2<f64>,
    b: Vector2<f64>,
    near: f64,
    x: &Stride,
    y: &Stride,
    mark: &mut impl FnMut(i64, i64),
) {
    let swap = (b.y - a.y).abs() > (b.x - a.x).abs();
    let (p, q, major) = if swap {
        ((a.y, a.x), (b.y, b.x), y)
    } else {
        ((a.x, a.y), (b.x, b.y), x)
    };
    let (p, q) = if p.0 <= q.0 { (p, q) } else { (q, p) };
    let mut put = |c: i64, r: i64| if swap { mark(r, c) } else { mark(c, r) };
    let minor_at = |s: f64| {
        if q.0 > p.0 {
            p.1 + (s - p.0) * (q.1 - p.1) / (q.0 - p.0)
        } else {
            p.1
        }
    };

    for (s, m) in [p, q] {
        let (c0, c1) = cells_near(s, near);
        let (r0, r1) = cells_near(m, near);
        for c in c0..=c1 {
            for r in r0..=r1 {
                put(c, r);
            }
        }
    }

    let count = major.count as f64;
    let (lo, hi) = if major.periodic {
        (p.0, q.0.min(p.0 + count + 1.0))
    } else {
        (p.0.max(-1.0), q.0.min(count + 1.0))
    };
    let mut s0 = lo;
    while s0 < hi {
        let s1 = (s0.floor() + 1.0).min(hi);
        let col = ((s0 + s1) * 0.5).floor() as i64;
        let (m0, m1) = (minor_at(s0), minor_at(s1));
        let (r0, _) = cells_near(m0.min(m1), near);
        let (_, r1) = cells_near(m0.max(m1), near);
        for r in r0..=r1 {
            put(col, r);
        }
        s0 = s1;
    }
}

fn add_connectors(graph: &mut PlanarGraph, x: &Stride, y: &Stride, cells: &mut [GridCell]) -> usize {
    let (nx, ny) = (x.count, y.count);
    let center = |i: usize, j: usize| Vector3::new(x.center(i), y.center(j), 0.0);
    let mut count = 0;
    for j in 0..ny {
        for i in 0..nx {
            let k = j * nx + i;
            if cells[k].occupied {
                continue;
            }
            if i + 1 < nx && !cells[k + 1].occupied {
                let n = graph.add_edge(center(i, j), center(i + 1, j), Mask::GRID);
                cells[k].connectors[EAST] = Some(n);
                cells[k + 1].connectors[WEST] = Some(graph.mate(n));
                count += 1;
            }
            if j + 1 < ny && !cells[k + nx].occupied {
                let n = graph.add_edge(center(i, j), center(i, j + 1), Mask::GRID);
                cells[k].connectors[NORTH] = Some(n);
                cells[k + nx].connectors[SOUTH] = Some(graph.mate(n));
                count += 1;
            }
        }
    }
    let mut outgoing: Vec<NodeId> = Vec::with_capacity(4);
    for cell in cells.iter() {
        outgoing.clear();
        outgoing.extend(cell.connectors.iter().flatten().copied());
        if !outgoing.is_empty() {
            graph.set_vertex_order(&outgoing);
        }
    }
    count
}

fn mark_connectors(
    graph: &mut PlanarGraph,
    nx: usize,
    ny: usize,
    cells: &[GridCell],
    interior: Option<Mask>,
    exterior: Option<Mask>,
) -> (usize, usize) {
    // [east, north] connector of each cell lies inside a free 2×2 block
    let mut enclosed = vec![[false; 2]; cells.len()];
    for j in 0..ny.saturating_sub(1) {
        for i in 0..nx.saturating_sub(1) {
            let k = j * nx + i;
            if [k, k + 1, k + nx, k + nx + 1].iter().any(|&c| cells[c].occupied) {
                continue;
            }
            enclosed[k] = [true, true];
            enclosed[k + nx][0] = true;
            enclosed[k + 1][1] = true;
        }
    }
    let (mut n_in, mut n_out) = (0, 0);
    for (k, cell) in cells.iter().enumerate() {
        for (slot, dir) in [EAST, NORTH].into_iter().enumerate() {
            let Some(n) = cell.connectors[dir] else {
                continue;
            };
            let mask = if enclosed[k][slot] {
                n_in += 1;
                interior
            } else {
                n_out += 1;
                exterior
            };
            if let Some(m) = mask {
                graph.set_mask_around_edge(n, m);
            }
        }
    }
    (n_in, n_out)
}
