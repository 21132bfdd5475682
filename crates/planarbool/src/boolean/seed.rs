//! Seed face: the face of most negative signed area (the unbounded face when connected).

use tracing::trace;

use crate::cfg::WindingCfg;
use crate::error::BoolError;
use crate::graph::{NodeId, PlanarGraph};

/// `find_seed_face_with` using `WindingCfg::default()`.
pub fn find_seed_face(
    graph: &mut PlanarGraph,
    out: Option<&mut Vec<NodeId>>,
) -> Result<Option<NodeId>, BoolError> {
    find_seed_face_with(graph, out, &WindingCfg::default())
}

/// Visit every face once and return a node of the face with the smallest signed area,
/// if any face has area below `-cfg.seed_area_tol`.
///
/// When `out` is given, one node of every such negative face is appended to it.
pub fn find_seed_face_with(
    graph: &mut PlanarGraph,
    mut out: Option<&mut Vec<NodeId>>,
    cfg: &WindingCfg,
) -> Result<Option<NodeId>, BoolError> {
    let threshold = -cfg.seed_area_tol.abs();
    let best = graph.with_mask(|g, visited| {
        let ids: Vec<NodeId> = g.node_ids().collect();
        let mut best: Option<(NodeId, f64)> = None;
        for n in ids {
            if g.has_mask(n, visited) {
                continue;
            }
            let area = g.mark_face_and_area(n, visited);
            if area >= threshold {
                continue;
            }
            if let Some(out) = out.as_deref_mut() {
                out.push(n);
            }
            if best.map_or(true, |(_, a)| area < a) {
                best = Some((n, area));
            }
        }
        best
    })?;
    if let Some((n, area)) = best {
        trace!(seed = n.0, area, "seed face");
    }
    Ok(best.map(|(n, _)| n))
}
