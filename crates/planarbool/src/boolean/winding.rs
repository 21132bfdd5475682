//! Winding-number pass: stamp every face with its signed enclosure depth.

use tracing::trace;

use super::seed::find_seed_face_with;
use crate::cfg::WindingCfg;
use crate::error::BoolError;
use crate::graph::{Mask, NodeId, PlanarGraph};

/// `winding_number_pass_with` using `WindingCfg::default()`.
pub fn winding_number_pass(graph: &mut PlanarGraph, crossing: Mask) -> Result<NodeId, BoolError> {
    winding_number_pass_with(graph, crossing, &WindingCfg::default())
}

/// Flood from the seed face (depth 0) across every edge, returning the seed node.
///
/// Stepping from node `n` into the face of its mate changes depth by
/// `[crossing on n] - [crossing on mate]`. The graph must be connected and free of
/// unresolved crossings; faces the flood cannot reach keep their previous depth.
///
/// Fails with `NoSeedFace` when no face has negative area; the graph is left untouched.
pub fn winding_number_pass_with(
    graph: &mut PlanarGraph,
    crossing: Mask,
    cfg: &WindingCfg,
) -> Result<NodeId, BoolError> {
    let seed = find_seed_face_with(graph, None, cfg)?.ok_or(BoolError::NoSeedFace)?;
    let faces = graph.with_mask(|g, visited| {
        g.with_stack(|g, stack| {
            g.set_depth_around_face(seed, 0);
            g.set_mask_around_face(seed, visited);
            stack.extend(g.face_loop(seed));
            let mut faces = 1usize;
            while let Some(n) = stack.pop() {
                let m = g.mate(n);
                if g.has_mask(m, visited) {
                    continue;
                }
                let depth = g.depth(n) + i32::from(g.has_mask(n, crossing))
                    - i32::from(g.has_mask(m, crossing));
                g.set_depth_around_face(m, depth);
                g.set_mask_around_face(m, visited);
                stack.extend(g.face_loop(m));
                faces += 1;
            }
            faces
        })
    })?;
    trace!(seed = seed.0, faces, "winding pass");
    Ok(seed)
}
