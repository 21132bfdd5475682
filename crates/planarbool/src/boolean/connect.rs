//! Connectivity guard.

use tracing::debug;

use crate::error::BoolError;
use crate::graph::PlanarGraph;
use crate::topology::Regularize;

/// True if a face-by-face flood across mates reaches every live node.
pub fn is_connected(graph: &mut PlanarGraph) -> Result<bool, BoolError> {
    let Some(start) = graph.node_ids().next() else {
        return Ok(true);
    };
    graph.with_mask(|g, visited| {
        g.with_stack(|g, stack| {
            g.set_mask_around_face(start, visited);
            stack.extend(g.face_loop(start));
            while let Some(n) = stack.pop() {
                let m = g.mate(n);
                if g.has_mask(m, visited) {
                    continue;
                }
                g.set_mask_around_face(m, visited);
                stack.extend(g.face_loop(m));
            }
            g.node_ids().all(|n| g.has_mask(n, visited))
        })
    })
}

/// Run `regularizer` if the graph is disconnected. Returns whether it ran.
///
/// The regularizer is trusted; connectivity is not re-checked afterwards.
pub fn ensure_connected<R: Regularize + ?Sized>(
    graph: &mut PlanarGraph,
    regularizer: &mut R,
) -> Result<bool, BoolError> {
    if is_connected(graph)? {
        return Ok(false);
    }
    debug!(nodes = graph.node_count(), "graph disconnected; regularizing");
    regularizer.regularize(graph);
    Ok(true)
}
