//! Edge pruning and mask complement.

use crate::graph::{Mask, NodeId, PlanarGraph};

/// Delete every edge whose two sides agree on `mask`. Returns the number removed.
///
/// Candidates are collected before any deletion, so the result does not depend on the
/// order edges are visited in.
pub fn remove_non_separating_edges(graph: &mut PlanarGraph, mask: Mask) -> usize {
    let doomed: Vec<NodeId> = graph
        .edge_ids()
        .filter(|&n| graph.has_mask(n, mask) == graph.has_mask(graph.mate(n), mask))
        .collect();
    for &n in &doomed {
        graph.delete_edge(n);
    }
    doomed.len()
}

/// Toggle `mask` on every live node.
pub fn complement_mask(graph: &mut PlanarGraph, mask: Mask) {
    let ids: Vec<NodeId> = graph.node_ids().collect();
    for n in ids {
        graph.toggle_mask(n, mask);
    }
}
