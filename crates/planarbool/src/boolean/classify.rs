//! Depth → exterior classification.

use crate::graph::{Mask, NodeId, PlanarGraph};

/// Region rule applied to winding depths.
///
/// `Intersection` and `Difference` classify in the inverted sense; the orchestrators
/// complement their result once more after simplification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Exterior iff depth <= 0.
    Union,
    /// Exterior iff depth is even.
    Parity,
    /// Exterior iff depth >= 2 (inverted).
    Intersection,
    /// Exterior iff depth >= 1 (inverted); subtrahend loops are wound clockwise.
    Difference,
}

impl Rule {
    /// Classification of one depth; total over all of `i32`.
    #[inline]
    pub fn is_exterior(self, depth: i32) -> bool {
        match self {
            Rule::Union => depth <= 0,
            Rule::Parity => depth.rem_euclid(2) == 0,
            Rule::Intersection => depth >= 2,
            Rule::Difference => depth >= 1,
        }
    }

    #[inline]
    pub fn is_inverted(self) -> bool {
        matches!(self, Rule::Intersection | Rule::Difference)
    }
}

/// Set or clear `exterior` on every node from its depth under `rule`.
///
/// Two-node faces (coincident edge pairs) then take the classification of the proper
/// faces at either end of their run of stacked null faces, when those two agree.
/// Returns the number of exterior nodes.
pub fn classify(graph: &mut PlanarGraph, rule: Rule, exterior: Mask) -> usize {
    let ids: Vec<NodeId> = graph.node_ids().collect();
    for &n in &ids {
        if rule.is_exterior(graph.depth(n)) {
            graph.set_mask(n, exterior);
        } else {
            graph.clear_mask(n, exterior);
        }
    }
    let mut absorbed: Vec<(NodeId, bool)> = Vec::new();
    for &n in &ids {
        let s = graph.fsucc(n);
        // visit each null face once, from its lower node
        if !graph.is_null_face(n) || s < n {
            continue;
        }
        let (Some(a), Some(b)) = (proper_neighbour(graph, n), proper_neighbour(graph, s)) else {
            continue;
        };
        let state = graph.has_mask(a, exterior);
        if state == graph.has_mask(b, exterior) {
            absorbed.push((n, state));
            absorbed.push((s, state));
        }
    }
    for (p, state) in absorbed {
        if state {
            graph.set_mask(p, exterior);
        } else {
            graph.clear_mask(p, exterior);
        }
    }
    ids.iter().filter(|&&n| graph.has_mask(n, exterior)).count()
}

/// First node beyond `n`'s edge that is not on a null face, crossing stacked null faces.
fn proper_neighbour(graph: &PlanarGraph, n: NodeId) -> Option<NodeId> {
    let mut p = graph.mate(n);
    for _ in 0..graph.node_count() {
        if !graph.is_null_face(p) {
            return Some(p);
        }
        p = graph.mate(graph.fsucc(p));
    }
    None
}
