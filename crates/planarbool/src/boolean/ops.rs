//! Boolean orchestrators and result queries.

use tracing::{debug, warn};

use super::classify::{classify, Rule};
use super::connect::ensure_connected;
use super::simplify::{complement_mask, remove_non_separating_edges};
use super::winding::winding_number_pass_with;
use crate::cfg::WindingCfg;
use crate::error::BoolError;
use crate::graph::{Mask, NodeId, PlanarGraph};
use crate::topology::{CoincidentVertexMerge, Merge, RayBridge, Regularize};

/// What one orchestrator call did to the graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BooleanSummary {
    /// `None` for a bare complement.
    pub rule: Option<Rule>,
    pub nodes_before: usize,
    pub nodes_after: usize,
    pub edges_removed: usize,
    pub regularized: bool,
    /// Signed area of the seed face; 0 when no pass ran.
    pub seed_area: f64,
}

impl BooleanSummary {
    fn untouched(rule: Option<Rule>, nodes: usize) -> Self {
        Self {
            rule,
            nodes_before: nodes,
            nodes_after: nodes,
            edges_removed: 0,
            regularized: false,
            seed_area: 0.0,
        }
    }
}

/// One face of a classified graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceSummary {
    pub seed: NodeId,
    pub area: f64,
    pub node_count: usize,
}

/// Merge + regularize collaborators together with the winding configuration.
#[derive(Clone, Debug)]
pub struct BooleanEngine<M = CoincidentVertexMerge, R = RayBridge> {
    pub merge: M,
    pub regularize: R,
    pub cfg: WindingCfg,
}

impl<M: Merge + Default, R: Regularize + Default> Default for BooleanEngine<M, R> {
    fn default() -> Self {
        Self {
            merge: M::default(),
            regularize: R::default(),
            cfg: WindingCfg::default(),
        }
    }
}

impl<M: Merge, R: Regularize> BooleanEngine<M, R> {
    pub fn new(merge: M, regularize: R, cfg: WindingCfg) -> Self {
        Self {
            merge,
            regularize,
            cfg,
        }
    }

    pub fn union(&mut self, graph: &mut PlanarGraph) -> Result<BooleanSummary, BoolError> {
        self.apply(graph, Rule::Union)
    }

    pub fn intersection(&mut self, graph: &mut PlanarGraph) -> Result<BooleanSummary, BoolError> {
        self.apply(graph, Rule::Intersection)
    }

    pub fn symmetric_difference(
        &mut self,
        graph: &mut PlanarGraph,
    ) -> Result<BooleanSummary, BoolError> {
        self.apply(graph, Rule::Parity)
    }

    /// Minuend loops counterclockwise, subtrahend loops clockwise.
    pub fn difference(&mut self, graph: &mut PlanarGraph) -> Result<BooleanSummary, BoolError> {
        self.apply(graph, Rule::Difference)
    }

    /// Run the full pipeline for `rule`. An empty graph is a no-op.
    ///
    /// On `NoSeedFace` the graph has been merged (and possibly regularized) but not
    /// classified or pruned.
    pub fn apply(
        &mut self,
        graph: &mut PlanarGraph,
        rule: Rule,
    ) -> Result<BooleanSummary, BoolError> {
        let nodes_before = graph.node_count();
        if graph.is_empty() {
            debug!(?rule, "empty graph; nothing to do");
            return Ok(BooleanSummary::untouched(Some(rule), 0));
        }
        self.merge.merge(graph);
        if graph.is_empty() {
            warn!(?rule, nodes_before, "merge collapsed every edge");
            return Ok(BooleanSummary {
                nodes_before,
                ..BooleanSummary::untouched(Some(rule), 0)
            });
        }
        let regularized = ensure_connected(graph, &mut self.regularize)?;
        let seed = winding_number_pass_with(graph, Mask::ORIGINAL_CURVE, &self.cfg)?;
        let seed_area = graph.face_area(seed);
        let exterior = classify(graph, rule, Mask::EXTERIOR);
        let edges_removed = remove_non_separating_edges(graph, Mask::EXTERIOR);
        if rule.is_inverted() {
            complement_mask(graph, Mask::EXTERIOR);
        }
        let summary = BooleanSummary {
            rule: Some(rule),
            nodes_before,
            nodes_after: graph.node_count(),
            edges_removed,
            regularized,
            seed_area,
        };
        debug!(
            ?rule,
            nodes_before,
            nodes_after = summary.nodes_after,
            exterior,
            edges_removed,
            regularized,
            seed_area,
            "boolean pass"
        );
        Ok(summary)
    }
}

pub fn union(graph: &mut PlanarGraph) -> Result<BooleanSummary, BoolError> {
    BooleanEngine::<CoincidentVertexMerge, RayBridge>::default().union(graph)
}

pub fn intersection(graph: &mut PlanarGraph) -> Result<BooleanSummary, BoolError> {
    BooleanEngine::<CoincidentVertexMerge, RayBridge>::default().intersection(graph)
}

pub fn symmetric_difference(graph: &mut PlanarGraph) -> Result<BooleanSummary, BoolError> {
    BooleanEngine::<CoincidentVertexMerge, RayBridge>::default().symmetric_difference(graph)
}

pub fn difference(graph: &mut PlanarGraph) -> Result<BooleanSummary, BoolError> {
    BooleanEngine::<CoincidentVertexMerge, RayBridge>::default().difference(graph)
}

/// Flip `Mask::EXTERIOR` on every node of a classified graph. Cannot fail.
pub fn complement(graph: &mut PlanarGraph) -> BooleanSummary {
    if graph.is_empty() {
        debug!("empty graph; nothing to complement");
        return BooleanSummary::untouched(None, 0);
    }
    complement_mask(graph, Mask::EXTERIOR);
    BooleanSummary::untouched(None, graph.node_count())
}

/// Faces whose nodes carry no `Mask::EXTERIOR`.
pub fn interior_faces(graph: &mut PlanarGraph) -> Result<Vec<FaceSummary>, BoolError> {
    faces_where(graph, false)
}

/// Faces whose nodes carry `Mask::EXTERIOR`.
pub fn exterior_faces(graph: &mut PlanarGraph) -> Result<Vec<FaceSummary>, BoolError> {
    faces_where(graph, true)
}

fn faces_where(graph: &mut PlanarGraph, exterior: bool) -> Result<Vec<FaceSummary>, BoolError> {
    let seeds = graph.face_seeds()?;
    Ok(seeds
        .into_iter()
        .filter(|&n| graph.has_mask(n, Mask::EXTERIOR) == exterior)
        .map(|n| FaceSummary {
            seed: n,
            area: graph.face_area(n),
            node_count: graph.face_len(n),
        })
        .collect())
}
