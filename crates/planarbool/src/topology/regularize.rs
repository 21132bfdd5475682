//! Leftward ray bridging of disconnected components.
//!
//! Each component is joined to whatever lies directly to the left of its lowest-left
//! vertex. An enclosing frame loop guarantees that every ray finds something.
//!
//! Ray queries go through `YBands`, a bucket index of edges by y extent, so a ray only
//! tests edges whose band contains it. Edges spanning most of the range land in most
//! bands; inputs made mostly of such edges still cost components × edges.

use nalgebra::{Vector2, Vector3};
use tracing::debug;

use super::Regularize;
use crate::cfg::RegularizeCfg;
use crate::graph::{Mask, NodeId, PlanarGraph};

const UNLABELED: u32 = u32::MAX;

/// Default regularization collaborator.
#[derive(Clone, Copy, Debug, Default)]
pub struct RayBridge {
    pub cfg: RegularizeCfg,
}

impl RayBridge {
    pub fn new(cfg: RegularizeCfg) -> Self {
        Self { cfg }
    }
}

impl Regularize for RayBridge {
    fn regularize(&mut self, graph: &mut PlanarGraph) {
        bridge_components(graph, &self.cfg);
    }
}

/// Number of connected components (flood over `fsucc` and `mate`).
pub fn component_count(graph: &PlanarGraph) -> usize {
    label_components(graph).1
}

/// Component label per arena slot; dead slots stay `UNLABELED`.
fn label_components(graph: &PlanarGraph) -> (Vec<u32>, usize) {
    let mut labels = vec![UNLABELED; graph.nodes.len()];
    let mut stack: Vec<NodeId> = Vec::new();
    let mut count = 0u32;
    for n in graph.node_ids() {
        if labels[n.index()] != UNLABELED {
            continue;
        }
        labels[n.index()] = count;
        stack.push(n);
        while let Some(p) = stack.pop() {
            for q in [graph.fsucc(p), graph.mate(p)] {
                if labels[q.index()] == UNLABELED {
                    labels[q.index()] = count;
                    stack.push(q);
                }
            }
        }
        count += 1;
    }
    (labels, count as usize)
}

#[inline]
fn lex_less(a: Vector2<f64>, b: Vector2<f64>) -> bool {
    a.x < b.x || (a.x == b.x && a.y < b.y)
}

/// x where the horizontal line through `p` meets segment `ab`, if strictly left of `p`.
fn leftward_hit(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> Option<f64> {
    if a.y == b.y {
        return None;
    }
    let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
    if p.y < lo.y || p.y > hi.y {
        return None;
    }
    let t = (p.y - lo.y) / (hi.y - lo.y);
    let x = lo.x + t * (hi.x - lo.x);
    (x < p.x).then_some(x)
}

/// Non-horizontal edges bucketed into equal-height bands over a fixed y range.
struct YBands {
    lo: f64,
    height: f64,
    bands: Vec<Vec<NodeId>>,
}

impl YBands {
    fn new(lo: f64, hi: f64, count: usize) -> Self {
        let count = count.max(1);
        let height = (hi - lo) / count as f64;
        let height = if height.is_finite() && height > 0.0 { height } else { f64::INFINITY };
        Self {
            lo,
            height,
            bands: vec![Vec::new(); count],
        }
    }

    fn band(&self, y: f64) -> usize {
        let b = ((y - self.lo) / self.height).floor();
        if b.is_nan() || b < 0.0 {
            0
        } else {
            (b as usize).min(self.bands.len() - 1)
        }
    }

    fn insert(&mut self, graph: &PlanarGraph, e: NodeId) {
        let (a, b) = (graph.xy(e).y, graph.xy(graph.mate(e)).y);
        if a == b {
            return;
        }
        let (b0, b1) = (self.band(a.min(b)), self.band(a.max(b)));
        for band in &mut self.bands[b0..=b1] {
            band.push(e);
        }
    }

    fn near(&self, y: f64) -> &[NodeId] {
        &self.bands[self.band(y)]
    }
}

fn insert_frame(graph: &mut PlanarGraph, cfg: &RegularizeCfg) -> Option<NodeId> {
    let range = graph.graph_range();
    let size = range.semiperimeter();
    let margin = if size > 0.0 {
        cfg.frame_margin_frac.abs().max(f64::EPSILON) * size
    } else {
        1.0
    };
    let (lo, hi) = (range.min.add_scalar(-margin), range.max.add_scalar(margin));
    let corners = [
        lo,
        Vector2::new(hi.x, lo.y),
        hi,
        Vector2::new(lo.x, hi.y),
    ];
    let start = graph.insert_loop(&corners).ok()?;
    let nodes: Vec<NodeId> = graph.face_loop(start).collect();
    for n in nodes {
        let m = graph.mate(n);
        for side in [n, m] {
            graph.clear_mask(side, Mask::BOUNDARY | Mask::ORIGINAL_CURVE);
            graph.set_mask(side, Mask::AUXILIARY);
        }
    }
    Some(start)
}

/// Bridge every component to its left neighbour; returns the number of bridges added.
pub(crate) fn bridge_components(graph: &mut PlanarGraph, cfg: &RegularizeCfg) -> usize {
    let (mut labels, count) = label_components(graph);
    if count <= 1 {
        return 0;
    }

    let mut leftmost: Vec<Option<NodeId>> = vec![None; count];
    for n in graph.node_ids() {
        let slot = &mut leftmost[labels[n.index()] as usize];
        match *slot {
            Some(best) if !lex_less(graph.xy(n), graph.xy(best)) => {}
            _ => *slot = Some(n),
        }
    }

    let Some(frame) = insert_frame(graph, cfg) else {
        return 0;
    };
    labels.resize(graph.nodes.len(), UNLABELED);
    let frame_label = count as u32;
    for n in graph.face_loop(frame).collect::<Vec<_>>() {
        labels[n.index()] = frame_label;
        labels[graph.mate(n).index()] = frame_label;
    }

    let mut order: Vec<(u32, NodeId)> = leftmost
        .iter()
        .enumerate()
        .filter_map(|(c, n)| n.map(|n| (c as u32, n)))
        .collect();
    order.sort_by(|a, b| {
        let (pa, pb) = (graph.xy(a.1), graph.xy(b.1));
        pb.x.total_cmp(&pa.x).then(pb.y.total_cmp(&pa.y))
    });

    let range = graph.graph_range();
    let mut index = YBands::new(range.min.y, range.max.y, graph.edge_count());
    for e in graph.edge_ids() {
        index.insert(graph, e);
    }

    let tol = graph.resolved_tolerance();
    let mut bridges = 0;
    for (label, from) in order {
        let p = graph.xy(from);
        let mut best: Option<(NodeId, f64)> = None;
        for &e in index.near(p.y) {
            if labels[e.index()] == label {
                continue;
            }
            let Some(x) = leftward_hit(p, graph.xy(e), graph.xy(graph.mate(e))) else {
                continue;
            };
            if best.map_or(true, |(_, bx)| x > bx) {
                best = Some((e, x));
            }
        }
        let Some((edge, x)) = best else {
            continue;
        };

        let hit = Vector2::new(x, p.y);
        let target_label = labels[edge.index()];
        let target = if (graph.xy(edge) - hit).norm() <= tol {
            edge
        } else if (graph.xy(graph.mate(edge)) - hit).norm() <= tol {
            graph.mate(edge)
        } else {
            let z = graph.xyz(edge).z;
            let n2 = graph.split_edge(edge, Vector3::new(hit.x, hit.y, z));
            labels.resize(graph.nodes.len(), UNLABELED);
            labels[n2.index()] = target_label;
            labels[graph.mate(edge).index()] = target_label;
            index.insert(graph, n2);
            n2
        };

        let u = graph.add_edge(graph.xyz(target), graph.xyz(from), Mask::AUXILIARY);
        let w = graph.mate(u);
        labels.resize(graph.nodes.len(), UNLABELED);
        labels[u.index()] = target_label;
        labels[w.index()] = target_label;
        graph.insert_into_vertex(target, u);
        graph.insert_into_vertex(from, w);
        index.insert(graph, u);
        bridges += 1;
    }
    debug!(components = count, bridges, "bridged disconnected components");
    bridges
}
