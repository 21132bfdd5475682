//! Coincident-vertex merge: cluster, snap, drop zero-length edges, order vertex loops.

use nalgebra::Vector3;
use tracing::debug;

use super::Merge;
use crate::graph::{NodeId, PlanarGraph};

/// Default merge collaborator; see `merge_coincident_vertices`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoincidentVertexMerge;

impl Merge for CoincidentVertexMerge {
    fn merge(&mut self, graph: &mut PlanarGraph) {
        merge_coincident_vertices(graph);
    }
}

const UNASSIGNED: u32 = u32::MAX;

/// Join all nodes whose origins agree within the graph tolerance into shared vertices.
///
/// Nodes are swept in lexical (x, then y) order; each cluster snaps to its first member.
/// Edges whose ends land in the same cluster are deleted. Every vertex loop is then
/// rebuilt in counterclockwise angular order. Returns the number of vertices.
pub fn merge_coincident_vertices(graph: &mut PlanarGraph) -> usize {
    if graph.is_empty() {
        return 0;
    }
    let tol = graph.resolved_tolerance();
    let mut ids: Vec<NodeId> = graph.node_ids().collect();
    ids.sort_by(|&a, &b| {
        let (pa, pb) = (graph.xy(a), graph.xy(b));
        pa.x.total_cmp(&pb.x).then(pa.y.total_cmp(&pb.y))
    });

    let mut cluster_of = vec![UNASSIGNED; graph.nodes.len()];
    let mut clusters: Vec<Vec<NodeId>> = Vec::new();
    for i in 0..ids.len() {
        if cluster_of[ids[i].index()] != UNASSIGNED {
            continue;
        }
        let c = clusters.len() as u32;
        let base = graph.xy(ids[i]);
        let mut members = vec![ids[i]];
        cluster_of[ids[i].index()] = c;
        for &other in &ids[i + 1..] {
            let p = graph.xy(other);
            if p.x - base.x > tol {
                break;
            }
            if cluster_of[other.index()] == UNASSIGNED && (p.y - base.y).abs() <= tol {
                cluster_of[other.index()] = c;
                members.push(other);
            }
        }
        clusters.push(members);
    }

    for members in &clusters {
        let rep = graph.xy(members[0]);
        for &n in &members[1..] {
            let z = graph.xyz(n).z;
            graph.set_xyz(n, Vector3::new(rep.x, rep.y, z));
        }
    }

    let collapsed: Vec<NodeId> = graph
        .edge_ids()
        .filter(|&n| cluster_of[n.index()] == cluster_of[graph.mate(n).index()])
        .collect();
    for &n in &collapsed {
        graph.delete_edge(n);
    }

    let mut outgoing: Vec<NodeId> = Vec::new();
    for members in &clusters {
        outgoing.clear();
        outgoing.extend(members.iter().copied().filter(|&n| graph.is_live(n)));
        if outgoing.is_empty() {
            continue;
        }
        graph.sort_outgoing(&mut outgoing);
        graph.set_vertex_order(&outgoing);
    }
    debug!(
        nodes = ids.len(),
        vertices = clusters.len(),
        collapsed = collapsed.len(),
        tol,
        "merged coincident vertices"
    );
    clusters.len()
}
