//! Arena storage, node access, traversal iterators and mask helpers.

use nalgebra::{Vector2, Vector3};

use super::types::{Mask, Node, NodeId, Periods};
use crate::cfg::Tolerance;

/// Half-edge graph owning all of its nodes.
///
/// Nodes live in one `Vec` and are addressed by `NodeId`. Deleted nodes go onto a free
/// list and are recycled by later insertions; the whole arena is released with the graph.
#[derive(Clone, Debug)]
pub struct PlanarGraph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) free: Vec<NodeId>,
    pub(crate) live: usize,
    pub(crate) tol: Tolerance,
    pub(crate) periods: Periods,
    /// Pool bits currently available for `grab_mask`.
    pub(crate) mask_free: u32,
    pub(crate) stacks: Vec<Vec<NodeId>>,
}

impl Default for PlanarGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanarGraph {
    pub fn new() -> Self {
        Self::with_tolerance(Tolerance::default())
    }

    pub fn with_tolerance(tol: Tolerance) -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            live: 0,
            tol,
            periods: Periods::none(),
            mask_free: Mask::POOL,
            stacks: Vec::new(),
        }
    }

    #[inline]
    pub fn tolerance(&self) -> Tolerance {
        self.tol
    }
    #[inline]
    pub fn set_tolerance(&mut self, tol: Tolerance) {
        self.tol = tol;
    }
    #[inline]
    pub fn periods(&self) -> Periods {
        self.periods
    }
    #[inline]
    pub fn set_periods(&mut self, periods: Periods) {
        self.periods = periods;
    }

    /// Number of live nodes (twice the number of edges).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.live
    }
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.live / 2
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
    #[inline]
    pub fn is_live(&self, n: NodeId) -> bool {
        self.nodes.get(n.index()).is_some_and(|node| node.live)
    }

    /// Live node ids in arena order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.live)
            .map(|(i, _)| NodeId(i as u32))
    }

    /// One node per undirected edge (the lower id of each mate pair).
    pub fn edge_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.node_ids().filter(move |&n| n < self.mate(n))
    }

    // --- allocation -------------------------------------------------------

    /// Allocate a self-linked node; callers wire `fsucc`/`fpred`/`mate`.
    pub(crate) fn alloc_node(&mut self, xyz: Vector3<f64>, mask: Mask) -> NodeId {
        let node = |id: NodeId| Node {
            xyz,
            mask,
            fsucc: id,
            fpred: id,
            mate: id,
            depth: 0,
            live: true,
        };
        self.live += 1;
        if let Some(id) = self.free.pop() {
            self.nodes[id.index()] = node(id);
            id
        } else {
            let id = NodeId(self.nodes.len() as u32);
            self.nodes.push(node(id));
            id
        }
    }

    pub(crate) fn free_node(&mut self, n: NodeId) {
        let node = &mut self.nodes[n.index()];
        debug_assert!(node.live, "double free of {n:?}");
        node.live = false;
        node.mask = Mask::NONE;
        self.live -= 1;
        self.free.push(n);
    }

    /// Set `fsucc(a) = b` and `fpred(b) = a`.
    #[inline]
    pub(crate) fn link(&mut self, a: NodeId, b: NodeId) {
        self.nodes[a.index()].fsucc = b;
        self.nodes[b.index()].fpred = a;
    }

    #[inline]
    pub(crate) fn set_mates(&mut self, a: NodeId, b: NodeId) {
        self.nodes[a.index()].mate = b;
        self.nodes[b.index()].mate = a;
    }

    // --- node access ------------------------------------------------------

    #[inline]
    pub fn xyz(&self, n: NodeId) -> Vector3<f64> {
        self.nodes[n.index()].xyz
    }
    #[inline]
    pub fn xy(&self, n: NodeId) -> Vector2<f64> {
        self.nodes[n.index()].xyz.xy()
    }
    #[inline]
    pub fn set_xyz(&mut self, n: NodeId, xyz: Vector3<f64>) {
        self.nodes[n.index()].xyz = xyz;
    }
    #[inline]
    pub fn fsucc(&self, n: NodeId) -> NodeId {
        self.nodes[n.index()].fsucc
    }
    #[inline]
    pub fn fpred(&self, n: NodeId) -> NodeId {
        self.nodes[n.index()].fpred
    }
    #[inline]
    pub fn mate(&self, n: NodeId) -> NodeId {
        self.nodes[n.index()].mate
    }
    /// Next outgoing node around the origin of `n` (clockwise).
    #[inline]
    pub fn vsucc(&self, n: NodeId) -> NodeId {
        self.fsucc(self.mate(n))
    }
    #[inline]
    pub fn vpred(&self, n: NodeId) -> NodeId {
        self.mate(self.fpred(n))
    }
    #[inline]
    pub fn depth(&self, n: NodeId) -> i32 {
        self.nodes[n.index()].depth
    }
    #[inline]
    pub fn set_depth(&mut self, n: NodeId, depth: i32) {
        self.nodes[n.index()].depth = depth;
    }
    #[inline]
    pub fn masks(&self, n: NodeId) -> Mask {
        self.nodes[n.index()].mask
    }

    // --- traversal --------------------------------------------------------

    /// Nodes of the face loop through `start`, beginning at `start`.
    pub fn face_loop(&self, start: NodeId) -> FaceLoop<'_> {
        FaceLoop {
            graph: self,
            start,
            current: start,
            done: false,
        }
    }

    /// Outgoing nodes around the origin of `start`, beginning at `start`.
    pub fn vertex_loop(&self, start: NodeId) -> VertexLoop<'_> {
        VertexLoop {
            graph: self,
            start,
            current: start,
            done: false,
        }
    }

    #[inline]
    pub fn face_len(&self, start: NodeId) -> usize {
        self.face_loop(start).count()
    }

    /// True for a two-node face loop (coincident edge pair).
    #[inline]
    pub fn is_null_face(&self, n: NodeId) -> bool {
        let s = self.fsucc(n);
        s != n && self.fsucc(s) == n
    }

    // --- masks ------------------------------------------------------------

    #[inline]
    pub fn has_mask(&self, n: NodeId, m: Mask) -> bool {
        self.nodes[n.index()].mask.intersects(m)
    }
    #[inline]
    pub fn set_mask(&mut self, n: NodeId, m: Mask) {
        self.nodes[n.index()].mask |= m;
    }
    #[inline]
    pub fn clear_mask(&mut self, n: NodeId, m: Mask) {
        self.nodes[n.index()].mask = self.nodes[n.index()].mask & !m;
    }
    #[inline]
    pub fn toggle_mask(&mut self, n: NodeId, m: Mask) {
        self.nodes[n.index()].mask = Mask(self.nodes[n.index()].mask.0 ^ m.0);
    }

    pub fn set_mask_around_edge(&mut self, n: NodeId, m: Mask) {
        let mate = self.mate(n);
        self.set_mask(n, m);
        self.set_mask(mate, m);
    }

    pub fn clear_mask_around_edge(&mut self, n: NodeId, m: Mask) {
        let mate = self.mate(n);
        self.clear_mask(n, m);
        self.clear_mask(mate, m);
    }

    pub fn set_mask_around_face(&mut self, start: NodeId, m: Mask) {
        let mut p = start;
        loop {
            self.set_mask(p, m);
            p = self.fsucc(p);
            if p == start {
                break;
            }
        }
    }

    pub fn clear_mask_around_face(&mut self, start: NodeId, m: Mask) {
        let mut p = start;
        loop {
            self.clear_mask(p, m);
            p = self.fsucc(p);
            if p == start {
                break;
            }
        }
    }

    pub fn set_mask_around_vertex(&mut self, start: NodeId, m: Mask) {
        let mut p = start;
        loop {
            self.set_mask(p, m);
            p = self.vsucc(p);
            if p == start {
                break;
            }
        }
    }

    pub fn clear_mask_around_vertex(&mut self, start: NodeId, m: Mask) {
        let mut p = start;
        loop {
            self.clear_mask(p, m);
            p = self.vsucc(p);
            if p == start {
                break;
            }
        }
    }

    pub fn count_mask_around_face(&self, start: NodeId, m: Mask) -> usize {
        self.face_loop(start).filter(|&p| self.has_mask(p, m)).count()
    }

    pub fn count_mask_around_vertex(&self, start: NodeId, m: Mask) -> usize {
        self.vertex_loop(start)
            .filter(|&p| self.has_mask(p, m))
            .count()
    }

    pub fn find_mask_around_face(&self, start: NodeId, m: Mask) -> Option<NodeId> {
        self.face_loop(start).find(|&p| self.has_mask(p, m))
    }

    pub fn find_mask_around_vertex(&self, start: NodeId, m: Mask) -> Option<NodeId> {
        self.vertex_loop(start).find(|&p| self.has_mask(p, m))
    }

    pub fn set_depth_around_face(&mut self, start: NodeId, depth: i32) {
        let mut p = start;
        loop {
            self.set_depth(p, depth);
            p = self.fsucc(p);
            if p == start {
                break;
            }
        }
    }

    /// Clear `m` on every node in the arena (live or not).
    pub fn clear_mask_in_graph(&mut self, m: Mask) {
        for node in &mut self.nodes {
            node.mask = node.mask & !m;
        }
    }
}

/// Iterator over a face loop (follows `fsucc`).
pub struct FaceLoop<'a> {
    graph: &'a PlanarGraph,
    start: NodeId,
    current: NodeId,
    done: bool,
}

impl Iterator for FaceLoop<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.done {
            return None;
        }
        let n = self.current;
        self.current = self.graph.fsucc(n);
        if self.current == self.start {
            self.done = true;
        }
        Some(n)
    }
}

/// Iterator over a vertex loop (follows `vsucc = fsucc(mate(n))`).
pub struct VertexLoop<'a> {
    graph: &'a PlanarGraph,
    start: NodeId,
    current: NodeId,
    done: bool,
}

impl Iterator for VertexLoop<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.done {
            return None;
        }
        let n = self.current;
        self.current = self.graph.vsucc(n);
        if self.current == self.start {
            self.done = true;
        }
        Some(n)
    }
}
