//! Construction and surgery primitives: curve insertion, edge split/delete, vertex joins.
//!
//! Every primitive leaves the graph consistent: `mate` is an involution and `fsucc`/`fpred`
//! are inverse permutations over live nodes.

use std::cmp::Ordering;

use nalgebra::{Vector2, Vector3};

use super::arena::PlanarGraph;
use super::types::{Mask, NodeId};
use crate::error::BoolError;

#[inline]
fn lift(p: Vector2<f64>) -> Vector3<f64> {
    Vector3::new(p.x, p.y, 0.0)
}

/// Drop consecutive exact duplicates (and, for loops, a repeated closing point).
fn dedup_points(points: &[Vector2<f64>], closed: bool) -> Vec<Vector2<f64>> {
    let mut pts: Vec<Vector2<f64>> = Vec::with_capacity(points.len());
    for p in points {
        if pts.last() != Some(p) {
            pts.push(*p);
        }
    }
    if closed && pts.len() > 1 && pts.first() == pts.last() {
        pts.pop();
    }
    pts
}

impl PlanarGraph {
    /// Insert a closed loop through `points` and return the node leaving `points[0]`.
    ///
    /// Left side nodes carry `BOUNDARY`; right side nodes carry `BOUNDARY | ORIGINAL_CURVE`.
    /// The loop is its own component until a merge joins it to the rest of the graph.
    pub fn insert_loop(&mut self, points: &[Vector2<f64>]) -> Result<NodeId, BoolError> {
        let pts = dedup_points(points, true);
        if pts.len() < 3 {
            return Err(BoolError::DegenerateInput {
                reason: "closed loop needs at least three distinct points",
            });
        }
        let n = pts.len();
        let (left, right) = self.alloc_chain(&pts, n);
        for i in 0..n {
            let j = (i + 1) % n;
            self.link(left[i], left[j]);
            self.link(right[j], right[i]);
        }
        Ok(left[0])
    }

    /// Insert an open polyline and return the node leaving `points[0]`.
    ///
    /// The two sides form a single face loop that turns around at both ends.
    pub fn insert_polyline(&mut self, points: &[Vector2<f64>]) -> Result<NodeId, BoolError> {
        let pts = dedup_points(points, false);
        if pts.len() < 2 {
            return Err(BoolError::DegenerateInput {
                reason: "polyline needs at least two distinct points",
            });
        }
        let m = pts.len() - 1;
        let (left, right) = self.alloc_chain(&pts, m);
        for i in 0..m - 1 {
            self.link(left[i], left[i + 1]);
            self.link(right[i + 1], right[i]);
        }
        self.link(left[m - 1], right[m - 1]);
        self.link(right[0], left[0]);
        Ok(left[0])
    }

    /// Allocate `count` mate pairs along `pts` (edge i runs from `pts[i]` to `pts[i+1]`).
    fn alloc_chain(&mut self, pts: &[Vector2<f64>], count: usize) -> (Vec<NodeId>, Vec<NodeId>) {
        let mut left = Vec::with_capacity(count);
        let mut right = Vec::with_capacity(count);
        for i in 0..count {
            let j = (i + 1) % pts.len();
            let a = self.alloc_node(lift(pts[i]), Mask::BOUNDARY);
            let b = self.alloc_node(lift(pts[j]), Mask::BOUNDARY | Mask::ORIGINAL_CURVE);
            self.set_mates(a, b);
            left.push(a);
            right.push(b);
        }
        (left, right)
    }

    /// Create an isolated edge from `a` to `b`, both sides carrying `mask`.
    pub fn add_edge(&mut self, a: Vector3<f64>, b: Vector3<f64>, mask: Mask) -> NodeId {
        let n = self.alloc_node(a, mask);
        let m = self.alloc_node(b, mask);
        self.set_mates(n, m);
        self.link(n, m);
        self.link(m, n);
        n
    }

    /// Split the edge of `n` at `xyz`; returns the new node leaving `xyz` in `n`'s direction.
    ///
    /// Both new nodes inherit the masks of the side they extend.
    pub fn split_edge(&mut self, n: NodeId, xyz: Vector3<f64>) -> NodeId {
        let m = self.mate(n);
        let n_next = self.fsucc(n);
        let m_next = self.fsucc(m);
        let n_mask = self.masks(n);
        let m_mask = self.masks(m);
        let n2 = self.alloc_node(xyz, n_mask);
        let m2 = self.alloc_node(xyz, m_mask);
        // n: a -> h, n2: h -> b, m: b -> h, m2: h -> a
        self.set_mates(n, m2);
        self.set_mates(n2, m);
        // also correct at dangling ends, where n_next == m or m_next == n
        self.link(n, n2);
        self.link(n2, n_next);
        self.link(m, m2);
        self.link(m2, m_next);
        n2
    }

    /// Splice the vertex loops of `a` and `b` (joins two loops, or splits one). Self-inverse.
    pub fn vertex_twist(&mut self, a: NodeId, b: NodeId) {
        let pa = self.fpred(a);
        let pb = self.fpred(b);
        self.link(pa, b);
        self.link(pb, a);
    }

    /// Make `outgoing` (counterclockwise order, all at one point) a single vertex loop.
    ///
    /// The face between consecutive outgoing nodes `o[i]` and `o[i+1]` is entered along
    /// `mate(o[i+1])` and leaves along `o[i]`.
    pub fn set_vertex_order(&mut self, outgoing: &[NodeId]) {
        let k = outgoing.len();
        for i in 0..k {
            let incoming = self.mate(outgoing[(i + 1) % k]);
            self.link(incoming, outgoing[i]);
        }
    }

    /// Insert the lone node `n` into the vertex loop of `at`, keeping angular order.
    pub fn insert_into_vertex(&mut self, at: NodeId, n: NodeId) {
        debug_assert_eq!(self.vsucc(n), n, "node must be alone at its vertex");
        let mut outgoing: Vec<NodeId> = self.vertex_loop(at).collect();
        outgoing.push(n);
        self.sort_outgoing(&mut outgoing);
        self.set_vertex_order(&outgoing);
    }

    /// Remove the edge of `n` and recycle both of its nodes.
    pub fn delete_edge(&mut self, n: NodeId) {
        let m = self.mate(n);
        let pn = self.fpred(n);
        let nn = self.fsucc(n);
        let pm = self.fpred(m);
        let nm = self.fsucc(m);
        match (nn == m, nm == n) {
            (true, true) => {}
            (true, false) => self.link(pn, nm),
            (false, true) => self.link(pm, nn),
            (false, false) => {
                self.link(pn, nm);
                self.link(pm, nn);
            }
        }
        self.free_node(n);
        self.free_node(m);
    }

    /// Direction angle of the edge leaving through `n`, in `(-pi, pi]`.
    #[inline]
    pub fn outgoing_angle(&self, n: NodeId) -> f64 {
        let d = self.xy(self.mate(n)) - self.xy(n);
        d.y.atan2(d.x)
    }

    /// Sort nodes sharing one origin counterclockwise by outgoing direction.
    ///
    /// Coincident edges tie-break on edge id, ascending when the edge leaves its
    /// lexically smaller endpoint and descending otherwise, so that two coincident edges
    /// appear in opposite orders at their two ends and bound a two-node face.
    pub fn sort_outgoing(&self, outgoing: &mut [NodeId]) {
        let key = |n: NodeId| {
            let m = self.mate(n);
            let edge = n.min(m).0 as i64;
            let (a, b) = (self.xy(n), self.xy(m));
            let forward = (a.x, a.y).partial_cmp(&(b.x, b.y)) != Some(Ordering::Greater);
            (self.outgoing_angle(n), if forward { edge } else { -edge })
        };
        outgoing.sort_by(|&p, &q| {
            let (ap, tp) = key(p);
            let (aq, tq) = key(q);
            ap.total_cmp(&aq).then(tp.cmp(&tq))
        });
    }
}
