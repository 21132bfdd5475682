//! Coordinate queries over faces, edges and the whole graph.

use nalgebra::{Vector2, Vector3};

use super::arena::PlanarGraph;
use super::types::{Mask, NodeId, Range2};
use crate::error::BoolError;

/// Coordinate axis selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    pub fn of(self, p: Vector2<f64>) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }
}

impl PlanarGraph {
    /// Signed (shoelace) area of the face through `start`; counterclockwise is positive.
    /// Faces with fewer than three nodes have area exactly zero.
    pub fn face_area(&self, start: NodeId) -> f64 {
        if self.fsucc(self.fsucc(start)) == start {
            return 0.0;
        }
        let mut area = 0.0;
        for p in self.face_loop(start) {
            let a = self.xy(p);
            let b = self.xy(self.fsucc(p));
            area -= (b.x - a.x) * (a.y + b.y);
        }
        0.5 * area
    }

    /// Face area, setting `mask` on every node of the face on the way round.
    pub fn mark_face_and_area(&mut self, start: NodeId, mask: Mask) -> f64 {
        let mut area = 0.0;
        let mut p = start;
        loop {
            let q = self.fsucc(p);
            let a = self.xy(p);
            let b = self.xy(q);
            area -= (b.x - a.x) * (a.y + b.y);
            self.set_mask(p, mask);
            p = q;
            if p == start {
                break;
            }
        }
        0.5 * area
    }

    /// Area centroid and signed area of a face (fan triangulation from `start`).
    /// `None` for faces of zero area.
    pub fn face_centroid(&self, start: NodeId) -> Option<(Vector2<f64>, f64)> {
        let origin = self.xy(start);
        let mut area2 = 0.0;
        let mut sum = Vector2::zeros();
        let mut p0 = self.fsucc(start);
        let mut p1 = self.fsucc(p0);
        while p1 != start {
            let u = self.xy(p0) - origin;
            let v = self.xy(p1) - origin;
            let da = u.x * v.y - u.y * v.x;
            sum += da * (u + v) / 3.0;
            area2 += da;
            p0 = p1;
            p1 = self.fsucc(p1);
        }
        if area2 == 0.0 {
            return None;
        }
        Some((origin + sum / area2, 0.5 * area2))
    }

    /// xy range of the nodes of one face.
    pub fn face_range(&self, start: NodeId) -> Range2 {
        let mut range = Range2::null();
        for p in self.face_loop(start) {
            range.extend(self.xy(p));
        }
        range
    }

    /// xy range of every live node.
    pub fn graph_range(&self) -> Range2 {
        let mut range = Range2::null();
        for n in self.node_ids() {
            range.extend(self.xy(n));
        }
        range
    }

    /// Absolute coordinate tolerance for this graph's data scale.
    pub fn resolved_tolerance(&self) -> f64 {
        self.tol.resolve(self.graph_range().semiperimeter())
    }

    /// Coordinates around a face, starting at `start`.
    pub fn face_coordinates(&self, start: NodeId) -> Vec<Vector3<f64>> {
        self.face_loop(start).map(|p| self.xyz(p)).collect()
    }

    /// Cross product of `n0 -> n1` and `n1 -> n2` (xy only).
    pub fn cross(&self, n0: NodeId, n1: NodeId, n2: NodeId) -> f64 {
        let u = self.xy(n1) - self.xy(n0);
        let v = self.xy(n2) - self.xy(n1);
        u.x * v.y - u.y * v.x
    }

    /// True if the face turns strictly left at `n`.
    pub fn is_strict_left_turn(&self, n: NodeId) -> bool {
        self.cross(self.fpred(n), n, self.fsucc(n)) > 0.0
    }

    /// True if both ends of the edge leaving `n` lie in `[cmin, cmax]` on `axis`.
    pub fn is_edge_in_band(&self, n: NodeId, axis: Axis, cmin: f64, cmax: f64) -> bool {
        let inside = |c: f64| c >= cmin && c <= cmax;
        inside(axis.of(self.xy(n))) && inside(axis.of(self.xy(self.fsucc(n))))
    }

    /// Set `mask` on every node whose edge lies entirely in the band; returns the count.
    pub fn mark_edges_in_band(&mut self, axis: Axis, cmin: f64, cmax: f64, mask: Mask) -> usize {
        let hits: Vec<NodeId> = self
            .node_ids()
            .filter(|&n| self.is_edge_in_band(n, axis, cmin, cmax))
            .collect();
        for &n in &hits {
            self.set_mask(n, mask);
        }
        hits.len()
    }

    /// One node from every face loop, in arena order of first discovery.
    pub fn face_seeds(&mut self) -> Result<Vec<NodeId>, BoolError> {
        self.with_mask(|g, visited| {
            let ids: Vec<NodeId> = g.node_ids().collect();
            let mut seeds = Vec::new();
            for n in ids {
                if !g.has_mask(n, visited) {
                    g.set_mask_around_face(n, visited);
                    seeds.push(n);
                }
            }
            seeds
        })
    }
}
