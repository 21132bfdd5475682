//! Node records, mask bits, periods and 2D ranges.
//!
//! Kept small and explicit so `arena`, `build` and `coords` read as plain index
//! manipulation.

use nalgebra::{Vector2, Vector3};

/// Index of a node (directed half-edge) in its graph's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Bit set of per-node flags.
///
/// The low 16 bits are fixed, named masks; the high 16 bits are lent out by the
/// graph's mask pool (`PlanarGraph::grab_mask`, `PlanarGraph::with_mask`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mask(pub u32);

impl Mask {
    pub const NONE: Mask = Mask(0);
    /// Both sides of every inserted curve edge.
    pub const BOUNDARY: Mask = Mask(1 << 0);
    /// Right-hand side of every inserted curve edge; the default crossing mask.
    pub const ORIGINAL_CURVE: Mask = Mask(1 << 1);
    /// Side classified outside the Boolean result.
    pub const EXTERIOR: Mask = Mask(1 << 2);
    /// Frame and bridge edges added by regularization.
    pub const AUXILIARY: Mask = Mask(1 << 3);
    /// Connector edges synthesized by the grid overlay.
    pub const GRID: Mask = Mask(1 << 4);
    /// Caller-owned bits that no algorithm in this crate touches.
    pub const USER_0: Mask = Mask(1 << 8);
    pub const USER_1: Mask = Mask(1 << 9);
    pub const USER_2: Mask = Mask(1 << 10);
    pub const USER_3: Mask = Mask(1 << 11);

    /// Bits reserved for the pool.
    pub(crate) const POOL: u32 = 0xFFFF_0000;

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
    #[inline]
    pub fn contains(self, other: Mask) -> bool {
        self.0 & other.0 == other.0
    }
    #[inline]
    pub fn intersects(self, other: Mask) -> bool {
        self.0 & other.0 != 0
    }
}

impl std::ops::BitOr for Mask {
    type Output = Mask;
    #[inline]
    fn bitor(self, rhs: Mask) -> Mask {
        Mask(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Mask {
    #[inline]
    fn bitor_assign(&mut self, rhs: Mask) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for Mask {
    type Output = Mask;
    #[inline]
    fn bitand(self, rhs: Mask) -> Mask {
        Mask(self.0 & rhs.0)
    }
}

impl std::ops::Not for Mask {
    type Output = Mask;
    #[inline]
    fn not(self) -> Mask {
        Mask(!self.0)
    }
}

/// One directed half-edge.
///
/// Invariants (live nodes):
/// - `mate(mate(n)) == n`, and `fpred(fsucc(n)) == n`.
/// - `xyz` is the origin of the half-edge; its destination is `xyz` of `fsucc`.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) xyz: Vector3<f64>,
    pub(crate) mask: Mask,
    pub(crate) fsucc: NodeId,
    pub(crate) fpred: NodeId,
    pub(crate) mate: NodeId,
    pub(crate) depth: i32,
    pub(crate) live: bool,
}

/// Optional period per axis; a periodic axis spans `[0, period)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Periods {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl Periods {
    #[inline]
    pub fn none() -> Self {
        Self::default()
    }
    #[inline]
    pub fn is_periodic(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }
}

/// Axis-aligned 2D range; `min > max` on either axis means null.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Default for Range2 {
    fn default() -> Self {
        Self::null()
    }
}

impl Range2 {
    pub fn null() -> Self {
        Self {
            min: Vector2::new(f64::INFINITY, f64::INFINITY),
            max: Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn from_corners(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self {
            min: Vector2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vector2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    #[inline]
    pub fn extend(&mut self, p: Vector2<f64>) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Width plus height; zero for a null range.
    #[inline]
    pub fn semiperimeter(&self) -> f64 {
        if self.is_null() {
            0.0
        } else {
            (self.max.x - self.min.x) + (self.max.y - self.min.y)
        }
    }

    #[inline]
    pub fn extent(&self) -> Vector2<f64> {
        if self.is_null() {
            Vector2::zeros()
        } else {
            self.max - self.min
        }
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        !self.is_null()
            && p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
    }
}
