//! Per-axis lattice description.

/// One axis of the overlay lattice: `count` cells of width `size` starting at `origin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stride {
    pub origin: f64,
    pub size: f64,
    pub count: usize,
    /// Cell indices wrap modulo `count`.
    pub periodic: bool,
}

impl Stride {
    /// Lattice over `[lo, hi]`, or over `[0, period)` when a period is given.
    ///
    /// `None` for zero cells or a zero (or non-finite) extent.
    pub fn new(lo: f64, hi: f64, count: usize, period: Option<f64>) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let (origin, extent) = match period {
            Some(p) => (0.0, p),
            None => (lo, hi - lo),
        };
        if !(extent.is_finite() && extent > 0.0 && origin.is_finite()) {
            return None;
        }
        Some(Self {
            origin,
            size: extent / count as f64,
            count,
            periodic: period.is_some(),
        })
    }

    /// Coordinate in cell units (cell `i` spans `[i, i + 1)`).
    #[inline]
    pub fn lattice(&self, c: f64) -> f64 {
        (c - self.origin) / self.size
    }

    /// Coordinate of the middle of cell `i`.
    #[inline]
    pub fn center(&self, i: usize) -> f64 {
        self.origin + (i as f64 + 0.5) * self.size
    }

    /// Cell index for a possibly out-of-range lattice index.
    #[inline]
    pub fn index(&self, i: i64) -> Option<usize> {
        let count = self.count as i64;
        if self.periodic {
            Some(i.rem_euclid(count) as usize)
        } else if (0..count).contains(&i) {
            Some(i as usize)
        } else {
            None
        }
    }
}
