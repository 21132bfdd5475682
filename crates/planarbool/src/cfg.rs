//! Tolerances and per-algorithm configuration.
//!
//! Policy
//! - Defaults reproduce the constants the algorithms were tuned with. Callers that need
//!   different values pass a config to the `*_with` entry points; everything else uses
//!   `Default`.

use nalgebra::Vector2;

use crate::graph::Range2;

/// Geometric tolerance held by a graph: `abs + rel * scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-10,
        }
    }
}

impl Tolerance {
    #[inline]
    pub fn new(abs: f64, rel: f64) -> Self {
        Self { abs, rel }
    }

    /// Absolute tolerance for data whose coordinate scale is `scale`.
    #[inline]
    pub fn resolve(&self, scale: f64) -> f64 {
        self.abs.abs() + self.rel.abs() * scale.abs()
    }
}

/// Winding-number pass configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindingCfg {
    /// A face is a seed candidate iff its signed area is below `-seed_area_tol`.
    pub seed_area_tol: f64,
}

impl Default for WindingCfg {
    fn default() -> Self {
        Self { seed_area_tol: 0.0 }
    }
}

/// Default regularizer configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegularizeCfg {
    /// Frame margin as a fraction of the graph range semiperimeter.
    pub frame_margin_frac: f64,
}

impl Default for RegularizeCfg {
    fn default() -> Self {
        Self {
            frame_margin_frac: 0.1,
        }
    }
}

/// Grid overlay configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCfg {
    /// Crossings closer than this fraction of a cell to a lattice line also mark the
    /// neighbouring cell.
    pub near_boundary_frac: f64,
    /// Explicit lattice domain; `None` uses the graph range (or the periods).
    pub domain: Option<Range2>,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            near_boundary_frac: 0.01,
            domain: None,
        }
    }
}

impl GridCfg {
    /// Lattice over the box `[min, max]` regardless of graph contents.
    pub fn with_domain(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        Self {
            domain: Some(Range2::from_corners(min, max)),
            ..Self::default()
        }
    }
}
