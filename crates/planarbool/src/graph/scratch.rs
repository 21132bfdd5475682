//! Mask pool and scratch stacks.
//!
//! Algorithms borrow a mask bit or a node stack for the duration of one call. The scoped
//! forms (`with_mask`, `with_stack`) hand the resource back on every exit path, including
//! early returns and `?` inside the closure.

use super::arena::PlanarGraph;
use super::types::{Mask, NodeId};
use crate::error::BoolError;

impl PlanarGraph {
    /// Take one bit from the pool. The bit is clear on every node when handed out.
    pub fn grab_mask(&mut self) -> Result<Mask, BoolError> {
        if self.mask_free == 0 {
            return Err(BoolError::MaskPoolExhausted);
        }
        let bit = 1u32 << self.mask_free.trailing_zeros();
        self.mask_free &= !bit;
        Ok(Mask(bit))
    }

    /// Clear `m` from every node and return it to the pool.
    pub fn drop_mask(&mut self, m: Mask) {
        debug_assert_eq!(m.0 & !Mask::POOL, 0, "not a pooled mask: {m:?}");
        self.clear_mask_in_graph(m);
        self.mask_free |= m.0 & Mask::POOL;
    }

    /// Number of pool bits still available.
    pub fn free_mask_count(&self) -> u32 {
        self.mask_free.count_ones()
    }

    /// Run `f` with a freshly grabbed mask, dropping it afterwards.
    pub fn with_mask<R>(
        &mut self,
        f: impl FnOnce(&mut PlanarGraph, Mask) -> R,
    ) -> Result<R, BoolError> {
        let m = self.grab_mask()?;
        let out = f(self, m);
        self.drop_mask(m);
        Ok(out)
    }

    /// Run `f` with an empty node stack lent from the pool.
    pub fn with_stack<R>(&mut self, f: impl FnOnce(&mut PlanarGraph, &mut Vec<NodeId>) -> R) -> R {
        let mut stack = self.stacks.pop().unwrap_or_default();
        stack.clear();
        let out = f(self, &mut stack);
        stack.clear();
        self.stacks.push(stack);
        out
    }
}
