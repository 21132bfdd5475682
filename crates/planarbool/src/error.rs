//! Error types for graph construction and Boolean operations.

use thiserror::Error;

/// Errors surfaced by planar-graph algorithms.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoolError {
    /// No face has negative signed area, so there is no unbounded face to seed depths from.
    #[error("no negative-area face: input does not bound a planar region")]
    NoSeedFace,

    /// Every pooled mask bit is already lent out.
    #[error("mask pool exhausted")]
    MaskPoolExhausted,

    /// Input geometry cannot form the requested structure.
    #[error("degenerate input: {reason}")]
    DegenerateInput {
        /// What was wrong with the input.
        reason: &'static str,
    },
}
