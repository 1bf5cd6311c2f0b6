//! Error types for the pathfinding engine.
//!
//! There is exactly one failure kind: a query that exhausts its frontier
//! without reaching the destination. A walled-off destination is a normal,
//! expected outcome and is reported as a value, never a panic.

use glam::IVec2;

/// Returned when no sequence of unblocked steps connects the source to the
/// destination, including the degenerate cases where either endpoint is
/// blocked or off the grid.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no path from ({}, {}) to ({}, {})", from.x, from.y, to.x, to.y)]
pub struct NoPathFound {
    /// The source coordinate of the failed query.
    pub from: IVec2,
    /// The destination coordinate of the failed query.
    pub to: IVec2,
}

/// Result type for path queries.
pub type SearchResult<T> = Result<T, NoPathFound>;
