//! Error types for polygon validation and BSP tree construction.

use thiserror::Error;

/// Errors produced while validating polygons or building a BSP tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BspError {
    /// A polygon was constructed with fewer than 2 vertices.
    ///
    /// Two vertices are the minimum needed to define an edge, and the first
    /// edge of a polygon is what defines its split line.
    #[error("polygon needs at least 2 vertices to define an edge, got {0}")]
    InvalidPolygon(usize),

    /// A split produced a child set that is not smaller than its parent's.
    ///
    /// Splitting must strictly shrink the working set at every node, or
    /// construction would re-derive the same work forever. This fires when
    /// the splitter polygon is allowed back into its own subtree (see
    /// [`BuildOptions::exclude_splitter`](crate::BuildOptions)).
    #[error("split at depth {depth} left {len} polygons in a child set without shrinking it")]
    NonTerminatingSplit { depth: usize, len: usize },
}

/// Convenience alias for results produced by this crate.
pub type BspResult<T> = Result<T, BspError>;
