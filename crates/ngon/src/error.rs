//! Error taxonomy for polygon construction and traversal queries.
//!
//! Every failure surfaces at the violating call; there is no deferred or
//! batched reporting. Binaries typically wrap these in `anyhow` at the edge.

/// Errors produced by [`crate::Polygon`] and [`crate::PolygonCollection`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A regular polygon needs at least 3 edges.
    #[error("polygon requires at least 3 edges, got {0}")]
    TooFewEdges(usize),

    /// Collection circumradius must be non-negative (zero is accepted,
    /// though geometrically degenerate).
    #[error("circumradius must be non-negative, got {0}")]
    NegativeCircumradius(f64),

    /// Single-index access past the produced range, after sign normalization.
    #[error("index {index} out of range for {len} produced polygons")]
    IndexOutOfRange { index: i64, len: usize },

    /// Slice step of zero selects nothing meaningful.
    #[error("slice step must be nonzero")]
    ZeroStep,

    /// Query that needs at least one produced polygon ran on a fresh traversal.
    #[error("no polygons produced yet")]
    EmptyTraversal,
}
