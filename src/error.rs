//! Error types for triangulation operations.

use thiserror::Error;

/// Errors that can occur while building a triangulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// Three vertices are coincident or collinear such that no finite
    /// circumcircle passes through them.
    ///
    /// Raised while computing any circumcircle during the sweep; the whole
    /// triangulation call fails, with no partial result.
    #[error("degenerate triangle: vertices are coincident or collinear")]
    DegenerateTriangle,
}
