//! Graph editing and validation errors.
//!
//! Queries never fail: a miss is an `Option::None` or an empty list. Only the
//! editing entry points and structural validation report errors.
use crate::vertex::VertexId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("vertex {0} cannot be connected to itself")]
    SelfLoop(VertexId),

    #[error("vertex {0} already exists")]
    DuplicateVertex(VertexId),

    /// `u32::MAX` is never a valid id, so the counter cannot wrap.
    #[error("vertex id {0} is out of range")]
    IdSpaceExhausted(VertexId),

    #[error("vertex {vertex} lists unknown neighbor {neighbor}")]
    DanglingNeighbor { vertex: VertexId, neighbor: VertexId },

    #[error("edge {from} -> {to} has no reverse entry")]
    AsymmetricEdge { from: VertexId, to: VertexId },
}
