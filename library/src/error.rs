//! Error types shared by the graph builder, the engine and the edge-list reader.
//!
//! A disconnected graph is not an error; it is reported as
//! [`MstWeight::Disconnected`](crate::MstWeight::Disconnected).

use thiserror::Error;

/// A graph description the engine refuses to process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint lies outside `[1, num_vertices]`.
    #[error("edge #{edge} references vertex {vertex}, expected 1..={num_vertices}")]
    VertexOutOfRange {
        /// Zero-based position of the edge in the input list.
        edge: usize,
        /// Wide enough for any `usize` endpoint and any negative input value.
        vertex: i128,
        num_vertices: usize,
    },

    /// The requested start vertex lies outside `[1, num_vertices]`.
    #[error("start vertex {vertex} is out of range 1..={num_vertices}")]
    StartOutOfRange { vertex: usize, num_vertices: usize },

    #[error("vertex count must be non-negative, got {0}")]
    NegativeVertexCount(i64),

    #[error("edge count must be non-negative, got {0}")]
    NegativeEdgeCount(i64),

    /// More vertices than the 32-bit row index can address.
    #[error("vertex count {0} exceeds the supported maximum of {max}", max = u32::MAX)]
    TooManyVertices(usize),
}

/// Malformed textual input to [`read_edge_list`](crate::read_edge_list).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("invalid {expected}: {token:?}")]
    InvalidToken {
        expected: &'static str,
        token: String,
    },

    /// The header parsed but describes an impossible graph.
    #[error(transparent)]
    InvalidInput(#[from] GraphError),
}
