use std::io;

use thiserror::Error;

use crate::color::VertexId;

/** errors raised while reading or building an instance. All of them are fatal: no coloring is
attempted on an invalid instance. */
#[derive(Error, Debug)]
pub enum InstanceError {
    /// the instance (or an output file) could not be read/written
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// first line is not `nbNodes nbEdges`
    #[error("malformed header (expected \"nbNodes nbEdges\")")]
    MalformedHeader,
    /// an edge line is not `node1 node2`
    #[error("malformed edge {0} (expected \"node1 node2\")")]
    MalformedEdge(usize),
    /// the number of edge lines does not match the header
    #[error("header announces {expected} edges, found {found}")]
    EdgeCountMismatch {
        /// edges announced in the header
        expected: usize,
        /// edges actually read
        found: usize,
    },
    /// an edge endpoint is not in [0,n)
    #[error("edge {edge}: vertex {vertex} out of range (nb vertices: {n})")]
    VertexOutOfRange {
        /// edge index (0-indexed)
        edge: usize,
        /// faulty endpoint
        vertex: VertexId,
        /// number of vertices
        n: usize,
    },
    /// an edge links a vertex to itself
    #[error("edge {edge}: self loop on vertex {vertex}")]
    SelfLoop {
        /// edge index (0-indexed)
        edge: usize,
        /// looping vertex
        vertex: VertexId,
    },
    /// the two endpoint sequences have different lengths
    #[error("endpoint lists differ in length ({0} vs {1})")]
    LengthMismatch(usize, usize),
    /// the header announces more vertices than can be allocated
    #[error("cannot allocate an instance with {0} vertices")]
    TooManyVertices(usize),
}

/// result type for instance reading/building
pub type Result<T> = std::result::Result<T, InstanceError>;
