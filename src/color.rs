use std::fmt::Debug;
use std::ops::Range;

use bit_set::BitSet;

/** Vertex Id */
pub type VertexId = usize;

/** Coloring of a graph: colors[v] is the color of vertex v (colors start at 0) */
pub type Coloring = Vec<usize>;

/** models a Graph Coloring instance */
pub trait ColoringInstance: Debug {
    /// number of vertices
    fn nb_vertices(&self) -> usize;

    /// number of (distinct) edges
    fn nb_edges(&self) -> usize;

    /// iterator over the vertex ids
    fn vertices(&self) -> Range<VertexId> { 0..self.nb_vertices() }

    /// vertices adjacent to u (sorted, no duplicates)
    fn neighbors(&self, u:VertexId) -> &[VertexId];

    /// number of vertices adjacent to u
    fn degree(&self, u:VertexId) -> usize { self.neighbors(u).len() }

    /// true iff u and v are adjacent
    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool;

    /// edge list (u < v)
    fn edges(&self) -> &[(VertexId,VertexId)];

    /// logs some statistics about the instance
    fn display_statistics(&self);
}

/// result of the checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// the coloring is proper, contains the number of colors used
    Ok(usize),
    /// the coloring does not cover exactly the vertices of the instance
    WrongNbVertices(usize),
    /// two adjacent vertices share a color
    Conflict(VertexId, VertexId),
}

/**
returns the number of distinct colors used by the coloring.
Does not assume that colors are contiguous.
*/
pub fn nb_colors(colors:&[usize]) -> usize {
    let used:BitSet = colors.iter().copied().collect();
    used.len()
}

/**
checks that each vertex has a color and that no edge is monochromatic.
returns the number of colors if the coloring is valid.
*/
pub fn checker(inst:&dyn ColoringInstance, colors:&[usize]) -> CheckerResult {
    if colors.len() != inst.nb_vertices() {
        return CheckerResult::WrongNbVertices(colors.len());
    }
    for (u,v) in inst.edges() {
        if colors[*u] == colors[*v] { return CheckerResult::Conflict(*u, *v); }
    }
    CheckerResult::Ok(nb_colors(colors))
}
