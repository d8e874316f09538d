use bit_set::BitSet;
use log::info;

use crate::color::{ColoringInstance, VertexId};
use crate::edge_list::read_from_file;
use crate::error::{InstanceError, Result};

/** models a Graph Coloring instance.  */
#[derive(Debug)]
pub struct CompactInstance {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// edges of the graph
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Vec<BitSet>,
}

impl ColoringInstance for CompactInstance {
    fn nb_vertices(&self) -> usize { self.n }

    fn nb_edges(&self) -> usize { self.m }

    fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj_list[u] }

    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool {
        self.adj_matrix[u].contains(v)
    }

    fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }

    fn display_statistics(&self) {
        info!("\t{} \t vertices", self.nb_vertices());
        info!("\t{} \t edges", self.nb_edges());
        let degrees = self.vertices().map(|i| self.degree(i));
        if let (Some(min), Some(max)) = (degrees.clone().min(), degrees.max()) {
            info!("\t{} \t min degree", min);
            info!("\t{} \t max degree", max);
        }
    }
}


impl CompactInstance {

    /// builds the edge list
    fn build_edges(adj_list:&[Vec<VertexId>]) -> Vec<(VertexId,VertexId)> {
        let mut res = Vec::new();
        for (i,l) in adj_list.iter().enumerate() {
            for j in l {
                if i < *j {
                    res.push((i,*j));
                }
            }
        }
        res
    }

    /**
    constructor using an adjacency list (assumed symmetric, sorted and without duplicates)

    # Errors
     - if the adjacency matrix cannot be allocated
    */
    pub fn new(adj_list:Vec<Vec<VertexId>>) -> Result<Self> {
        let n = adj_list.len();
        // compute nb edges
        let mut m = 0;
        for e in &adj_list { // at the end: m = ∑ d(v)
            m += e.len();
        }
        m /= 2; // m = (∑ d(v)) / 2
        let edges = Self::build_edges(&adj_list);
        let mut adj_matrix:Vec<BitSet> = Vec::new();
        adj_matrix.try_reserve_exact(n).map_err(|_| InstanceError::TooManyVertices(n))?;
        adj_matrix.resize_with(n, BitSet::default);
        for (a,matrix_a) in adj_matrix.iter_mut().enumerate() {
            for b in &adj_list[a] {
                matrix_a.insert(*b);
            }
        }
        Ok(Self { n, m, edges, adj_list, adj_matrix })
    }

    /**
    constructor from two parallel endpoint sequences (edge i links starts[i] and ends[i]).
    Duplicated edges (in any orientation) are only kept once.

    # Errors
     - if the sequences have different lengths
     - if an endpoint is not in [0,n)
     - if an edge is a self loop
     - if n is too large to allocate the adjacency structures
    */
    pub fn from_edges(n:usize, starts:&[VertexId], ends:&[VertexId]) -> Result<Self> {
        if starts.len() != ends.len() {
            return Err(InstanceError::LengthMismatch(starts.len(), ends.len()));
        }
        // n comes from the header and may be arbitrarily large
        let mut adj_list:Vec<Vec<VertexId>> = Vec::new();
        adj_list.try_reserve_exact(n).map_err(|_| InstanceError::TooManyVertices(n))?;
        adj_list.resize_with(n, Vec::new);
        for (edge,(a,b)) in starts.iter().zip(ends).enumerate() {
            for vertex in &[*a, *b] {
                if *vertex >= n {
                    return Err(InstanceError::VertexOutOfRange { edge, vertex:*vertex, n });
                }
            }
            if a == b {
                return Err(InstanceError::SelfLoop { edge, vertex:*a });
            }
            adj_list[*a].push(*b);
            adj_list[*b].push(*a);
        }
        for l in adj_list.iter_mut() { // deterministic order, no duplicated neighbor
            l.sort_unstable();
            l.dedup();
        }
        Self::new(adj_list)
    }

    /// creates an instance from an edge list file
    pub fn from_file(filename:&str) -> Result<Self> {
        let (n, starts, ends) = read_from_file(filename)?;
        Self::from_edges(n, &starts, &ends)
    }
}
