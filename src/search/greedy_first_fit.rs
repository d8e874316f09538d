use bit_set::BitSet;
use log::debug;

use crate::color::{ColoringInstance, Coloring, VertexId, nb_colors};

/// result of the greedy algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedyColoring {
    /// number of distinct colors used
    pub objective: usize,
    /// colors[v]: color of vertex v
    pub colors: Coloring,
}

/// smallest color not used by the already colored neighbors of v
fn first_available_color(inst:&dyn ColoringInstance, colors:&[Option<usize>], v:VertexId) -> usize {
    if inst.degree(v) == 0 { return 0; }
    let mut adj_colors = BitSet::with_capacity(inst.degree(v)+1);
    for u in inst.neighbors(v) {
        if let Some(c) = colors[*u] { adj_colors.insert(c); }
    }
    let mut color:usize = 0;
    while adj_colors.contains(color) { color += 1; }
    color
}

/** implements a sequential first-fit greedy.
    1. take the next vertex in the order
    2. assign it the smallest color not used by its colored neighbors
    3. repeat until the order is exhausted
Vertices missing from the order are colored afterwards (by increasing id). Colors are never
revised: the coloring is proper whatever the order, but its quality depends on it.
*/
pub fn greedy_first_fit(inst:&dyn ColoringInstance, order:&[VertexId]) -> GreedyColoring {
    let n:usize = inst.nb_vertices();
    let mut colors:Vec<Option<usize>> = vec![None ; n]; // colors[v] -> color assigned to vertex v
    let mut nb_colored:usize = 0;
    for v in order.iter().copied().chain(inst.vertices()) {
        if colors[v].is_some() { continue; }
        colors[v] = Some(first_available_color(inst, &colors, v));
        nb_colored += 1;
        if nb_colored % 10000 == 0 { debug!("colored {} / {}...", nb_colored, n); }
    }
    let res:Coloring = colors.into_iter().flatten().collect();
    debug_assert_eq!(res.len(), n);
    GreedyColoring { objective:nb_colors(&res), colors:res }
}
