use std::cmp::max;

use bit_set::BitSet;
use log::debug;

use crate::color::{ColoringInstance, VertexId};

/**
common-neighbor estimate for the vertex v:
1 + max over the neighbors u of v of the number of neighbors shared by u and v.

This value approximates the size of a clique containing v, but it is not a valid lower bound
(it may exceed the chromatic number). Only used as a diagnostic.
*/
pub fn common_neighbor_hint(inst:&dyn ColoringInstance, v:VertexId) -> usize {
    let mut res = 0;
    for u in inst.neighbors(v) {
        let common = inst.neighbors(*u).iter()
            .filter(|w| **w != v && inst.are_adjacent(v, **w))
            .count();
        res = max(res, common);
    }
    res + 1
}

/** implements a greedy clique search in the closed neighborhood of v.
    1. the clique starts with v, candidates are the neighbors of v
    2. choose the candidate with the most neighbors among the candidates (common-neighbor count,
       break ties by the smallest id)
    3. add it to the clique, remove the candidates that are not adjacent to it
    4. repeat until no candidate remains

The result is a clique, thus its size is a lower bound of the chromatic number.
*/
pub fn local_clique(inst:&dyn ColoringInstance, v:VertexId) -> Vec<VertexId> {
    let mut res = vec![v];
    let mut candidates:BitSet = inst.neighbors(v).iter().copied().collect();
    loop {
        let best = candidates.iter().max_by(|a,b| {
            let score_a = inst.neighbors(*a).iter().filter(|w| candidates.contains(**w)).count();
            let score_b = inst.neighbors(*b).iter().filter(|w| candidates.contains(**w)).count();
            score_a.cmp(&score_b).then_with(|| b.cmp(a))
        });
        match best {
            None => break,
            Some(u) => {
                res.push(u);
                candidates = candidates.iter()
                    .filter(|w| inst.are_adjacent(u, *w))
                    .collect();
            }
        }
    }
    res
}

/**
returns the largest clique found by the local greedy over all vertices
(first vertex in id order in case of ties). Empty if the graph has no vertex.
*/
pub fn max_local_clique(inst:&dyn ColoringInstance) -> Vec<VertexId> {
    let mut res:Vec<VertexId> = Vec::new();
    for v in inst.vertices() {
        if inst.degree(v) + 1 <= res.len() { continue; } // cannot improve
        let clique = local_clique(inst, v);
        if clique.len() > res.len() {
            debug!(
                "clique bound: {} (around vertex {}, common-neighbor hint: {})",
                clique.len(), v, common_neighbor_hint(inst, v)
            );
            res = clique;
        }
    }
    res
}

/**
lower bound on the number of colors: size of the largest local clique.
0 for an empty graph, 1 for a graph without edges.
*/
pub fn lower_bound(inst:&dyn ColoringInstance) -> usize {
    max_local_clique(inst).len()
}
