use std::rc::Rc;

use bit_set::BitSet;
use log::{debug, info};

use crate::color::{ColoringInstance, Coloring, VertexId, nb_colors};
use crate::search::bounds::SearchBounds;

/// outcome of an exact search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactResult {
    /// best coloring found (the fallback if nothing better was found)
    pub colors: Coloring,
    /// number of expanded search nodes
    pub nb_expanded: usize,
    /// true if the coloring is proven optimal
    pub proven_optimal: bool,
}

/**
exact search stage. Given an instance, bounds and a feasible fallback coloring, returns a
coloring at least as good as the fallback (or the fallback itself).
*/
pub trait ExactSolver {
    /// improves the fallback coloring within the bounds
    fn solve(
        &mut self,
        inst:Rc<dyn ColoringInstance>,
        bounds:&SearchBounds,
        fallback:&[usize],
    ) -> ExactResult;
}

/** solver that returns the fallback coloring without searching */
#[derive(Debug, Default)]
pub struct EchoSolver;

impl ExactSolver for EchoSolver {
    fn solve(
        &mut self,
        _inst:Rc<dyn ColoringInstance>,
        bounds:&SearchBounds,
        fallback:&[usize],
    ) -> ExactResult {
        ExactResult {
            colors: fallback.to_vec(),
            nb_expanded: 0,
            proven_optimal: nb_colors(fallback) <= bounds.lower_bound(),
        }
    }
}


/// vertex v takes color c
#[derive(Debug, Clone)]
struct Decision {
    v: VertexId,
    c: usize,
}

/// entry of the search stack
#[derive(Debug)]
enum BacktrackEvent {
    Commit(Decision),
    Restore(Decision),
}

/**
partial coloring explored by the branch & bound. Each node fixes the color of the most
saturated uncolored vertex; children are the open colors free for it, plus one fresh color
while the count stays below the incumbent.
*/
#[derive(Debug)]
struct DsaturSpace {
    inst: Rc<dyn ColoringInstance>,
    uncolored: BitSet,
    /// number of distinct colors among the colored neighbors, per vertex
    dsat: Vec<usize>,
    colors: Vec<Option<usize>>,
    /// colors open in the partial coloring (always 0..nb_colors)
    nb_colors: usize,
    /// [v][c]: how many neighbors of v hold c
    nb_adj_colored: Vec<Vec<usize>>,
    /// [c]: how many vertices hold c
    color_nb_vertices: Vec<usize>,
    /// color count of the incumbent, branches reaching it are cut
    upper_bound: usize,
    /// pending commits, each one stacked above the restore undoing it
    decisions: Vec<BacktrackEvent>,
    nb_vertices_colored: usize,
    incumbent: Option<Coloring>,
}

impl DsaturSpace {
    /// nothing colored yet, colors in [0, upper_bound-1]
    fn new(inst:Rc<dyn ColoringInstance>, upper_bound:usize) -> Self {
        let n = inst.nb_vertices();
        let uncolored:BitSet = inst.vertices().collect();
        Self {
            uncolored,
            dsat: vec![0 ; n],
            colors: vec![None ; n],
            nb_colors: 0,
            nb_adj_colored: vec![vec![0 ; upper_bound] ; n],
            color_nb_vertices: vec![0 ; upper_bound],
            upper_bound,
            decisions: Vec::with_capacity(n),
            nb_vertices_colored: 0,
            incumbent: None,
            inst,
        }
    }

    /// most saturated uncolored vertex, then highest degree, then lowest id
    fn next_vertex(&self) -> Option<VertexId> {
        self.uncolored.iter().max_by(|a,b| {
            self.dsat[*a].cmp(&self.dsat[*b])
                .then_with(|| self.inst.degree(*a).cmp(&self.inst.degree(*b)))
                .then_with(|| b.cmp(a))
        })
    }

    /// branches on the next vertex, smallest color explored first
    fn push_next_decisions(&mut self) {
        let v = match self.next_vertex() {
            None => return,
            Some(v) => v,
        };
        let mut candidate_colors:Vec<usize> = (0..self.nb_colors)
            .filter(|c| self.nb_adj_colored[v][*c] == 0).collect();
        if self.nb_colors + 1 < self.upper_bound {
            candidate_colors.push(self.nb_colors);
        }
        for c in candidate_colors.into_iter().rev() {
            let decision = Decision { v, c };
            self.decisions.push(BacktrackEvent::Restore(decision.clone()));
            self.decisions.push(BacktrackEvent::Commit(decision));
        }
    }

    /// colors v with c
    fn commit(&mut self, decision:&Decision) {
        self.color_nb_vertices[decision.c] += 1;
        self.nb_vertices_colored += 1;
        if decision.c == self.nb_colors {
            self.nb_colors += 1;
        }
        debug_assert!(self.colors[decision.v].is_none());
        self.colors[decision.v] = Some(decision.c);
        for u in self.inst.neighbors(decision.v) {
            self.nb_adj_colored[*u][decision.c] += 1;
            if self.nb_adj_colored[*u][decision.c] == 1 { // c is new around u
                self.dsat[*u] += 1;
            }
        }
        self.uncolored.remove(decision.v);
    }

    /// uncolors v, only valid on the last committed decision
    fn restore(&mut self, decision:&Decision) {
        self.color_nb_vertices[decision.c] -= 1;
        self.nb_vertices_colored -= 1;
        if self.color_nb_vertices[decision.c] == 0 { // closes the highest color
            debug_assert_eq!(decision.c, self.nb_colors-1);
            self.nb_colors -= 1;
        }
        debug_assert!(self.colors[decision.v].is_some());
        self.colors[decision.v] = None;
        for u in self.inst.neighbors(decision.v) {
            self.nb_adj_colored[*u][decision.c] -= 1;
            if self.nb_adj_colored[*u][decision.c] == 0 {
                self.dsat[*u] -= 1;
            }
        }
        self.uncolored.insert(decision.v);
    }

    /**
    explores the tree depth first. Stops early once the incumbent reaches `lower_bound`
    or after `budget` expanded nodes.
    Returns the number of expanded nodes and whether the incumbent is proven optimal.
    */
    fn dfs_search(&mut self, lower_bound:usize, budget:usize) -> (usize, bool) {
        self.push_next_decisions();
        let mut nb_expanded:usize = 1;
        while let Some(event) = self.decisions.pop() {
            match event {
                BacktrackEvent::Restore(decision) => self.restore(&decision),
                BacktrackEvent::Commit(decision) => {
                    self.commit(&decision);
                    if self.nb_colors >= self.upper_bound { continue; }
                    if self.nb_vertices_colored == self.inst.nb_vertices() {
                        info!("exact search: {} colors ({} nodes)", self.nb_colors, nb_expanded);
                        self.upper_bound = self.nb_colors;
                        self.incumbent = Some(self.colors.iter().flatten().copied().collect());
                        if self.upper_bound <= lower_bound { return (nb_expanded, true); }
                    } else {
                        if nb_expanded >= budget {
                            debug!("exact search: budget exhausted ({} nodes)", nb_expanded);
                            return (nb_expanded, false);
                        }
                        self.push_next_decisions();
                        nb_expanded += 1;
                    }
                }
            }
        }
        (nb_expanded, true)
    }
}


/**
branch & bound based on DSATUR. Looks for colorings using strictly fewer colors than the
fallback, with colors taken in the bounds color domain. The search is limited by a number of
expanded nodes (not by time, so that two runs give the same result).
*/
#[derive(Debug)]
pub struct DsaturBacktracking {
    /// maximum number of expanded nodes
    budget: usize,
}

impl DsaturBacktracking {
    /// creates a solver expanding at most budget nodes
    pub fn new(budget:usize) -> Self { Self { budget } }
}

impl ExactSolver for DsaturBacktracking {
    fn solve(
        &mut self,
        inst:Rc<dyn ColoringInstance>,
        bounds:&SearchBounds,
        fallback:&[usize],
    ) -> ExactResult {
        let upper_bound = nb_colors(fallback);
        let target = *bounds.objective_range().start();
        if bounds.is_closed() || upper_bound <= target || inst.nb_vertices() == 0 || self.budget == 0 {
            return EchoSolver.solve(inst, bounds, fallback);
        }
        let nb_domain_colors = bounds.color_domain().count();
        let mut space = DsaturSpace::new(inst, std::cmp::min(upper_bound, nb_domain_colors));
        let (nb_expanded, exhausted) = space.dfs_search(target, self.budget);
        info!("exact search: {} nodes expanded (proven optimal: {})", nb_expanded, exhausted);
        let colors = space.incumbent.unwrap_or_else(|| fallback.to_vec());
        ExactResult { colors, nb_expanded, proven_optimal:exhausted }
    }
}
