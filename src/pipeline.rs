use std::rc::Rc;

use log::{info, warn};

use crate::color::{CheckerResult, ColoringInstance, checker, nb_colors};
use crate::search::bounds::SearchBounds;
use crate::search::clique_bound;
use crate::search::degree_order::degree_order;
use crate::search::exact::{ExactResult, ExactSolver};
use crate::search::greedy_first_fit::{GreedyColoring, greedy_first_fit};

/// everything computed while solving an instance
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// clique lower bound
    pub lower_bound: usize,
    /// greedy (largest degree first) coloring
    pub greedy: GreedyColoring,
    /// bounds given to the exact solver
    pub bounds: SearchBounds,
    /// exact solver result (final coloring)
    pub exact: ExactResult,
}

impl PipelineResult {
    /// final number of colors
    pub fn objective(&self) -> usize { nb_colors(&self.exact.colors) }

    /// final coloring
    pub fn colors(&self) -> &[usize] { &self.exact.colors }
}

/**
solves a coloring instance:
    1. orders the vertices by decreasing degree
    2. computes a clique lower bound
    3. colors the vertices greedily (first-fit) along the order
    4. gives the bounds and the greedy coloring to the exact solver

If the exact solver returns an invalid or worse coloring, or uses a color outside the color
domain, the greedy coloring is kept.
*/
pub fn solve(inst:Rc<dyn ColoringInstance>, solver:&mut dyn ExactSolver) -> PipelineResult {
    let order = degree_order(inst.as_ref());
    let lower_bound = clique_bound::lower_bound(inst.as_ref());
    info!("lower bound: {}", lower_bound);
    let greedy = greedy_first_fit(inst.as_ref(), &order);
    info!("greedy found {} colors", greedy.objective);
    let bounds = SearchBounds::new(greedy.objective, lower_bound);
    let exact = solver.solve(inst.clone(), &bounds, &greedy.colors);
    let domain = bounds.color_domain();
    let exact = match checker(inst.as_ref(), &exact.colors) {
        CheckerResult::Ok(k) if k <= greedy.objective
            && exact.colors.iter().all(|c| domain.contains(c)) => exact,
        other => {
            warn!(
                "exact solver returned an invalid coloring ({:?}, domain {:?}), keeping the greedy one",
                other, domain
            );
            ExactResult {
                colors: greedy.colors.clone(),
                nb_expanded: exact.nb_expanded,
                proven_optimal: greedy.objective <= bounds.lower_bound(),
            }
        }
    };
    PipelineResult { lower_bound, greedy, bounds, exact }
}
