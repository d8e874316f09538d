use std::ops::RangeInclusive;

use log::warn;
use serde::Serialize;

/**
bounds given to the exact search stage.
 - upper: number of colors of the greedy coloring (maximum objective worth considering)
 - lower: lower bound on the number of colors (only used as a target, never to forbid colors)
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchBounds {
    /// lower bound on the objective (0 if the estimator is inconsistent)
    lower: usize,
    /// upper bound on the objective (greedy objective)
    upper: usize,
}

impl SearchBounds {
    /**
    packages the greedy objective and the estimated lower bound.
    If the lower bound exceeds the greedy objective, the estimator is not consistent and the
    lower bound is reset to 0.
    */
    pub fn new(greedy_objective:usize, lower_bound:usize) -> Self {
        let lower = if lower_bound > greedy_objective {
            warn!(
                "lower bound ({}) greater than the greedy objective ({}), ignoring it",
                lower_bound, greedy_objective
            );
            0
        } else {
            lower_bound
        };
        Self { lower, upper:greedy_objective }
    }

    /// lower bound on the number of colors
    pub fn lower_bound(&self) -> usize { self.lower }

    /// maximum objective to consider (greedy objective)
    pub fn max_objective(&self) -> usize { self.upper }

    /// color ids a vertex may take: [0, U-1] (never empty)
    pub fn color_domain(&self) -> RangeInclusive<usize> {
        0..=self.upper.saturating_sub(1)
    }

    /// range of the objective: [L, U]
    pub fn objective_range(&self) -> RangeInclusive<usize> {
        self.lower..=self.upper
    }

    /// true iff the greedy objective matches the lower bound (nothing left to search)
    pub fn is_closed(&self) -> bool { self.lower == self.upper }
}
