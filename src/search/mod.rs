//! Orderings, bounds and solvers for the graph coloring problem.

/// largest-degree-first vertex ordering
pub mod degree_order;

/// clique-based lower bound on the number of colors
pub mod clique_bound;

/// sequential first-fit greedy coloring
pub mod greedy_first_fit;

/// bounds given to the exact search stage
pub mod bounds;

/// exact search stage (solver interface, echo solver, backtracking DSATUR)
pub mod exact;
