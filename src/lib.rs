//! Greedy graph coloring with a clique lower bound and a bounded exact search stage

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// coloring instance base trait, colorings and checker
pub mod color;

/// input validation errors
pub mod error;

/// compact instance (adjacency lists + adjacency matrix)
pub mod compact_instance;

/// read/write the edge list format
pub mod edge_list;

/// greedy stage + bounds + exact stage, chained together
pub mod pipeline;

/// helper and utility methods for the executable
pub mod util;

/// orderings, bounds and solvers for the graph coloring problem
pub mod search;
