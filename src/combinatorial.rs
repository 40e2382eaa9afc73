//! Combinatorial search algorithms.

pub mod graph_coloring;

pub use graph_coloring::k_coloring;
