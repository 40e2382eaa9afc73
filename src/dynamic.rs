//! Dynamic programming algorithms.

pub mod weighted_interval;

pub use weighted_interval::{best_schedule, max_weight_schedule, predecessors, Interval};
