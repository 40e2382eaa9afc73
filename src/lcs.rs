//! The longest-common-subsequence algorithm family.
//!
//! Five strategies for the same contract: given two sequences, return a
//! longest subsequence common to both. They trade time for space in
//! different ways and all agree on the LCS length, though not necessarily
//! on the subsequence itself.

pub mod brute_force;
pub mod dynamic_programming;
pub mod hirschberg;
pub mod recursive;
pub mod subsequence;

pub use subsequence::{is_subsequence, match_mask};
