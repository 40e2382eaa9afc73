//! Exhaustive LCS search, used as a correctness oracle for small inputs.
//!
//! Candidates are drawn from the shorter input, longest first, and streamed
//! one at a time rather than materialized up front. Worst case is
//! exponential in the length of the shorter input, so keep inputs short.

use itertools::Itertools;
use log::trace;

use crate::lcs::subsequence::is_subsequence;

/// Returns a longest common subsequence of `xs` and `ys` by exhaustive
/// search.
///
/// The shorter input is the candidate basis (`ys` when the lengths are
/// equal); candidate lengths descend from `len(shorter)` to 1, and within a
/// length candidates are generated in lexicographic index order, so the
/// output is deterministic. The first candidate that is a subsequence of the
/// longer input wins. Returns an empty vector when the inputs share no
/// symbols.
///
/// # Examples
///
/// ```
/// use algolab::lcs::brute_force::lcs;
///
/// let xs: Vec<char> = "DABC".chars().collect();
/// let ys: Vec<char> = "ABCD".chars().collect();
/// assert_eq!(lcs(&xs, &ys), vec!['A', 'B', 'C']);
/// ```
pub fn lcs<T: PartialEq + Clone>(xs: &[T], ys: &[T]) -> Vec<T> {
    let (short, long) = if xs.len() < ys.len() {
        (xs, ys)
    } else {
        (ys, xs)
    };

    for len in (1..=short.len()).rev() {
        trace!("trying candidates of length {len}");
        for combo in short.iter().combinations(len) {
            let candidate: Vec<T> = combo.into_iter().cloned().collect();
            if is_subsequence(long, &candidate) {
                return candidate;
            }
        }
    }
    Vec::new()
}
