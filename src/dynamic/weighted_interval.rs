//! Weighted interval scheduling: predecessor computation and the
//! maximum-weight dynamic program built on top of it.

/// A single weighted request with a start and finish time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub start: usize,
    pub finish: usize,
    pub weight: usize,
}

impl Interval {
    /// Creates a new `Interval`.
    ///
    /// # Panics
    ///
    /// Panics if `start > finish`.
    pub fn new(start: usize, finish: usize, weight: usize) -> Self {
        assert!(start <= finish, "start cannot be greater than finish");
        Self {
            start,
            finish,
            weight,
        }
    }
}

/// Computes p(i) for every interval: the largest index `j < i` whose
/// interval finishes no later than interval `i` starts, or `None` when
/// every earlier interval overlaps.
///
/// The input order is respected as given; `j` is scanned downward from
/// `i - 1`, so with intervals sorted by finish time the result is the
/// rightmost compatible predecessor.
///
/// # Examples
///
/// ```
/// use algolab::dynamic::weighted_interval::{predecessors, Interval};
///
/// let intervals = vec![
///     Interval::new(1, 3, 1),
///     Interval::new(2, 7, 1),
///     Interval::new(6, 8, 1),
/// ];
/// assert_eq!(predecessors(&intervals), vec![None, None, Some(0)]);
/// ```
pub fn predecessors(intervals: &[Interval]) -> Vec<Option<usize>> {
    let n = intervals.len();
    let mut p = vec![None; n];
    for i in (0..n).rev() {
        for j in (0..i).rev() {
            if intervals[j].finish <= intervals[i].start {
                p[i] = Some(j);
                break;
            }
        }
    }
    p
}

/// Computes the maximum total weight of a set of non-overlapping intervals.
///
/// # Examples
///
/// ```
/// use algolab::dynamic::weighted_interval::{max_weight_schedule, Interval};
///
/// let intervals = vec![
///     Interval::new(0, 3, 4),
///     Interval::new(1, 5, 2),
///     Interval::new(4, 6, 5),
///     Interval::new(5, 9, 6),
/// ];
/// // One optimal schedule is intervals 0 and 3 => weight = 4 + 6 = 10.
/// assert_eq!(max_weight_schedule(&intervals), 10);
/// ```
pub fn max_weight_schedule(intervals: &[Interval]) -> usize {
    let (sorted, dp, _) = schedule_table(intervals);
    dp[sorted.len()]
}

/// Reconstructs an actual optimal schedule.
///
/// Returns intervals in ascending order by finish time. When including or
/// excluding an interval yields the same weight, the interval is excluded,
/// so only one of possibly several optimal schedules is returned.
pub fn best_schedule(intervals: &[Interval]) -> Vec<Interval> {
    let (sorted, _, chosen) = schedule_table(intervals);
    let p = predecessors(&sorted);

    let mut result = Vec::new();
    let mut i = sorted.len();
    while i > 0 {
        if chosen[i - 1] {
            result.push(sorted[i - 1].clone());
            i = p[i - 1].map_or(0, |j| j + 1);
        } else {
            i -= 1;
        }
    }
    result.reverse();
    result
}

/// Sorts a copy by finish time and fills the schedule DP.
///
/// `dp[i]` is the best weight among the first `i` sorted intervals;
/// `chosen[i - 1]` records whether interval `i - 1` is part of that best
/// weight.
fn schedule_table(intervals: &[Interval]) -> (Vec<Interval>, Vec<usize>, Vec<bool>) {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|iv| iv.finish);

    let p = predecessors(&sorted);
    let n = sorted.len();
    let mut dp = vec![0; n + 1];
    let mut chosen = vec![false; n];

    for i in 1..=n {
        let with_current = sorted[i - 1].weight + dp[p[i - 1].map_or(0, |j| j + 1)];
        let without_current = dp[i - 1];
        if with_current > without_current {
            dp[i] = with_current;
            chosen[i - 1] = true;
        } else {
            dp[i] = without_current;
        }
    }

    (sorted, dp, chosen)
}
