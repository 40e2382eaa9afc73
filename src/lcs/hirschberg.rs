//! Hirschberg's linear-space divide-and-conquer LCS.
//!
//! Same O(|X|·|Y|) total work as the full grid in
//! [`crate::lcs::dynamic_programming`], but only O(|Y|) auxiliary memory at
//! any one time plus O(log |X|) recursion depth. The trick: split X at its
//! midpoint, compute one forward cost profile for the front half and one
//! backward profile for the back half, and the index where their sum peaks
//! is a point where an optimal solution splits Y.

use std::ops::Range;

use log::trace;

/// Computes LCS lengths of `xs` against every prefix of `ys`, keeping only
/// two cost rows.
///
/// `ny` is the length of `ys`; the result has `ny + 1` entries, entry `j`
/// being the LCS length of `xs` and the first `j` symbols of `ys`.
fn prefix_lengths<'a, T, X, Y>(xs: X, ys: Y, ny: usize) -> Vec<usize>
where
    T: PartialEq + 'a,
    X: Iterator<Item = &'a T>,
    Y: Iterator<Item = &'a T> + Clone,
{
    let mut curr = vec![0; ny + 1];
    let mut prev = vec![0; ny + 1];
    for x in xs {
        std::mem::swap(&mut prev, &mut curr);
        for (j, y) in ys.clone().enumerate() {
            curr[j + 1] = if x == y {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
    }
    curr
}

/// Picks the first index `k` maximizing `front[k] + back[ny - k]`.
///
/// Scan order matters: keeping the first maximal `k` makes the split, and
/// with it the recovered subsequence, deterministic.
fn split_point(front: &[usize], back: &[usize], ny: usize) -> usize {
    let mut best = front[0] + back[ny];
    let mut split = 0;
    for (k, &f) in front.iter().enumerate().skip(1) {
        let score = f + back[ny - k];
        if score > best {
            best = score;
            split = k;
        }
    }
    split
}

/// Returns a longest common subsequence of `xs` and `ys` in linear space.
///
/// Splits `xs` at its midpoint, scores both halves against `ys` with
/// forward and backward cost profiles, and recurses on the two subproblems
/// the best split yields. The backward profile is computed on materialized
/// reversed copies of the back half and of `ys`; see [`lcs_indexed`] for
/// the copy-free variant.
///
/// # Examples
///
/// ```
/// use algolab::lcs::hirschberg::lcs;
///
/// let xs: Vec<char> = "HUMAN".chars().collect();
/// let ys: Vec<char> = "CHIMPANZEE".chars().collect();
/// assert_eq!(lcs(&xs, &ys), vec!['H', 'M', 'A', 'N']);
/// ```
pub fn lcs<T: PartialEq + Clone>(xs: &[T], ys: &[T]) -> Vec<T> {
    match xs.len() {
        0 => Vec::new(),
        1 => {
            // A single symbol joins the LCS iff it occurs anywhere in ys.
            if ys.contains(&xs[0]) {
                vec![xs[0].clone()]
            } else {
                Vec::new()
            }
        }
        nx => {
            let mid = nx / 2;
            let (front, back) = xs.split_at(mid);

            let score_front = prefix_lengths(front.iter(), ys.iter(), ys.len());
            let back_rev: Vec<T> = back.iter().rev().cloned().collect();
            let ys_rev: Vec<T> = ys.iter().rev().cloned().collect();
            let score_back = prefix_lengths(back_rev.iter(), ys_rev.iter(), ys_rev.len());

            let k = split_point(&score_front, &score_back, ys.len());
            trace!("splitting x at {mid}, y at {k}");

            let mut result = lcs(front, &ys[..k]);
            result.extend(lcs(back, &ys[k..]));
            result
        }
    }
}

/// Returns a longest common subsequence of `xs` and `ys` in linear space,
/// recursing on index ranges instead of slices.
///
/// Identical observable output to [`lcs`]; the backward profile iterates
/// the subranges in reverse in place, so no reversed copies of the inputs
/// are ever materialized and the recursion appends into a single output
/// vector.
pub fn lcs_indexed<T: PartialEq + Clone>(xs: &[T], ys: &[T]) -> Vec<T> {
    let mut result = Vec::new();
    solve_range(xs, ys, 0..xs.len(), 0..ys.len(), &mut result);
    result
}

fn solve_range<T: PartialEq + Clone>(
    xs: &[T],
    ys: &[T],
    x_range: Range<usize>,
    y_range: Range<usize>,
    result: &mut Vec<T>,
) {
    match x_range.len() {
        0 => {}
        1 => {
            let x = &xs[x_range.start];
            if ys[y_range].contains(x) {
                result.push(x.clone());
            }
        }
        nx => {
            let mid = x_range.start + nx / 2;
            let ny = y_range.len();

            let score_front = prefix_lengths(
                xs[x_range.start..mid].iter(),
                ys[y_range.clone()].iter(),
                ny,
            );
            let score_back = prefix_lengths(
                xs[mid..x_range.end].iter().rev(),
                ys[y_range.clone()].iter().rev(),
                ny,
            );

            let k = y_range.start + split_point(&score_front, &score_back, ny);
            trace!("splitting x at {mid}, y at {k}");

            solve_range(xs, ys, x_range.start..mid, y_range.start..k, result);
            solve_range(xs, ys, mid..x_range.end, k..y_range.end, result);
        }
    }
}
