//! Naive recursive LCS over prefix lengths, with and without memoization.
//!
//! This is the textbook recursion: the LCS of the prefixes `(i, j)` either
//! extends the LCS of `(i-1, j-1)` on a symbol match, or is the longer of
//! the `(i-1, j)` and `(i, j-1)` results. Without the memo the recursion
//! tree revisits the same subproblems exponentially many times; with it,
//! time and space are O(|X|·|Y|).

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Upper bound on `|X| + |Y|`, which bounds the recursion depth.
///
/// Both entry points check this before recursing, so an oversized input
/// fails atomically with [`Error::ResourceExhaustion`] instead of
/// overflowing the call stack partway through.
pub const MAX_RECURSION_DEPTH: usize = 10_000;

/// Returns a longest common subsequence of `xs` and `ys`, memoized.
///
/// The memo maps `(i, j)` prefix-length pairs to their subsequences. It is
/// created on entry and dropped on return; nothing is shared across calls.
/// When the two recursive branches tie in length, the `(i-1, j)` branch
/// wins, which keeps the output deterministic.
///
/// # Errors
///
/// [`Error::ResourceExhaustion`] when `|X| + |Y|` exceeds
/// [`MAX_RECURSION_DEPTH`].
///
/// # Examples
///
/// ```
/// use algolab::lcs::recursive::lcs;
///
/// let xs: Vec<char> = "ABC".chars().collect();
/// let ys: Vec<char> = "AC".chars().collect();
/// assert_eq!(lcs(&xs, &ys).unwrap(), vec!['A', 'C']);
/// ```
pub fn lcs<T: PartialEq + Clone>(xs: &[T], ys: &[T]) -> Result<Vec<T>> {
    check_depth(xs.len(), ys.len())?;
    let mut memo = HashMap::new();
    Ok(solve_memo(xs, ys, xs.len(), ys.len(), &mut memo))
}

/// Returns a longest common subsequence of `xs` and `ys` without a memo.
///
/// Same recursion and tie-break as [`lcs`], but the recursion tree is
/// walked in full. Exponential time; only suitable for short inputs.
///
/// # Errors
///
/// [`Error::ResourceExhaustion`] when `|X| + |Y|` exceeds
/// [`MAX_RECURSION_DEPTH`].
pub fn lcs_without_memo<T: PartialEq + Clone>(xs: &[T], ys: &[T]) -> Result<Vec<T>> {
    check_depth(xs.len(), ys.len())?;
    Ok(solve(xs, ys, xs.len(), ys.len()))
}

fn check_depth(nx: usize, ny: usize) -> Result<()> {
    if nx + ny > MAX_RECURSION_DEPTH {
        return Err(Error::resource_exhaustion(format!(
            "combined input length {} exceeds the recursion limit of {}",
            nx + ny,
            MAX_RECURSION_DEPTH
        )));
    }
    Ok(())
}

fn solve<T: PartialEq + Clone>(xs: &[T], ys: &[T], i: usize, j: usize) -> Vec<T> {
    if i == 0 || j == 0 {
        return Vec::new();
    }
    if xs[i - 1] == ys[j - 1] {
        let mut sub = solve(xs, ys, i - 1, j - 1);
        sub.push(xs[i - 1].clone());
        sub
    } else {
        let first = solve(xs, ys, i - 1, j);
        let second = solve(xs, ys, i, j - 1);
        if second.len() > first.len() {
            second
        } else {
            first
        }
    }
}

fn solve_memo<T: PartialEq + Clone>(
    xs: &[T],
    ys: &[T],
    i: usize,
    j: usize,
    memo: &mut HashMap<(usize, usize), Vec<T>>,
) -> Vec<T> {
    if i == 0 || j == 0 {
        return Vec::new();
    }
    if let Some(cached) = memo.get(&(i, j)) {
        return cached.clone();
    }
    let result = if xs[i - 1] == ys[j - 1] {
        let mut sub = solve_memo(xs, ys, i - 1, j - 1, memo);
        sub.push(xs[i - 1].clone());
        sub
    } else {
        let first = solve_memo(xs, ys, i - 1, j, memo);
        let second = solve_memo(xs, ys, i, j - 1, memo);
        if second.len() > first.len() {
            second
        } else {
            first
        }
    };
    memo.insert((i, j), result.clone());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcs::subsequence::is_subsequence;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(lcs(&chars(""), &chars("")).unwrap(), vec![]);
        assert_eq!(lcs(&chars("ABC"), &chars("")).unwrap(), vec![]);
        assert_eq!(lcs(&chars(""), &chars("ABC")).unwrap(), vec![]);
    }

    #[test]
    fn test_short_cases() {
        assert_eq!(lcs(&chars("ABC"), &chars("XYZ")).unwrap(), vec![]);
        assert_eq!(lcs(&chars("ABC"), &chars("AC")).unwrap(), chars("AC"));
        assert_eq!(lcs(&chars("ABC"), &chars("ABC")).unwrap(), chars("ABC"));
        assert_eq!(lcs(&chars("DABC"), &chars("ABCD")).unwrap(), chars("ABC"));
    }

    #[test]
    fn test_human_chimpanzee() {
        let result = lcs(&chars("HUMAN"), &chars("CHIMPANZEE")).unwrap();
        assert_eq!(result.len(), 4);
        assert!(is_subsequence(&chars("HUMAN"), &result));
        assert!(is_subsequence(&chars("CHIMPANZEE"), &result));
    }

    #[test]
    fn test_memoized_and_plain_agree() {
        let cases = [
            ("ABCBDAB", "BDCABA"),
            ("XMJYAUZ", "MZJAWXU"),
            ("BANANA", "ATANA"),
            ("DABC", "ABCD"),
        ];
        for (a, b) in cases {
            assert_eq!(
                lcs(&chars(a), &chars(b)).unwrap(),
                lcs_without_memo(&chars(a), &chars(b)).unwrap(),
                "memoized and plain outputs differ for {a}/{b}"
            );
        }
    }

    #[test]
    fn test_memoized_handles_longer_input() {
        // Far beyond what the plain recursion could finish in time.
        let xs: Vec<u8> = (0..200).map(|i| (i % 7) as u8).collect();
        let ys: Vec<u8> = (0..200).map(|i| (i % 5) as u8).collect();
        let result = lcs(&xs, &ys).unwrap();
        assert!(is_subsequence(&xs, &result));
        assert!(is_subsequence(&ys, &result));
    }

    #[test]
    fn test_depth_guard() {
        let xs = vec![0u8; MAX_RECURSION_DEPTH];
        let ys = vec![0u8; 1];
        let err = lcs(&xs, &ys).unwrap_err();
        assert!(matches!(err, Error::ResourceExhaustion(_)));
        let err = lcs_without_memo(&xs, &ys).unwrap_err();
        assert!(matches!(err, Error::ResourceExhaustion(_)));

        // Exactly at the limit is still accepted.
        let xs = vec![0u8; MAX_RECURSION_DEPTH - 1];
        assert_eq!(lcs(&xs, &ys).unwrap().len(), 1);
    }
}
