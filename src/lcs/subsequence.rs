//! Subsequence checks shared by the LCS implementations and their tests.

/// Checks whether `candidate` is an order-preserving subsequence of
/// `sequence`.
///
/// Walks `sequence` once with a cursor: for each symbol of `candidate` the
/// cursor advances until the symbol is found, and the check fails as soon as
/// the cursor runs out. An empty candidate is a subsequence of anything,
/// including the empty sequence. O(|sequence|) per call.
///
/// # Examples
///
/// ```
/// use algolab::lcs::subsequence::is_subsequence;
///
/// let text: Vec<char> = "CHIMPANZEE".chars().collect();
/// let hman: Vec<char> = "HMAN".chars().collect();
/// assert!(is_subsequence(&text, &hman));
/// assert!(is_subsequence(&text, &[]));
/// assert!(!is_subsequence(&['A', 'B'], &['C']));
/// ```
pub fn is_subsequence<T: PartialEq>(sequence: &[T], candidate: &[T]) -> bool {
    let mut cursor = sequence.iter();
    for symbol in candidate {
        if cursor.find(|s| *s == symbol).is_none() {
            return false;
        }
    }
    true
}

/// Maps the greedy leftmost embedding of `candidate` in `sequence`.
///
/// Returns one flag per position of `sequence`, `true` where the position is
/// consumed by the embedding, or `None` when `candidate` is not a
/// subsequence. When the result is `Some(mask)`, exactly
/// `candidate.len()` flags are set.
///
/// # Examples
///
/// ```
/// use algolab::lcs::subsequence::match_mask;
///
/// let text: Vec<char> = "TAROT".chars().collect();
/// let art: Vec<char> = "ART".chars().collect();
/// // T A R O T
/// // . A R . T
/// assert_eq!(
///     match_mask(&text, &art),
///     Some(vec![false, true, true, false, true])
/// );
/// assert_eq!(match_mask(&text, &['X']), None);
/// ```
pub fn match_mask<T: PartialEq>(sequence: &[T], candidate: &[T]) -> Option<Vec<bool>> {
    let mut mask = vec![false; sequence.len()];
    let mut next = 0;
    for (i, symbol) in sequence.iter().enumerate() {
        if next < candidate.len() && *symbol == candidate[next] {
            mask[i] = true;
            next += 1;
        }
    }
    (next == candidate.len()).then_some(mask)
}
