//! Backtracking k-coloring of an undirected graph.
//!
//! The graph is an adjacency matrix; the search assigns colors to vertices
//! in index order, trying colors ascending, and backtracks as soon as a
//! partial assignment cannot be extended.

use crate::error::{Error, Result};

/// Tries to color the graph with colors `1..=colors` so that no two
/// adjacent vertices share a color.
///
/// Vertices are processed in index order and colors tried ascending, so
/// the first solution in search order is returned, deterministically.
/// A vertex adjacent to itself can never be colored, so any self-loop
/// makes the whole graph uncolorable.
///
/// Returns `Ok(Some(assignment))` with one color per vertex, or `Ok(None)`
/// when no valid assignment exists. The empty graph is trivially colorable
/// with any number of colors, including zero.
///
/// # Errors
///
/// [`Error::InvalidInput`] when `adjacency` is not square.
///
/// # Examples
///
/// ```
/// use algolab::combinatorial::graph_coloring::k_coloring;
///
/// // A triangle needs three colors.
/// let triangle = vec![
///     vec![false, true, true],
///     vec![true, false, true],
///     vec![true, true, false],
/// ];
/// assert_eq!(k_coloring(&triangle, 2).unwrap(), None);
/// assert_eq!(k_coloring(&triangle, 3).unwrap(), Some(vec![1, 2, 3]));
/// ```
pub fn k_coloring(adjacency: &[Vec<bool>], colors: usize) -> Result<Option<Vec<usize>>> {
    let n = adjacency.len();
    for (i, row) in adjacency.iter().enumerate() {
        if row.len() != n {
            return Err(Error::invalid_input(format!(
                "adjacency row {} has length {}, expected {}",
                i,
                row.len(),
                n
            )));
        }
    }

    let mut assignment = vec![0; n];
    if assign(adjacency, colors, &mut assignment, 0) {
        Ok(Some(assignment))
    } else {
        Ok(None)
    }
}

/// Extends a partial assignment to vertex `vertex` and beyond, or reports
/// that it cannot be done.
fn assign(adjacency: &[Vec<bool>], colors: usize, assignment: &mut [usize], vertex: usize) -> bool {
    if vertex >= adjacency.len() {
        return true;
    }
    for color in 1..=colors {
        if is_safe(adjacency, assignment, vertex, color) {
            assignment[vertex] = color;
            if assign(adjacency, colors, assignment, vertex + 1) {
                return true;
            }
            // Backtrack so the partial assignment only holds choices that
            // worked up to this point.
            assignment[vertex] = 0;
        }
    }
    false
}

fn is_safe(adjacency: &[Vec<bool>], assignment: &[usize], vertex: usize, color: usize) -> bool {
    if adjacency[vertex][vertex] {
        return false;
    }
    adjacency[vertex]
        .iter()
        .enumerate()
        .all(|(other, &adjacent)| !adjacent || assignment[other] != color)
}
