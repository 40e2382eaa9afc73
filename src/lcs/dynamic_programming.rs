//! Bottom-up LCS over a full cost/move grid.
//!
//! The grid records, for every pair of prefixes, the best achievable LCS
//! length and the move that produced it. Filling it costs O(|X|·|Y|) time
//! and space; the subsequence is then recovered by walking the moves back
//! from the bottom-right corner. The quadratic memory footprint is the
//! chief limitation of this variant, which is what the linear-space
//! divide-and-conquer version in [`crate::lcs::hirschberg`] addresses.

use crate::error::{Error, Result};

/// Backtracking direction stored in a grid cell.
///
/// `None` marks the sentinel row and column, which is what stops the
/// backtracking walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    None,
    Diagonal,
    Up,
    Left,
}

#[derive(Clone, Copy)]
struct Cell {
    length: usize,
    step: Move,
}

/// Upper bound on the byte footprint of a grid allocation.
pub const MAX_GRID_BYTES: usize = 1 << 30;

/// Largest LCS length representable in a packed cell's 29-bit length field.
pub const MAX_PACKED_LENGTH: usize = (1 << 29) - 1;

// Packed-cell layout: the top three bits of a u32 are one-hot move flags,
// the low 29 bits the length. The all-zero cell is the sentinel.
const MOVE_SHIFT: u32 = 29;
const MOVE_DIAGONAL: u32 = 1 << MOVE_SHIFT;
const MOVE_UP: u32 = 1 << (MOVE_SHIFT + 1);
const MOVE_LEFT: u32 = 1 << (MOVE_SHIFT + 2);
const LENGTH_MASK: u32 = MOVE_DIAGONAL - 1;

/// Returns a longest common subsequence of `xs` and `ys` by bottom-up
/// dynamic programming.
///
/// Rows of the grid correspond to `ys` prefixes, columns to `xs` prefixes;
/// row 0 and column 0 are sentinels. On a tie between the left and upper
/// neighbors, the left one wins, so the output is deterministic.
///
/// # Errors
///
/// [`Error::ResourceExhaustion`] when the grid would exceed
/// [`MAX_GRID_BYTES`], checked before any allocation.
///
/// # Examples
///
/// ```
/// use algolab::lcs::dynamic_programming::lcs;
///
/// let xs: Vec<char> = "HUMAN".chars().collect();
/// let ys: Vec<char> = "CHIMPANZEE".chars().collect();
/// assert_eq!(lcs(&xs, &ys).unwrap(), vec!['H', 'M', 'A', 'N']);
/// ```
pub fn lcs<T: PartialEq + Clone>(xs: &[T], ys: &[T]) -> Result<Vec<T>> {
    check_grid_bytes(xs.len(), ys.len(), std::mem::size_of::<Cell>())?;

    let nx = xs.len();
    let ny = ys.len();
    let sentinel = Cell {
        length: 0,
        step: Move::None,
    };
    let mut grid = vec![vec![sentinel; nx + 1]; ny + 1];

    for j in 1..=ny {
        for i in 1..=nx {
            grid[j][i] = if xs[i - 1] == ys[j - 1] {
                Cell {
                    length: grid[j - 1][i - 1].length + 1,
                    step: Move::Diagonal,
                }
            } else {
                let left = grid[j][i - 1].length;
                let up = grid[j - 1][i].length;
                if left >= up {
                    Cell {
                        length: left,
                        step: Move::Left,
                    }
                } else {
                    Cell {
                        length: up,
                        step: Move::Up,
                    }
                }
            };
        }
    }

    // Walk the moves back from the bottom-right corner. Symbols come out in
    // reverse discovery order.
    let mut subsequence = Vec::new();
    let mut i = nx;
    let mut j = ny;
    loop {
        match grid[j][i].step {
            Move::Diagonal => {
                subsequence.push(xs[i - 1].clone());
                i -= 1;
                j -= 1;
            }
            Move::Up => j -= 1,
            Move::Left => i -= 1,
            Move::None => break,
        }
    }
    subsequence.reverse();
    Ok(subsequence)
}

/// Returns a longest common subsequence of `xs` and `ys` using packed
/// `u32` grid cells.
///
/// Cell-for-cell identical to [`lcs`] in fill rule, tie-break, and
/// backtracking, so the output sequence is the same, not just its length.
/// Each cell packs the move flags and the length into one integer, halving
/// the grid footprint relative to the two-field cell.
///
/// # Errors
///
/// [`Error::NumericOverflow`] when a cell's length could exceed
/// [`MAX_PACKED_LENGTH`]; [`Error::ResourceExhaustion`] when the grid would
/// exceed [`MAX_GRID_BYTES`]. Both are checked before any allocation.
pub fn lcs_packed<T: PartialEq + Clone>(xs: &[T], ys: &[T]) -> Result<Vec<T>> {
    // The LCS length is bounded by the shorter input; longer than that and
    // the 29-bit length field could wrap around.
    if xs.len().min(ys.len()) > MAX_PACKED_LENGTH {
        return Err(Error::numeric_overflow(format!(
            "LCS length may exceed the packed length field maximum of {MAX_PACKED_LENGTH}"
        )));
    }
    check_grid_bytes(xs.len(), ys.len(), std::mem::size_of::<u32>())?;

    let nx = xs.len();
    let ny = ys.len();
    let mut grid = vec![vec![0u32; nx + 1]; ny + 1];

    for j in 1..=ny {
        for i in 1..=nx {
            grid[j][i] = if xs[i - 1] == ys[j - 1] {
                let length = grid[j - 1][i - 1] & LENGTH_MASK;
                (length + 1) | MOVE_DIAGONAL
            } else {
                let left = grid[j][i - 1] & LENGTH_MASK;
                let up = grid[j - 1][i] & LENGTH_MASK;
                if left >= up {
                    left | MOVE_LEFT
                } else {
                    up | MOVE_UP
                }
            };
        }
    }

    let mut subsequence = Vec::new();
    let mut i = nx;
    let mut j = ny;
    loop {
        match grid[j][i] & !LENGTH_MASK {
            MOVE_DIAGONAL => {
                subsequence.push(xs[i - 1].clone());
                i -= 1;
                j -= 1;
            }
            MOVE_UP => j -= 1,
            MOVE_LEFT => i -= 1,
            _ => break,
        }
    }
    subsequence.reverse();
    Ok(subsequence)
}

/// Rejects grids whose footprint would exceed [`MAX_GRID_BYTES`].
fn check_grid_bytes(nx: usize, ny: usize, cell_bytes: usize) -> Result<()> {
    let bytes = nx
        .checked_add(1)
        .and_then(|cols| ny.checked_add(1).and_then(|rows| cols.checked_mul(rows)))
        .and_then(|cells| cells.checked_mul(cell_bytes));
    match bytes {
        Some(bytes) if bytes <= MAX_GRID_BYTES => Ok(()),
        _ => Err(Error::resource_exhaustion(format!(
            "a {}x{} grid exceeds the limit of {} bytes",
            ny + 1,
            nx + 1,
            MAX_GRID_BYTES
        ))),
    }
}
