//! Win detection: does a board have a fully marked line?

use std::collections::HashSet;
use std::hash::Hash;

/// True if any row, column or either diagonal of the row-major
/// `size × size` board is entirely contained in `marked`.
///
/// `marked` may hold words that are not on the board. `board.len()` must be
/// `size * size`. A zero-sized board counts as won, its diagonals being
/// vacuously complete.
pub fn has_bingo<T: Eq + Hash>(board: &[T], marked: &HashSet<T>, size: usize) -> bool {
    debug_assert_eq!(board.len(), size * size, "board does not match its size");

    let is_marked = |row: usize, col: usize| marked.contains(&board[row * size + col]);

    let full_row = (0..size).any(|r| (0..size).all(|c| is_marked(r, c)));
    if full_row {
        return true;
    }
    let full_col = (0..size).any(|c| (0..size).all(|r| is_marked(r, c)));
    if full_col {
        return true;
    }
    (0..size).all(|i| is_marked(i, i)) || (0..size).all(|i| is_marked(i, size - 1 - i))
}
