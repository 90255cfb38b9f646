// rules.rs - Generation update rule with change tracking

use crate::grid::{ChangeSet, Grid};

/// Compute the next generation of `current` into `next` and record every
/// interior cell whose state flipped into `changes` (cleared first).
///
/// The rule, applied to each interior cell's 8-neighbor live count:
///   3 -> alive, 2 -> unchanged, anything else -> dead.
/// This matches canonical Life cell for cell and is kept in exactly this
/// shape: the count-2 branch never touches the change set.
///
/// `next` is a separate buffer so every read sees the previous generation;
/// the caller swaps the buffers afterwards. Both grids must share
/// dimensions.
pub fn next_generation(current: &Grid, next: &mut Grid, changes: &mut ChangeSet) {
    debug_assert_eq!((current.rows(), current.cols()), (next.rows(), next.cols()));
    changes.clear();

    for (row, col) in current.interior_coords() {
        let live_neighbors = u8::from(current.get(row - 1, col - 1))
            + u8::from(current.get(row - 1, col))
            + u8::from(current.get(row - 1, col + 1))
            + u8::from(current.get(row, col - 1))
            + u8::from(current.get(row, col + 1))
            + u8::from(current.get(row + 1, col - 1))
            + u8::from(current.get(row + 1, col))
            + u8::from(current.get(row + 1, col + 1));

        let alive = current.get(row, col);
        let next_state = match live_neighbors {
            3 => true,
            2 => alive,
            _ => false,
        };
        next.set(row, col, next_state);
        if next_state != alive {
            changes.push((row, col));
        }
    }
}
