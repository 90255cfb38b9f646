// render.rs - Change-tracked cell painting

use crate::grid::{CellCoord, Grid};
use crate::surface::{DEAD_FILL, DrawSurface, LIVE_FILL};

/// Paint exactly the listed cells onto the surface, gray for alive and
/// black for dead. Each cell is a `cell_size` square at
/// `((col-1) * cell_size, (row-1) * cell_size)`; the -1 drops the dead
/// border from the pixel coordinate space. Cells not listed keep
/// whatever the surface already shows, which is what makes stepping
/// cheap on a mostly-settled grid.
pub fn draw_changes<S: DrawSurface>(
    grid: &Grid,
    changes: &[CellCoord],
    cell_size: u32,
    surface: &mut S,
) {
    for &(row, col) in changes {
        let color = if grid.get(row, col) { LIVE_FILL } else { DEAD_FILL };
        surface.fill_rect(
            (col as u32 - 1) * cell_size,
            (row as u32 - 1) * cell_size,
            cell_size,
            cell_size,
            color,
        );
    }
}
