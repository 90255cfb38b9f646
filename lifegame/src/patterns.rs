// patterns.rs - Named seed patterns, stamped centered on the grid

use crate::grid::Grid;

/// A well-known Life figure as (row, col) offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Bounding-box size of the pattern, (rows, cols).
    pub fn extent(&self) -> (usize, usize) {
        let rows = self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0);
        let cols = self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0);
        (rows, cols)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
];

/// Clear the grid and stamp the pattern centered on it. Offsets that
/// would land outside the interior are skipped, so a pattern larger than
/// the grid degrades to its visible part.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) {
    grid.clear();
    let (pat_rows, pat_cols) = pattern.extent();
    let row0 = 1 + grid.rows().saturating_sub(pat_rows) / 2;
    let col0 = 1 + grid.cols().saturating_sub(pat_cols) / 2;
    for &(row, col) in pattern.cells {
        if grid.is_interior(row0 + row, col0 + col) {
            grid.set(row0 + row, col0 + col, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_is_centered_on_even_grid() {
        let mut grid = Grid::new(4, 4);
        apply_pattern(&mut grid, &PATTERNS[0]);
        assert_eq!(grid.live_count(), 4);
        assert!(grid.get(2, 2) && grid.get(2, 3) && grid.get(3, 2) && grid.get(3, 3));
    }

    #[test]
    fn stamping_clears_previous_state() {
        let mut grid = Grid::new(10, 10);
        grid.set(1, 1, true);
        apply_pattern(&mut grid, &PATTERNS[1]);
        assert!(!grid.get(1, 1));
        assert_eq!(grid.live_count(), 3);
    }

    #[test]
    fn oversized_pattern_keeps_visible_part() {
        let mut grid = Grid::new(2, 2);
        apply_pattern(&mut grid, &PATTERNS[4]);
        assert!(grid.live_count() > 0);
        assert!(grid.live_count() <= 4);
    }

    #[test]
    fn every_pattern_fits_a_modest_grid() {
        for pattern in PATTERNS {
            let mut grid = Grid::new(20, 20);
            apply_pattern(&mut grid, pattern);
            assert_eq!(grid.live_count(), pattern.cells.len(), "{}", pattern.name);
        }
    }
}
