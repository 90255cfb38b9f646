// grid.rs - Padded life grid, cell coordinates, change tracking

use crate::config::LifegameConfig;
use crate::error::LifegameError;

/// (row, col) of an interior cell, 1-indexed into the padded grid.
pub type CellCoord = (usize, usize);

/// Interior coordinates whose alive/dead value differs between two
/// consecutive generations, in row-major scan order. Border cells
/// never appear here.
pub type ChangeSet = Vec<CellCoord>;

/// Interior dimensions computed from the container width and the
/// configured cell size / minimum count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    pub rows: usize,
    pub cols: usize,
}

impl GridDims {
    /// Columns fill the container width, capped at `ceil(sqrt(min_count))`
    /// so the grid stays roughly square; rows then cover `min_count`.
    pub fn compute(container_width: u32, config: &LifegameConfig) -> Result<Self, LifegameError> {
        if container_width == 0 {
            return Err(LifegameError::InvalidContainerWidth(container_width));
        }
        let mut cols = (container_width / config.cell_size) as usize;
        let max_cols = (config.min_count as f64).sqrt().ceil() as usize;
        if cols > max_cols {
            cols = max_cols;
        }
        if cols == 0 {
            return Err(LifegameError::ZeroColumns {
                container_width,
                cell_size: config.cell_size,
            });
        }
        let rows = config.min_count.div_ceil(cols);
        Ok(Self { rows, cols })
    }
}

/// A 2D field of alive flags with interior size `rows x cols`, stored
/// row-major with a permanently dead one-cell border ring. The border
/// lets neighbor counting skip bounds checks; it is never written after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid with the given interior dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; (rows + 2) * (cols + 2)],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * (self.cols + 2) + col
    }

    /// True for coordinates inside the live playing area.
    pub fn is_interior(&self, row: usize, col: usize) -> bool {
        (1..=self.rows).contains(&row) && (1..=self.cols).contains(&col)
    }

    /// Read any cell, border included.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    /// Write an interior cell. Border cells are not writable.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        debug_assert!(self.is_interior(row, col), "cell ({row}, {col}) is not interior");
        let idx = self.index(row, col);
        self.cells[idx] = alive;
    }

    /// Number of alive interior cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Kill every interior cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Row-major iterator over all interior coordinates.
    pub fn interior_coords(&self) -> impl Iterator<Item = CellCoord> + use<> {
        let (rows, cols) = (self.rows, self.cols);
        (1..=rows).flat_map(move |row| (1..=cols).map(move |col| (row, col)))
    }
}
