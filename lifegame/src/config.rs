// config.rs - Immutable game configuration

use crate::error::LifegameError;

/// Parameters fixed at construction time. They determine the grid
/// dimensions once and are never recomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifegameConfig {
    /// Target live percentage of the initial seeding, 0..=100.
    pub init_percent: f64,
    /// Edge length of one cell square, in pixels.
    pub cell_size: u32,
    /// Minimum total number of interior cells.
    pub min_count: usize,
}

impl Default for LifegameConfig {
    fn default() -> Self {
        Self {
            init_percent: 37.5,
            cell_size: 5,
            min_count: 100_000,
        }
    }
}

impl LifegameConfig {
    pub fn validate(&self) -> Result<(), LifegameError> {
        if self.cell_size == 0 {
            return Err(LifegameError::InvalidCellSize(self.cell_size));
        }
        if self.min_count == 0 {
            return Err(LifegameError::InvalidMinCount(self.min_count));
        }
        // NaN fails both comparisons' complement, so spell the valid range out.
        if !(self.init_percent >= 0.0 && self.init_percent <= 100.0) {
            return Err(LifegameError::InvalidInitPercent(self.init_percent));
        }
        Ok(())
    }
}
