// error.rs - Construction-time validation errors

use thiserror::Error;

/// Errors raised while validating configuration and computing grid
/// dimensions. Stepping an already-constructed game cannot fail.
#[derive(Debug, Error, PartialEq)]
pub enum LifegameError {
    #[error("container width must be positive, got {0} px")]
    InvalidContainerWidth(u32),

    #[error("cell size must be positive, got {0} px")]
    InvalidCellSize(u32),

    #[error("minimum cell count must be at least 1, got {0}")]
    InvalidMinCount(usize),

    #[error("initial live percentage must be within 0..=100, got {0}")]
    InvalidInitPercent(f64),

    #[error("container of {container_width} px fits no {cell_size} px column")]
    ZeroColumns { container_width: u32, cell_size: u32 },
}
