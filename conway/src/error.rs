// error.rs - Construction-time errors for grids and grid sizes

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GridError>;

/// Everything that can go wrong is caught while building a grid.
/// Advancing a valid grid never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Jagged { row: usize, expected: usize, found: usize },

    #[error("grid size {width}x{height} has a zero dimension")]
    ZeroDimension { width: usize, height: usize },

    #[error("viewport {width}x{height} has a zero dimension")]
    ZeroViewport { width: u32, height: u32 },
}
