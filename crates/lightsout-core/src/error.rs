//! Error type for the Lights Out engine.
//!
//! The engine only ever rejects a call because an argument was out of range,
//! so there is a single variant. A rejected call never changes the grid.

use thiserror::Error;

/// Error returned by fallible engine operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// A size or coordinate outside the valid range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl PuzzleError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Grid size of zero, or one whose cell count does not fit in memory
    pub fn invalid_size(size: usize) -> Self {
        Self::invalid_argument(format!("grid size must be positive, got {}", size))
    }

    /// Coordinates that fall outside a `size`x`size` grid
    pub fn out_of_bounds(row: isize, col: isize, size: usize) -> Self {
        Self::invalid_argument(format!(
            "cell ({}, {}) is outside the {}x{} grid",
            row, col, size, size
        ))
    }
}
