use thiserror::Error;

/// Errors raised when building a grid from raw numbers.
///
/// Engine operations themselves are total; this only guards the boundary
/// where untyped values (test fixtures, host data) enter the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid tile value {value} at row {row}, col {col}: expected 0 or a power of two >= 2")]
    InvalidTileValue { row: usize, col: usize, value: u32 },

    #[error("expected {expected} cells, got {actual}")]
    WrongCellCount { expected: usize, actual: usize },
}
