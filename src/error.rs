use std::fmt;

use crate::cell::Point;

/// Errors raised by maze generation
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum MazeError {
    /// Grid width or height is zero
    InvalidDimension { width: usize, height: usize },
    /// Coordinate outside the grid
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },
    /// Caller supplied seed point (start or end) outside the grid
    InvalidSeedPoint {
        point: Point,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimension { width, height } => write!(
                f,
                "Invalid maze dimensions {}x{} - width and height must be positive",
                width, height
            ),
            MazeError::OutOfBounds {
                point,
                width,
                height,
            } => write!(
                f,
                "Coordinate {} is out of bounds - grid size is {}x{}",
                point, width, height
            ),
            MazeError::InvalidSeedPoint {
                point,
                width,
                height,
            } => write!(
                f,
                "Seed point {} lies outside the {}x{} maze",
                point, width, height
            ),
        }
    }
}

impl std::error::Error for MazeError {}

/// Result type alias for maze operations
pub type Result<T> = std::result::Result<T, MazeError>;
