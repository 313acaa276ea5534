//! Error type for grid construction and placement.

use crate::geom::Point;

/// Errors returned by [`Grid`](crate::Grid) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The coordinate lies outside the grid.
    #[error("position {0} is outside the grid")]
    InvalidPosition(Point),
    /// The requested grid size is not positive.
    #[error(
        "invalid grid size {0}: must be between 1 and {max}",
        max = crate::grid::MAX_SIZE
    )]
    InvalidGridSize(i32),
}
