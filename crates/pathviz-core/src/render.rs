//! The [`Renderer`] seam between the grid and a display back-end.

use crate::grid::Grid;

/// Draws the current state of a [`Grid`].
///
/// Called once per frame, possibly while a search thread is mutating node
/// roles. Implementations must read each node's role once and must not
/// assume the grid stays unchanged for the duration of the call.
pub trait Renderer {
    /// Draw every node and the grid-line overlay.
    fn draw(&mut self, grid: &Grid);
}
