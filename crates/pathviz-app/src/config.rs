//! Process-level settings.

use std::time::Duration;

use pathviz_core::DEFAULT_SIZE;
use pathviz_paths::Algorithm;

/// Default side of the drawing canvas, in pixels.
pub const DEFAULT_CANVAS_WIDTH: i32 = 600;

/// Grid dimensions and per-algorithm pacing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct VisualizerConfig {
    /// Rows and columns of the grid, border included.
    pub grid_size: i32,
    /// Side of the square canvas in pixels.
    pub canvas_width: i32,
    /// Per-step delay of BFS, in milliseconds.
    pub bfs_delay_ms: u64,
    /// Per-step delay of DFS, in milliseconds.
    pub dfs_delay_ms: u64,
    /// Per-step delay of A*, in milliseconds.
    pub astar_delay_ms: u64,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_SIZE,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            bfs_delay_ms: Algorithm::Bfs.default_delay().as_millis() as u64,
            dfs_delay_ms: Algorithm::Dfs.default_delay().as_millis() as u64,
            astar_delay_ms: Algorithm::AStar.default_delay().as_millis() as u64,
        }
    }
}

impl VisualizerConfig {
    /// Side of one cell in pixels (at least 1).
    pub fn cell_width(&self) -> i32 {
        if self.grid_size <= 0 {
            return 1;
        }
        (self.canvas_width / self.grid_size).max(1)
    }

    /// Pacing delay for `algorithm`.
    pub fn delay(&self, algorithm: Algorithm) -> Duration {
        let ms = match algorithm {
            Algorithm::Bfs => self.bfs_delay_ms,
            Algorithm::Dfs => self.dfs_delay_ms,
            Algorithm::AStar => self.astar_delay_ms,
        };
        Duration::from_millis(ms)
    }

    /// Same configuration with every delay set to zero.
    pub fn unpaced(self) -> Self {
        Self {
            bfs_delay_ms: 0,
            dfs_delay_ms: 0,
            astar_delay_ms: 0,
            ..self
        }
    }
}
