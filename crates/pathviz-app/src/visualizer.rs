//! The [`Visualizer`]: applies user commands to the grid and run controller.

use pathviz_core::{Grid, GridError, Point, Role};
use pathviz_paths::Algorithm;

use crate::config::VisualizerConfig;
use crate::controller::{RunController, RunState};
use crate::error::RunError;

/// A discrete user command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Place Start, then End, then a Barrier on an open cell.
    PlaceOrAdvance(Point),
    /// Clear an interior cell back to open.
    Clear(Point),
    /// Launch a search.
    RunAlgorithm(Algorithm),
    /// Stop any run and clear the grid interior.
    Reset,
    /// Leave the application.
    Quit,
}

/// Whether the front end should keep going.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Application model shared by every front end.
pub struct Visualizer {
    config: VisualizerConfig,
    controller: RunController,
}

impl Visualizer {
    /// Build the grid described by `config`. Fails only on an invalid size.
    pub fn new(config: VisualizerConfig) -> Result<Self, GridError> {
        let grid = Grid::new(config.grid_size)?;
        log::debug!("built {0}x{0} grid", config.grid_size);
        Ok(Self {
            controller: RunController::new(grid, config.clone()),
            config,
        })
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// The grid, for drawing.
    #[inline]
    pub fn grid(&self) -> &Grid {
        self.controller.grid()
    }

    pub fn controller(&self) -> &RunController {
        &self.controller
    }

    /// Collect a finished run. Call once per frame.
    pub fn poll(&mut self) -> &RunState {
        self.controller.poll()
    }

    /// Apply `cmd`. Rejected commands are logged and dropped.
    pub fn handle(&mut self, cmd: Command) -> Flow {
        match self.apply(cmd) {
            Ok(flow) => flow,
            Err(err) => {
                log::debug!("dropped {cmd:?}: {err}");
                Flow::Continue
            }
        }
    }

    fn apply(&mut self, cmd: Command) -> Result<Flow, RunError> {
        match cmd {
            Command::PlaceOrAdvance(p) => {
                let grid = self.controller.grid();
                let role = if grid.start().is_none() {
                    Role::Start
                } else if grid.end().is_none() {
                    Role::End
                } else {
                    Role::Barrier
                };
                self.controller.edit(p, role)?;
            }
            Command::Clear(p) => {
                self.controller.edit(p, Role::Open)?;
            }
            Command::RunAlgorithm(algorithm) => self.controller.start_run(algorithm)?,
            Command::Reset => self.controller.request_reset()?,
            Command::Quit => {
                self.controller.cancel();
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// One-line description of what is going on.
    pub fn status(&self) -> String {
        match self.controller.state() {
            RunState::Running(algorithm) => format!("{algorithm}: searching..."),
            RunState::Completed(algorithm, outcome) => format!("{algorithm}: {outcome}"),
            RunState::Cancelled(algorithm) => format!("{algorithm}: cancelled"),
            RunState::Idle => {
                let grid = self.grid();
                if grid.start().is_none() {
                    "click to place the start".into()
                } else if grid.end().is_none() {
                    "click to place the end".into()
                } else {
                    "b: BFS  d: DFS  a: A*  r: reset".into()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::{Duration, Instant};

    fn visualizer(size: i32) -> Visualizer {
        Visualizer::new(VisualizerConfig {
            grid_size: size,
            ..VisualizerConfig::default().unpaced()
        })
        .unwrap()
    }

    fn settle(v: &mut Visualizer) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while v.poll().is_running() {
            assert!(Instant::now() < deadline);
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn invalid_size_is_fatal() {
        for grid_size in [0, 100_000] {
            let config = VisualizerConfig {
                grid_size,
                ..Default::default()
            };
            assert!(matches!(
                Visualizer::new(config),
                Err(GridError::InvalidGridSize(n)) if n == grid_size
            ));
        }
    }

    #[test]
    fn clicks_place_start_end_then_barriers() {
        let mut v = visualizer(10);
        for p in [Point::new(1, 1), Point::new(5, 5), Point::new(3, 3), Point::new(4, 3)] {
            assert_eq!(v.handle(Command::PlaceOrAdvance(p)), Flow::Continue);
        }
        let g = v.grid();
        assert_eq!(g.role(Point::new(1, 1)), Role::Start);
        assert_eq!(g.role(Point::new(5, 5)), Role::End);
        assert_eq!(g.role(Point::new(3, 3)), Role::Barrier);
        assert_eq!(g.role(Point::new(4, 3)), Role::Barrier);
    }

    #[test]
    fn start_and_end_stay_unique() {
        let mut v = visualizer(10);
        let cmds = [
            Command::PlaceOrAdvance(Point::new(1, 1)),
            Command::PlaceOrAdvance(Point::new(1, 1)),
            Command::PlaceOrAdvance(Point::new(2, 2)),
            Command::Clear(Point::new(1, 1)),
            Command::PlaceOrAdvance(Point::new(3, 3)),
            Command::PlaceOrAdvance(Point::new(4, 4)),
            Command::Clear(Point::new(2, 2)),
            Command::PlaceOrAdvance(Point::new(5, 5)),
            Command::PlaceOrAdvance(Point::new(6, 6)),
            Command::Clear(Point::new(0, 0)),
            Command::PlaceOrAdvance(Point::new(50, 50)),
        ];
        for cmd in cmds {
            v.handle(cmd);
            assert!(v.grid().count(Role::Start) <= 1);
            assert!(v.grid().count(Role::End) <= 1);
        }
        let g = v.grid();
        assert_eq!(g.start(), Some(Point::new(3, 3)));
        assert_eq!(g.end(), Some(Point::new(5, 5)));
        assert_eq!(g.role(Point::new(4, 4)), Role::Barrier);
        assert_eq!(g.role(Point::new(6, 6)), Role::Barrier);
        assert_eq!(g.role(Point::new(0, 0)), Role::Barrier);
    }

    #[test]
    fn run_without_endpoints_is_dropped() {
        let mut v = visualizer(10);
        assert_eq!(v.handle(Command::RunAlgorithm(Algorithm::Bfs)), Flow::Continue);
        assert_eq!(v.controller().state(), &RunState::Idle);
        assert_eq!(v.status(), "click to place the start");
    }

    #[test]
    fn run_reset_and_status() {
        let mut v = visualizer(10);
        v.handle(Command::PlaceOrAdvance(Point::at(1, 1)));
        v.handle(Command::PlaceOrAdvance(Point::at(1, 5)));
        assert_eq!(v.status(), "b: BFS  d: DFS  a: A*  r: reset");

        v.handle(Command::RunAlgorithm(Algorithm::Bfs));
        settle(&mut v);
        assert_eq!(v.status(), "BFS: path found (4 steps)");
        assert_eq!(v.grid().count(Role::Path), 3);

        v.handle(Command::Reset);
        v.handle(Command::Reset);
        assert_eq!(v.grid().count(Role::Open), 64);
        assert_eq!(v.status(), "click to place the start");
    }

    #[test]
    fn quit_stops_running_search() {
        let mut v = Visualizer::new(VisualizerConfig {
            grid_size: 30,
            ..Default::default()
        })
        .unwrap();
        v.handle(Command::PlaceOrAdvance(Point::new(1, 1)));
        v.handle(Command::PlaceOrAdvance(Point::new(28, 28)));
        v.handle(Command::RunAlgorithm(Algorithm::Dfs));
        assert_eq!(v.handle(Command::Quit), Flow::Quit);
        assert!(!v.controller().state().is_running());
    }
}
