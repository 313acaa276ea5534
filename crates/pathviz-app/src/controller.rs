//! The [`RunController`]: one cancellable background search at a time.
//!
//! The grid lives in an `Arc`. A running search holds the only other clone,
//! so [`Arc::get_mut`] succeeds exactly when no search is alive. Structural
//! edits go through it, which keeps the grid's shape and adjacency frozen for
//! the whole run, while the search writes node roles through `&Grid` and the
//! render loop reads them concurrently.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use pathviz_core::{Context, Grid, Point, Role};
use pathviz_paths::{Algorithm, Outcome, Timed};

use crate::config::VisualizerConfig;
use crate::error::RunError;

/// Lifecycle of the current or most recent run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// No run since startup or the last reset.
    #[default]
    Idle,
    /// A search thread is alive.
    Running(Algorithm),
    /// The last run terminated on its own.
    Completed(Algorithm, Outcome),
    /// The last run was stopped before it terminated.
    Cancelled(Algorithm),
}

impl RunState {
    /// Whether a search thread is alive.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running(_))
    }
}

struct Worker {
    algorithm: Algorithm,
    ctx: Context,
    handle: JoinHandle<Outcome>,
}

/// Owns the grid and the (at most one) search thread working on it.
pub struct RunController {
    grid: Arc<Grid>,
    config: VisualizerConfig,
    worker: Option<Worker>,
    state: RunState,
}

impl RunController {
    pub fn new(grid: Grid, config: VisualizerConfig) -> Self {
        Self {
            grid: Arc::new(grid),
            config,
            worker: None,
            state: RunState::Idle,
        }
    }

    /// Read access for renderers. Safe to call while a search runs.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The state as of the last [`poll`](Self::poll).
    #[inline]
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Collect a finished search thread, if any, and return the new state.
    pub fn poll(&mut self) -> &RunState {
        if self.worker.as_ref().is_some_and(|w| w.handle.is_finished()) {
            self.join();
        }
        &self.state
    }

    /// Launch `algorithm` on a background thread.
    ///
    /// Fails with [`RunError::AlreadyRunning`] while another run is alive and
    /// with [`RunError::MissingEndpoints`] unless both Start and End are
    /// placed. Marks left by the previous run are cleared first.
    pub fn start_run(&mut self, algorithm: Algorithm) -> Result<(), RunError> {
        self.poll();
        if self.worker.is_some() {
            return Err(RunError::AlreadyRunning);
        }
        let (Some(start), Some(end)) = (self.grid.start(), self.grid.end()) else {
            return Err(RunError::MissingEndpoints);
        };

        self.grid.clear_search();

        let ctx = Context::new();
        let mut pacer = Timed::new(ctx.clone(), self.config.delay(algorithm));
        let grid = Arc::clone(&self.grid);
        let handle = thread::Builder::new()
            .name(format!("pathviz-{algorithm:?}").to_lowercase())
            .spawn(move || algorithm.run(&grid, start, end, &mut pacer))?;

        log::info!("{algorithm} started from {start} to {end}");
        self.worker = Some(Worker {
            algorithm,
            ctx,
            handle,
        });
        self.state = RunState::Running(algorithm);
        Ok(())
    }

    /// Signal the running search to stop and wait until it has observed the
    /// signal at its next yield point. No-op when idle.
    pub fn cancel(&mut self) {
        if let Some(worker) = &self.worker {
            log::debug!("cancelling {}", worker.algorithm);
            worker.ctx.cancel();
            self.join();
        }
    }

    /// Mutable access for structural edits, refused while a search runs.
    pub fn grid_mut(&mut self) -> Result<&mut Grid, RunError> {
        self.poll();
        Arc::get_mut(&mut self.grid).ok_or(RunError::AlreadyRunning)
    }

    /// Place or clear a role at `p` (see [`Grid::set_role`]). Returns whether
    /// the grid changed.
    pub fn edit(&mut self, p: Point, role: Role) -> Result<bool, RunError> {
        Ok(self.grid_mut()?.set_role(p, role)?)
    }

    /// Stop any running search, then restore the grid interior to open.
    ///
    /// The reset is never applied while a search is still writing: a running
    /// search is cancelled and joined first.
    pub fn request_reset(&mut self) -> Result<(), RunError> {
        self.cancel();
        self.grid_mut()?.reset_interior();
        self.state = RunState::Idle;
        log::info!("grid reset");
        Ok(())
    }

    fn join(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        let algorithm = worker.algorithm;
        let outcome = worker.handle.join().unwrap_or_else(|_| {
            log::error!("{algorithm} search thread panicked");
            Outcome::Cancelled
        });
        log::info!("{algorithm} finished: {outcome}");
        self.state = match outcome {
            Outcome::Cancelled => RunState::Cancelled(algorithm),
            outcome => RunState::Completed(algorithm, outcome),
        };
    }
}

impl Drop for RunController {
    fn drop(&mut self) {
        self.cancel();
    }
}
