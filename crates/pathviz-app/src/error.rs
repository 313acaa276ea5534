use pathviz_core::GridError;

/// Errors reported by the [`RunController`](crate::RunController).
///
/// None of them is fatal: the [`Visualizer`](crate::Visualizer) logs and drops
/// the offending command.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// A search is in progress; runs and structural edits must wait.
    #[error("a search is already running")]
    AlreadyRunning,
    /// A run was requested before both Start and End were placed.
    #[error("both a start and an end node must be placed")]
    MissingEndpoints,
    #[error(transparent)]
    Grid(#[from] GridError),
    /// The background thread could not be created.
    #[error("failed to spawn search thread: {0}")]
    Spawn(#[from] std::io::Error),
}
