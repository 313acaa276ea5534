//! **pathviz-app**: everything between the input devices and the grid.
//!
//! - [`RunController`] owns the shared [`Grid`](pathviz_core::Grid), runs one
//!   search at a time on a background thread and refuses structural edits
//!   while it runs.
//! - [`Visualizer`] applies user [`Command`]s and produces a status line.
//! - [`InputMapper`] turns device-independent [`Msg`](pathviz_core::Msg)s
//!   into [`Command`]s.

pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod visualizer;

pub use config::VisualizerConfig;
pub use controller::{RunController, RunState};
pub use error::RunError;
pub use input::InputMapper;
pub use pathviz_paths::{Algorithm, Outcome};
pub use visualizer::{Command, Flow, Visualizer};
