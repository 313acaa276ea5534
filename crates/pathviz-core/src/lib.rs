//! **pathviz-core**: grid model for the pathviz search visualizer.
//!
//! This crate provides the types shared by every pathviz crate: geometry,
//! the per-node [`Role`] state machine, the [`Grid`] board with its
//! adjacency, a cooperative-cancellation [`Context`], the [`Renderer`] seam
//! and device-independent input [`Msg`]s.

pub mod context;
pub mod error;
pub mod geom;
pub mod grid;
pub mod messages;
pub mod node;
pub mod render;
pub mod style;

pub use context::Context;
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{DEFAULT_SIZE, Grid, MAX_SIZE};
pub use messages::*;
pub use node::Role;
pub use render::Renderer;
pub use style::{Color, LINE_COLOR, role_color};
