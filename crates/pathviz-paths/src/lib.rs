//! Paced graph searches over a pathviz [`Grid`](pathviz_core::Grid).
//!
//! The crate animates three searches by writing node roles as it goes:
//!
//! - **BFS** shortest path ([`bfs`])
//! - **DFS** pre-order descent, not necessarily shortest ([`dfs`])
//! - **A\*** shortest path with a Manhattan heuristic ([`astar`])
//!
//! Every algorithm calls a [`Pacer`] after each visitation step. The pacer is
//! the only suspension point of a run and the place where cancellation is
//! observed.
//!
//! | Role written | Meaning |
//! |---|---|
//! | `Frontier` | discovered, not yet explored |
//! | `Visited` | explored, parent finalized |
//! | `Path` | on the reconstructed start → end path |

mod astar;
mod bfs;
mod dfs;
mod pacer;
mod path;
mod search;

#[cfg(test)]
mod testutil;

pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use pacer::{Pacer, Timed, Unpaced};
pub use search::{Algorithm, Outcome, SearchError, search};
