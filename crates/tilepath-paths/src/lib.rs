//! A* shortest-path search on 8-connected tile grids.
//!
//! The engine answers one question: given a rectangular grid of walkable and
//! blocked cells, what is the cheapest route from a start cell to a goal
//! cell? Orthogonal steps cost [`STRAIGHT_COST`] (10) and diagonal steps
//! [`DIAGONAL_COST`] (14); the octile distance ([`octile`]) is both the
//! heuristic and the step cost.
//!
//! The work is split into two layers:
//!
//! | Type | Holds | Shared? |
//! |---|---|---|
//! | [`WalkGrid`] | walkability, dimensions | read-only, `Send + Sync` |
//! | [`SearchState`] | costs, parents, open/closed sets | one per concurrent search |
//!
//! [`AstarPath`] bundles one of each behind a `new` / `find_path` interface.
//!
//! Paths exclude the start cell and include the goal. An unreachable goal
//! yields an empty path, not an error.

mod astar;
mod config;
mod distance;
mod engine;
mod error;
mod grid;
mod neighbors;
mod node;
mod search;

pub use config::SearchConfig;
pub use distance::{DIAGONAL_COST, STRAIGHT_COST, chebyshev, octile, path_cost};
pub use engine::AstarPath;
pub use error::{GridDefect, PathError};
pub use grid::WalkGrid;
pub use neighbors::Neighbors;
pub use search::{SearchOutcome, SearchState, SearchStats};
