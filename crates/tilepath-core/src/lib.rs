//! **tilepath-core** — geometry primitives for tile-grid pathfinding.
//!
//! Provides the [`Point`] cell coordinate and the half-open [`Range`]
//! rectangle shared by the engine and its collaborators.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
