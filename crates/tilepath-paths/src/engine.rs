use tilepath_core::Point;

use crate::config::SearchConfig;
use crate::error::PathError;
use crate::grid::WalkGrid;
use crate::search::{SearchState, SearchStats};

/// A* path engine owning its grid and search caches.
///
/// ```
/// use tilepath_core::Point;
/// use tilepath_paths::AstarPath;
///
/// let mut engine = AstarPath::new(&[[true; 3]; 3])?;
/// let path = engine.find_path(Point::new(0, 0), Point::new(2, 2))?;
/// assert_eq!(path, vec![Point::new(1, 1), Point::new(2, 2)]);
/// # Ok::<(), tilepath_paths::PathError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AstarPath {
    grid: WalkGrid,
    state: SearchState,
    config: SearchConfig,
}

impl AstarPath {
    /// Build an engine from a walkability matrix (`true` = walkable).
    ///
    /// Fails with [`PathError::InvalidGrid`] if the matrix is empty or its
    /// rows differ in length.
    pub fn new<R: AsRef<[bool]>>(matrix: &[R]) -> Result<Self, PathError> {
        Ok(Self::from_grid(WalkGrid::new(matrix)?))
    }

    /// Build an engine around an existing grid.
    pub fn from_grid(grid: WalkGrid) -> Self {
        let state = SearchState::new(&grid);
        Self {
            grid,
            state,
            config: SearchConfig::default(),
        }
    }

    /// Replace the search limits.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the search limits in place.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Current search limits.
    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// The walkability grid being searched.
    #[inline]
    pub fn grid(&self) -> &WalkGrid {
        &self.grid
    }

    /// Shortest path from `from` to `to`, excluding `from` and including
    /// `to`.
    ///
    /// Returns an empty path when `from == to` or when `to` cannot be
    /// reached. Fails with [`PathError::OutOfBounds`] if either endpoint is
    /// outside the grid.
    pub fn find_path(&mut self, from: Point, to: Point) -> Result<Vec<Point>, PathError> {
        self.state.find_path(&self.grid, from, to, &self.config)
    }

    /// Statistics of the most recent [`find_path`](Self::find_path) call.
    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.state.last_stats()
    }

    /// Give the grid back, dropping the search caches.
    pub fn into_grid(self) -> WalkGrid {
        self.grid
    }
}
