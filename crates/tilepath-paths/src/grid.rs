//! The immutable walkability layer searched by the engine.
//!
//! [`WalkGrid`] stores one flag per cell in a flat row-major vector. It never
//! changes after construction, so a single grid can be shared by any number
//! of concurrent searches, each carrying its own
//! [`SearchState`](crate::SearchState).

use tilepath_core::{Point, Range};

use crate::error::{GridDefect, PathError};
use crate::neighbors;

/// Rectangular grid of walkable/blocked cells, indexed `row * cols + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkGrid {
    rng: Range,
    width: usize,
    cells: Vec<bool>,
}

impl WalkGrid {
    /// Build a grid from a matrix of rows, `true` marking a walkable cell.
    ///
    /// Every row must have the same, non-zero length.
    pub fn new<R: AsRef<[bool]>>(matrix: &[R]) -> Result<Self, PathError> {
        let Some(first) = matrix.first() else {
            return Err(GridDefect::NoRows.into());
        };
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(GridDefect::NoColumns.into());
        }

        let mut cells = Vec::with_capacity(cols * matrix.len());
        for (row, r) in matrix.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != cols {
                return Err(GridDefect::Jagged {
                    row,
                    expected: cols,
                    found: r.len(),
                }
                .into());
            }
            cells.extend_from_slice(r);
        }

        Ok(Self::from_cells(cols, matrix.len(), cells))
    }

    /// Build a `width` × `height` grid, asking `walkable` about every cell
    /// in row-major order.
    pub fn from_fn(
        width: i32,
        height: i32,
        mut walkable: impl FnMut(Point) -> bool,
    ) -> Result<Self, PathError> {
        if height <= 0 {
            return Err(GridDefect::NoRows.into());
        }
        if width <= 0 {
            return Err(GridDefect::NoColumns.into());
        }
        let cells = Range::with_size(width, height)
            .iter()
            .map(&mut walkable)
            .collect();
        Ok(Self::from_cells(width as usize, height as usize, cells))
    }

    fn from_cells(cols: usize, rows: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), cols * rows);
        let grid = Self {
            rng: Range::with_size(cols as i32, rows as i32),
            width: cols,
            cells,
        };
        log::debug!(
            "built {}x{} walk grid ({} walkable)",
            cols,
            rows,
            grid.walkable_count()
        );
        grid
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.rng.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.rng.height()
    }

    /// The rectangle `[0, cols) × [0, rows)`.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty matrices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.rng.contains(p)
    }

    /// Whether `p` is inside the grid and walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.cells[i])
    }

    /// Number of walkable cells.
    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|&&w| w).count()
    }

    /// Append the in-bounds 8-connected neighbors of `p` into `buf`.
    ///
    /// Walkability is not checked here. The caller clears `buf`.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let rng = self.rng;
        neighbors::push_all(p, buf, |n| rng.contains(n));
    }

    /// Check that `p` is a valid query coordinate.
    pub(crate) fn check(&self, p: Point) -> Result<usize, PathError> {
        self.idx(p).ok_or(PathError::OutOfBounds {
            point: p,
            width: self.width(),
            height: self.height(),
        })
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    #[inline]
    pub(crate) fn walkable_at(&self, idx: usize) -> bool {
        self.cells[idx]
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: i32,
    height: i32,
    rows: Vec<String>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for WalkGrid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<String> = self
            .cells
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|&w| if w { '.' } else { '#' })
                    .collect::<String>()
            })
            .collect();
        GridRepr {
            width: self.width(),
            height: self.height(),
            rows,
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WalkGrid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let repr = GridRepr::deserialize(deserializer)?;
        let mut matrix = Vec::with_capacity(repr.rows.len());
        for row in &repr.rows {
            let mut cells = Vec::with_capacity(row.len());
            for ch in row.chars() {
                match ch {
                    '.' => cells.push(true),
                    '#' => cells.push(false),
                    other => return Err(D::Error::custom(format!("invalid cell {other:?}"))),
                }
            }
            matrix.push(cells);
        }
        let grid = WalkGrid::new(&matrix).map_err(D::Error::custom)?;
        if grid.width() != repr.width || grid.height() != repr.height {
            return Err(D::Error::custom(format!(
                "rows describe a {}x{} grid, header says {}x{}",
                grid.width(),
                grid.height(),
                repr.width,
                repr.height
            )));
        }
        Ok(grid)
    }
}
