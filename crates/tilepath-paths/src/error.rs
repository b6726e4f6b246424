use std::fmt;

use tilepath_core::Point;

/// Reason a walkability matrix was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridDefect {
    /// The matrix has no rows.
    NoRows,
    /// The first row has no cells.
    NoColumns,
    /// A row's length differs from the first row's.
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors produced by grid construction and path queries.
///
/// An unreachable goal is not an error: queries return an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Malformed walkability matrix.
    InvalidGrid(GridDefect),
    /// A query coordinate lies outside the grid.
    OutOfBounds { point: Point, width: i32, height: i32 },
}

impl fmt::Display for GridDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRows => write!(f, "grid has no rows"),
            Self::NoColumns => write!(f, "grid has no columns"),
            Self::Jagged {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid(defect) => write!(f, "invalid grid: {defect}"),
            Self::OutOfBounds {
                point,
                width,
                height,
            } => write!(f, "point {point} is outside the {width}x{height} grid"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<GridDefect> for PathError {
    fn from(defect: GridDefect) -> Self {
        Self::InvalidGrid(defect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = PathError::InvalidGrid(GridDefect::Jagged {
            row: 2,
            expected: 4,
            found: 3,
        });
        assert_eq!(e.to_string(), "invalid grid: row 2 has 3 cells, expected 4");

        let e = PathError::OutOfBounds {
            point: Point::new(5, 0),
            width: 3,
            height: 3,
        };
        assert_eq!(e.to_string(), "point (5, 0) is outside the 3x3 grid");
    }

    #[test]
    fn boxes_as_std_error() {
        let e: Box<dyn std::error::Error> = PathError::from(GridDefect::NoRows).into();
        assert_eq!(e.to_string(), "invalid grid: grid has no rows");
    }
}
