//! Text maps for the tilepath demos.
//!
//! An [`AsciiMap`] turns ASCII art into the walkability matrix consumed by
//! [`tilepath_paths::AstarPath`], and [`render_path`] draws a path back onto
//! it.
//!
//! | Char | Meaning |
//! |---|---|
//! | `.` | walkable |
//! | `#` | blocked |
//! | `S` | walkable, start marker |
//! | `G` | walkable, goal marker |

use std::fmt;

use tilepath_core::Point;

/// Characters accepted in a map.
pub const RUNES: &str = ".#SG";

/// Drawn over path cells by [`render_path`].
pub const PATH_CHAR: char = '*';

/// Sample level used when the demo is run without a map file.
pub const SAMPLE: &str = "\
S.........#.........
..######..#..#####..
..#....#..#......#..
..#.##.#..####...#..
..#..#.#.........#..
.....#.######.####..
######.#....#.......
.......#.##.#.#####.
.#######..#...#...#.
..........#.....#..G";

/// A parsed ASCII map.
#[derive(Debug, Clone)]
pub struct AsciiMap {
    rows: Vec<Vec<char>>,
    start: Option<Point>,
    goal: Option<Point>,
}

impl AsciiMap {
    /// Parse a map.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines. Every line must have the same width and use
    /// only [`RUNES`]; `S` and `G` may each appear at most once.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        let mut rows: Vec<Vec<char>> = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (y, line) in s.lines().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let marker = match ch {
                    'S' => Some(&mut start),
                    'G' => Some(&mut goal),
                    _ if RUNES.contains(ch) => None,
                    _ => {
                        return Err(MapError::InvalidRune {
                            ch,
                            pos,
                            content: s.to_string(),
                        });
                    }
                };
                if let Some(slot) = marker {
                    if let Some(first) = *slot {
                        return Err(MapError::DuplicateMarker {
                            ch,
                            first,
                            second: pos,
                        });
                    }
                    *slot = Some(pos);
                }
                row.push(ch);
            }
            if rows.first().is_some_and(|r| r.len() != row.len()) {
                return Err(MapError::InconsistentSize(s.to_string()));
            }
            rows.push(row);
        }

        log::debug!(
            "parsed {}x{} map, start {:?}, goal {:?}",
            rows.first().map_or(0, Vec::len),
            rows.len(),
            start,
            goal
        );
        Ok(Self { rows, start, goal })
    }

    /// Return the (width, height) size of the map in cells.
    pub fn size(&self) -> Point {
        let w = self.rows.first().map_or(0, Vec::len);
        Point::new(w as i32, self.rows.len() as i32)
    }

    /// Position of the `S` marker, if any.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the `G` marker, if any.
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// The walkability matrix, row by row (`true` = walkable).
    pub fn walkability(&self) -> Vec<Vec<bool>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&ch| ch != '#').collect())
            .collect()
    }
}

/// Draw `path` over `map`, marking every path cell except the goal marker.
pub fn render_path(map: &AsciiMap, path: &[Point]) -> String {
    let mut rows = map.rows.clone();
    for p in path {
        let Some(ch) = rows
            .get_mut(p.y as usize)
            .and_then(|row| row.get_mut(p.x as usize))
        else {
            continue;
        };
        if *ch != 'G' {
            *ch = PATH_CHAR;
        }
    }
    rows.iter()
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Errors that can occur when parsing a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character outside [`RUNES`] was found.
    InvalidRune {
        ch: char,
        pos: Point,
        content: String,
    },
    /// `S` or `G` appears more than once.
    DuplicateMarker { ch: char, first: Point, second: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "map: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos, content } => {
                write!(
                    f,
                    "map contains invalid rune \u{201c}{ch}\u{201d} at {pos}:\n{content}"
                )
            }
            Self::DuplicateMarker { ch, first, second } => {
                write!(f, "map has a second \u{201c}{ch}\u{201d} at {second} (first at {first})")
            }
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;
    use tilepath_paths::AstarPath;

    const ROOM: &str = "\
S.#.
..#.
...G";

    #[test]
    fn parse_markers_and_size() {
        let m = AsciiMap::parse(ROOM).unwrap();
        assert_eq!(m.size(), Point::new(4, 3));
        assert_eq!(m.start(), Some(Point::new(0, 0)));
        assert_eq!(m.goal(), Some(Point::new(3, 2)));
    }

    #[test]
    fn walkability_polarity() {
        let m = AsciiMap::parse(ROOM).unwrap();
        let w = m.walkability();
        assert_eq!(w[0], vec![true, true, false, true]);
        assert_eq!(w[2], vec![true, true, true, true]);
    }

    #[test]
    fn inconsistent_size_error() {
        assert!(matches!(
            AsciiMap::parse("..\n..."),
            Err(MapError::InconsistentSize(_))
        ));
    }

    #[test]
    fn invalid_rune_error() {
        let err = AsciiMap::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            MapError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 1),
                content: "..\n.x".to_string(),
            }
        );
    }

    #[test]
    fn duplicate_marker_error() {
        let err = AsciiMap::parse("S.S").unwrap_err();
        assert_eq!(
            err,
            MapError::DuplicateMarker {
                ch: 'S',
                first: Point::new(0, 0),
                second: Point::new(2, 0),
            }
        );
    }

    #[test]
    fn renders_found_path() {
        let m = AsciiMap::parse(ROOM).unwrap();
        let mut engine = AstarPath::new(&m.walkability()).unwrap();
        let start = m.start().unwrap();
        let goal = m.goal().unwrap();
        let path = engine.find_path(start, goal).unwrap();
        let drawn = render_path(&m, &path);
        assert_eq!(drawn.lines().count(), 3);
        assert_eq!(drawn.matches(PATH_CHAR).count(), path.len() - 1);
        assert!(drawn.starts_with('S'));
        assert!(drawn.ends_with('G'));
        assert_eq!(drawn.chars().filter(|&c| c == '#').count(), 2);
    }

    #[test]
    fn sample_is_solvable() {
        let m = AsciiMap::parse(SAMPLE).unwrap();
        let mut engine = AstarPath::new(&m.walkability()).unwrap();
        let path = engine.find_path(m.start().unwrap(), m.goal().unwrap()).unwrap();
        assert_eq!(path.last(), m.goal().as_ref());
    }
}
