use tilepath_core::Point;

/// Cached neighbor computation helper.
///
/// Enumerates the 8 surrounding cells of a point in a fixed row-major order
/// (row above left to right, the two side cells, then the row below),
/// filtered by a predicate.
#[derive(Debug, Clone)]
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return 8-directional neighbors of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn all(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        push_all(p, &mut self.buf, keep);
        &self.buf
    }
}

/// Append the 8-directional neighbors of `p` accepted by `keep` into `buf`.
pub(crate) fn push_all(p: Point, buf: &mut Vec<Point>, keep: impl Fn(Point) -> bool) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let n = p.shift(dx, dy);
            if keep(n) {
                buf.push(n);
            }
        }
    }
}
