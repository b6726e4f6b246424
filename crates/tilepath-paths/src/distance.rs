use tilepath_core::Point;

/// Cost of an orthogonal step between adjacent cells.
pub const STRAIGHT_COST: i32 = 10;

/// Cost of a diagonal step between adjacent cells (≈ `STRAIGHT_COST * sqrt(2)`).
pub const DIAGONAL_COST: i32 = 14;

/// Octile distance between two points, in fixed-point step units.
///
/// Exact for 8-connected movement on an open grid, so it doubles as the
/// step cost between direct neighbours.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (dmin, dmax) = if dx < dy { (dx, dy) } else { (dy, dx) };
    DIAGONAL_COST * dmin + STRAIGHT_COST * (dmax - dmin)
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Accumulated step cost of walking `path` starting at `from`.
///
/// `path` follows the engine's convention of excluding the start cell.
pub fn path_cost(from: Point, path: &[Point]) -> i32 {
    let mut prev = from;
    let mut total = 0;
    for &p in path {
        total += octile(prev, p);
        prev = p;
    }
    total
}
