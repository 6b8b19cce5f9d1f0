use wayfind_core::Point;

/// Minimal search interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (non-negative) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be >= 0.
    fn cost(&self, from: Point, to: Point) -> f64;
}
