use wayfind_core::Point;

use crate::Search;
use crate::distance::Heuristic;
use crate::traits::WeightedPather;

impl Search {
    /// Greedy best-first search from `from` to `to`.
    ///
    /// The frontier is ordered by the heuristic estimate to the goal
    /// alone. Accumulated cost is still tracked (it gates relaxation
    /// the same way as in uniform-cost search) but never drives
    /// selection, so the returned path can be arbitrarily far from
    /// optimal. Returns an empty path if the goal is unreachable.
    pub fn greedy_path<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        heuristic: Heuristic,
    ) -> Vec<Point> {
        self.best_first(pather, from, to, |_, cell| heuristic.estimate(cell, to))
    }
}
