use wayfind_core::Point;

use crate::Search;
use crate::distance::Heuristic;
use crate::traits::WeightedPather;

impl Search {
    /// A* search from `from` to `to`.
    ///
    /// The frontier is ordered by accumulated cost plus the heuristic
    /// estimate of the remaining distance. With an estimate that never
    /// overestimates (see [`Heuristic`]) the result costs the same as
    /// uniform-cost search while expanding fewer cells. Returns an
    /// empty path if the goal is unreachable.
    pub fn astar_path<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        heuristic: Heuristic,
    ) -> Vec<Point> {
        self.best_first(pather, from, to, |g, cell| g + heuristic.estimate(cell, to))
    }
}
