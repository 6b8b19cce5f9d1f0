use wayfind_core::Point;

use crate::Search;
use crate::traits::WeightedPather;

impl Search {
    /// Uniform-cost search from `from` to `to`.
    ///
    /// The frontier is ordered by accumulated path cost alone, so the
    /// first time the goal is popped its cost is minimal. Returns the
    /// path including both endpoints, or an empty path if the goal is
    /// unreachable.
    pub fn ucs_path<P: WeightedPather>(&mut self, pather: &P, from: Point, to: Point) -> Vec<Point> {
        self.best_first(pather, from, to, |g, _| g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::path::path_cost;

    const SQRT_2: f64 = std::f64::consts::SQRT_2;

    #[test]
    fn worked_example_3x3() {
        let level = Level::parse("S11\n111\n11G").unwrap();
        let mut search = Search::new();
        let path = search.ucs_path(&level, level.start(), level.goal());
        // Diagonal shortcut: (0,0) -> (1,1) -> (2,2).
        assert_eq!(
            path,
            vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]
        );
        assert!((path_cost(&level, &path) - 2.0 * SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn detours_around_expensive_terrain() {
        let level = Level::parse("S9G\n111").unwrap();
        let mut search = Search::new();
        let path = search.ucs_path(&level, level.start(), level.goal());
        // Through the 9-cell would cost 10; dipping below costs 2√2.
        assert_eq!(
            path,
            vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 0)]
        );
        assert!((path_cost(&level, &path) - 2.0 * SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn reconstruction_cost_matches_internal_bookkeeping() {
        let level = Level::parse("S123\n4X56\n789G").unwrap();
        let mut search = Search::new();
        let path = search.ucs_path(&level, level.start(), level.goal());
        assert!(!path.is_empty());
        let tracked = search.best_costs[&level.goal()];
        assert!((path_cost(&level, &path) - tracked).abs() < 1e-9);
    }

    #[test]
    fn walled_off_goal_yields_empty_path() {
        let level = Level::parse("S11XG\n111XX").unwrap();
        let mut search = Search::new();
        assert!(search.ucs_path(&level, level.start(), level.goal()).is_empty());
        assert!(search.visited().len() > 1);
    }

    #[test]
    fn start_equals_goal_costs_nothing() {
        let level = Level::parse("S1G").unwrap();
        let mut search = Search::new();
        let s = level.start();
        let path = search.ucs_path(&level, s, s);
        assert_eq!(path, vec![s]);
        assert_eq!(path_cost(&level, &path), 0.0);
    }
}
