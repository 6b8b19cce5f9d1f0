//! Path costing.

use wayfind_core::Point;

use crate::traits::WeightedPather;

/// Total cost of `path`: the edge-cost formula re-summed over each
/// consecutive pair, independently of any bookkeeping the search that
/// produced the path kept. Empty and single-cell paths cost 0.
pub fn path_cost<P: WeightedPather>(pather: &P, path: &[Point]) -> f64 {
    path.windows(2).map(|w| pather.cost(w[0], w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn sums_consecutive_edges() {
        let level = Level::parse("S1G").unwrap();
        let path = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
        assert_eq!(path_cost(&level, &path), 2.0);
    }

    #[test]
    fn degenerate_paths_cost_nothing() {
        let level = Level::parse("S1G").unwrap();
        assert_eq!(path_cost(&level, &[]), 0.0);
        assert_eq!(path_cost(&level, &[Point::new(0, 0)]), 0.0);
    }

    #[test]
    fn weighted_diagonal() {
        let level = Level::parse("S1\n14\nG1").unwrap();
        let path = [Point::new(0, 0), Point::new(1, 1), Point::new(0, 2)];
        let sqrt2 = std::f64::consts::SQRT_2;
        // √2 × (1+4)/2 each way.
        assert!((path_cost(&level, &path) - 5.0 * sqrt2).abs() < 1e-12);
    }
}
