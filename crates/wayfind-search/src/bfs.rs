use wayfind_core::Point;

use crate::Search;
use crate::traits::Pather;

impl Search {
    /// Breadth-first search from `from` to `to`.
    ///
    /// Explores in FIFO discovery order, one ring at a time, so on a
    /// uniform-cost grid the returned path minimises the number of
    /// steps (not the weighted cost — edge weights are ignored).
    ///
    /// Returns the path including both endpoints, or an empty path if
    /// the goal is unreachable; either way the run's visited map stays
    /// available through [`Search::visited`].
    pub fn bfs_path<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> Vec<Point> {
        self.reset(from);
        self.queue.push_back(from);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut path = Vec::new();

        while let Some(current) = self.queue.pop_front() {
            if current == to {
                path = self.construct_path(to);
                break;
            }

            nbuf.clear();
            pather.neighbors(current, &mut nbuf);

            for &np in nbuf.iter() {
                if !self.visited.contains_key(&np) {
                    self.visited.insert(np, Some(current));
                    self.queue.push_back(np);
                }
            }
        }

        self.nbuf = nbuf;
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    const OPEN_5X4: &str = "\
S1111
11111
11111
1111G";

    fn assert_adjacent(level: &Level, path: &[Point]) {
        for w in path.windows(2) {
            let (a, b) = (w[0], w[1]);
            assert!(level.is_open(a) && level.is_open(b));
            let (dx, dy) = ((a.x - b.x).abs(), (a.y - b.y).abs());
            assert!(dx <= 1 && dy <= 1 && (dx, dy) != (0, 0), "{a} -> {b}");
        }
    }

    #[test]
    fn shortest_step_count_on_open_grid() {
        let level = Level::parse(OPEN_5X4).unwrap();
        let mut search = Search::new();
        let path = search.bfs_path(&level, level.start(), level.goal());
        // Chebyshev distance 4 — five cells including both endpoints.
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&level.start()));
        assert_eq!(path.last(), Some(&level.goal()));
        assert_adjacent(&level, &path);
    }

    #[test]
    fn walled_off_goal_yields_empty_path() {
        let level = Level::parse("S11XG\n111XX").unwrap();
        let mut search = Search::new();
        let path = search.bfs_path(&level, level.start(), level.goal());
        assert!(path.is_empty());
        // The reachable region was still explored.
        assert!(search.visited().len() > 1);
        assert!(!search.visited().contains_key(&level.goal()));
    }

    #[test]
    fn start_equals_goal() {
        let level = Level::parse("S1G").unwrap();
        let mut search = Search::new();
        let s = level.start();
        assert_eq!(search.bfs_path(&level, s, s), vec![s]);
    }

    #[test]
    fn visited_map_has_parent_links() {
        let level = Level::parse(OPEN_5X4).unwrap();
        let mut search = Search::new();
        search.bfs_path(&level, level.start(), level.goal());
        assert_eq!(search.visited()[&level.start()], None);
        for (&cell, &parent) in search.visited() {
            if let Some(parent) = parent {
                assert!(search.visited().contains_key(&parent), "{cell} orphaned");
            }
        }
    }
}
