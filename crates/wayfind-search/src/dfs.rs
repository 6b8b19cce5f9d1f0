use wayfind_core::Point;

use crate::Search;
use crate::traits::Pather;

impl Search {
    /// Depth-first search from `from` to `to`.
    ///
    /// Same discovery rule as BFS but with a LIFO stack, so the search
    /// plunges along one branch before backtracking. The result is a
    /// valid path, deterministic for a given level, with no optimality
    /// guarantee of any kind.
    pub fn dfs_path<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> Vec<Point> {
        self.reset(from);
        self.stack.push(from);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut path = Vec::new();

        while let Some(current) = self.stack.pop() {
            if current == to {
                path = self.construct_path(to);
                break;
            }

            nbuf.clear();
            pather.neighbors(current, &mut nbuf);

            for &np in nbuf.iter() {
                if !self.visited.contains_key(&np) {
                    self.visited.insert(np, Some(current));
                    self.stack.push(np);
                }
            }
        }

        self.nbuf = nbuf;
        path
    }
}
