//! Shared search state and the common best-first core.

use std::collections::{HashMap, VecDeque};

use wayfind_core::Point;

use crate::frontier::Frontier;
use crate::traits::WeightedPather;

/// Run-local search state, reusable across runs.
///
/// Owns the visited/parent map, the best-cost map and the frontier
/// structures so repeated queries reuse their allocations; everything
/// is cleared at the start of each run. A `Search` holds no reference
/// to the level — the same instance can serve any number of levels.
#[derive(Debug, Default)]
pub struct Search {
    pub(crate) visited: HashMap<Point, Option<Point>>,
    pub(crate) best_costs: HashMap<Point, f64>,
    pub(crate) frontier: Frontier,
    pub(crate) queue: VecDeque<Point>,
    pub(crate) stack: Vec<Point>,
    pub(crate) nbuf: Vec<Point>,
}

impl Search {
    /// Create a fresh search context.
    pub fn new() -> Self {
        Self::default()
    }

    /// The visited/parent map left behind by the most recent run.
    ///
    /// Every discovered cell maps to the cell that discovered it; the
    /// source maps to `None`. The map doubles as the seen-set during
    /// the run and as the parent-pointer record afterwards, and is
    /// populated even when the run found no path.
    pub fn visited(&self) -> &HashMap<Point, Option<Point>> {
        &self.visited
    }

    /// Clear all run state and seed the visited map with the source.
    pub(crate) fn reset(&mut self, from: Point) {
        self.visited.clear();
        self.best_costs.clear();
        self.frontier.clear();
        self.queue.clear();
        self.stack.clear();
        self.visited.insert(from, None);
    }

    /// Walk parent pointers from `to` back to the `None` sentinel, then
    /// reverse into start→goal order. Only called once `to` has been
    /// popped from the frontier, so every link is present.
    pub(crate) fn construct_path(&self, to: Point) -> Vec<Point> {
        let mut path = vec![to];
        let mut cur = to;
        while let Some(&Some(parent)) = self.visited.get(&cur) {
            path.push(parent);
            cur = parent;
        }
        path.reverse();
        path
    }

    /// Common core of the three cost-aware searches.
    ///
    /// `key` maps a neighbor's accumulated cost and position to its
    /// frontier priority: g for uniform-cost, h alone for greedy,
    /// g + h for A*. The goal test happens at pop time.
    ///
    /// A neighbor is relaxed only while absent from the visited map:
    /// cells are marked visited at discovery, and once discovered are
    /// never reopened, even if a cheaper route to them turns up later.
    /// With non-negative edge costs this lazy no-reopen policy still
    /// yields cost-optimal uniform-cost results; keep it as is —
    /// switching to pop-time closing changes which of several
    /// equal-cost paths gets returned.
    pub(crate) fn best_first<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        key: impl Fn(f64, Point) -> f64,
    ) -> Vec<Point> {
        self.reset(from);
        self.best_costs.insert(from, 0.0);
        self.frontier.offer(from, key(0.0, from));

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut path = Vec::new();

        while let Some((_, current)) = self.frontier.pop() {
            if current == to {
                path = self.construct_path(to);
                break;
            }

            let current_g = self.best_costs.get(&current).copied().unwrap_or(0.0);
            nbuf.clear();
            pather.neighbors(current, &mut nbuf);

            for &np in nbuf.iter() {
                let new_cost = current_g + pather.cost(current, np);
                let best = self.best_costs.get(&np).copied().unwrap_or(f64::INFINITY);
                if !self.visited.contains_key(&np) && new_cost < best {
                    self.best_costs.insert(np, new_cost);
                    self.visited.insert(np, Some(current));
                    self.frontier.offer(np, key(new_cost, np));
                }
            }
        }

        self.nbuf = nbuf;
        path
    }
}
