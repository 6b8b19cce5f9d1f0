//! Pathfinding for weighted 2D text-map grids.
//!
//! This crate parses a textual level — walls, weighted cells, a start
//! and a goal — and finds a path between the waypoints using one of
//! five classical search strategies:
//!
//! | Algorithm | Frontier order | Optimal for |
//! |---|---|---|
//! | [`Search::bfs_path`] | FIFO | step count, on uniform grids |
//! | [`Search::dfs_path`] | LIFO | — |
//! | [`Search::ucs_path`] | accumulated cost | total cost |
//! | [`Search::greedy_path`] | heuristic only | — |
//! | [`Search::astar_path`] | cost + heuristic | total cost (admissible h) |
//!
//! All strategies share a transition model (8-way king moves over the
//! level's cost mapping, edge cost = Euclidean distance × mean cell
//! multiplier) and a visited/parent map used for path reconstruction.
//! The one-call entry point is [`plan`]:
//!
//! ```
//! use wayfind_search::{Algorithm, Heuristic, plan};
//!
//! let map = "S11\n111\n11G";
//! let found = plan(map, Algorithm::AStar, Some(Heuristic::Euclidean)).unwrap();
//! assert_eq!(found.path.len(), 3); // two diagonal steps
//! ```

mod astar;
mod bfs;
mod dfs;
mod distance;
mod frontier;
mod greedy;
mod level;
mod path;
mod plan;
mod search;
mod traits;
mod ucs;

pub use distance::{Heuristic, euclidean, manhattan};
pub use frontier::Frontier;
pub use level::{GOAL, Level, LevelError, START, WALL};
pub use path::path_cost;
pub use plan::{Algorithm, Error, Plan, plan};
pub use search::Search;
pub use traits::{Pather, WeightedPather};
