//! One-call planning entry point and selector types.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use wayfind_core::Point;

use crate::Search;
use crate::distance::Heuristic;
use crate::level::{Level, LevelError};
use crate::path::path_cost;

/// Search strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Breadth-first search (`bfs`).
    BreadthFirst,
    /// Depth-first search (`dfs`).
    DepthFirst,
    /// Uniform-cost search (`ucs`).
    UniformCost,
    /// Greedy best-first search (`greedy`). Needs a heuristic.
    Greedy,
    /// A* search (`astar`). Needs a heuristic.
    AStar,
}

impl Algorithm {
    /// All selectable algorithms, in presentation order.
    pub const ALL: [Algorithm; 5] = [
        Self::BreadthFirst,
        Self::DepthFirst,
        Self::UniformCost,
        Self::Greedy,
        Self::AStar,
    ];

    /// Whether this strategy requires a heuristic selector.
    pub fn needs_heuristic(self) -> bool {
        matches!(self, Self::Greedy | Self::AStar)
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "bfs" => Ok(Self::BreadthFirst),
            "dfs" => Ok(Self::DepthFirst),
            "ucs" => Ok(Self::UniformCost),
            "greedy" => Ok(Self::Greedy),
            "astar" => Ok(Self::AStar),
            _ => Err(Error::InvalidAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::UniformCost => "ucs",
            Self::Greedy => "greedy",
            Self::AStar => "astar",
        })
    }
}

/// The outcome of a planning run.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Cells from start to goal inclusive; empty when no path exists.
    pub path: Vec<Point>,
    /// Total cost of `path`, re-summed from the edge-cost formula
    /// (0.0 when no path exists).
    pub cost: f64,
    /// Every cell the search discovered, mapped to its parent; the
    /// start maps to `None`.
    pub visited: HashMap<Point, Option<Point>>,
}

/// Plan a path over the textual `map` using the selected strategy.
///
/// The heuristic is required by [`Algorithm::Greedy`] and
/// [`Algorithm::AStar`] and ignored by the uninformed strategies.
///
/// An unreachable goal is not an error: the plan comes back with an
/// empty path, zero cost and the partial visited map of the run.
pub fn plan(map: &str, algorithm: Algorithm, heuristic: Option<Heuristic>) -> Result<Plan, Error> {
    let level = Level::parse(map)?;
    let (start, goal) = (level.start(), level.goal());
    log::debug!("planning {algorithm} from {start} to {goal} (heuristic: {heuristic:?})");

    let mut search = Search::new();
    let path = match algorithm {
        Algorithm::BreadthFirst => search.bfs_path(&level, start, goal),
        Algorithm::DepthFirst => search.dfs_path(&level, start, goal),
        Algorithm::UniformCost => search.ucs_path(&level, start, goal),
        Algorithm::Greedy => {
            let h = heuristic.ok_or(Error::MissingHeuristic(algorithm))?;
            search.greedy_path(&level, start, goal, h)
        }
        Algorithm::AStar => {
            let h = heuristic.ok_or(Error::MissingHeuristic(algorithm))?;
            search.astar_path(&level, start, goal, h)
        }
    };

    let cost = path_cost(&level, &path);
    log::debug!(
        "{algorithm}: {} path cells, cost {cost:.3}, {} cells visited",
        path.len(),
        search.visited().len()
    );

    Ok(Plan {
        path,
        cost,
        visited: std::mem::take(&mut search.visited),
    })
}

/// Errors from selector parsing and planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The algorithm selector does not name a known strategy.
    InvalidAlgorithm(String),
    /// The heuristic selector does not name a known estimator.
    InvalidHeuristic(String),
    /// An informed strategy was selected without a heuristic.
    MissingHeuristic(Algorithm),
    /// The map failed to parse.
    Level(LevelError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAlgorithm(s) => {
                write!(f, "unknown algorithm {s:?} (expected one of bfs, dfs, ucs, greedy, astar)")
            }
            Self::InvalidHeuristic(s) => {
                write!(f, "unknown heuristic {s:?} (expected euclidean or manhattan)")
            }
            Self::MissingHeuristic(a) => write!(f, "{a} requires a heuristic"),
            Self::Level(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Level(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LevelError> for Error {
    fn from(e: LevelError) -> Self {
        Self::Level(e)
    }
}
