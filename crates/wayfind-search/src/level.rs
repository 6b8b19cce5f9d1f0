//! Text-map parsing and the grid transition model.

use std::collections::{HashMap, HashSet};
use std::fmt;

use wayfind_core::Point;

use crate::distance::euclidean;
use crate::traits::{Pather, WeightedPather};

/// Wall marker.
pub const WALL: char = 'X';
/// Start waypoint marker.
pub const START: char = 'S';
/// Goal waypoint marker.
pub const GOAL: char = 'G';

/// A parsed level.
///
/// Traversability is decided by the cost mapping alone: a cell is open
/// iff it is a key of `spaces`. The wall set records which cells were
/// *explicitly* marked as walls; it is never consulted for adjacency
/// (unmarked blanks are just as impassable) and exists for rendering
/// and inspection.
#[derive(Debug, Clone)]
pub struct Level {
    walls: HashSet<Point>,
    spaces: HashMap<Point, f64>,
    start: Point,
    goal: Point,
}

impl Level {
    /// Parse a level from its textual form.
    ///
    /// Each character position maps to a cell: [`WALL`] (`X`) joins the
    /// wall set, [`START`] (`S`) and [`GOAL`] (`G`) become waypoints
    /// with movement multiplier 1.0, an ASCII digit becomes an open
    /// cell with that numeric multiplier, and anything else is excluded
    /// from the level entirely (impassable, but not recorded as a
    /// wall). Lines need not share a width.
    ///
    /// If a waypoint marker appears more than once, the last occurrence
    /// wins. A digit `0` is accepted and yields a zero multiplier, with
    /// the degenerate zero-cost edges that implies.
    pub fn parse(s: &str) -> Result<Self, LevelError> {
        let mut walls = HashSet::new();
        let mut spaces = HashMap::new();
        let mut start = None;
        let mut goal = None;

        let mut x: i32 = 0;
        let mut y: i32 = 0;
        for ch in s.chars() {
            if ch == '\n' {
                x = 0;
                y += 1;
                continue;
            }
            let p = Point::new(x, y);
            x += 1;
            match ch {
                WALL => {
                    walls.insert(p);
                }
                START => {
                    start = Some(p);
                    spaces.insert(p, 1.0);
                }
                GOAL => {
                    goal = Some(p);
                    spaces.insert(p, 1.0);
                }
                _ if ch.is_ascii_digit() => {
                    spaces.insert(p, f64::from(ch as u8 - b'0'));
                }
                _ => {}
            }
        }

        let start = start.ok_or(LevelError::MissingStart)?;
        let goal = goal.ok_or(LevelError::MissingGoal)?;
        Ok(Self {
            walls,
            spaces,
            start,
            goal,
        })
    }

    /// The start waypoint.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The goal waypoint.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Cells explicitly marked as walls.
    pub fn walls(&self) -> &HashSet<Point> {
        &self.walls
    }

    /// The cost mapping: every open cell and its movement multiplier.
    pub fn spaces(&self) -> &HashMap<Point, f64> {
        &self.spaces
    }

    /// Whether `p` is an open (traversable) cell.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.spaces.contains_key(&p)
    }

    /// Movement-cost multiplier of `p`, if it is open.
    #[inline]
    pub fn multiplier(&self, p: Point) -> Option<f64> {
        self.spaces.get(&p).copied()
    }

    /// Render the level as text, overlaying each `path` cell with `*`.
    ///
    /// Waypoints stay visible; cells that were never part of the level
    /// come out blank.
    pub fn render(&self, path: &[Point]) -> String {
        let mut max = Point::ZERO;
        for &p in self.walls.iter().chain(self.spaces.keys()) {
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        let on_path: HashSet<Point> = path.iter().copied().collect();

        let mut out = String::new();
        for y in 0..=max.y {
            for x in 0..=max.x {
                let p = Point::new(x, y);
                let ch = if p == self.start {
                    START
                } else if p == self.goal {
                    GOAL
                } else if on_path.contains(&p) {
                    '*'
                } else if self.walls.contains(&p) {
                    WALL
                } else if let Some(m) = self.multiplier(p) {
                    char::from_digit(m as u32, 10).unwrap_or('?')
                } else {
                    ' '
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl Pather for Level {
    /// The eight king-move neighbors of `p` that exist as open cells.
    ///
    /// Membership in the cost mapping is the single test that excludes
    /// walls, out-of-bounds positions and unmarked blanks alike.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for np in p.neighbors_8() {
            if self.spaces.contains_key(&np) {
                buf.push(np);
            }
        }
    }
}

impl WeightedPather for Level {
    /// Edge cost: Euclidean distance between the cells times the mean
    /// of their movement multipliers. Diagonal steps pay the extra √2
    /// distance; cheap terrain discounts the step.
    fn cost(&self, from: Point, to: Point) -> f64 {
        let m = (self.multiplier(from).unwrap_or(1.0) + self.multiplier(to).unwrap_or(1.0)) / 2.0;
        euclidean(from, to) * m
    }
}

/// Errors that can occur when parsing a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    /// No start marker (`S`) was found.
    MissingStart,
    /// No goal marker (`G`) was found.
    MissingGoal,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => write!(f, "level has no start marker '{START}'"),
            Self::MissingGoal => write!(f, "level has no goal marker '{GOAL}'"),
        }
    }
}

impl std::error::Error for LevelError {}
