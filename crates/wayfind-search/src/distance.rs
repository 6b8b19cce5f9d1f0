use wayfind_core::Point;

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> f64 {
    f64::from((a.x - b.x).abs() + (a.y - b.y).abs())
}

/// Goal-distance estimators selectable by the informed searches.
///
/// Both assume every cell multiplier is >= 1; a `0` cost cell produces
/// zero-cost edges that no distance estimate can stay below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Straight-line distance. Never overestimates the remaining cost.
    Euclidean,
    /// L1 distance. Can overestimate across diagonal-heavy remainders
    /// (a diagonal step covers two L1 units at cost √2), so A* loses
    /// its optimality guarantee with it; kept for parity with the
    /// classical curriculum.
    Manhattan,
}

impl Heuristic {
    /// Estimated cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> f64 {
        match self {
            Self::Euclidean => euclidean(from, to),
            Self::Manhattan => manhattan(from, to),
        }
    }
}

impl std::str::FromStr for Heuristic {
    type Err = crate::Error;

    /// Accepts `euclidean` (and the common `euclidian` misspelling)
    /// and `manhattan`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euclidean" | "euclidian" => Ok(Self::Euclidean),
            "manhattan" => Ok(Self::Manhattan),
            _ => Err(crate::Error::InvalidHeuristic(s.to_string())),
        }
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Euclidean => f.write_str("euclidean"),
            Self::Manhattan => f.write_str("manhattan"),
        }
    }
}
