//! **wayfind-core** — foundational types for the *wayfind* toolkit.
//!
//! Currently this is just the [`Point`] grid coordinate, shared by the
//! search crate and the demo binaries.

pub mod geom;

pub use geom::Point;
