//! Fundamental geometric types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Integer position in arena units.
/// x grows East, y grows with depth (y = 0 is the surface).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Per-turn displacement of a fish (arena units per turn).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x as f64, self.y as f64)
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// Number of 4-connected unit steps between two positions.
    pub fn manhattan_to(&self, other: &Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Whether this position lies inside `[0, bound) x [0, bound)`.
    pub fn in_bounds(&self, bound: i32) -> bool {
        (0..bound).contains(&self.x) && (0..bound).contains(&self.y)
    }

    /// Clamp both coordinates into `[0, bound)`.
    pub fn clamped(&self, bound: i32) -> Position {
        let max = (bound - 1).max(0);
        Position::new(self.x.clamp(0, max), self.y.clamp(0, max))
    }
}

impl Velocity {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
