//! Base point values per fish type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use seabed_core::constants::BASE_POINTS;

/// Type -> base points. Types missing from the table are worth nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseValueTable {
    points: BTreeMap<i32, u32>,
}

impl Default for BaseValueTable {
    fn default() -> Self {
        Self {
            points: BASE_POINTS
                .iter()
                .enumerate()
                .map(|(fish_type, points)| (fish_type as i32, *points))
                .collect(),
        }
    }
}

impl BaseValueTable {
    /// Add or override the value of a type.
    pub fn with_type(mut self, fish_type: i32, points: u32) -> Self {
        self.points.insert(fish_type, points);
        self
    }

    pub fn base_points(&self, fish_type: i32) -> Option<u32> {
        self.points.get(&fish_type).copied()
    }
}
