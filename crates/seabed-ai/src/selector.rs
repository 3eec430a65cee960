//! Target selection: the most valuable unscanned visible fish.

use std::collections::HashSet;

use seabed_core::catalogue::FishId;
use seabed_core::state::{DroneView, Fish};
use seabed_core::types::Position;

use crate::bonus::BonusTrackers;
use crate::scoring::score_with;
use crate::values::BaseValueTable;

/// Fish chosen for a drone this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub fish_id: FishId,
    pub position: Position,
    pub points: u32,
}

/// Select with the default value table.
pub fn select_target(
    drone: &DroneView,
    visible: &[Fish],
    scanned: &HashSet<FishId>,
    trackers: &BonusTrackers,
) -> Option<Target> {
    select_target_with(&BaseValueTable::default(), drone, visible, scanned, trackers)
}

/// Highest-scoring visible fish not yet scanned, or `None` when there is none
/// or the drone is dead. Ties keep the earliest fish in `visible`.
/// Types absent from the value table are never targets.
/// Distance and reachability are not considered.
pub fn select_target_with(
    table: &BaseValueTable,
    drone: &DroneView,
    visible: &[Fish],
    scanned: &HashSet<FishId>,
    trackers: &BonusTrackers,
) -> Option<Target> {
    if !drone.alive {
        return None;
    }

    let mut best: Option<Target> = None;
    let candidates = visible.iter().filter(|fish| {
        !scanned.contains(&fish.id) && table.base_points(fish.detail.fish_type).is_some()
    });
    for fish in candidates {
        let points = score_with(table, fish, scanned, trackers);
        if best.is_none_or(|current| points > current.points) {
            best = Some(Target {
                fish_id: fish.id,
                position: fish.position,
                points,
            });
        }
    }
    best
}
