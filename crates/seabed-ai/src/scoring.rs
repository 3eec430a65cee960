//! Expected point value of scanning a fish.

use std::collections::HashSet;

use seabed_core::catalogue::FishId;
use seabed_core::constants::{
    COLOR_COMPLETION_BONUS, FIRST_SCAN_MULTIPLIER, TYPE_COMPLETION_BONUS,
};
use seabed_core::state::Fish;

use crate::bonus::BonusTrackers;
use crate::values::BaseValueTable;

/// Score with the default value table.
pub fn score(fish: &Fish, scanned: &HashSet<FishId>, trackers: &BonusTrackers) -> u32 {
    score_with(&BaseValueTable::default(), fish, scanned, trackers)
}

/// Points for scanning `fish` now.
///
/// Base value by type, doubled on a first scan, then +3 if it is the last
/// unscanned fish of its color and +4 if the last of its type. A type with
/// no base value scores zero. Reads state only.
pub fn score_with(
    table: &BaseValueTable,
    fish: &Fish,
    scanned: &HashSet<FishId>,
    trackers: &BonusTrackers,
) -> u32 {
    let Some(base) = table.base_points(fish.detail.fish_type) else {
        return 0;
    };

    let mut points = base;
    if !scanned.contains(&fish.id) {
        points *= FIRST_SCAN_MULTIPLIER;
    }
    if trackers.remaining_of_color(fish.detail.color) == 1 {
        points += COLOR_COMPLETION_BONUS;
    }
    if trackers.remaining_of_type(fish.detail.fish_type) == 1 {
        points += TYPE_COMPLETION_BONUS;
    }
    points
}
