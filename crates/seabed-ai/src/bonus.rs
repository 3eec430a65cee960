//! Completion-bonus trackers and the scanned-fish ledger.

use std::collections::{BTreeMap, HashSet};

use seabed_core::catalogue::{FishCatalogue, FishDetail, FishId};

/// Remaining unscanned fish per type and per color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BonusTrackers {
    by_type: BTreeMap<i32, u32>,
    by_color: BTreeMap<i32, u32>,
}

impl BonusTrackers {
    /// Count every catalogued fish into its type and color buckets.
    pub fn from_catalogue(catalogue: &FishCatalogue) -> Self {
        let mut trackers = Self::default();
        for (_, detail) in catalogue.iter() {
            *trackers.by_type.entry(detail.fish_type).or_insert(0) += 1;
            *trackers.by_color.entry(detail.color).or_insert(0) += 1;
        }
        trackers
    }

    /// Trackers with explicit bucket counts.
    pub fn from_counts(
        by_type: impl IntoIterator<Item = (i32, u32)>,
        by_color: impl IntoIterator<Item = (i32, u32)>,
    ) -> Self {
        Self {
            by_type: by_type.into_iter().collect(),
            by_color: by_color.into_iter().collect(),
        }
    }

    pub fn remaining_of_type(&self, fish_type: i32) -> u32 {
        self.by_type.get(&fish_type).copied().unwrap_or(0)
    }

    pub fn remaining_of_color(&self, color: i32) -> u32 {
        self.by_color.get(&color).copied().unwrap_or(0)
    }

    /// Decrement both buckets of `detail`. Counts never go below zero.
    pub fn record_scan(&mut self, detail: &FishDetail) {
        if let Some(count) = self.by_type.get_mut(&detail.fish_type) {
            *count = count.saturating_sub(1);
        }
        if let Some(count) = self.by_color.get_mut(&detail.color) {
            *count = count.saturating_sub(1);
        }
    }
}

/// Fish ids scanned by this agent plus the trackers they feed.
///
/// An id enters once and never leaves; trackers are decremented on entry only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanLedger {
    scanned: HashSet<FishId>,
    trackers: BonusTrackers,
}

impl ScanLedger {
    pub fn new(trackers: BonusTrackers) -> Self {
        Self {
            scanned: HashSet::new(),
            trackers,
        }
    }

    pub fn from_catalogue(catalogue: &FishCatalogue) -> Self {
        Self::new(BonusTrackers::from_catalogue(catalogue))
    }

    /// Record a scan. Returns false if `id` was already scanned.
    pub fn confirm(&mut self, id: FishId, detail: &FishDetail) -> bool {
        if !self.scanned.insert(id) {
            return false;
        }
        self.trackers.record_scan(detail);
        true
    }

    pub fn is_scanned(&self, id: FishId) -> bool {
        self.scanned.contains(&id)
    }

    pub fn scanned(&self) -> &HashSet<FishId> {
        &self.scanned
    }

    pub fn trackers(&self) -> &BonusTrackers {
        &self.trackers
    }

    pub fn len(&self) -> usize {
        self.scanned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scanned.is_empty()
    }
}
