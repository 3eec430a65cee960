//! World snapshot: the complete per-turn state handed to the agent.

use serde::{Deserialize, Serialize};

use crate::catalogue::{DroneId, FishDetail, FishId};
use crate::enums::RadarDirection;
use crate::types::{Position, Velocity};

/// Everything the protocol layer read for one turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub my_score: u32,
    pub foe_score: u32,
    /// Fish ids I have already banked.
    pub my_scans: Vec<FishId>,
    /// Fish ids the opponent has already banked.
    pub foe_scans: Vec<FishId>,
    pub my_drones: Vec<DroneView>,
    pub foe_drones: Vec<DroneView>,
    /// Fish currently in sight, in protocol order.
    pub visible_fish: Vec<VisibleFish>,
    /// Radar blips for my drones.
    pub radar_blips: Vec<RadarBlip>,
}

/// A drone as reported this turn. Rebuilt wholesale every turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroneView {
    pub id: DroneId,
    pub position: Position,
    pub alive: bool,
    pub battery: u32,
    /// Scans carried but not yet banked at the surface.
    pub unbanked_scans: Vec<FishId>,
}

/// A visible fish record before its detail is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleFish {
    pub id: FishId,
    pub position: Position,
    pub velocity: Velocity,
}

/// A visible fish with its catalogue detail attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fish {
    pub id: FishId,
    pub position: Position,
    pub velocity: Velocity,
    pub detail: FishDetail,
}

/// Radar signal for a fish whose position is not directly known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarBlip {
    pub drone_id: DroneId,
    pub fish_id: FishId,
    pub direction: RadarDirection,
}

impl DroneView {
    pub fn has_unbanked_scans(&self) -> bool {
        !self.unbanked_scans.is_empty()
    }
}

impl WorldSnapshot {
    pub fn blips_for(&self, drone_id: DroneId) -> impl Iterator<Item = &RadarBlip> + '_ {
        self.radar_blips
            .iter()
            .filter(move |blip| blip.drone_id == drone_id)
    }
}
