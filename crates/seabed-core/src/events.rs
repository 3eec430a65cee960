//! Events emitted by the turn engine for logging and inspection.

use serde::{Deserialize, Serialize};

use crate::catalogue::{DroneId, FishId};
use crate::enums::SurfaceReason;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DecisionEvent {
    /// A targeted fish came within scan radius and entered the scanned set.
    ScanConfirmed {
        drone_id: DroneId,
        fish_id: FishId,
        points: u32,
    },
    /// The surface-return policy overrode target seeking.
    SurfaceOverride {
        drone_id: DroneId,
        reason: SurfaceReason,
    },
    /// No target or no path; the drone explores instead.
    ExplorationFallback { drone_id: DroneId },
    /// The drone followed a radar blip instead of exploring.
    RadarSteer { drone_id: DroneId, fish_id: FishId },
    /// A visible fish record was dropped because its id is not catalogued.
    FishSkipped { fish_id: FishId },
}
