//! Agent configuration.

use serde::{Deserialize, Serialize};

use seabed_ai::surface::SurfaceParams;
use seabed_core::constants::*;

use crate::error::AgentError;

/// Tunables for a game. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// RNG seed for exploration. Same seed and inputs = same intents.
    pub seed: u64,
    pub map_size: i32,
    /// Arena units per planner cell. 1 plans on the raw coordinate grid,
    /// which only stays within `max_expansions` for short or axis-aligned paths.
    pub grid_cell_size: i32,
    /// A* expansion budget per planning call.
    pub max_expansions: usize,
    pub scan_radius: f64,
    pub detection_radius: f64,
    pub surface_threshold: i32,
    pub surface_step: i32,
    pub scans_before_surfacing: u32,
    /// Battery below this forces the light off.
    pub light_battery_cost: u32,
    /// Feed banked and carried scans from each snapshot into the scanned set.
    pub sync_snapshot_scans: bool,
    /// Head toward radar blips instead of exploring randomly.
    pub radar_steering: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            map_size: MAP_SIZE,
            grid_cell_size: PLANNER_CELL_SIZE,
            max_expansions: MAX_PLANNER_EXPANSIONS,
            scan_radius: SCAN_RADIUS,
            detection_radius: DETECTION_RADIUS,
            surface_threshold: SURFACE_Y_THRESHOLD,
            surface_step: SURFACE_STEP,
            scans_before_surfacing: SCANS_BEFORE_SURFACING,
            light_battery_cost: LIGHT_BATTERY_COST,
            sync_snapshot_scans: true,
            radar_steering: false,
        }
    }
}

impl AgentConfig {
    /// Parse from JSON and validate.
    pub fn from_json(json: &str) -> Result<Self, AgentError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AgentError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AgentError> {
        if self.map_size <= 0 {
            return Err(AgentError::InvalidConfig("map_size must be positive".into()));
        }
        if self.map_size > MAX_MAP_SIZE {
            return Err(AgentError::InvalidConfig(format!(
                "map_size {} exceeds {MAX_MAP_SIZE}",
                self.map_size
            )));
        }
        if self.grid_cell_size <= 0 {
            return Err(AgentError::InvalidConfig(
                "grid_cell_size must be positive".into(),
            ));
        }
        if self.grid_cell_size > self.map_size {
            return Err(AgentError::InvalidConfig(format!(
                "grid_cell_size {} exceeds map_size {}",
                self.grid_cell_size, self.map_size
            )));
        }
        if self.max_expansions == 0 {
            return Err(AgentError::InvalidConfig(
                "max_expansions must be positive".into(),
            ));
        }
        if self.surface_step < 0 {
            return Err(AgentError::InvalidConfig(
                "surface_step must not be negative".into(),
            ));
        }
        Ok(())
    }

    pub fn surface_params(&self) -> SurfaceParams {
        SurfaceParams {
            map_size: self.map_size,
            surface_threshold: self.surface_threshold,
            surface_step: self.surface_step,
            scans_before_surfacing: self.scans_before_surfacing,
        }
    }
}
