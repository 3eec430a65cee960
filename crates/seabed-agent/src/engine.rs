//! Turn engine: the per-turn control loop.
//!
//! `TurnEngine` owns everything that outlives a turn: the catalogue, the
//! scan ledger, per-drone scans-since-surfacing counters, and the RNG.
//! Each call to `decide` resolves the snapshot, then walks my drones in
//! order. A scan confirmed for one drone is visible to the next.

use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use seabed_ai::bonus::ScanLedger;
use seabed_ai::selector::{select_target_with, Target};
use seabed_ai::surface::{self, SurfaceContext, SurfaceParams};
use seabed_ai::values::BaseValueTable;
use seabed_core::catalogue::{DroneId, FishCatalogue, FishId};
use seabed_core::commands::MovementIntent;
use seabed_core::events::DecisionEvent;
use seabed_core::state::{DroneView, Fish, VisibleFish, WorldSnapshot};
use seabed_core::types::Position;
use seabed_nav::{Planner, PlanOutcome, SpatialGrid};

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::{exploration, radar};

/// Output of one turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnReport {
    pub turn: u64,
    /// One intent per drone in `my_drones`, in snapshot order.
    pub intents: Vec<(DroneId, MovementIntent)>,
    pub events: Vec<DecisionEvent>,
}

impl TurnReport {
    pub fn intent_for(&self, drone_id: DroneId) -> Option<MovementIntent> {
        self.intents
            .iter()
            .find(|(id, _)| *id == drone_id)
            .map(|(_, intent)| *intent)
    }
}

/// The agent. One instance per game.
pub struct TurnEngine {
    config: AgentConfig,
    catalogue: FishCatalogue,
    ledger: ScanLedger,
    scans_since_surfacing: HashMap<DroneId, u32>,
    grid: SpatialGrid,
    planner: Planner,
    surface: SurfaceParams,
    values: BaseValueTable,
    rng: ChaCha8Rng,
    turn: u64,
}

/// Resolve a visible record against the catalogue.
pub fn resolve_fish(catalogue: &FishCatalogue, record: &VisibleFish) -> Result<Fish, AgentError> {
    let detail = catalogue
        .detail(record.id)
        .ok_or(AgentError::UnknownFish(record.id))?;
    Ok(Fish {
        id: record.id,
        position: record.position,
        velocity: record.velocity,
        detail,
    })
}

impl TurnEngine {
    /// Create an engine for a game with the given catalogue.
    pub fn new(config: AgentConfig, catalogue: FishCatalogue) -> Result<Self, AgentError> {
        config.validate()?;
        Ok(Self {
            grid: SpatialGrid::new(config.map_size, config.grid_cell_size),
            planner: Planner::new(config.max_expansions),
            surface: config.surface_params(),
            values: BaseValueTable::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            ledger: ScanLedger::from_catalogue(&catalogue),
            scans_since_surfacing: HashMap::new(),
            catalogue,
            config,
            turn: 0,
        })
    }

    /// Create an engine from raw `(id, color, type)` catalogue entries.
    pub fn from_entries(
        config: AgentConfig,
        entries: impl IntoIterator<Item = (FishId, i32, i32)>,
    ) -> Result<Self, AgentError> {
        let catalogue = FishCatalogue::from_entries(entries)?;
        Self::new(config, catalogue)
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn catalogue(&self) -> &FishCatalogue {
        &self.catalogue
    }

    pub fn ledger(&self) -> &ScanLedger {
        &self.ledger
    }

    /// Number of turns decided so far.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn scans_since_surfacing(&self, drone_id: DroneId) -> u32 {
        self.scans_since_surfacing.get(&drone_id).copied().unwrap_or(0)
    }

    /// Decide one intent per drone for this snapshot.
    pub fn decide(&mut self, snapshot: &WorldSnapshot) -> TurnReport {
        self.turn += 1;
        let mut events = Vec::new();

        let visible = self.resolve_visible(snapshot, &mut events);
        if self.config.sync_snapshot_scans {
            self.sync_scans(snapshot);
        }

        let mut intents = Vec::with_capacity(snapshot.my_drones.len());
        for drone in &snapshot.my_drones {
            let intent = self.decide_drone(drone, snapshot, &visible, &mut events);
            tracing::debug!(turn = self.turn, drone = drone.id, ?intent, "drone decided");
            intents.push((drone.id, intent));
        }

        TurnReport {
            turn: self.turn,
            intents,
            events,
        }
    }

    /// Attach catalogue details to visible fish, skipping unknown ids.
    fn resolve_visible(
        &self,
        snapshot: &WorldSnapshot,
        events: &mut Vec<DecisionEvent>,
    ) -> Vec<Fish> {
        let mut visible = Vec::with_capacity(snapshot.visible_fish.len());
        for record in &snapshot.visible_fish {
            match resolve_fish(&self.catalogue, record) {
                Ok(fish) => visible.push(fish),
                Err(err) => {
                    tracing::warn!(fish = record.id, %err, "skipping visible fish");
                    events.push(DecisionEvent::FishSkipped { fish_id: record.id });
                }
            }
        }
        visible
    }

    /// Fold banked and carried scans reported by the snapshot into the ledger.
    fn sync_scans(&mut self, snapshot: &WorldSnapshot) {
        let reported = snapshot.my_scans.iter().chain(
            snapshot
                .my_drones
                .iter()
                .flat_map(|drone| drone.unbanked_scans.iter()),
        );
        for &fish_id in reported {
            match self.catalogue.detail(fish_id) {
                Some(detail) => {
                    self.ledger.confirm(fish_id, &detail);
                }
                None => tracing::warn!(fish = fish_id, "reported scan of uncatalogued fish"),
            }
        }
    }

    fn decide_drone(
        &mut self,
        drone: &DroneView,
        snapshot: &WorldSnapshot,
        visible: &[Fish],
        events: &mut Vec<DecisionEvent>,
    ) -> MovementIntent {
        if !drone.alive {
            return MovementIntent::Wait { light: false };
        }

        if surface::is_surfaced(&drone.position, &self.surface) {
            self.scans_since_surfacing.insert(drone.id, 0);
        }

        // 1. Surface-return override
        let decision = surface::evaluate(
            &SurfaceContext {
                position: drone.position,
                has_unbanked_scans: drone.has_unbanked_scans(),
                scans_since_surfacing: self.scans_since_surfacing(drone.id),
            },
            &self.surface,
        );
        if let Some(reason) = decision.reason {
            events.push(DecisionEvent::SurfaceOverride {
                drone_id: drone.id,
                reason,
            });
            return MovementIntent::Move {
                target: surface::surface_move(&drone.position, &self.surface),
                light: false,
            };
        }

        // 2. Target selection
        let target = select_target_with(
            &self.values,
            drone,
            visible,
            self.ledger.scanned(),
            self.ledger.trackers(),
        );

        let intent = match target {
            None => self.fallback(drone, snapshot, visible, events),
            Some(target) => {
                // 3. Path planning, single-step commitment
                let intent = match self.next_waypoint(drone, &target, visible) {
                    Some(waypoint) => MovementIntent::Move {
                        target: waypoint,
                        light: true,
                    },
                    None => {
                        events.push(DecisionEvent::ExplorationFallback { drone_id: drone.id });
                        self.explore(drone, visible)
                    }
                };
                // 4. Scan confirmation by proximity
                self.confirm_scan(drone, &target, events);
                intent
            }
        };

        if intent.light() && drone.battery < self.config.light_battery_cost {
            intent.without_light()
        } else {
            intent
        }
    }

    /// No target: follow a radar blip if enabled, otherwise explore.
    fn fallback(
        &mut self,
        drone: &DroneView,
        snapshot: &WorldSnapshot,
        visible: &[Fish],
        events: &mut Vec<DecisionEvent>,
    ) -> MovementIntent {
        if self.config.radar_steering {
            let blip = snapshot
                .blips_for(drone.id)
                .find(|blip| !self.ledger.is_scanned(blip.fish_id));
            if let Some(blip) = blip {
                events.push(DecisionEvent::RadarSteer {
                    drone_id: drone.id,
                    fish_id: blip.fish_id,
                });
                return MovementIntent::Move {
                    target: radar::steer_toward(
                        &drone.position,
                        blip.direction,
                        self.config.surface_step,
                        self.config.map_size,
                    ),
                    light: exploration::fish_nearby(
                        &drone.position,
                        visible,
                        self.config.detection_radius,
                    ),
                };
            }
        }
        events.push(DecisionEvent::ExplorationFallback { drone_id: drone.id });
        self.explore(drone, visible)
    }

    fn explore(&mut self, drone: &DroneView, visible: &[Fish]) -> MovementIntent {
        exploration::explore(
            &drone.position,
            visible,
            &mut self.rng,
            self.config.map_size,
            self.config.detection_radius,
        )
    }

    /// First waypoint toward the target, or `None` if no path was found.
    fn next_waypoint(&self, drone: &DroneView, target: &Target, visible: &[Fish]) -> Option<Position> {
        let start = self.grid.to_cell(&drone.position);
        let goal = self.grid.to_cell(&target.position);
        let obstacles = self.grid.occupancy(
            visible
                .iter()
                .filter(|fish| fish.id != target.fish_id)
                .map(|fish| &fish.position),
        );

        match self.planner.plan(&self.grid, start, goal, &obstacles) {
            PlanOutcome::Found(path) => {
                let step = path.first().copied()?;
                if step == goal {
                    Some(target.position)
                } else {
                    Some(self.grid.to_world(&step))
                }
            }
            PlanOutcome::Unreachable => {
                tracing::debug!(drone = drone.id, fish = target.fish_id, "target unreachable");
                None
            }
            PlanOutcome::BudgetExhausted { expanded } => {
                tracing::warn!(
                    drone = drone.id,
                    fish = target.fish_id,
                    expanded,
                    "planner budget exhausted"
                );
                None
            }
        }
    }

    /// Record a scan if the drone's pre-move position is within scan radius.
    fn confirm_scan(&mut self, drone: &DroneView, target: &Target, events: &mut Vec<DecisionEvent>) {
        if drone.position.distance_to(&target.position) > self.config.scan_radius {
            return;
        }
        let Some(detail) = self.catalogue.detail(target.fish_id) else {
            return;
        };
        if self.ledger.confirm(target.fish_id, &detail) {
            *self.scans_since_surfacing.entry(drone.id).or_insert(0) += 1;
            tracing::info!(
                drone = drone.id,
                fish = target.fish_id,
                points = target.points,
                "scan confirmed"
            );
            events.push(DecisionEvent::ScanConfirmed {
                drone_id: drone.id,
                fish_id: target.fish_id,
                points: target.points,
            });
        }
    }
}
