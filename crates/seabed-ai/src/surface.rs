//! Surface-return state machine.
//!
//! Stateless: the mode is recomputed from the drone's depth, its unbanked
//! scans, and the scans-since-surfacing counter every turn. Leaving
//! `Returning` happens implicitly once no condition holds.

use seabed_core::constants::{MAP_SIZE, SCANS_BEFORE_SURFACING, SURFACE_STEP, SURFACE_Y_THRESHOLD};
use seabed_core::enums::{DroneMode, SurfaceReason};
use seabed_core::types::Position;

/// Tunables for the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceParams {
    pub map_size: i32,
    pub surface_threshold: i32,
    pub surface_step: i32,
    pub scans_before_surfacing: u32,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            map_size: MAP_SIZE,
            surface_threshold: SURFACE_Y_THRESHOLD,
            surface_step: SURFACE_STEP,
            scans_before_surfacing: SCANS_BEFORE_SURFACING,
        }
    }
}

/// Input to the policy for a single drone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceContext {
    pub position: Position,
    pub has_unbanked_scans: bool,
    pub scans_since_surfacing: u32,
}

/// Output of the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceDecision {
    pub mode: DroneMode,
    pub reason: Option<SurfaceReason>,
}

impl SurfaceDecision {
    fn seeking() -> Self {
        Self {
            mode: DroneMode::Seeking,
            reason: None,
        }
    }

    fn returning(reason: SurfaceReason) -> Self {
        Self {
            mode: DroneMode::Returning,
            reason: Some(reason),
        }
    }

    pub fn is_returning(&self) -> bool {
        self.mode == DroneMode::Returning
    }
}

/// Evaluate the policy. Conditions are checked in order; the first match
/// is reported as the reason.
pub fn evaluate(ctx: &SurfaceContext, params: &SurfaceParams) -> SurfaceDecision {
    if ctx.position.y <= params.surface_threshold && ctx.has_unbanked_scans {
        return SurfaceDecision::returning(SurfaceReason::NearSurfaceWithScans);
    }
    if ctx.position.y >= params.map_size / 2 {
        return SurfaceDecision::returning(SurfaceReason::TooDeep);
    }
    if ctx.scans_since_surfacing >= params.scans_before_surfacing {
        return SurfaceDecision::returning(SurfaceReason::ScanQuota);
    }
    SurfaceDecision::seeking()
}

/// Straight up by one step, stopping at the surface.
pub fn surface_move(position: &Position, params: &SurfaceParams) -> Position {
    Position::new(position.x, (position.y - params.surface_step).max(0))
}

/// Whether a drone counts as surfaced, which resets its scan counter.
pub fn is_surfaced(position: &Position, params: &SurfaceParams) -> bool {
    position.y <= params.surface_threshold
}
