//! Radar steering: head toward the quadrant of an unseen fish.

use seabed_core::enums::RadarDirection;
use seabed_core::types::Position;

/// One move of at most `step` units from `position` toward the arena corner
/// named by `direction`.
pub fn steer_toward(position: &Position, direction: RadarDirection, step: i32, map_size: i32) -> Position {
    let corner = direction.corner(map_size);
    let from = position.as_dvec2();
    let offset = corner.as_dvec2() - from;
    let distance = offset.length();
    if distance <= step as f64 {
        return corner;
    }
    let next = from + offset / distance * step as f64;
    Position::new(next.x.round() as i32, next.y.round() as i32).clamped(map_size)
}
