//! Movement intents emitted by the agent, one per drone per turn.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// What a drone should do this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MovementIntent {
    /// Move toward `target` with the light on or off.
    Move { target: Position, light: bool },
    /// Hold position.
    Wait { light: bool },
}

impl MovementIntent {
    pub fn light(&self) -> bool {
        match self {
            MovementIntent::Move { light, .. } | MovementIntent::Wait { light } => *light,
        }
    }

    pub fn target(&self) -> Option<Position> {
        match self {
            MovementIntent::Move { target, .. } => Some(*target),
            MovementIntent::Wait { .. } => None,
        }
    }

    /// Same intent with the light forced off.
    pub fn without_light(self) -> Self {
        match self {
            MovementIntent::Move { target, .. } => MovementIntent::Move {
                target,
                light: false,
            },
            MovementIntent::Wait { .. } => MovementIntent::Wait { light: false },
        }
    }

    /// Same intent with the target clamped into `[0, bound)`.
    pub fn clamped(self, bound: i32) -> Self {
        match self {
            MovementIntent::Move { target, light } => MovementIntent::Move {
                target: target.clamped(bound),
                light,
            },
            wait => wait,
        }
    }
}
