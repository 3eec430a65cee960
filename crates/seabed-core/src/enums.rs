//! Enumeration types used throughout the agent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Coarse quadrant, relative to a drone, in which a radar-detected fish lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RadarDirection {
    #[serde(rename = "TL")]
    TopLeft,
    #[serde(rename = "TR")]
    TopRight,
    #[serde(rename = "BL")]
    BottomLeft,
    #[serde(rename = "BR")]
    BottomRight,
}

impl RadarDirection {
    /// Arena corner the quadrant points at, for an arena of side `map_size`.
    pub fn corner(&self, map_size: i32) -> Position {
        let far = (map_size - 1).max(0);
        match self {
            RadarDirection::TopLeft => Position::new(0, 0),
            RadarDirection::TopRight => Position::new(far, 0),
            RadarDirection::BottomLeft => Position::new(0, far),
            RadarDirection::BottomRight => Position::new(far, far),
        }
    }
}

impl fmt::Display for RadarDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            RadarDirection::TopLeft => "TL",
            RadarDirection::TopRight => "TR",
            RadarDirection::BottomLeft => "BL",
            RadarDirection::BottomRight => "BR",
        };
        f.write_str(token)
    }
}

/// Error returned when a radar token is not one of `TL`, `TR`, `BL`, `BR`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(pub String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown radar direction: {:?}", self.0)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for RadarDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TL" => Ok(RadarDirection::TopLeft),
            "TR" => Ok(RadarDirection::TopRight),
            "BL" => Ok(RadarDirection::BottomLeft),
            "BR" => Ok(RadarDirection::BottomRight),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

/// Surface-return policy state, recomputed every turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DroneMode {
    /// Pursuing the target selector's output.
    #[default]
    Seeking,
    /// Heading straight up to bank scans.
    Returning,
}

/// Why a drone is returning to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceReason {
    /// Near the surface while holding unbanked scans.
    NearSurfaceWithScans,
    /// In the deep half of the arena.
    TooDeep,
    /// Scanned enough fish since the last surfacing.
    ScanQuota,
}
