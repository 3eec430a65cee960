//! Turn engine for the seabed agent.
//!
//! Owns the cross-turn state (scanned fish, bonus trackers, per-drone
//! scan counters, RNG), composes the decision crates per drone, and
//! returns one movement intent per drone each turn.

pub mod config;
pub mod engine;
pub mod error;
pub mod exploration;
pub mod radar;

pub use seabed_core as core;
pub use config::AgentConfig;
pub use engine::{TurnEngine, TurnReport};
pub use error::AgentError;
