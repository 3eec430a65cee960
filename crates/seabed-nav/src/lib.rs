//! Navigation for the seabed agent.
//!
//! A discretized view of the arena for occupancy queries and
//! neighbor expansion, plus a bounded A* planner over it.

pub use seabed_core as core;

pub mod astar;
pub mod grid;

pub use astar::{plan, PlanOutcome, Planner};
pub use grid::{Occupancy, SpatialGrid};
