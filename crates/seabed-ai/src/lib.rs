//! Decision logic for the seabed agent.
//!
//! Pure functions over plain data: fish valuation, bonus tracking,
//! target selection, and the surface-return state machine.
//! Nothing here owns cross-turn state; the turn engine passes it in.

pub mod bonus;
pub mod scoring;
pub mod selector;
pub mod surface;
pub mod values;

pub use seabed_core as core;
