//! Core types and definitions for the seabed drone agent.
//!
//! This crate defines the vocabulary shared across all other crates:
//! positions, the static fish catalogue, per-turn world snapshots,
//! movement intents, decision events, and constants.
//! It has no dependency on the turn protocol or any runtime.

pub mod catalogue;
pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
