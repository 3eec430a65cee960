//! Referee adapter for the seabed agent: parses the line protocol, drives
//! `TurnEngine` once per turn, and prints one command per drone.

pub mod game_loop;
pub mod protocol;
