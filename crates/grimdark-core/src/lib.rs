//! Core types and definitions for the grimdark skirmish engine.
//!
//! This crate defines the vocabulary shared by the engine and its front ends:
//! unit data, the built-in catalog, commands, events, state snapshots,
//! battlefield geometry and constants. It holds no randomness and no engine.

pub mod catalog;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
