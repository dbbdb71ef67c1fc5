//! Combat resolution engine for grimdark skirmishes.
//!
//! Owns the roster, turn sequencing and battle log, resolves movement,
//! shooting, battleshock and objective scoring with a pluggable dice source,
//! and produces `SkirmishSnapshot`s for front ends.

pub mod battle_log;
pub mod dice;
pub mod engine;
pub mod factory;
pub mod scenario;
pub mod systems;
pub mod turn;

pub use engine::{CommandOutcome, MoveReport, SimConfig, SkirmishEngine};
pub use grimdark_core as core;
