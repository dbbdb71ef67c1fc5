//! Resolvers that act on the skirmish state.
//!
//! Systems are plain functions over units and dice. They do not own state;
//! the engine decides what to commit and what to log.

pub mod morale;
pub mod movement;
pub mod objectives;
pub mod shooting;
pub mod snapshot;
