//! Error taxonomy for engine commands.
//!
//! Every variant is recoverable: a failed command leaves the skirmish
//! untouched and the caller shows the message.

use thiserror::Error;

use crate::enums::{ActionKind, MoveFailure, Player, TurnPhase};
use crate::types::UnitId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("unit not found: {0}")]
    UnitNotFound(UnitId),

    #[error("{unit} has no weapon at index {index}")]
    WeaponNotFound { unit: UnitId, index: usize },

    #[error("cannot {action} during the {phase} phase")]
    PhaseViolation { action: ActionKind, phase: TurnPhase },

    #[error("{unit} belongs to {owner}, not the active player")]
    NotActivePlayer { unit: UnitId, owner: Player },

    #[error("{target} is a friendly unit")]
    FriendlyTarget { target: UnitId },

    #[error("{failure} ({distance:.1}\" of {max_distance:.1}\")")]
    MoveRejected {
        failure: MoveFailure,
        distance: f64,
        max_distance: f64,
    },

    #[error("skirmish configuration produced no units")]
    EmptySkirmish,
}

pub type Result<T> = std::result::Result<T, EngineError>;
