//! Battle log entries and change notifications emitted by the engine.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{LogEntryId, UnitId};

/// One narrated line of the battle log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: LogEntryId,
    pub message: String,
    pub turn: u32,
    pub phase: TurnPhase,
}

/// Notification that part of the skirmish state changed.
/// Observers drain these after each command and refresh what they show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineEvent {
    /// A new skirmish replaced the roster and turn state.
    SkirmishStarted,
    /// The engine returned to the empty pre-skirmish state.
    SkirmishReset,
    /// A unit moved or took damage.
    UnitChanged { unit_id: UnitId },
    /// A unit lost its last model and left the roster.
    UnitDestroyed { unit_id: UnitId },
    /// Phase, active player or turn number changed.
    TurnAdvanced {
        active_player: Player,
        phase: TurnPhase,
        turn: u32,
    },
    SelectionChanged,
    CommandPointsChanged { player: Player, total: u32 },
    VictoryPointsChanged { player: Player, total: u32 },
    /// Battleshock flags were re-evaluated.
    MoraleResolved { player: Player },
    DiceRollsChanged,
    LogAppended { entry_id: LogEntryId },
}
