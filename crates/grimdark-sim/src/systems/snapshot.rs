//! Snapshot system: copies the engine's state into a `SkirmishSnapshot`.
//!
//! Read-only; building a snapshot never changes the skirmish.

use grimdark_core::components::UnitInstance;
use grimdark_core::state::*;

use crate::battle_log::BattleLog;

/// Build a complete snapshot from the current engine state.
pub fn build_snapshot(
    turn: &TurnState,
    roster: &[UnitInstance],
    selection: &Selection,
    objectives: &[ObjectiveMarker],
    log: &BattleLog,
    dice_rolls: Option<&DiceRollSummary>,
) -> SkirmishSnapshot {
    SkirmishSnapshot {
        turn: *turn,
        roster: roster.to_vec(),
        selection: *selection,
        objectives: objectives.to_vec(),
        battle_log: log.entries().to_vec(),
        dice_rolls: dice_rolls.cloned(),
    }
}
