//! Player commands sent from a front end to the engine.
//!
//! Commands are applied one at a time; each either commits fully or is
//! rejected without changing the skirmish.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::state::SkirmishConfig;
use crate::types::{Position, UnitId};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Skirmish lifecycle ---
    /// Deploy both armies and start at turn 1.
    StartSkirmish {
        #[serde(default)]
        config: SkirmishConfig,
    },
    /// Clear the battlefield and return to the pre-skirmish state.
    Reset,

    // --- Selection ---
    /// Select a unit (or clear with `None`). Changing selection clears the target.
    SelectUnit { unit_id: Option<UnitId> },
    /// Choose the selected unit's target (or clear with `None`).
    SetTarget { unit_id: Option<UnitId> },

    // --- Actions ---
    /// Move a unit; `advance` adds a D6 to its Movement.
    Move {
        unit_id: UnitId,
        target: Position,
        #[serde(default)]
        advance: bool,
    },
    /// Fire one weapon of the attacker's primary profile.
    Shoot {
        attacker_id: UnitId,
        target_id: UnitId,
        weapon_index: usize,
    },
    /// Battleshock tests for the active player's units.
    ResolveMorale,
    /// Score objectives for the active player.
    ScoreObjectives,

    // --- Turn control ---
    AdvancePhase,
    AddCommandPoints {
        player: Player,
        #[serde(default = "one")]
        amount: u32,
    },
    /// Drop the last shooting dice from the display.
    ClearDiceRolls,
}

fn one() -> u32 {
    1
}
