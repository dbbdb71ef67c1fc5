//! Skirmish state types and the read-only snapshot handed to observers.

use serde::{Deserialize, Serialize};

use crate::components::UnitInstance;
use crate::constants::OBJECTIVE_MARKERS;
use crate::enums::*;
use crate::events::LogEntry;
use crate::types::{Position, UnitId};

/// A per-player integer resource (command points, victory points).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTally {
    pub player1: u32,
    pub player2: u32,
}

impl PlayerTally {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    pub fn get_mut(&mut self, player: Player) -> &mut u32 {
        match player {
            Player::One => &mut self.player1,
            Player::Two => &mut self.player2,
        }
    }
}

/// Whose turn it is, which phase, and the players' resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub active_player: Player,
    pub phase: TurnPhase,
    /// Battle round, starting at 1.
    pub turn: u32,
    pub command_points: PlayerTally,
    pub victory_points: PlayerTally,
}

impl Default for TurnState {
    fn default() -> Self {
        Self {
            active_player: Player::One,
            phase: TurnPhase::Command,
            turn: 1,
            command_points: PlayerTally::default(),
            victory_points: PlayerTally::default(),
        }
    }
}

/// The active player's selected unit and its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub selected_unit: Option<UnitId>,
    pub target_unit: Option<UnitId>,
}

/// Raw dice from the last shooting attack, for a dice tray display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRollSummary {
    pub hits: Vec<u32>,
    pub wounds: Vec<u32>,
    pub saves: Vec<u32>,
    pub damage: Vec<u32>,
}

/// A scoring point on the battlefield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveMarker {
    pub id: String,
    pub position: Position,
}

impl ObjectiveMarker {
    /// The three markers used by every skirmish.
    pub fn standard_set() -> Vec<ObjectiveMarker> {
        OBJECTIVE_MARKERS
            .iter()
            .map(|(id, position)| ObjectiveMarker {
                id: id.to_string(),
                position: *position,
            })
            .collect()
    }
}

/// Which factions meet, and at what size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkirmishConfig {
    pub player1_faction: Faction,
    pub player2_faction: Faction,
    #[serde(default)]
    pub size: SkirmishSize,
}

impl Default for SkirmishConfig {
    fn default() -> Self {
        Self {
            player1_faction: Faction::SpaceMarines,
            player2_faction: Faction::Necrons,
            size: SkirmishSize::Patrol,
        }
    }
}

/// Complete visible state of a skirmish.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkirmishSnapshot {
    pub turn: TurnState,
    pub roster: Vec<UnitInstance>,
    pub selection: Selection,
    pub objectives: Vec<ObjectiveMarker>,
    pub battle_log: Vec<LogEntry>,
    pub dice_rolls: Option<DiceRollSummary>,
}
