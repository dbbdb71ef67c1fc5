//! Enumeration types used throughout the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two opposing sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[default]
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The other side.
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => f.write_str("Player 1"),
            Player::Two => f.write_str("Player 2"),
        }
    }
}

/// Phases of a single player's turn, in play order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    #[default]
    Command,
    Movement,
    Shooting,
    Charge,
    Fight,
}

impl TurnPhase {
    pub const ORDER: [TurnPhase; 5] = [
        TurnPhase::Command,
        TurnPhase::Movement,
        TurnPhase::Shooting,
        TurnPhase::Charge,
        TurnPhase::Fight,
    ];

    /// The following phase, or `None` after Fight (the turn passes).
    pub fn next(self) -> Option<TurnPhase> {
        match self {
            TurnPhase::Command => Some(TurnPhase::Movement),
            TurnPhase::Movement => Some(TurnPhase::Shooting),
            TurnPhase::Shooting => Some(TurnPhase::Charge),
            TurnPhase::Charge => Some(TurnPhase::Fight),
            TurnPhase::Fight => None,
        }
    }
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TurnPhase::Command => "COMMAND",
            TurnPhase::Movement => "MOVEMENT",
            TurnPhase::Shooting => "SHOOTING",
            TurnPhase::Charge => "CHARGE",
            TurnPhase::Fight => "FIGHT",
        };
        f.write_str(name)
    }
}

/// Player actions gated by the turn phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Move,
    Shoot,
    Battleshock,
    ScoreObjectives,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Move => "move",
            ActionKind::Shoot => "shoot",
            ActionKind::Battleshock => "battleshock",
            ActionKind::ScoreObjectives => "score objectives",
        };
        f.write_str(name)
    }
}

/// Random dice kinds a characteristic may be expressed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiceKind {
    /// Half a D6, rounded up.
    D3,
    D6,
    /// Sum of two D6.
    TwoD6,
}

/// A characteristic that is either a flat number or a dice roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiceExpr {
    Fixed(u32),
    Dice(DiceKind),
}

impl From<u32> for DiceExpr {
    fn from(value: u32) -> Self {
        DiceExpr::Fixed(value)
    }
}

impl fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiceExpr::Fixed(n) => write!(f, "{n}"),
            DiceExpr::Dice(DiceKind::D3) => f.write_str("D3"),
            DiceExpr::Dice(DiceKind::D6) => f.write_str("D6"),
            DiceExpr::Dice(DiceKind::TwoD6) => f.write_str("2D6"),
        }
    }
}

/// Whether a weapon is used in the shooting or fight phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponClass {
    Ranged,
    Melee,
}

/// Weapon reach: a distance in inches, or engagement range only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WeaponRange {
    Ranged(f64),
    Melee,
}

/// Reasons a move can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveFailure {
    /// The unit's Movement characteristic is zero or missing.
    NoMovementStat,
    /// The destination is further than the unit may move.
    ExceedsMaxDistance,
}

impl fmt::Display for MoveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveFailure::NoMovementStat => f.write_str("unit has no Movement characteristic"),
            MoveFailure::ExceedsMaxDistance => f.write_str("move exceeds maximum distance"),
        }
    }
}

/// Playable factions with a built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    SpaceMarines,
    Necrons,
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Faction::SpaceMarines => f.write_str("Space Marines"),
            Faction::Necrons => f.write_str("Necrons"),
        }
    }
}

/// Skirmish size, which caps the number of units each side fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkirmishSize {
    #[default]
    Patrol,
    Incursion,
    StrikeForce,
}

impl SkirmishSize {
    /// Maximum units per side.
    pub fn unit_count(self) -> usize {
        match self {
            SkirmishSize::Patrol => 3,
            SkirmishSize::Incursion => 5,
            SkirmishSize::StrikeForce => 7,
        }
    }
}

impl fmt::Display for SkirmishSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkirmishSize::Patrol => f.write_str("PATROL"),
            SkirmishSize::Incursion => f.write_str("INCURSION"),
            SkirmishSize::StrikeForce => f.write_str("STRIKE_FORCE"),
        }
    }
}
