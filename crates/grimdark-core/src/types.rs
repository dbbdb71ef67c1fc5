//! Fundamental geometric and identity types.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};

/// 2D position on the battlefield (inches).
/// x runs along the 60" width, y along the 44" depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another position in inches.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_vec().distance(other.as_vec())
    }

    /// This position with each axis clamped onto the board.
    pub fn clamped(&self) -> Position {
        let v = self
            .as_vec()
            .clamp(DVec2::ZERO, DVec2::new(BOARD_WIDTH, BOARD_HEIGHT));
        Position::from(v)
    }

    fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}\", {:.1}\")", self.x, self.y)
    }
}

/// Euclidean distance between two board positions.
pub fn distance(a: &Position, b: &Position) -> f64 {
    a.distance_to(b)
}

/// Clamps each axis independently into `[0, BOARD_WIDTH]` / `[0, BOARD_HEIGHT]`.
pub fn clamp_to_board(p: Position) -> Position {
    p.clamped()
}

/// Runtime identity of a unit on the battlefield.
/// Unique for the lifetime of one skirmish engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit-{}", self.0)
    }
}

/// Identity of a battle log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogEntryId(pub u64);
