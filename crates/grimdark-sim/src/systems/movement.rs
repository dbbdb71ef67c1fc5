//! Movement validation.
//!
//! Checks a proposed relocation against the unit's Movement characteristic,
//! optionally extended by an advance roll. Never moves the unit itself.

use serde::{Deserialize, Serialize};

use grimdark_core::components::UnitInstance;
use grimdark_core::enums::MoveFailure;
use grimdark_core::types::{clamp_to_board, Position};

/// Outcome of checking one move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveValidation {
    /// Requested point clamped onto the board.
    pub destination: Position,
    /// Straight-line distance from the unit to `destination`.
    pub distance: f64,
    /// Movement plus any advance roll.
    pub max_distance: f64,
    pub failure: Option<MoveFailure>,
}

impl MoveValidation {
    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }
}

/// Validate moving `unit` to `target`. `advance_roll` is the extra D6 for an
/// advance, if the unit is advancing.
pub fn validate_move(
    unit: &UnitInstance,
    target: Position,
    advance_roll: Option<u32>,
) -> MoveValidation {
    let destination = clamp_to_board(target);
    let movement = unit.primary_stats().map_or(0, |s| s.movement);
    let max_distance = f64::from(movement + advance_roll.unwrap_or(0));
    let distance = unit.position.distance_to(&destination);

    let failure = if movement == 0 {
        Some(MoveFailure::NoMovementStat)
    } else if distance > max_distance {
        Some(MoveFailure::ExceedsMaxDistance)
    } else {
        None
    };

    MoveValidation {
        destination,
        distance,
        max_distance,
        failure,
    }
}
