//! Battlefield dimensions and rules constants.

use crate::types::Position;

// --- Battlefield ---

/// Battlefield width in inches.
pub const BOARD_WIDTH: f64 = 60.0;

/// Battlefield depth in inches.
pub const BOARD_HEIGHT: f64 = 44.0;

/// Distance of each deployment line from its own board edge (inches).
pub const DEPLOYMENT_DEPTH: f64 = 8.0;

// --- Saves ---

/// Best possible save roll after modifiers.
pub const SAVE_BEST: u32 = 2;

/// Save value meaning "no save possible".
pub const NO_SAVE: u32 = 7;

// --- Morale ---

/// Leadership used when a unit has no model profile to read it from.
pub const DEFAULT_LEADERSHIP: u32 = 7;

// --- Objectives ---

/// Radius (inches, inclusive) within which a unit contributes objective control.
pub const OBJECTIVE_CONTROL_RANGE: f64 = 3.0;

/// Objective markers placed for every skirmish, as (id, position).
pub const OBJECTIVE_MARKERS: [(&str, Position); 3] = [
    (
        "obj-center",
        Position {
            x: BOARD_WIDTH / 2.0,
            y: BOARD_HEIGHT / 2.0,
        },
    ),
    (
        "obj-left",
        Position {
            x: BOARD_WIDTH * 0.25,
            y: BOARD_HEIGHT / 2.0,
        },
    ),
    (
        "obj-right",
        Position {
            x: BOARD_WIDTH * 0.75,
            y: BOARD_HEIGHT / 2.0,
        },
    ),
];
