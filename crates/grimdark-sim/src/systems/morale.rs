//! Battleshock tests for the active player's units.

use serde::{Deserialize, Serialize};

use grimdark_core::components::UnitInstance;
use grimdark_core::enums::Player;
use grimdark_core::types::UnitId;

use crate::dice::DiceSource;

/// How one unit's battleshock step went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleshockResult {
    /// At or above half strength; no roll needed.
    AutoPassed,
    Passed { roll: u32, leadership: u32 },
    Failed { roll: u32, leadership: u32 },
}

/// Per-unit results plus the narrated line for the battle log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoraleReport {
    pub results: Vec<(UnitId, BattleshockResult)>,
    pub message: String,
}

/// Test every unit `player` owns, updating each unit's shaken flag.
///
/// Units with no models left are skipped. Units with at least half their
/// starting models pass automatically. The rest roll 2D6 and fail if the
/// total is greater than their Leadership.
pub fn resolve_battleshock(
    units: &mut [UnitInstance],
    player: Player,
    dice: &mut impl DiceSource,
) -> MoraleReport {
    let mut results = Vec::new();
    let mut narrated = Vec::new();

    for unit in units.iter_mut().filter(|u| u.owner == player) {
        let survivors = unit.surviving_models();
        if survivors == 0 {
            continue;
        }

        if survivors * 2 >= unit.starting_models() {
            unit.shaken = false;
            results.push((unit.id, BattleshockResult::AutoPassed));
            continue;
        }

        let roll = dice.roll_2d6();
        let leadership = unit.leadership();
        let failed = roll > leadership;
        unit.shaken = failed;

        narrated.push(format!(
            "{}: rolled {} vs Ld {} → {}",
            unit.name(),
            roll,
            leadership,
            if failed { "FAILED" } else { "PASSED" }
        ));
        let result = if failed {
            BattleshockResult::Failed { roll, leadership }
        } else {
            BattleshockResult::Passed { roll, leadership }
        };
        tracing::debug!("battleshock {} {:?}", unit.id, result);
        results.push((unit.id, result));
    }

    let message = if narrated.is_empty() {
        "No eligible units for Battleshock tests.".to_string()
    } else {
        format!("Battleshock tests – {}.", narrated.join("; "))
    };

    MoraleReport { results, message }
}
