//! Objective scoring for the active player.

use serde::{Deserialize, Serialize};

use grimdark_core::components::UnitInstance;
use grimdark_core::constants::OBJECTIVE_CONTROL_RANGE;
use grimdark_core::enums::Player;
use grimdark_core::state::ObjectiveMarker;

/// Objective control gathered at each marker and in total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveScore {
    pub vp_gained: u32,
    /// (marker id, control contributed there)
    pub per_marker: Vec<(String, u32)>,
}

/// Sum the objective control of `player`'s units within range of each
/// marker. Shaken units contribute nothing. A unit near two markers counts
/// at both.
pub fn score_objectives(
    units: &[UnitInstance],
    markers: &[ObjectiveMarker],
    player: Player,
) -> ObjectiveScore {
    let per_marker: Vec<(String, u32)> = markers
        .iter()
        .map(|marker| {
            let control = units
                .iter()
                .filter(|u| u.owner == player)
                .filter(|u| u.position.distance_to(&marker.position) <= OBJECTIVE_CONTROL_RANGE)
                .map(UnitInstance::objective_control)
                .sum();
            (marker.id.clone(), control)
        })
        .collect();

    ObjectiveScore {
        vp_gained: per_marker.iter().map(|(_, c)| c).sum(),
        per_marker,
    }
}
