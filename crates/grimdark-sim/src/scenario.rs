//! Skirmish setup: which catalog units each side fields.

use grimdark_core::catalog::templates_for;
use grimdark_core::components::{UnitInstance, UnitTemplate};
use grimdark_core::enums::Faction;
use grimdark_core::state::SkirmishConfig;

use crate::factory::{instantiate_roster, IdAllocator};

/// The first `size` templates of a faction's catalog.
pub fn army_list(faction: Faction, config: &SkirmishConfig) -> Vec<UnitTemplate> {
    let mut templates = templates_for(faction);
    templates.truncate(config.size.unit_count());
    templates
}

/// Deploy both armies for `config`.
pub fn deploy(ids: &mut IdAllocator, config: &SkirmishConfig) -> Vec<UnitInstance> {
    let p1 = army_list(config.player1_faction, config);
    let p2 = army_list(config.player2_faction, config);
    instantiate_roster(ids, &p1, &p2)
}

/// Battle log line announcing a new skirmish.
pub fn start_message(config: &SkirmishConfig) -> String {
    format!(
        "Skirmish started: Player 1 ({}), Player 2 ({}), size {}.",
        config.player1_faction, config.player2_faction, config.size
    )
}
