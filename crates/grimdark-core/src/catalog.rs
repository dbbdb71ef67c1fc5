//! Built-in unit catalog.
//!
//! Representative datasheets for demo skirmishes. Templates are returned in
//! catalog order; a skirmish fields the first N of its faction.

use crate::components::{ModelProfile, StatBlock, UnitTemplate, Weapon};
use crate::enums::*;

/// All templates for a faction, in catalog order.
pub fn templates_for(faction: Faction) -> Vec<UnitTemplate> {
    match faction {
        Faction::SpaceMarines => space_marine_units(),
        Faction::Necrons => necron_units(),
    }
}

pub fn space_marine_units() -> Vec<UnitTemplate> {
    let faction = Faction::SpaceMarines;
    vec![
        // Battleline
        unit(
            faction,
            "Intercessor Squad",
            "Battleline",
            &["INFANTRY", "BATTLELINE", "INTERCESSORS", "OC2"],
            model(
                "Intercessor",
                stats(6, 4, 3, 2, 6, 2),
                vec![
                    ranged("Bolt rifle", 24.0, flat(2), 3, 4, -1, flat(1), &["RAPID FIRE 1"]),
                    melee("Astartes combat weapon", flat(3), 3, 4, 0, flat(1), &[]),
                ],
            ),
        ),
        // Elite
        unit(
            faction,
            "Terminator Squad",
            "Elite",
            &["INFANTRY", "TERMINATOR", "ELITE", "OC1"],
            model(
                "Terminator",
                stats(5, 5, 2, 3, 6, 1),
                vec![
                    ranged("Storm bolter", 24.0, flat(2), 3, 4, 0, flat(1), &["RAPID FIRE 2"]),
                    melee("Power fist", flat(3), 3, 8, -2, flat(2), &["ANTI-VEHICLE 3+"]),
                ],
            ),
        ),
        // Vehicle
        unit(
            faction,
            "Predator Destructor",
            "Vehicle",
            &["VEHICLE", "TANK", "PREDATOR", "OC3"],
            model(
                "Predator Destructor",
                stats(10, 10, 3, 11, 7, 3),
                vec![
                    ranged("Predator autocannon", 48.0, flat(4), 3, 9, -1, flat(3), &["TWIN-LINKED"]),
                    ranged("Sponson heavy bolters", 36.0, flat(6), 3, 5, -1, flat(2), &[]),
                ],
            ),
        ),
    ]
}

pub fn necron_units() -> Vec<UnitTemplate> {
    let faction = Faction::Necrons;
    vec![
        // Battleline
        unit(
            faction,
            "Necron Warriors",
            "Battleline",
            &["INFANTRY", "BATTLELINE", "NECRON WARRIORS", "REANIMATION", "OC2"],
            model(
                "Necron Warrior",
                stats(5, 4, 4, 1, 7, 2),
                vec![
                    ranged("Gauss flayer", 24.0, flat(1), 4, 4, -1, flat(1), &["RAPID FIRE 1"]),
                    melee("Close combat weapon", flat(2), 4, 4, 0, flat(1), &[]),
                ],
            ),
        ),
        // Elite
        unit(
            faction,
            "Necron Immortals",
            "Elite",
            &["INFANTRY", "IMMORTALS", "OC2"],
            model(
                "Necron Immortal",
                stats(5, 5, 3, 2, 7, 2),
                vec![
                    ranged("Gauss blaster", 24.0, flat(2), 3, 5, -1, flat(1), &["RAPID FIRE 1"]),
                    melee("Close combat weapon", flat(2), 4, 5, 0, flat(1), &[]),
                ],
            ),
        ),
        // Vehicle
        unit(
            faction,
            "Doomsday Ark",
            "Vehicle",
            &["VEHICLE", "TANK", "DOOMSDAY ARK", "OC4"],
            model(
                "Doomsday Ark",
                stats(10, 11, 3, 14, 7, 4),
                vec![
                    ranged(
                        "Doomsday cannon (focused)",
                        72.0,
                        flat(1),
                        3,
                        16,
                        -4,
                        DiceExpr::Dice(DiceKind::D6),
                        &["BLAST"],
                    ),
                    ranged("Gauss flayer arrays", 24.0, flat(12), 3, 4, -1, flat(1), &["RAPID FIRE 3"]),
                ],
            ),
        ),
    ]
}

fn unit(
    faction: Faction,
    name: &str,
    role: &str,
    keywords: &[&str],
    profile: ModelProfile,
) -> UnitTemplate {
    UnitTemplate {
        name: name.to_string(),
        faction: faction.to_string(),
        role: role.to_string(),
        keywords: strings(keywords),
        models: vec![profile],
    }
}

fn model(name: &str, stats: StatBlock, weapons: Vec<Weapon>) -> ModelProfile {
    ModelProfile {
        name: name.to_string(),
        stats,
        weapons,
    }
}

/// M, T, Sv, W, Ld, OC
fn stats(
    movement: u32,
    toughness: u32,
    save: u32,
    wounds: u32,
    leadership: u32,
    objective_control: u32,
) -> StatBlock {
    StatBlock {
        movement,
        toughness,
        save,
        wounds,
        leadership,
        objective_control,
    }
}

#[allow(clippy::too_many_arguments)]
fn ranged(
    name: &str,
    range: f64,
    attacks: DiceExpr,
    skill: u32,
    strength: u32,
    ap: i32,
    damage: DiceExpr,
    keywords: &[&str],
) -> Weapon {
    Weapon {
        name: name.to_string(),
        class: WeaponClass::Ranged,
        range: WeaponRange::Ranged(range),
        attacks,
        skill,
        strength,
        ap,
        damage,
        keywords: strings(keywords),
    }
}

fn melee(
    name: &str,
    attacks: DiceExpr,
    skill: u32,
    strength: u32,
    ap: i32,
    damage: DiceExpr,
    keywords: &[&str],
) -> Weapon {
    Weapon {
        name: name.to_string(),
        class: WeaponClass::Melee,
        range: WeaponRange::Melee,
        attacks,
        skill,
        strength,
        ap,
        damage,
        keywords: strings(keywords),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn flat(value: u32) -> DiceExpr {
    DiceExpr::Fixed(value)
}
