//! Shooting resolution: hit, wound, save and damage for one weapon firing
//! at one target unit.
//!
//! The resolver is pure apart from consuming dice. It never touches its
//! inputs; the damaged target comes back as a new instance for the caller to
//! commit.

use serde::{Deserialize, Serialize};

use grimdark_core::components::{UnitInstance, Weapon};
use grimdark_core::constants::{NO_SAVE, SAVE_BEST};
use grimdark_core::enums::{WeaponClass, WeaponRange};
use grimdark_core::state::DiceRollSummary;

use crate::dice::DiceSource;

/// Everything one shooting attack produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShootingOutcome {
    pub hits: u32,
    pub wounds: u32,
    pub unsaved_wounds: u32,
    pub damage_dealt: u32,
    pub slain_models: u32,
    /// The target after damage. Equal to the input target when nothing got through.
    pub updated_target: UnitInstance,
    /// Raw dice per stage, in roll order.
    pub rolls: DiceRollSummary,
    /// One narrated line per stage that ran.
    pub log: Vec<String>,
}

impl ShootingOutcome {
    /// An attack that was refused before any dice were rolled.
    fn rejected(target: &UnitInstance, message: String) -> Self {
        Self {
            hits: 0,
            wounds: 0,
            unsaved_wounds: 0,
            damage_dealt: 0,
            slain_models: 0,
            updated_target: target.clone(),
            rolls: DiceRollSummary::default(),
            log: vec![message],
        }
    }

    pub fn target_destroyed(&self) -> bool {
        self.updated_target.is_destroyed()
    }
}

/// Roll needed to wound, from the strength-versus-toughness table.
pub fn wound_target(strength: u32, toughness: u32) -> u32 {
    if strength >= toughness * 2 {
        2
    } else if strength > toughness {
        3
    } else if strength == toughness {
        4
    } else if strength * 2 <= toughness {
        6
    } else {
        5
    }
}

/// Save roll needed after armour penetration. AP is subtracted from the
/// save, so negative AP raises it; the result is kept within 2..=7.
pub fn save_target(save: u32, ap: i32) -> u32 {
    let modified = i64::from(save) - i64::from(ap);
    modified.clamp(i64::from(SAVE_BEST), i64::from(NO_SAVE)) as u32
}

/// A natural 1 always fails.
fn save_succeeds(roll: u32, target: u32) -> bool {
    roll != 1 && roll >= target
}

/// Totals from applying damage to a unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamageAllocation {
    pub damage_dealt: u32,
    pub slain_models: u32,
}

/// Apply each unsaved wound's damage to the first model still standing.
///
/// Damage beyond what slays a model is lost; it never carries over to the
/// next model.
pub fn allocate_damage(target: &mut UnitInstance, damage_rolls: &[u32]) -> DamageAllocation {
    let mut allocation = DamageAllocation::default();

    for &damage in damage_rolls {
        if damage == 0 {
            continue;
        }
        let Some(wounds) = target.current_wounds.iter_mut().find(|w| **w > 0) else {
            break;
        };

        if damage >= *wounds {
            allocation.damage_dealt += *wounds;
            allocation.slain_models += 1;
            *wounds = 0;
        } else {
            allocation.damage_dealt += damage;
            *wounds -= damage;
        }
    }

    allocation
}

/// Resolve `attacker` firing `weapon` at `target`.
///
/// Melee weapons and targets beyond the weapon's range are refused with a
/// single log line and no dice. Otherwise the pipeline runs hit, wound, save
/// and damage in order, stopping at the first stage with no successes.
pub fn resolve_shooting(
    attacker: &UnitInstance,
    target: &UnitInstance,
    weapon: &Weapon,
    dice: &mut impl DiceSource,
) -> ShootingOutcome {
    let outcome = run_pipeline(attacker, target, weapon, dice);

    tracing::debug!(
        "{} -> {} with {}: {} stages, {} hits, {} wounds, {} unsaved, {} damage",
        attacker.id,
        target.id,
        weapon.name,
        outcome.log.len(),
        outcome.hits,
        outcome.wounds,
        outcome.unsaved_wounds,
        outcome.damage_dealt
    );

    outcome
}

fn run_pipeline(
    attacker: &UnitInstance,
    target: &UnitInstance,
    weapon: &Weapon,
    dice: &mut impl DiceSource,
) -> ShootingOutcome {
    let range = match (weapon.class, weapon.range) {
        (WeaponClass::Ranged, WeaponRange::Ranged(range)) => range,
        _ => {
            return ShootingOutcome::rejected(
                target,
                format!("{} is not a ranged weapon.", weapon.name),
            );
        }
    };

    let distance = attacker.position.distance_to(&target.position);
    if distance > range {
        return ShootingOutcome::rejected(
            target,
            format!("{} is out of range ({:.1}\").", weapon.name, distance),
        );
    }

    let mut outcome = ShootingOutcome {
        hits: 0,
        wounds: 0,
        unsaved_wounds: 0,
        damage_dealt: 0,
        slain_models: 0,
        updated_target: target.clone(),
        rolls: DiceRollSummary::default(),
        log: Vec::with_capacity(4),
    };

    // Hit
    let attacks = dice.resolve(weapon.attacks);
    outcome.rolls.hits = dice.roll_dice(attacks);
    outcome.hits = count_at_least(&outcome.rolls.hits, weapon.skill);
    outcome.log.push(format!(
        "{} fires {}: {} shots, {} hits.",
        attacker.name(),
        weapon.name,
        attacks,
        outcome.hits
    ));
    if outcome.hits == 0 {
        return outcome;
    }

    // Wound
    let toughness = target.primary_stats().map_or(0, |s| s.toughness);
    let to_wound = wound_target(weapon.strength, toughness);
    outcome.rolls.wounds = dice.roll_dice(outcome.hits);
    outcome.wounds = count_at_least(&outcome.rolls.wounds, to_wound);
    outcome.log.push(format!(
        "{} attempts to wound on {}+: {} wounds.",
        weapon.name, to_wound, outcome.wounds
    ));
    if outcome.wounds == 0 {
        return outcome;
    }

    // Save
    let base_save = target.primary_stats().map_or(NO_SAVE, |s| s.save);
    let to_save = save_target(base_save, weapon.ap);
    outcome.rolls.saves = dice.roll_dice(outcome.wounds);
    let saved = outcome
        .rolls
        .saves
        .iter()
        .filter(|&&roll| save_succeeds(roll, to_save))
        .count() as u32;
    outcome.unsaved_wounds = outcome.wounds - saved;
    outcome.log.push(format!(
        "{} makes saves on {}+: {} saved, {} fail.",
        target.name(),
        to_save,
        saved,
        outcome.unsaved_wounds
    ));
    if outcome.unsaved_wounds == 0 {
        return outcome;
    }

    // Damage
    outcome.rolls.damage = (0..outcome.unsaved_wounds)
        .map(|_| dice.resolve(weapon.damage))
        .collect();
    let allocation = allocate_damage(&mut outcome.updated_target, &outcome.rolls.damage);
    outcome.damage_dealt = allocation.damage_dealt;
    outcome.slain_models = allocation.slain_models;
    outcome.log.push(format!(
        "{} suffers {} damage, {} models slain.",
        target.name(),
        outcome.damage_dealt,
        outcome.slain_models
    ));

    outcome
}

fn count_at_least(rolls: &[u32], target: u32) -> u32 {
    rolls.iter().filter(|&&roll| roll >= target).count() as u32
}
