//! Unit data: catalog templates and their runtime instances.
//!
//! Templates are immutable catalog entries. Instances are what the engine
//! mutates during play.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LEADERSHIP;
use crate::enums::*;
use crate::types::{Position, UnitId};

/// Characteristics of one model profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    /// Movement in inches.
    pub movement: u32,
    pub toughness: u32,
    /// Armour save as the roll needed (3 = 3+). 7 means no save.
    pub save: u32,
    /// Wounds per model.
    pub wounds: u32,
    /// Target on 2D6 the unit must not exceed to pass battleshock.
    pub leadership: u32,
    pub objective_control: u32,
}

/// A weapon profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub class: WeaponClass,
    pub range: WeaponRange,
    pub attacks: DiceExpr,
    /// Ballistic or weapon skill as the roll needed to hit.
    pub skill: u32,
    pub strength: u32,
    /// Armour penetration, conventionally zero or negative.
    pub ap: i32,
    pub damage: DiceExpr,
    /// Weapon abilities. Informational only.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// One model in a unit: its characteristics and wargear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelProfile {
    pub name: String,
    pub stats: StatBlock,
    pub weapons: Vec<Weapon>,
}

/// Catalog entry a unit is spawned from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitTemplate {
    pub name: String,
    pub faction: String,
    pub role: String,
    pub keywords: Vec<String>,
    pub models: Vec<ModelProfile>,
}

/// A unit on the battlefield.
///
/// Stats and weapons are read from the first model profile only. Units whose
/// models carry different profiles are resolved as if every model matched the
/// first one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitInstance {
    pub id: UnitId,
    pub owner: Player,
    pub template: UnitTemplate,
    pub position: Position,
    /// Remaining wounds per model, parallel to `template.models`.
    pub current_wounds: Vec<u32>,
    /// Failed battleshock: objective control counts as zero while set.
    pub shaken: bool,
}

impl UnitInstance {
    pub fn name(&self) -> &str {
        &self.template.name
    }

    /// The profile used for the whole unit's stats and weapons.
    pub fn primary_profile(&self) -> Option<&ModelProfile> {
        self.template.models.first()
    }

    pub fn primary_stats(&self) -> Option<&StatBlock> {
        self.primary_profile().map(|p| &p.stats)
    }

    /// Weapon of the primary profile at `index`.
    pub fn weapon(&self, index: usize) -> Option<&Weapon> {
        self.primary_profile().and_then(|p| p.weapons.get(index))
    }

    /// Number of models the unit started with.
    pub fn starting_models(&self) -> usize {
        self.template.models.len()
    }

    /// Number of models with wounds remaining.
    pub fn surviving_models(&self) -> usize {
        self.current_wounds.iter().filter(|&&w| w > 0).count()
    }

    pub fn is_destroyed(&self) -> bool {
        self.surviving_models() == 0
    }

    pub fn leadership(&self) -> u32 {
        self.primary_stats()
            .map_or(DEFAULT_LEADERSHIP, |s| s.leadership)
    }

    /// Objective control this unit currently contributes.
    pub fn objective_control(&self) -> u32 {
        if self.shaken {
            return 0;
        }
        self.primary_stats().map_or(0, |s| s.objective_control)
    }
}
