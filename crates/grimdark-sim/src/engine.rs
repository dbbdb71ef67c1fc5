//! Skirmish engine: owns the state of one skirmish and applies commands to it.
//!
//! `SkirmishEngine` owns the roster, turn state, selection, battle log and
//! dice, applies player commands, and produces `SkirmishSnapshot`s.
//! Completely headless, enabling deterministic testing.
//!
//! Every command either commits fully (state change, log lines, events) or
//! returns an `EngineError` with the skirmish untouched.

use serde::{Deserialize, Serialize};

use grimdark_core::commands::PlayerCommand;
use grimdark_core::components::{UnitInstance, UnitTemplate};
use grimdark_core::enums::*;
use grimdark_core::error::{EngineError, Result};
use grimdark_core::events::{EngineEvent, LogEntry};
use grimdark_core::state::*;
use grimdark_core::types::{LogEntryId, Position, UnitId};

use crate::battle_log::BattleLog;
use crate::dice::{DiceSource, SeededDice};
use crate::factory::{self, IdAllocator};
use crate::scenario;
use crate::systems;
use crate::systems::morale::MoraleReport;
use crate::systems::objectives::ObjectiveScore;
use crate::systems::shooting::ShootingOutcome;
use crate::turn;

/// Configuration for a new engine.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and commands = same skirmish.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// A committed move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveReport {
    pub unit_id: UnitId,
    pub destination: Position,
    pub distance: f64,
    pub max_distance: f64,
    /// The D6 added for an advance.
    pub advance_roll: Option<u32>,
}

/// What a successfully applied `PlayerCommand` produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    SkirmishStarted { units: usize },
    SkirmishReset,
    SelectionChanged(Selection),
    Moved(MoveReport),
    Shot(Box<ShootingOutcome>),
    Morale(Vec<LogEntry>),
    Objectives(ObjectiveScore),
    TurnAdvanced(TurnState),
    CommandPoints { player: Player, total: u32 },
    DiceRollsCleared,
}

/// The skirmish state container. One per active skirmish.
pub struct SkirmishEngine<D: DiceSource = SeededDice> {
    dice: D,
    ids: IdAllocator,
    roster: Vec<UnitInstance>,
    turn: TurnState,
    selection: Selection,
    objectives: Vec<ObjectiveMarker>,
    log: BattleLog,
    dice_rolls: Option<DiceRollSummary>,
    events: Vec<EngineEvent>,
}

impl SkirmishEngine<SeededDice> {
    /// Create an engine with seeded dice and an empty battlefield.
    pub fn new(config: SimConfig) -> Self {
        Self::with_dice(SeededDice::new(config.seed))
    }
}

impl<D: DiceSource> SkirmishEngine<D> {
    /// Create an engine rolling with `dice`.
    pub fn with_dice(dice: D) -> Self {
        Self {
            dice,
            ids: IdAllocator::default(),
            roster: Vec::new(),
            turn: TurnState::default(),
            selection: Selection::default(),
            objectives: ObjectiveMarker::standard_set(),
            log: BattleLog::new(),
            dice_rolls: None,
            events: Vec::new(),
        }
    }

    // --- Queries ---

    /// Units still on the battlefield.
    pub fn roster(&self) -> &[UnitInstance] {
        &self.roster
    }

    pub fn unit(&self, id: UnitId) -> Option<&UnitInstance> {
        self.roster.iter().find(|u| u.id == id)
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn objectives(&self) -> &[ObjectiveMarker] {
        &self.objectives
    }

    pub fn battle_log(&self) -> &BattleLog {
        &self.log
    }

    /// Dice from the last shooting attack, until cleared.
    pub fn dice_rolls(&self) -> Option<&DiceRollSummary> {
        self.dice_rolls.as_ref()
    }

    /// Mutable access to the dice, e.g. to queue scripted faces.
    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    /// Complete read-only copy of the visible state.
    pub fn snapshot(&self) -> SkirmishSnapshot {
        systems::snapshot::build_snapshot(
            &self.turn,
            &self.roster,
            &self.selection,
            &self.objectives,
            &self.log,
            self.dice_rolls.as_ref(),
        )
    }

    /// Take the change notifications raised since the last drain.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    // --- Skirmish lifecycle ---

    /// Deploy both armies from the built-in catalog and start at turn 1.
    pub fn start_skirmish(&mut self, config: SkirmishConfig) -> Result<()> {
        let roster = scenario::deploy(&mut self.ids, &config);
        self.begin(roster, scenario::start_message(&config))
    }

    /// Deploy explicit template lists and start at turn 1.
    /// Returns the spawned units.
    pub fn deploy_roster(
        &mut self,
        p1_templates: &[UnitTemplate],
        p2_templates: &[UnitTemplate],
    ) -> Result<&[UnitInstance]> {
        let roster = factory::instantiate_roster(&mut self.ids, p1_templates, p2_templates);
        let message = format!(
            "Skirmish started: Player 1 ({} units), Player 2 ({} units).",
            p1_templates.len(),
            p2_templates.len()
        );
        self.begin(roster, message)?;
        Ok(&self.roster)
    }

    /// Add one unit to the current skirmish at `position`.
    pub fn spawn_unit(
        &mut self,
        template: &UnitTemplate,
        owner: Player,
        position: Position,
    ) -> UnitId {
        let unit = factory::instantiate(&mut self.ids, template, owner, position.clamped());
        let id = unit.id;
        self.roster.push(unit);
        self.events.push(EngineEvent::UnitChanged { unit_id: id });
        id
    }

    /// Clear the battlefield and return to the pre-skirmish state.
    pub fn reset(&mut self) {
        self.roster.clear();
        self.turn = TurnState::default();
        self.selection = Selection::default();
        self.log = BattleLog::new();
        self.dice_rolls = None;
        self.events.push(EngineEvent::SkirmishReset);
    }

    fn begin(&mut self, roster: Vec<UnitInstance>, message: String) -> Result<()> {
        if roster.is_empty() {
            return Err(EngineError::EmptySkirmish);
        }

        tracing::info!("{} ({} units deployed)", message, roster.len());
        self.roster = roster;
        self.turn = TurnState::default();
        self.selection = Selection::default();
        self.log = BattleLog::new();
        self.dice_rolls = None;
        self.events.push(EngineEvent::SkirmishStarted);
        self.write_log(message);
        Ok(())
    }

    // --- Selection ---

    /// Select a unit, or clear the selection with `None`. Clearing or
    /// selecting a different unit also clears the target.
    pub fn select_unit(&mut self, unit_id: Option<UnitId>) -> Result<Selection> {
        if let Some(id) = unit_id {
            self.find(id)?;
        }
        if unit_id.is_none() || self.selection.selected_unit != unit_id {
            self.selection.target_unit = None;
        }
        self.selection.selected_unit = unit_id;
        self.events.push(EngineEvent::SelectionChanged);
        Ok(self.selection)
    }

    /// Set or clear the target of the current selection.
    pub fn set_target(&mut self, unit_id: Option<UnitId>) -> Result<Selection> {
        if let Some(id) = unit_id {
            self.find(id)?;
        }
        self.selection.target_unit = unit_id;
        self.events.push(EngineEvent::SelectionChanged);
        Ok(self.selection)
    }

    // --- Actions ---

    /// Move one of the active player's units during the Movement phase.
    /// With `advance`, a D6 is added to its Movement.
    pub fn move_unit(
        &mut self,
        unit_id: UnitId,
        target: Position,
        advance: bool,
    ) -> Result<MoveReport> {
        turn::authorize(self.turn.phase, ActionKind::Move)?;
        let idx = self.find(unit_id)?;
        self.check_owner(idx)?;

        let advance_roll = advance.then(|| self.dice.roll_d6());
        let check = systems::movement::validate_move(&self.roster[idx], target, advance_roll);
        if let Some(failure) = check.failure {
            tracing::debug!(
                "move of {} rejected: {} ({:.2} > {:.2})",
                unit_id,
                failure,
                check.distance,
                check.max_distance
            );
            return Err(EngineError::MoveRejected {
                failure,
                distance: check.distance,
                max_distance: check.max_distance,
            });
        }

        let unit = &mut self.roster[idx];
        unit.position = check.destination;
        let verb = if advance_roll.is_some() { "advances" } else { "moves" };
        let message = format!("{} {} to {}.", unit.name(), verb, check.destination);
        self.events.push(EngineEvent::UnitChanged { unit_id });
        self.narrate(message);

        Ok(MoveReport {
            unit_id,
            destination: check.destination,
            distance: check.distance,
            max_distance: check.max_distance,
            advance_roll,
        })
    }

    /// Fire `weapon_index` of the attacker's primary profile at an enemy unit
    /// during the Shooting phase.
    pub fn shoot(
        &mut self,
        attacker_id: UnitId,
        target_id: UnitId,
        weapon_index: usize,
    ) -> Result<ShootingOutcome> {
        turn::authorize(self.turn.phase, ActionKind::Shoot)?;
        let attacker_idx = self.find(attacker_id)?;
        let target_idx = self.find(target_id)?;
        self.check_owner(attacker_idx)?;

        let attacker = &self.roster[attacker_idx];
        let target = &self.roster[target_idx];
        if target.owner == attacker.owner {
            return Err(EngineError::FriendlyTarget { target: target_id });
        }
        let weapon = attacker
            .weapon(weapon_index)
            .ok_or(EngineError::WeaponNotFound {
                unit: attacker_id,
                index: weapon_index,
            })?;

        let outcome = systems::shooting::resolve_shooting(attacker, target, weapon, &mut self.dice);

        // Commit
        if outcome.damage_dealt > 0 {
            self.roster[target_idx] = outcome.updated_target.clone();
            self.events.push(EngineEvent::UnitChanged { unit_id: target_id });
        }
        for line in &outcome.log {
            self.narrate(line.clone());
        }
        if outcome.target_destroyed() {
            self.remove_unit(target_idx);
        }
        self.dice_rolls = Some(outcome.rolls.clone());
        self.events.push(EngineEvent::DiceRollsChanged);

        Ok(outcome)
    }

    /// Battleshock tests for the active player's units during the Command
    /// phase. Returns the single log entry written.
    pub fn resolve_morale(&mut self) -> Result<Vec<LogEntry>> {
        turn::authorize(self.turn.phase, ActionKind::Battleshock)?;
        let player = self.turn.active_player;

        let MoraleReport { results, message } =
            systems::morale::resolve_battleshock(&mut self.roster, player, &mut self.dice);
        for (unit_id, _) in &results {
            self.events.push(EngineEvent::UnitChanged { unit_id: *unit_id });
        }
        self.events.push(EngineEvent::MoraleResolved { player });

        let id = self.narrate(message);
        Ok(self.entry(id).into_iter().collect())
    }

    /// Score objectives for the active player during the Command phase.
    pub fn score_objectives(&mut self) -> Result<ObjectiveScore> {
        turn::authorize(self.turn.phase, ActionKind::ScoreObjectives)?;
        let player = self.turn.active_player;

        let score = systems::objectives::score_objectives(&self.roster, &self.objectives, player);
        let total = self.turn.victory_points.get_mut(player);
        *total += score.vp_gained;
        let total = *total;

        if score.vp_gained > 0 {
            self.events
                .push(EngineEvent::VictoryPointsChanged { player, total });
        }
        self.write_log(format!(
            "{} scores {} VP from objectives this Command phase.",
            player, score.vp_gained
        ));
        tracing::info!("{} scored {} VP (total {})", player, score.vp_gained, total);

        Ok(score)
    }

    // --- Turn control ---

    /// Move to the next phase, passing the turn after Fight.
    pub fn advance_phase(&mut self) -> TurnState {
        let before = self.turn.active_player;
        turn::advance_phase(&mut self.turn);

        if self.turn.active_player != before {
            self.selection = Selection::default();
            self.events.push(EngineEvent::SelectionChanged);
        }
        self.events.push(EngineEvent::TurnAdvanced {
            active_player: self.turn.active_player,
            phase: self.turn.phase,
            turn: self.turn.turn,
        });
        tracing::info!(
            "turn {}: {} {}",
            self.turn.turn,
            self.turn.active_player,
            self.turn.phase
        );

        self.turn
    }

    /// Grant command points. Returns the player's new total.
    pub fn add_command_points(&mut self, player: Player, amount: u32) -> u32 {
        let total = self.turn.command_points.get_mut(player);
        *total += amount;
        let total = *total;
        self.events
            .push(EngineEvent::CommandPointsChanged { player, total });
        total
    }

    pub fn clear_dice_rolls(&mut self) {
        if self.dice_rolls.take().is_some() {
            self.events.push(EngineEvent::DiceRollsChanged);
        }
    }

    /// Apply a serialized command.
    pub fn apply(&mut self, command: PlayerCommand) -> Result<CommandOutcome> {
        let result = match command {
            PlayerCommand::StartSkirmish { config } => self
                .start_skirmish(config)
                .map(|()| CommandOutcome::SkirmishStarted {
                    units: self.roster.len(),
                }),
            PlayerCommand::Reset => {
                self.reset();
                Ok(CommandOutcome::SkirmishReset)
            }
            PlayerCommand::SelectUnit { unit_id } => self
                .select_unit(unit_id)
                .map(CommandOutcome::SelectionChanged),
            PlayerCommand::SetTarget { unit_id } => self
                .set_target(unit_id)
                .map(CommandOutcome::SelectionChanged),
            PlayerCommand::Move {
                unit_id,
                target,
                advance,
            } => self
                .move_unit(unit_id, target, advance)
                .map(CommandOutcome::Moved),
            PlayerCommand::Shoot {
                attacker_id,
                target_id,
                weapon_index,
            } => self
                .shoot(attacker_id, target_id, weapon_index)
                .map(|outcome| CommandOutcome::Shot(Box::new(outcome))),
            PlayerCommand::ResolveMorale => self.resolve_morale().map(CommandOutcome::Morale),
            PlayerCommand::ScoreObjectives => {
                self.score_objectives().map(CommandOutcome::Objectives)
            }
            PlayerCommand::AdvancePhase => Ok(CommandOutcome::TurnAdvanced(self.advance_phase())),
            PlayerCommand::AddCommandPoints { player, amount } => {
                let total = self.add_command_points(player, amount);
                Ok(CommandOutcome::CommandPoints { player, total })
            }
            PlayerCommand::ClearDiceRolls => {
                self.clear_dice_rolls();
                Ok(CommandOutcome::DiceRollsCleared)
            }
        };

        if let Err(err) = &result {
            tracing::warn!("command rejected: {}", err);
        }
        result
    }

    // --- Internals ---

    fn find(&self, id: UnitId) -> Result<usize> {
        self.roster
            .iter()
            .position(|u| u.id == id)
            .ok_or(EngineError::UnitNotFound(id))
    }

    fn check_owner(&self, idx: usize) -> Result<()> {
        let unit = &self.roster[idx];
        if unit.owner == self.turn.active_player {
            Ok(())
        } else {
            Err(EngineError::NotActivePlayer {
                unit: unit.id,
                owner: unit.owner,
            })
        }
    }

    fn remove_unit(&mut self, idx: usize) {
        let unit = self.roster.remove(idx);
        tracing::info!("{} ({}) destroyed", unit.name(), unit.id);

        if self.selection.selected_unit == Some(unit.id) {
            self.selection = Selection::default();
            self.events.push(EngineEvent::SelectionChanged);
        } else if self.selection.target_unit == Some(unit.id) {
            self.selection.target_unit = None;
            self.events.push(EngineEvent::SelectionChanged);
        }
        self.events
            .push(EngineEvent::UnitDestroyed { unit_id: unit.id });
        self.write_log(format!("{} is destroyed.", unit.name()));
    }

    /// Log a line prefixed with the active player and phase.
    fn narrate(&mut self, message: String) -> LogEntryId {
        let line = format!(
            "{} – {}: {}",
            self.turn.active_player, self.turn.phase, message
        );
        self.write_log(line)
    }

    fn write_log(&mut self, message: String) -> LogEntryId {
        let id = self.log.append(message, self.turn.turn, self.turn.phase);
        self.events.push(EngineEvent::LogAppended { entry_id: id });
        id
    }

    fn entry(&self, id: LogEntryId) -> Option<LogEntry> {
        self.log.entries().iter().rev().find(|e| e.id == id).cloned()
    }
}
