//! Turn and phase sequencing, and the phase gate for player actions.

use grimdark_core::enums::{ActionKind, Player, TurnPhase};
use grimdark_core::error::{EngineError, Result};
use grimdark_core::state::TurnState;

/// Advance to the next phase.
///
/// Phase flow per player turn:
/// - Command -> Movement -> Shooting -> Charge -> Fight
/// - Fight -> Command of the other player
///
/// The turn counter increments only when play passes from player two back
/// to player one.
pub fn advance_phase(state: &mut TurnState) {
    match state.phase.next() {
        Some(next) => state.phase = next,
        None => {
            if state.active_player == Player::Two {
                state.turn += 1;
            }
            state.active_player = state.active_player.opponent();
            state.phase = TurnPhase::Command;
        }
    }
}

/// The only phase in which `action` may be taken.
pub fn phase_for(action: ActionKind) -> TurnPhase {
    match action {
        ActionKind::Move => TurnPhase::Movement,
        ActionKind::Shoot => TurnPhase::Shooting,
        ActionKind::Battleshock | ActionKind::ScoreObjectives => TurnPhase::Command,
    }
}

/// Reject `action` unless the current phase allows it.
pub fn authorize(phase: TurnPhase, action: ActionKind) -> Result<()> {
    if phase_for(action) == phase {
        Ok(())
    } else {
        Err(EngineError::PhaseViolation { action, phase })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_to_movement() {
        let mut state = TurnState::default();
        advance_phase(&mut state);
        assert_eq!(state.phase, TurnPhase::Movement);
        assert_eq!(state.active_player, Player::One);
        assert_eq!(state.turn, 1);
    }

    #[test]
    fn fight_passes_turn_to_player_two_same_round() {
        let mut state = TurnState {
            phase: TurnPhase::Fight,
            ..Default::default()
        };
        advance_phase(&mut state);
        assert_eq!(state.phase, TurnPhase::Command);
        assert_eq!(state.active_player, Player::Two);
        assert_eq!(state.turn, 1);
    }

    #[test]
    fn fight_of_player_two_starts_next_round() {
        let mut state = TurnState {
            phase: TurnPhase::Fight,
            active_player: Player::Two,
            turn: 4,
            ..Default::default()
        };
        advance_phase(&mut state);
        assert_eq!(state.phase, TurnPhase::Command);
        assert_eq!(state.active_player, Player::One);
        assert_eq!(state.turn, 5);
    }

    #[test]
    fn advancing_leaves_resources_alone() {
        let mut state = TurnState::default();
        state.command_points.player1 = 2;
        state.victory_points.player2 = 5;
        for _ in 0..10 {
            advance_phase(&mut state);
        }
        assert_eq!(state.command_points.player1, 2);
        assert_eq!(state.victory_points.player2, 5);
    }

    #[test]
    fn gate_allows_only_matching_phase() {
        let cases = [
            (ActionKind::Move, TurnPhase::Movement),
            (ActionKind::Shoot, TurnPhase::Shooting),
            (ActionKind::Battleshock, TurnPhase::Command),
            (ActionKind::ScoreObjectives, TurnPhase::Command),
        ];
        for (action, allowed) in cases {
            for phase in TurnPhase::ORDER {
                let result = authorize(phase, action);
                if phase == allowed {
                    assert!(result.is_ok(), "{action} should be allowed in {phase}");
                } else {
                    assert_eq!(result, Err(EngineError::PhaseViolation { action, phase }));
                }
            }
        }
    }
}
