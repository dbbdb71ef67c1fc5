#[cfg(test)]
mod tests {
    use crate::catalog::{self, templates_for};
    use crate::commands::PlayerCommand;
    use crate::components::UnitInstance;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::EngineError;
    use crate::events::EngineEvent;
    use crate::state::{ObjectiveMarker, PlayerTally, SkirmishConfig, SkirmishSnapshot};
    use crate::types::{clamp_to_board, distance, Position, UnitId};

    fn intercessors() -> UnitInstance {
        let template = catalog::space_marine_units().remove(0);
        let current_wounds = template.models.iter().map(|m| m.stats.wounds).collect();
        UnitInstance {
            id: UnitId(1),
            owner: Player::One,
            template,
            position: Position::new(10.0, 10.0),
            current_wounds,
            shaken: false,
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartSkirmish {
                config: SkirmishConfig::default(),
            },
            PlayerCommand::Reset,
            PlayerCommand::SelectUnit {
                unit_id: Some(UnitId(3)),
            },
            PlayerCommand::SetTarget { unit_id: None },
            PlayerCommand::Move {
                unit_id: UnitId(1),
                target: Position::new(12.5, 9.0),
                advance: true,
            },
            PlayerCommand::Shoot {
                attacker_id: UnitId(1),
                target_id: UnitId(4),
                weapon_index: 0,
            },
            PlayerCommand::ResolveMorale,
            PlayerCommand::ScoreObjectives,
            PlayerCommand::AdvancePhase,
            PlayerCommand::AddCommandPoints {
                player: Player::Two,
                amount: 2,
            },
            PlayerCommand::ClearDiceRolls,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }
    }

    #[test]
    fn test_command_defaults_when_fields_omitted() {
        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"AddCommandPoints","player":"One"}"#).unwrap();
        assert_eq!(
            cmd,
            PlayerCommand::AddCommandPoints {
                player: Player::One,
                amount: 1
            }
        );

        let cmd: PlayerCommand = serde_json::from_str(
            r#"{"type":"Move","unit_id":2,"target":{"x":1.0,"y":2.0}}"#,
        )
        .unwrap();
        assert!(matches!(cmd, PlayerCommand::Move { advance: false, .. }));

        let cmd: PlayerCommand = serde_json::from_str(r#"{"type":"StartSkirmish"}"#).unwrap();
        assert_eq!(
            cmd,
            PlayerCommand::StartSkirmish {
                config: SkirmishConfig::default()
            }
        );
    }

    #[test]
    fn test_engine_event_serde() {
        let events = vec![
            EngineEvent::SkirmishStarted,
            EngineEvent::UnitDestroyed {
                unit_id: UnitId(9),
            },
            EngineEvent::TurnAdvanced {
                active_player: Player::Two,
                phase: TurnPhase::Shooting,
                turn: 3,
            },
            EngineEvent::VictoryPointsChanged {
                player: Player::One,
                total: 4,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: EngineEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = SkirmishSnapshot {
            roster: vec![intercessors()],
            objectives: ObjectiveMarker::standard_set(),
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SkirmishSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
        assert_eq!(back.turn.turn, 1);
        assert_eq!(back.turn.phase, TurnPhase::Command);
    }

    #[test]
    fn test_distance_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((distance(&a, &b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_clamp_to_board_per_axis() {
        assert_eq!(
            clamp_to_board(Position::new(-4.0, 50.0)),
            Position::new(0.0, BOARD_HEIGHT)
        );
        assert_eq!(
            clamp_to_board(Position::new(75.0, -1.0)),
            Position::new(BOARD_WIDTH, 0.0)
        );
        let inside = Position::new(12.3, 40.1);
        assert_eq!(clamp_to_board(inside), inside);
    }

    #[test]
    fn test_turn_phase_order() {
        let mut phase = TurnPhase::Command;
        let mut seen = vec![phase];
        while let Some(next) = phase.next() {
            seen.push(next);
            phase = next;
        }
        assert_eq!(seen, TurnPhase::ORDER.to_vec());
    }

    #[test]
    fn test_player_opponent_and_tally() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);

        let mut tally = PlayerTally::default();
        *tally.get_mut(Player::Two) += 3;
        assert_eq!(tally.get(Player::One), 0);
        assert_eq!(tally.get(Player::Two), 3);
    }

    #[test]
    fn test_skirmish_size_caps() {
        assert_eq!(SkirmishSize::Patrol.unit_count(), 3);
        assert_eq!(SkirmishSize::Incursion.unit_count(), 5);
        assert_eq!(SkirmishSize::StrikeForce.unit_count(), 7);
    }

    #[test]
    fn test_catalog_saves_within_bounds() {
        for faction in [Faction::SpaceMarines, Faction::Necrons] {
            let templates = templates_for(faction);
            assert!(!templates.is_empty());
            for template in templates {
                assert_eq!(template.faction, faction.to_string());
                for model in &template.models {
                    assert!(
                        (SAVE_BEST..=NO_SAVE).contains(&model.stats.save),
                        "{} has save {}",
                        model.name,
                        model.stats.save
                    );
                    assert!(model.stats.wounds > 0);
                }
            }
        }
    }

    #[test]
    fn test_catalog_melee_weapons_have_melee_range() {
        for template in catalog::space_marine_units()
            .into_iter()
            .chain(catalog::necron_units())
        {
            for weapon in &template.models[0].weapons {
                match weapon.class {
                    WeaponClass::Melee => assert_eq!(weapon.range, WeaponRange::Melee),
                    WeaponClass::Ranged => {
                        assert!(matches!(weapon.range, WeaponRange::Ranged(r) if r > 0.0))
                    }
                }
            }
        }
    }

    #[test]
    fn test_unit_instance_helpers() {
        let mut unit = intercessors();
        assert_eq!(unit.starting_models(), 1);
        assert_eq!(unit.surviving_models(), 1);
        assert_eq!(unit.leadership(), 6);
        assert_eq!(unit.objective_control(), 2);
        assert_eq!(unit.weapon(0).map(|w| w.name.as_str()), Some("Bolt rifle"));
        assert!(unit.weapon(5).is_none());

        unit.shaken = true;
        assert_eq!(unit.objective_control(), 0);

        unit.current_wounds[0] = 0;
        assert!(unit.is_destroyed());
    }

    #[test]
    fn test_objective_markers_on_center_line() {
        let markers = ObjectiveMarker::standard_set();
        assert_eq!(markers.len(), 3);
        for marker in &markers {
            assert_eq!(marker.position.y, BOARD_HEIGHT / 2.0);
        }
        assert_eq!(markers[0].position.x, 30.0);
        assert_eq!(markers[1].position.x, 15.0);
        assert_eq!(markers[2].position.x, 45.0);
    }

    #[test]
    fn test_error_messages() {
        let err = EngineError::PhaseViolation {
            action: ActionKind::Shoot,
            phase: TurnPhase::Movement,
        };
        assert_eq!(err.to_string(), "cannot shoot during the MOVEMENT phase");

        let err = EngineError::MoveRejected {
            failure: MoveFailure::ExceedsMaxDistance,
            distance: 6.01,
            max_distance: 6.0,
        };
        assert_eq!(
            err.to_string(),
            "move exceeds maximum distance (6.0\" of 6.0\")"
        );
    }
}
