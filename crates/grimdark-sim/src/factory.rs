//! Unit spawn factories for deploying a skirmish.
//!
//! Expands catalog templates into runtime instances with fresh ids and
//! full wounds, and lays each army out on its deployment line.

use grimdark_core::components::{UnitInstance, UnitTemplate};
use grimdark_core::constants::{BOARD_HEIGHT, BOARD_WIDTH, DEPLOYMENT_DEPTH};
use grimdark_core::enums::Player;
use grimdark_core::types::{Position, UnitId};

/// Hands out unit ids that are never reused within one engine.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn next_id(&mut self) -> UnitId {
        self.next += 1;
        UnitId(self.next)
    }
}

/// Spawn one unit from its template at full strength.
pub fn instantiate(
    ids: &mut IdAllocator,
    template: &UnitTemplate,
    owner: Player,
    position: Position,
) -> UnitInstance {
    UnitInstance {
        id: ids.next_id(),
        owner,
        template: template.clone(),
        position,
        current_wounds: template.models.iter().map(|m| m.stats.wounds).collect(),
        shaken: false,
    }
}

/// Spawn both armies. Player one deploys along its own edge, player two
/// along the opposite edge, each evenly spaced across the board width.
pub fn instantiate_roster(
    ids: &mut IdAllocator,
    p1_templates: &[UnitTemplate],
    p2_templates: &[UnitTemplate],
) -> Vec<UnitInstance> {
    let p1_line = spawn_line(p1_templates.len(), DEPLOYMENT_DEPTH);
    let p2_line = spawn_line(p2_templates.len(), BOARD_HEIGHT - DEPLOYMENT_DEPTH);

    let mut roster: Vec<UnitInstance> = p1_templates
        .iter()
        .zip(p1_line)
        .map(|(template, pos)| instantiate(ids, template, Player::One, pos))
        .collect();
    roster.extend(
        p2_templates
            .iter()
            .zip(p2_line)
            .map(|(template, pos)| instantiate(ids, template, Player::Two, pos)),
    );
    roster
}

/// `count` points evenly spaced across the board at depth `y`.
pub fn spawn_line(count: usize, y: f64) -> Vec<Position> {
    let segment = BOARD_WIDTH / (count as f64 + 1.0);
    (1..=count)
        .map(|i| Position::new(segment * i as f64, y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use grimdark_core::catalog;

    #[test]
    fn instance_starts_at_full_wounds() {
        let mut ids = IdAllocator::default();
        let template = &catalog::necron_units()[2];
        let unit = instantiate(&mut ids, template, Player::Two, Position::new(5.0, 5.0));

        assert_eq!(unit.owner, Player::Two);
        assert_eq!(unit.position, Position::new(5.0, 5.0));
        assert_eq!(unit.current_wounds, vec![14]);
        assert!(!unit.shaken);
        assert_eq!(unit.template, *template);
    }

    #[test]
    fn ids_are_unique() {
        let mut ids = IdAllocator::default();
        let template = &catalog::space_marine_units()[0];
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let unit = instantiate(&mut ids, template, Player::One, Position::default());
            assert!(seen.insert(unit.id), "duplicate id {}", unit.id);
        }
    }

    #[test]
    fn spawn_line_is_evenly_spaced() {
        let line = spawn_line(3, 8.0);
        assert_eq!(
            line,
            vec![
                Position::new(15.0, 8.0),
                Position::new(30.0, 8.0),
                Position::new(45.0, 8.0),
            ]
        );
        assert!(spawn_line(0, 8.0).is_empty());
    }

    #[test]
    fn roster_deploys_on_opposite_edges() {
        let mut ids = IdAllocator::default();
        let roster = instantiate_roster(
            &mut ids,
            &catalog::space_marine_units(),
            &catalog::necron_units()[..2],
        );

        assert_eq!(roster.len(), 5);
        let (p1, p2): (Vec<_>, Vec<_>) = roster.iter().partition(|u| u.owner == Player::One);
        assert_eq!(p1.len(), 3);
        assert_eq!(p2.len(), 2);
        assert!(p1.iter().all(|u| u.position.y == 8.0));
        assert!(p2.iter().all(|u| u.position.y == 36.0));
        assert_eq!(p2[0].position.x, 20.0);
        assert_eq!(p2[1].position.x, 40.0);
    }
}
