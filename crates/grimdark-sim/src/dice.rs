//! Randomness source: D6 rolls and dice-expression resolution.
//!
//! Every random number the engine uses comes through a `DiceSource`, so a
//! seeded or scripted source replays a skirmish exactly.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use grimdark_core::enums::{DiceExpr, DiceKind};

/// A source of six-sided die results.
pub trait DiceSource {
    /// One die, uniform in `1..=6`.
    fn roll_d6(&mut self) -> u32;

    /// `count` independent dice, in roll order.
    fn roll_dice(&mut self, count: u32) -> Vec<u32> {
        (0..count).map(|_| self.roll_d6()).collect()
    }

    /// Sum of two dice.
    fn roll_2d6(&mut self) -> u32 {
        self.roll_d6() + self.roll_d6()
    }

    /// Resolve a characteristic to a concrete number.
    fn resolve(&mut self, expr: DiceExpr) -> u32 {
        match expr {
            DiceExpr::Fixed(n) => n,
            DiceExpr::Dice(DiceKind::D3) => self.roll_d6().div_ceil(2),
            DiceExpr::Dice(DiceKind::D6) => self.roll_d6(),
            DiceExpr::Dice(DiceKind::TwoD6) => self.roll_2d6(),
        }
    }
}

/// Production dice backed by a seeded ChaCha8 stream.
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl DiceSource for SeededDice {
    fn roll_d6(&mut self) -> u32 {
        self.rng.gen_range(1..=6)
    }
}

/// Replays a fixed sequence of faces. Used to pin down exact outcomes.
///
/// Panics when asked for more dice than were scripted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    faces: VecDeque<u32>,
}

impl ScriptedDice {
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    /// Queue more faces behind the ones not yet rolled.
    pub fn push(&mut self, faces: impl IntoIterator<Item = u32>) {
        self.faces.extend(faces);
    }

    /// Faces not yet consumed.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll_d6(&mut self) -> u32 {
        let face = self.faces.pop_front().expect("scripted dice exhausted");
        debug_assert!((1..=6).contains(&face), "scripted face {face} is not a D6 result");
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rolls_stay_on_a_d6() {
        let mut dice = SeededDice::new(7);
        let rolls = dice.roll_dice(1000);
        assert_eq!(rolls.len(), 1000);
        assert!(rolls.iter().all(|r| (1..=6).contains(r)));
        for face in 1..=6 {
            assert!(rolls.contains(&face), "face {face} never rolled");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededDice::new(99);
        let mut b = SeededDice::new(99);
        assert_eq!(a.roll_dice(50), b.roll_dice(50));
    }

    #[test]
    fn fixed_expression_consumes_no_dice() {
        let mut dice = ScriptedDice::new([4]);
        assert_eq!(dice.resolve(DiceExpr::Fixed(3)), 3);
        assert_eq!(dice.remaining(), 1);
    }

    #[test]
    fn d3_is_half_a_d6_rounded_up() {
        let mut dice = ScriptedDice::new([1, 2, 3, 4, 5, 6]);
        let results: Vec<u32> = (0..6)
            .map(|_| dice.resolve(DiceExpr::Dice(DiceKind::D3)))
            .collect();
        assert_eq!(results, vec![1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn d6_and_2d6() {
        let mut dice = ScriptedDice::new([5, 2, 6]);
        assert_eq!(dice.resolve(DiceExpr::Dice(DiceKind::D6)), 5);
        assert_eq!(dice.resolve(DiceExpr::Dice(DiceKind::TwoD6)), 8);
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "scripted dice exhausted")]
    fn scripted_dice_panic_when_empty() {
        let mut dice = ScriptedDice::new([]);
        dice.roll_d6();
    }
}
