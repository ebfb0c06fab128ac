//! An ordered set of dice rolled together.

use smallvec::SmallVec;
use tracing::debug;

use super::die::Die;
use crate::core::{GameError, GameRng, Result, RollSource};

/// Per-die faces of one roll.
///
/// SmallVec keeps the common one-to-four dice case off the heap.
pub type DiceValues = SmallVec<[u32; 4]>;

/// Fixed-size collection of dice sharing one roll source.
///
/// Dice are always rolled in index order, so a seeded or scripted source
/// gives reproducible per-die values.
#[derive(Debug)]
pub struct Dice {
    dice: SmallVec<[Die; 4]>,
    sum: u32,
    source: Box<dyn RollSource>,
}

impl Dice {
    /// Create `count` dice with `sides` faces, rolled from a seeded `GameRng`.
    pub fn new(count: usize, sides: u32, seed: u64) -> Result<Self> {
        Self::with_source(count, sides, Box::new(GameRng::new(seed)))
    }

    /// Create `count` dice with `sides` faces, rolled from `source`.
    ///
    /// Fails with `InvalidDiceCount` for zero dice or `InvalidSides` for
    /// zero sides.
    pub fn with_source(count: usize, sides: u32, source: Box<dyn RollSource>) -> Result<Self> {
        if count == 0 {
            return Err(GameError::InvalidDiceCount);
        }
        let die = Die::new(sides)?;
        Ok(Self {
            dice: std::iter::repeat(die).take(count).collect(),
            sum: 0,
            source,
        })
    }

    /// Roll every die in order and return the total, saturating at `u32::MAX`.
    pub fn roll(&mut self) -> u32 {
        let source = self.source.as_mut();
        self.sum = self
            .dice
            .iter_mut()
            .map(|die| die.roll(&mut *source))
            .fold(0, u32::saturating_add);
        debug!(sum = self.sum, values = ?self.values().ok(), "dice rolled");
        self.sum
    }

    /// Total of the most recent roll, 0 before the first roll.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.sum
    }

    /// Per-die faces of the most recent roll.
    ///
    /// Fails with `DiceNotRolled` if any die has never been rolled.
    pub fn values(&self) -> Result<DiceValues> {
        self.dice
            .iter()
            .map(|die| die.value().ok_or(GameError::DiceNotRolled))
            .collect()
    }

    /// Change the faces on every die. Fails with `InvalidSides` for zero.
    pub fn set_sides(&mut self, sides: u32) -> Result<()> {
        if sides == 0 {
            return Err(GameError::InvalidSides);
        }
        for die in &mut self.dice {
            die.set_sides(sides)?;
        }
        Ok(())
    }

    /// Number of dice.
    #[must_use]
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// The dice, in roll order.
    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedRolls;

    #[test]
    fn test_dice_invalid_construction() {
        assert!(matches!(Dice::new(0, 6, 1), Err(GameError::InvalidDiceCount)));
        assert!(matches!(Dice::new(2, 0, 1), Err(GameError::InvalidSides)));
    }

    #[test]
    fn test_values_before_roll() {
        let dice = Dice::new(2, 6, 42).unwrap();
        assert!(matches!(dice.values(), Err(GameError::DiceNotRolled)));
        assert_eq!(dice.sum(), 0);
    }

    #[test]
    fn test_roll_sums_in_index_order() {
        let mut dice = Dice::with_source(3, 6, Box::new(FixedRolls::new(vec![1, 2, 6]))).unwrap();

        assert_eq!(dice.roll(), 9);
        assert_eq!(dice.sum(), 9);
        assert_eq!(dice.values().unwrap().as_slice(), &[1, 2, 6]);
    }

    #[test]
    fn test_seeded_dice_reproducible() {
        let mut a = Dice::new(2, 6, 7).unwrap();
        let mut b = Dice::new(2, 6, 7).unwrap();

        for _ in 0..20 {
            assert_eq!(a.roll(), b.roll());
            assert_eq!(a.values().unwrap(), b.values().unwrap());
        }
    }

    #[test]
    fn test_sum_matches_values() {
        let mut dice = Dice::new(4, 6, 3).unwrap();
        for _ in 0..20 {
            let total = dice.roll();
            assert!((4..=24).contains(&total));
            assert_eq!(dice.values().unwrap().iter().sum::<u32>(), total);
        }
    }

    #[test]
    fn test_huge_dice_sum_saturates() {
        let source = Box::new(FixedRolls::new(vec![u32::MAX]));
        let mut dice = Dice::with_source(2, u32::MAX, source).unwrap();

        assert_eq!(dice.roll(), u32::MAX);
        assert_eq!(dice.values().unwrap().as_slice(), &[u32::MAX, u32::MAX]);
    }

    #[test]
    fn test_set_sides_propagates() {
        let mut dice = Dice::new(3, 6, 1).unwrap();
        dice.set_sides(12).unwrap();

        assert!(dice.dice().iter().all(|d| d.sides() == 12));
        assert!(matches!(dice.set_sides(0), Err(GameError::InvalidSides)));
        assert_eq!(dice.count(), 3);
    }
}
