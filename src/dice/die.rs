//! A single die.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Result, RollSource};

/// One die with `sides` faces numbered from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    sides: u32,
    value: Option<u32>,
}

impl Die {
    /// Create an unrolled die. Fails with `InvalidSides` for zero sides.
    pub fn new(sides: u32) -> Result<Self> {
        if sides == 0 {
            return Err(GameError::InvalidSides);
        }
        Ok(Self { sides, value: None })
    }

    /// Roll the die, recording and returning a face in `1..=sides`.
    pub fn roll<R: RollSource + ?Sized>(&mut self, source: &mut R) -> u32 {
        let face = source.roll(self.sides);
        debug_assert!((1..=self.sides).contains(&face), "Roll source produced face {face}");
        self.value = Some(face);
        face
    }

    /// Last rolled face, or `None` before the first roll.
    #[must_use]
    pub fn value(&self) -> Option<u32> {
        self.value
    }

    /// Number of faces.
    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Change the number of faces. Fails with `InvalidSides` for zero.
    pub fn set_sides(&mut self, sides: u32) -> Result<()> {
        if sides == 0 {
            return Err(GameError::InvalidSides);
        }
        self.sides = sides;
        Ok(())
    }
}

impl Default for Die {
    fn default() -> Self {
        Self { sides: 6, value: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedRolls, GameRng};

    #[test]
    fn test_die_zero_sides() {
        assert!(matches!(Die::new(0), Err(GameError::InvalidSides)));
    }

    #[test]
    fn test_die_unrolled() {
        let die = Die::new(6).unwrap();
        assert_eq!(die.value(), None);
        assert_eq!(die.sides(), 6);
    }

    #[test]
    fn test_die_roll_records_value() {
        let mut die = Die::new(6).unwrap();
        let mut rolls = FixedRolls::new(vec![4]);

        assert_eq!(die.roll(&mut rolls), 4);
        assert_eq!(die.value(), Some(4));
    }

    #[test]
    fn test_die_roll_range_and_variety() {
        let mut die = Die::new(6).unwrap();
        let mut rng = GameRng::new(99);

        let faces: Vec<u32> = (0..200).map(|_| die.roll(&mut rng)).collect();
        assert!(faces.iter().all(|f| (1..=6).contains(f)));

        let first = faces[0];
        assert!(faces.iter().any(|&f| f != first));
    }

    #[test]
    fn test_die_set_sides() {
        let mut die = Die::default();
        die.set_sides(20).unwrap();
        assert_eq!(die.sides(), 20);
        assert!(matches!(die.set_sides(0), Err(GameError::InvalidSides)));
        assert_eq!(die.sides(), 20);
    }
}
