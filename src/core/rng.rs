//! Deterministic random number generation for dice.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical roll sequences
//! - **Pluggable**: Dice draw from any `RollSource`, so tests and demos can
//!   script exact rolls with `FixedRolls`
//!
//! ```
//! use rust_ladders::core::{GameRng, RollSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed - same rolls
//! assert_eq!(a.roll(6), b.roll(6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of single die faces.
///
/// Implementations must return a value in `1..=sides` for any `sides > 0`.
pub trait RollSource: std::fmt::Debug {
    /// Draw one face of a die with `sides` faces.
    fn roll(&mut self, sides: u32) -> u32;
}

/// Seeded RNG backing real games.
///
/// Uses ChaCha8 for speed while keeping sequences reproducible across
/// platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a random integer in the given inclusive range.
    pub fn gen_range(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }
}

impl RollSource for GameRng {
    fn roll(&mut self, sides: u32) -> u32 {
        self.gen_range(1..=sides)
    }
}

/// Scripted roll source that cycles through a fixed list of faces.
///
/// Values are clamped into `1..=sides` so a script can never produce an
/// impossible face.
#[derive(Clone, Debug)]
pub struct FixedRolls {
    values: Vec<u32>,
    cursor: usize,
}

impl FixedRolls {
    /// Create a scripted source. Panics on an empty script.
    #[must_use]
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "Must script at least one roll");
        Self { values, cursor: 0 }
    }
}

impl RollSource for FixedRolls {
    fn roll(&mut self, sides: u32) -> u32 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value.clamp(1, sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll(6), rng2.roll(6));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.gen_range(0..=1000)).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.gen_range(0..=1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_roll_in_range() {
        let mut rng = GameRng::new(7);
        for sides in 1..=20 {
            for _ in 0..50 {
                let face = rng.roll(sides);
                assert!((1..=sides).contains(&face));
            }
        }
    }

    #[test]
    fn test_fixed_rolls_cycle() {
        let mut rolls = FixedRolls::new(vec![3, 5]);

        assert_eq!(rolls.roll(6), 3);
        assert_eq!(rolls.roll(6), 5);
        assert_eq!(rolls.roll(6), 3);
    }

    #[test]
    fn test_fixed_rolls_clamped() {
        let mut rolls = FixedRolls::new(vec![10, 0]);

        assert_eq!(rolls.roll(6), 6);
        assert_eq!(rolls.roll(6), 1);
    }

    #[test]
    #[should_panic(expected = "Must script at least one roll")]
    fn test_fixed_rolls_empty() {
        let _ = FixedRolls::new(Vec::new());
    }
}
