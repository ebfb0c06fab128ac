//! Dice: single dice and ordered sets of dice.
//!
//! - `Die`: One die with N faces, remembering its last face
//! - `Dice`: Fixed set of dice rolled together from one `RollSource`

mod die;
#[allow(clippy::module_inception)]
mod dice;

pub use die::Die;
pub use dice::{Dice, DiceValues};
