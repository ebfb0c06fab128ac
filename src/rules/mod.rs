//! Win rules.
//!
//! Both variants end when a player reaches the last tile. They differ in
//! who wins: the race variant crowns the finisher, the quiz variant crowns
//! the highest score.

pub mod winner;

pub use winner::{resolve_winner, GameResult};
