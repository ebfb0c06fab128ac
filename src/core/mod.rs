//! Core engine types: players, RNG, errors, configuration, messages, history.
//!
//! This module contains the building blocks shared by both game variants.
//! Drivers configure games via `GameConfig` and `BoardLayout` rather than
//! modifying the engine.

pub mod player;
pub mod rng;
pub mod error;
pub mod config;
pub mod message;
pub mod history;

pub use player::{PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::{FixedRolls, GameRng, RollSource};
pub use error::{GameError, Result};
pub use config::{BoardLayout, GameConfig, GameVariant, LinkConfig, DEFAULT_TILE_COUNT};
pub use message::{MessageLog, MessageSink, NullSink};
pub use history::MoveRecord;
