//! # rust-ladders
//!
//! A turn-based board game engine for snakes & ladders and its quiz variant.
//!
//! ## Design Principles
//!
//! 1. **Strict Lookups**: Every tile lookup either finds the tile or fails
//!    with `TileNotFound`. There is no default tile.
//!
//! 2. **One-Way Ownership**: The board owns its tiles. Players store a
//!    `TileId` and resolve it through the board.
//!
//! 3. **Explicit Suspension**: The quiz variant pauses a roll on question
//!    tiles. The pause is a `TurnPhase` value, not a scattered flag, and a
//!    new roll is refused while it is open.
//!
//! 4. **No UI Assumptions**: Player-facing messages go through a
//!    `MessageSink`; `NullSink` is always valid.
//!
//! ## Modules
//!
//! - `core`: Player ids, RNG, errors, configuration, messages, history
//! - `board`: Tiles, tile actions, the board
//! - `dice`: Die and dice sets
//! - `rules`: Winner resolution per variant
//! - `game`: Players, turn orchestration, quiz protocol, builder
//!
//! ## Example
//!
//! ```
//! use rust_ladders::{BoardGameBuilder, BoardLayout, FixedRolls, GameVariant, TileId};
//!
//! let mut game = BoardGameBuilder::new(GameVariant::SnakesAndLadders)
//!     .layout(BoardLayout::new().with_ladder(10, 45))
//!     .dice_sides(10)
//!     .roll_source(Box::new(FixedRolls::new(vec![9])))
//!     .player("Ada", "Car")
//!     .player("Bob", "Hat")
//!     .build(0)
//!     .unwrap();
//!
//! let report = game.roll_and_move().unwrap();
//! assert_eq!(report.landing.to, TileId(45));
//! ```

pub mod core;
pub mod board;
pub mod dice;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    BoardLayout, FixedRolls, GameConfig, GameError, GameRng, GameVariant, MessageLog,
    MessageSink, MoveRecord, NullSink, PlayerId, PlayerMap, Result, RollSource,
};

pub use crate::board::{ActionKind, Board, Tile, TileAction, TileId};

pub use crate::dice::{Dice, Die};

pub use crate::rules::{resolve_winner, GameResult};

pub use crate::game::{
    AdvanceOutcome, BoardGame, BoardGameBuilder, Landing, MoveReport, Player, Question,
    QuestionBank, QuizTurnController, StepOutcome, Suspension, TurnOutcome, TurnPhase,
};
