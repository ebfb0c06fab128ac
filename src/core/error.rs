//! Engine error type.
//!
//! Every failure in the engine is a programming or configuration error:
//! bad layout data, out-of-order calls from the turn driver, and so on.
//! Nothing is retried internally; the driver decides what to do.

use thiserror::Error;

use super::config::GameVariant;
use crate::board::TileId;

/// Errors raised by the board, dice and turn engine.
#[derive(Debug, Error)]
pub enum GameError {
    /// A die was given zero sides.
    #[error("number of sides must be greater than 0")]
    InvalidSides,

    /// Dice were constructed with zero dice.
    #[error("number of dice must be greater than 0")]
    InvalidDiceCount,

    /// Per-die values were requested before the first roll.
    #[error("dice have not been rolled")]
    DiceNotRolled,

    /// A tile with this id is already on the board.
    #[error("tile {0} already exists")]
    DuplicateTile(TileId),

    /// No tile with this id is on the board.
    #[error("tile {0} not found")]
    TileNotFound(TileId),

    /// A tile action pointed at a tile id below 1.
    #[error("destination tile id must be at least 1, got {0}")]
    InvalidDestination(u32),

    /// A tile was constructed with an id below 1.
    #[error("tile id must be at least 1, got {0}")]
    InvalidTileId(u32),

    /// The board has no tiles yet.
    #[error("board must be created before it can be played on")]
    BoardNotInitialized,

    /// Movement was requested while a question is blocking the turn.
    #[error("cannot advance while a roll or question is still pending")]
    ReentrantAdvance,

    /// Unknown game variant name.
    #[error("invalid game type: {0}")]
    InvalidGameType(String),

    /// A turn was requested before any player joined.
    #[error("no players have joined the game")]
    NoPlayers,

    /// Player ids are a single byte.
    #[error("at most 255 players are supported")]
    TooManyPlayers,

    /// Players can only join before the first move.
    #[error("players cannot join after the game has started")]
    GameAlreadyStarted,

    /// A turn entry point was used with the wrong rule set.
    #[error("{0} turns must be played through the quiz controller")]
    WrongVariant(GameVariant),

    /// The game already has a result.
    #[error("the game is over")]
    GameOver,

    /// An answer or skip arrived with no open question.
    #[error("no question is active")]
    NoActiveQuestion,

    /// `step()` was called with no roll being consumed.
    #[error("no roll is being consumed")]
    NoMoveInProgress,

    /// Malformed layout, question or game configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, GameError>;
