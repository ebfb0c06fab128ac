//! Game configuration types.
//!
//! Drivers configure a game at startup by providing:
//! - `GameVariant`: Which rule set to play (race or quiz)
//! - `GameConfig`: Board size and dice
//! - `BoardLayout`: Ladders and snakes to install on the board
//!
//! All types deserialize from JSON. Reading the JSON from disk is the
//! driver's job; the engine only consumes the parsed data.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{GameError, Result};
use crate::board::{Board, TileAction, TileId};

/// Board size of the shipped layouts.
pub const DEFAULT_TILE_COUNT: u32 = 90;

/// Message carried by ladders.
pub const LADDER_MESSAGE: &str = "climbs up the ladder!";

/// Message carried by snakes.
pub const SNAKE_MESSAGE: &str = "slides down the snake!";

/// Which rule set a game is played with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameVariant {
    /// First player to reach the last tile wins.
    #[default]
    #[serde(rename = "snakesandladders")]
    SnakesAndLadders,

    /// Question tiles interrupt movement; highest score wins when someone
    /// reaches the last tile.
    #[serde(rename = "quiz")]
    Quiz,
}

impl GameVariant {
    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            GameVariant::SnakesAndLadders => "Snakes & Ladders",
            GameVariant::Quiz => "Quiz",
        }
    }
}

impl std::fmt::Display for GameVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for GameVariant {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "snakesandladders" => Ok(GameVariant::SnakesAndLadders),
            "quiz" => Ok(GameVariant::Quiz),
            _ => Err(GameError::InvalidGameType(s.to_string())),
        }
    }
}

/// Board size and dice for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rule set.
    #[serde(default)]
    pub variant: GameVariant,

    /// Number of tiles; the board covers ids `1..=tile_count`.
    #[serde(default = "default_tile_count")]
    pub tile_count: u32,

    /// Number of dice rolled each turn.
    #[serde(default = "default_dice_count")]
    pub dice_count: usize,

    /// Faces per die.
    #[serde(default = "default_dice_sides")]
    pub dice_sides: u32,
}

fn default_tile_count() -> u32 {
    DEFAULT_TILE_COUNT
}

fn default_dice_count() -> usize {
    1
}

fn default_dice_sides() -> u32 {
    6
}

impl GameConfig {
    /// Default configuration for a variant: 90 tiles, one six-sided die.
    #[must_use]
    pub fn new(variant: GameVariant) -> Self {
        Self {
            variant,
            tile_count: DEFAULT_TILE_COUNT,
            dice_count: default_dice_count(),
            dice_sides: default_dice_sides(),
        }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_tile_count(mut self, tile_count: u32) -> Self {
        self.tile_count = tile_count;
        self
    }

    /// Set the number of dice.
    #[must_use]
    pub fn with_dice_count(mut self, dice_count: usize) -> Self {
        self.dice_count = dice_count;
        self
    }

    /// Set the faces per die.
    #[must_use]
    pub fn with_dice_sides(mut self, dice_sides: u32) -> Self {
        self.dice_sides = dice_sides;
        self
    }

    /// Check the configuration can build a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.tile_count == 0 {
            return Err(GameError::BoardNotInitialized);
        }
        if self.dice_count == 0 {
            return Err(GameError::InvalidDiceCount);
        }
        if self.dice_sides == 0 {
            return Err(GameError::InvalidSides);
        }
        Ok(())
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(GameVariant::default())
    }
}

/// A single ladder or snake: landing on `from` moves the player to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Tile that carries the action.
    pub from: u32,

    /// Destination tile.
    pub to: u32,
}

impl LinkConfig {
    /// Create a link.
    #[must_use]
    pub const fn new(from: u32, to: u32) -> Self {
        Self { from, to }
    }
}

/// Ladders and snakes for a board.
///
/// ```
/// use rust_ladders::core::BoardLayout;
///
/// let layout = BoardLayout::from_json(
///     r#"{ "ladders": [{ "from": 3, "to": 22 }], "snakes": [{ "from": 40, "to": 1 }] }"#,
/// ).unwrap();
/// assert_eq!(layout.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Links that carry the ladder message.
    #[serde(default)]
    pub ladders: Vec<LinkConfig>,

    /// Links that carry the snake message.
    #[serde(default)]
    pub snakes: Vec<LinkConfig>,
}

impl BoardLayout {
    /// Create an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ladder.
    #[must_use]
    pub fn with_ladder(mut self, from: u32, to: u32) -> Self {
        self.ladders.push(LinkConfig::new(from, to));
        self
    }

    /// Add a snake.
    #[must_use]
    pub fn with_snake(mut self, from: u32, to: u32) -> Self {
        self.snakes.push(LinkConfig::new(from, to));
        self
    }

    /// Parse a layout from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Total number of links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ladders.len() + self.snakes.len()
    }

    /// Check if the layout has no links.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ladders.is_empty() && self.snakes.is_empty()
    }

    /// Convert every link into a tile action keyed by its source tile.
    ///
    /// A destination of tile 1 becomes `BackToStart`; anything else is a
    /// `Ladder`, whichever direction it points.
    pub fn tile_actions(&self) -> Result<Vec<(TileId, TileAction)>> {
        let ladders = self.ladders.iter().map(|link| (link, LADDER_MESSAGE));
        let snakes = self.snakes.iter().map(|link| (link, SNAKE_MESSAGE));

        ladders
            .chain(snakes)
            .map(|(link, message)| {
                let source = TileId::new(link.from)?;
                let action = if link.to == TileId::START.0 {
                    TileAction::back_to_start(link.to, message)?
                } else {
                    TileAction::ladder(link.to, message)?
                };
                Ok((source, action))
            })
            .collect()
    }

    /// Install every link on `board`.
    ///
    /// Fails with `TileNotFound` if a source tile is not on the board.
    /// Later links on the same source tile replace earlier ones.
    pub fn apply(&self, board: &mut Board) -> Result<()> {
        for (source, action) in self.tile_actions()? {
            board.set_action(source, action)?;
        }
        Ok(())
    }
}
