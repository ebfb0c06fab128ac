//! One-stop construction of ready-to-play games.

use super::board_game::BoardGame;
use super::question::QuestionBank;
use super::quiz::QuizTurnController;
use crate::board::Board;
use crate::core::{BoardLayout, GameConfig, GameVariant, MessageSink, Result, RollSource};
use crate::dice::Dice;

/// Builder for `BoardGame` and `QuizTurnController`.
///
/// ```
/// use rust_ladders::core::{BoardLayout, GameVariant};
/// use rust_ladders::game::BoardGameBuilder;
///
/// let game = BoardGameBuilder::new(GameVariant::SnakesAndLadders)
///     .layout(BoardLayout::new().with_ladder(10, 45).with_snake(80, 1))
///     .player("Ada", "Car")
///     .player("Bob", "Hat")
///     .build(42)
///     .unwrap();
///
/// assert_eq!(game.board().len(), 90);
/// assert_eq!(game.players().player_count(), 2);
/// ```
pub struct BoardGameBuilder {
    config: GameConfig,
    layout: BoardLayout,
    players: Vec<(String, String)>,
    roll_source: Option<Box<dyn RollSource>>,
    sink: Option<Box<dyn MessageSink>>,
}

impl BoardGameBuilder {
    /// Start from the default configuration for `variant`.
    #[must_use]
    pub fn new(variant: GameVariant) -> Self {
        Self::from_config(GameConfig::new(variant))
    }

    /// Start from an existing configuration.
    #[must_use]
    pub fn from_config(config: GameConfig) -> Self {
        Self {
            config,
            layout: BoardLayout::new(),
            players: Vec::new(),
            roll_source: None,
            sink: None,
        }
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(mut self, count: u32) -> Self {
        self.config.tile_count = count;
        self
    }

    /// Number of dice rolled each turn.
    #[must_use]
    pub fn dice_count(mut self, count: usize) -> Self {
        self.config.dice_count = count;
        self
    }

    /// Faces on every die.
    #[must_use]
    pub fn dice_sides(mut self, sides: u32) -> Self {
        self.config.dice_sides = sides;
        self
    }

    /// Ladders and snakes to install.
    #[must_use]
    pub fn layout(mut self, layout: BoardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Seat a player. Players take turns in the order they are added.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>, piece: impl Into<String>) -> Self {
        self.players.push((name.into(), piece.into()));
        self
    }

    /// Roll with `source` instead of a seeded `GameRng`.
    #[must_use]
    pub fn roll_source(mut self, source: Box<dyn RollSource>) -> Self {
        self.roll_source = Some(source);
        self
    }

    /// Where player-facing messages go. Defaults to `NullSink`.
    #[must_use]
    pub fn message_sink(mut self, sink: impl MessageSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Build the game. `seed` drives the dice unless a roll source was set.
    pub fn build(self, seed: u64) -> Result<BoardGame> {
        self.config.validate()?;

        let mut board = Board::with_tiles(self.config.tile_count)?;
        self.layout.apply(&mut board)?;

        let dice = match self.roll_source {
            Some(source) => {
                Dice::with_source(self.config.dice_count, self.config.dice_sides, source)?
            }
            None => Dice::new(self.config.dice_count, self.config.dice_sides, seed)?,
        };

        let mut game = BoardGame::new(self.config.variant, board, dice);
        if let Some(sink) = self.sink {
            game.set_sink(sink);
        }
        for (name, piece) in self.players {
            game.add_player(name, piece)?;
        }
        Ok(game)
    }

    /// Build the game and wrap it for quiz play.
    pub fn build_quiz(self, seed: u64, questions: QuestionBank) -> Result<QuizTurnController> {
        QuizTurnController::new(self.build(seed)?, questions)
    }
}
