//! Board game orchestration: players, dice, turn rotation and win detection.
//!
//! `BoardGame` drives the race variant directly: each turn rolls and moves
//! the current player atomically. The quiz variant wraps a `BoardGame` in a
//! `QuizTurnController`, which reuses the same turn rotation and win check.

use im::Vector;
use tracing::{info, instrument};

use super::player::{Landing, Player};
use crate::board::{ActionKind, Board, TileId};
use crate::core::{
    GameError, GameVariant, MessageSink, MoveRecord, NullSink, PlayerId, PlayerMap, Result,
};
use crate::dice::Dice;
use crate::rules::{resolve_winner, GameResult};

/// What happens after a move has been fully resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The turn passed to `next`.
    Continue {
        /// Player whose turn it is now.
        next: PlayerId,
    },
    /// Someone reached the last tile; the game is over.
    GameOver(GameResult),
}

/// Report of one atomic turn in the race variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// Player who moved.
    pub player: PlayerId,

    /// Steps moved.
    pub steps: u32,

    /// Where the move started, landed and ended.
    pub landing: Landing,

    /// Turn rotation or game end.
    pub outcome: TurnOutcome,
}

/// A game in progress.
///
/// Owns the board, the dice, the players (in turn order) and the pointer to
/// the current player. Turn order is fixed when the first move is made.
pub struct BoardGame {
    variant: GameVariant,
    board: Board,
    dice: Dice,
    players: PlayerMap<Player>,
    current: PlayerId,
    turn_number: u32,
    started: bool,
    result: Option<GameResult>,
    history: Vector<MoveRecord>,
    sink: Box<dyn MessageSink>,
}

impl BoardGame {
    /// Create a game with no players and a silent message sink.
    #[must_use]
    pub fn new(variant: GameVariant, board: Board, dice: Dice) -> Self {
        Self {
            variant,
            board,
            dice,
            players: PlayerMap::empty(),
            current: PlayerId::new(0),
            turn_number: 1,
            started: false,
            result: None,
            history: Vector::new(),
            sink: Box::new(NullSink),
        }
    }

    /// Send player-facing messages to `sink`.
    #[must_use]
    pub fn with_sink(mut self, sink: impl MessageSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replace the message sink.
    pub fn set_sink(&mut self, sink: Box<dyn MessageSink>) {
        self.sink = sink;
    }

    // === Setup ===

    /// Seat a new player on tile 1. Insertion order is turn order.
    ///
    /// Fails with `GameAlreadyStarted` after the first move, `TileNotFound`
    /// on an unbuilt board, or `TooManyPlayers` past 255 players.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        piece: impl Into<String>,
    ) -> Result<PlayerId> {
        if self.started {
            return Err(GameError::GameAlreadyStarted);
        }
        let player = Player::new(name, piece, &self.board)?;
        let name = player.name().to_string();
        let id = self.players.push(player).ok_or(GameError::TooManyPlayers)?;
        info!(%id, name = %name, "player joined");
        Ok(id)
    }

    // === Accessors ===

    /// Rule set in play.
    #[must_use]
    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The dice.
    #[must_use]
    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    /// The dice, for reconfiguration such as `set_sides`.
    pub fn dice_mut(&mut self) -> &mut Dice {
        &mut self.dice
    }

    /// All players in turn order.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// One player, if seated.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Id of the player whose turn it is. Fails with `NoPlayers`.
    pub fn current_player(&self) -> Result<PlayerId> {
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        Ok(self.current)
    }

    /// The player whose turn it is. Fails with `NoPlayers`.
    pub fn current(&self) -> Result<&Player> {
        self.players.get(self.current).ok_or(GameError::NoPlayers)
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every recorded movement segment, oldest first. Cloning is O(1).
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// First player, in turn order, standing on the last tile.
    ///
    /// Fails with `BoardNotInitialized` if the board has no tiles. Returns
    /// `None` while nobody has finished.
    pub fn winner(&self) -> Result<Option<PlayerId>> {
        let last = self.board.max_tile_id()?;
        Ok(self
            .players
            .iter()
            .find(|(_, player)| player.tile() == last)
            .map(|(id, _)| id))
    }

    // === Turns ===

    /// Roll the dice for the current player.
    #[instrument(skip(self))]
    pub fn roll_dice(&mut self) -> Result<u32> {
        self.ensure_playable()?;
        self.started = true;
        Ok(self.dice.roll())
    }

    /// Roll and move the current player atomically by the full roll.
    ///
    /// Fails with `WrongVariant` on a quiz game.
    #[instrument(skip(self))]
    pub fn roll_and_move(&mut self) -> Result<MoveReport> {
        self.ensure_atomic_turns()?;
        let roll = self.roll_dice()?;
        self.move_current(roll)
    }

    /// Move the current player atomically by `steps`, fire the landing
    /// tile's action, then check for a win or pass the turn.
    ///
    /// Lets a driver supply its own roll. Quiz games move only through a
    /// `QuizTurnController`, so this fails with `WrongVariant` for them.
    #[instrument(skip(self))]
    pub fn move_current(&mut self, steps: u32) -> Result<MoveReport> {
        self.ensure_atomic_turns()?;
        self.ensure_playable()?;
        self.started = true;

        let player = self.current;
        let landing = self.players[player].move_by(&self.board, steps, self.sink.as_mut())?;
        self.record(
            MoveRecord::new(player, self.turn_number, steps, landing.from, landing.to)
                .with_action(landing.action),
        );

        let outcome = self.end_of_move()?;
        Ok(MoveReport {
            player,
            steps,
            landing,
            outcome,
        })
    }

    /// Pass the turn to the next player in turn order, wrapping around.
    pub fn advance_turn(&mut self) -> Result<PlayerId> {
        let count = self.players.player_count();
        if count == 0 {
            return Err(GameError::NoPlayers);
        }
        self.current = self.current.next(count);
        self.turn_number += 1;
        info!(next = %self.current, turn = self.turn_number, "turn passed");
        Ok(self.current)
    }

    /// Win check for the current player, then turn rotation.
    pub(crate) fn end_of_move(&mut self) -> Result<TurnOutcome> {
        let last = self.board.max_tile_id()?;
        let finisher = self.current;
        if self.current()?.tile() != last {
            let next = self.advance_turn()?;
            return Ok(TurnOutcome::Continue { next });
        }

        let result = resolve_winner(self.variant, &self.players, finisher);
        let winner = &self.players[result.winner];
        let announcement = match self.variant {
            GameVariant::SnakesAndLadders => format!("{} wins!", winner.name()),
            GameVariant::Quiz => {
                let unit = if winner.score() == 1 { "point" } else { "points" };
                format!("{} wins with {} {}!", winner.name(), winner.score(), unit)
            }
        };
        info!(winner = %result.winner, finisher = %finisher, score = result.winning_score, "game over");
        self.sink.send(&announcement);
        self.result = Some(result);
        Ok(TurnOutcome::GameOver(result))
    }

    fn ensure_atomic_turns(&self) -> Result<()> {
        match self.variant {
            GameVariant::SnakesAndLadders => Ok(()),
            GameVariant::Quiz => Err(GameError::WrongVariant(self.variant)),
        }
    }

    // === Quiz support ===

    /// Fail unless a turn can be played right now.
    pub(crate) fn ensure_playable(&self) -> Result<()> {
        self.board.max_tile_id()?;
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        Ok(())
    }

    /// Lock the seating; called when a quiz roll begins.
    pub(crate) fn mark_started(&mut self) {
        self.started = true;
    }

    /// Walk the current player `steps` tiles without firing any action.
    pub(crate) fn step_current(&mut self, steps: u32) -> Result<TileId> {
        let current = self.current;
        self.players[current].step(&self.board, steps)
    }

    /// Fire the current tile's action for the current player.
    ///
    /// Returns the tile the player ends on and the action that fired.
    pub(crate) fn land_current(&mut self) -> Result<(TileId, Option<ActionKind>)> {
        let current = self.current;
        let board = &self.board;
        let player = &mut self.players[current];
        match board.tile(player.tile())?.action() {
            Some(action) => {
                let to = action.perform(player, board, self.sink.as_mut())?;
                Ok((to, Some(action.kind())))
            }
            None => Ok((player.tile(), None)),
        }
    }

    /// Give the current player one point and return the new score.
    pub(crate) fn award_point(&mut self) -> Result<u32> {
        let current = self.current_player()?;
        Ok(self.players[current].increment_score())
    }

    /// Record a movement segment for the current player.
    ///
    /// Empty segments (no steps, no action) are not recorded.
    pub(crate) fn record_segment(
        &mut self,
        steps: u32,
        from: TileId,
        to: TileId,
        action: Option<ActionKind>,
    ) {
        if steps == 0 && action.is_none() {
            return;
        }
        self.record(MoveRecord::new(self.current, self.turn_number, steps, from, to).with_action(action));
    }

    fn record(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }
}

impl std::fmt::Debug for BoardGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardGame")
            .field("variant", &self.variant)
            .field("tiles", &self.board.len())
            .field("dice", &self.dice)
            .field("players", &self.players)
            .field("current", &self.current)
            .field("turn_number", &self.turn_number)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}
