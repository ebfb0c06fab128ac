//! Players and atomic movement.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{ActionKind, Board, Tile, TileId};
use crate::core::{MessageSink, Result};

/// Where an atomic move started, landed and finally ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landing {
    /// Tile before the move.
    pub from: TileId,

    /// Tile reached by the dice steps alone.
    pub landed: TileId,

    /// Tile after the landing tile's action, if any.
    pub to: TileId,

    /// Action fired on the landing tile.
    pub action: Option<ActionKind>,
}

/// A seat at the table.
///
/// A player stores the id of its current tile, never the tile itself; the
/// tile is resolved through the board the player was created on. Every
/// relocation goes through `place`, which checks the tile exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    piece: String,
    tile: TileId,
    score: u32,
}

impl Player {
    /// Create a player standing on tile 1 of `board`.
    ///
    /// Fails with `TileNotFound` if the board has no tile 1.
    pub fn new(name: impl Into<String>, piece: impl Into<String>, board: &Board) -> Result<Self> {
        board.tile(TileId::START)?;
        Ok(Self {
            name: name.into(),
            piece: piece.into(),
            tile: TileId::START,
            score: 0,
        })
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Token used to draw this player. No gameplay effect.
    #[must_use]
    pub fn piece(&self) -> &str {
        &self.piece
    }

    /// Id of the tile the player stands on.
    #[must_use]
    pub fn tile(&self) -> TileId {
        self.tile
    }

    /// Resolve the current tile through `board`.
    pub fn current_tile<'b>(&self, board: &'b Board) -> Result<&'b Tile> {
        board.tile(self.tile)
    }

    /// Quiz score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Overwrite the quiz score.
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    /// Add one point and return the new score.
    pub fn increment_score(&mut self) -> u32 {
        self.score += 1;
        self.score
    }

    /// Put the player on tile `id`. Fails with `TileNotFound` if absent.
    pub fn place(&mut self, board: &Board, id: TileId) -> Result<()> {
        board.tile(id)?;
        self.tile = id;
        Ok(())
    }

    /// Walk `steps` tiles forward, stopping at the last tile.
    ///
    /// Fires no tile action. Returns the new tile.
    pub fn step(&mut self, board: &Board, steps: u32) -> Result<TileId> {
        let target = self.tile.forward(steps, board.max_tile_id()?);
        self.place(board, target)?;
        Ok(target)
    }

    /// Move atomically by a full roll.
    ///
    /// Walks `roll` tiles (clamped to the last tile), then fires the landing
    /// tile's action once. The action's destination does not fire its own
    /// action.
    pub fn move_by(
        &mut self,
        board: &Board,
        roll: u32,
        sink: &mut dyn MessageSink,
    ) -> Result<Landing> {
        let from = self.tile;
        let landed = self.step(board, roll)?;

        let (to, action) = match board.tile(landed)?.action() {
            Some(action) => (action.perform(self, board, sink)?, Some(action.kind())),
            None => (landed, None),
        };

        debug!(player = %self.name, roll, %from, %landed, %to, "player moved");
        Ok(Landing {
            from,
            landed,
            to,
            action,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TileAction;
    use crate::core::{GameError, MessageLog, NullSink};

    #[test]
    fn test_player_starts_on_tile_one() {
        let board = Board::with_tiles(90).unwrap();
        let player = Player::new("Ada", "Car", &board).unwrap();

        assert_eq!(player.name(), "Ada");
        assert_eq!(player.piece(), "Car");
        assert_eq!(player.tile(), TileId::START);
        assert_eq!(player.current_tile(&board).unwrap().id(), TileId(1));
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_player_needs_built_board() {
        let board = Board::new();
        assert!(matches!(
            Player::new("Ada", "Car", &board),
            Err(GameError::TileNotFound(TileId(1)))
        ));
    }

    #[test]
    fn test_move_plain() {
        let board = Board::with_tiles(90).unwrap();
        let mut player = Player::new("Ada", "Car", &board).unwrap();

        let landing = player.move_by(&board, 5, &mut NullSink).unwrap();

        assert_eq!(landing.from, TileId(1));
        assert_eq!(landing.landed, TileId(6));
        assert_eq!(landing.to, TileId(6));
        assert_eq!(landing.action, None);
        assert_eq!(player.tile(), TileId(6));
    }

    #[test]
    fn test_move_clamped_at_end() {
        let board = Board::with_tiles(90).unwrap();
        let mut player = Player::new("Ada", "Car", &board).unwrap();
        player.place(&board, TileId(88)).unwrap();

        player.move_by(&board, 12, &mut NullSink).unwrap();
        assert_eq!(player.tile(), TileId(90));
    }

    #[test]
    fn test_move_fires_ladder_once() {
        let mut board = Board::with_tiles(90).unwrap();
        board.set_action(TileId(10), TileAction::ladder(45, "climbs!").unwrap()).unwrap();
        let mut player = Player::new("Ada", "Car", &board).unwrap();
        let log = MessageLog::new();
        let mut sink = log.clone();

        let landing = player.move_by(&board, 9, &mut sink).unwrap();

        assert_eq!(landing.landed, TileId(10));
        assert_eq!(landing.to, TileId(45));
        assert_eq!(landing.action, Some(ActionKind::Ladder));
        assert_eq!(log.count("Ada climbs!"), 1);
    }

    #[test]
    fn test_actions_do_not_chain() {
        let mut board = Board::with_tiles(90).unwrap();
        board.set_action(TileId(5), TileAction::ladder(20, "up").unwrap()).unwrap();
        board.set_action(TileId(20), TileAction::ladder(60, "up again").unwrap()).unwrap();
        let mut player = Player::new("Ada", "Car", &board).unwrap();
        let log = MessageLog::new();
        let mut sink = log.clone();

        player.move_by(&board, 4, &mut sink).unwrap();

        assert_eq!(player.tile(), TileId(20));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_step_fires_no_action() {
        let mut board = Board::with_tiles(20).unwrap();
        board.set_action(TileId(3), TileAction::ladder(15, "up").unwrap()).unwrap();
        let mut player = Player::new("Ada", "Car", &board).unwrap();

        assert_eq!(player.step(&board, 2).unwrap(), TileId(3));
        assert_eq!(player.tile(), TileId(3));
    }

    #[test]
    fn test_place_rejects_missing_tile() {
        let board = Board::with_tiles(10).unwrap();
        let mut player = Player::new("Ada", "Car", &board).unwrap();

        assert!(matches!(
            player.place(&board, TileId(11)),
            Err(GameError::TileNotFound(TileId(11)))
        ));
        assert_eq!(player.tile(), TileId(1));
    }

    #[test]
    fn test_score() {
        let board = Board::with_tiles(10).unwrap();
        let mut player = Player::new("Ada", "Car", &board).unwrap();

        assert_eq!(player.increment_score(), 1);
        assert_eq!(player.increment_score(), 2);
        player.set_score(7);
        assert_eq!(player.score(), 7);
    }
}
