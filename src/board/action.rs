//! Tile actions.
//!
//! A tile action is a side effect fired when a move ends exactly on its
//! tile. The set of actions is closed: ladders (up or down) and
//! back-to-start penalties. Both relocate the player and announce it.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::board::Board;
use super::tile::TileId;
use crate::core::{GameError, MessageSink, Result};
use crate::game::Player;

/// Which kind of action fired, for history and display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Relocation to a fixed tile, up or down.
    Ladder,
    /// Penalty relocation, conventionally to tile 1.
    BackToStart,
}

/// Side effect attached to a tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileAction {
    /// Teleport to `destination`, clamped to the board's last tile.
    Ladder {
        destination: TileId,
        message: String,
    },

    /// Same mechanics as `Ladder`, but signals a penalty.
    BackToStart {
        destination: TileId,
        message: String,
    },
}

impl TileAction {
    /// Create a ladder. Fails with `InvalidDestination` for destination 0.
    pub fn ladder(destination: u32, message: impl Into<String>) -> Result<Self> {
        Ok(Self::Ladder {
            destination: Self::checked_destination(destination)?,
            message: message.into(),
        })
    }

    /// Create a back-to-start penalty. Fails with `InvalidDestination` for
    /// destination 0.
    pub fn back_to_start(destination: u32, message: impl Into<String>) -> Result<Self> {
        Ok(Self::BackToStart {
            destination: Self::checked_destination(destination)?,
            message: message.into(),
        })
    }

    fn checked_destination(destination: u32) -> Result<TileId> {
        if destination < 1 {
            return Err(GameError::InvalidDestination(destination));
        }
        Ok(TileId(destination))
    }

    /// Which kind of action this is.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            TileAction::Ladder { .. } => ActionKind::Ladder,
            TileAction::BackToStart { .. } => ActionKind::BackToStart,
        }
    }

    /// Configured destination, before clamping to the board.
    #[must_use]
    pub fn destination(&self) -> TileId {
        match self {
            TileAction::Ladder { destination, .. } | TileAction::BackToStart { destination, .. } => {
                *destination
            }
        }
    }

    /// Message announced when the action fires.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            TileAction::Ladder { message, .. } | TileAction::BackToStart { message, .. } => {
                message.as_str()
            }
        }
    }

    /// Relocate `player` and announce it on `sink`.
    ///
    /// The destination is clamped to the board's last tile. Returns the tile
    /// the player ends on. Does not fire the destination tile's own action.
    pub fn perform(
        &self,
        player: &mut Player,
        board: &Board,
        sink: &mut dyn MessageSink,
    ) -> Result<TileId> {
        let target = self.destination().min(board.max_tile_id()?);
        let from = player.tile();
        player.place(board, target)?;

        info!(player = player.name(), %from, to = %target, kind = ?self.kind(), "tile action fired");
        sink.send(&format!("{} {}", player.name(), self.message()));

        Ok(target)
    }
}
