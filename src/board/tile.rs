//! Tiles: addressable positions on the linear board path.

use serde::{Deserialize, Serialize};

use super::action::TileAction;
use crate::core::{GameError, Result};

/// Tile identifier. Boards cover ids `1..=M`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// The tile every player starts on.
    pub const START: TileId = TileId(1);

    /// Create a tile id, rejecting 0.
    pub fn new(id: u32) -> Result<Self> {
        if id < 1 {
            return Err(GameError::InvalidTileId(id));
        }
        Ok(Self(id))
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id `steps` tiles further along, clamped to `1..=max`.
    ///
    /// ```
    /// use rust_ladders::board::TileId;
    ///
    /// assert_eq!(TileId(5).forward(3, TileId(90)), TileId(8));
    /// assert_eq!(TileId(88).forward(6, TileId(90)), TileId(90));
    /// ```
    #[must_use]
    pub fn forward(self, steps: u32, max: TileId) -> TileId {
        TileId(self.0.saturating_add(steps).clamp(1, max.0.max(1)))
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node on the board, optionally carrying one tile action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    action: Option<TileAction>,
}

impl Tile {
    /// Create a plain tile. Fails with `InvalidTileId` for id 0.
    pub fn new(id: u32) -> Result<Self> {
        Ok(Self {
            id: TileId::new(id)?,
            action: None,
        })
    }

    /// This tile's id.
    #[must_use]
    pub fn id(&self) -> TileId {
        self.id
    }

    /// The action fired when a move lands here, if any.
    #[must_use]
    pub fn action(&self) -> Option<&TileAction> {
        self.action.as_ref()
    }

    /// Install or replace this tile's action.
    pub fn set_action(&mut self, action: TileAction) {
        self.action = Some(action);
    }

    /// Install an action, builder style.
    #[must_use]
    pub fn with_action(mut self, action: TileAction) -> Self {
        self.action = Some(action);
        self
    }
}
