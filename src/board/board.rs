//! The board: an id -> tile mapping covering ids `1..=M`.
//!
//! All lookups are strict. A missing tile is a configuration bug and is
//! reported as `TileNotFound`, never papered over with a default tile.

use rustc_hash::FxHashMap;

use super::action::TileAction;
use super::tile::{Tile, TileId};
use crate::core::{GameError, Result};

/// Owner of every tile in a game.
#[derive(Clone, Debug, Default)]
pub struct Board {
    tiles: FxHashMap<TileId, Tile>,
    max_id: Option<TileId>,
}

impl Board {
    /// Create an empty board. Tiles are added with `add_tile`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board with plain tiles `1..=count`.
    pub fn with_tiles(count: u32) -> Result<Self> {
        let mut board = Self::new();
        for id in 1..=count {
            board.add_tile(Tile::new(id)?)?;
        }
        Ok(board)
    }

    /// Add a tile. Fails with `DuplicateTile` if the id is taken.
    pub fn add_tile(&mut self, tile: Tile) -> Result<()> {
        let id = tile.id();
        if self.tiles.contains_key(&id) {
            return Err(GameError::DuplicateTile(id));
        }
        self.tiles.insert(id, tile);
        self.max_id = self.max_id.max(Some(id));
        Ok(())
    }

    /// Look up a tile. Fails with `TileNotFound` if absent.
    pub fn tile(&self, id: TileId) -> Result<&Tile> {
        self.tiles.get(&id).ok_or(GameError::TileNotFound(id))
    }

    /// Look up a tile mutably. Fails with `TileNotFound` if absent.
    pub fn tile_mut(&mut self, id: TileId) -> Result<&mut Tile> {
        self.tiles.get_mut(&id).ok_or(GameError::TileNotFound(id))
    }

    /// Install an action on an existing tile.
    pub fn set_action(&mut self, id: TileId, action: TileAction) -> Result<()> {
        self.tile_mut(id)?.set_action(action);
        Ok(())
    }

    /// Check if a tile is on the board.
    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.contains_key(&id)
    }

    /// Highest tile id: the finish line.
    ///
    /// Fails with `BoardNotInitialized` on an empty board.
    pub fn max_tile_id(&self) -> Result<TileId> {
        self.max_id.ok_or(GameError::BoardNotInitialized)
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if the board has no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Check the board covers `1..=M` with no gaps.
    ///
    /// Fails with `BoardNotInitialized` when empty, or `TileNotFound` for the
    /// first missing id.
    pub fn validate(&self) -> Result<()> {
        let max = self.max_tile_id()?;
        match (1..=max.0).map(TileId).find(|id| !self.contains(*id)) {
            Some(gap) => Err(GameError::TileNotFound(gap)),
            None => Ok(()),
        }
    }

    /// Iterate over tiles in id order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        let mut tiles: Vec<&Tile> = self.tiles.values().collect();
        tiles.sort_by_key(|tile| tile.id());
        tiles.into_iter()
    }
}
