//! Board model: tiles, tile actions, and the board that owns them.
//!
//! - `Tile`: One addressable position, optionally carrying an action
//! - `TileAction`: Ladder or back-to-start side effect
//! - `Board`: Strict id -> tile mapping covering `1..=M`
//!
//! Players never hold tiles. They store a `TileId` and resolve it through
//! the board, so ownership runs one way: the board owns every tile.

mod tile;
mod action;
#[allow(clippy::module_inception)]
mod board;

pub use tile::{Tile, TileId};
pub use action::{ActionKind, TileAction};
pub use board::Board;
