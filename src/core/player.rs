//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players. The id doubles as
//! the player's position in turn order.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access. Entries are
//! appended in join order and never removed, so iteration order is turn order.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Most players a single game can seat.
pub const MAX_PLAYERS: usize = 255;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player to join is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player after this one in a game of `player_count`, wrapping around.
    ///
    /// ```
    /// use rust_ladders::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        Self(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Seats in join order, indexed by `PlayerId`.
///
/// ```
/// use rust_ladders::core::{PlayerId, PlayerMap};
///
/// let mut scores = PlayerMap::empty();
/// scores.push(0u32);
/// let second = scores.push(0).unwrap();
/// scores[second] = 3;
/// assert_eq!(scores[PlayerId::new(1)], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create an empty map that players join one by one.
    #[must_use]
    pub fn empty() -> Self {
        Self { data: Vec::new() }
    }

    /// Append an entry for the next player to join.
    ///
    /// Returns `None` when the map is full.
    pub fn push(&mut self, value: T) -> Option<PlayerId> {
        if self.data.len() >= MAX_PLAYERS {
            return None;
        }
        let id = PlayerId(self.data.len() as u8);
        self.data.push(value);
        Some(id)
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check if no player has joined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a player's data, if the player exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
