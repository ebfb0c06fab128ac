//! Winner resolution for both variants.

use serde::{Deserialize, Serialize};

use crate::core::{GameVariant, PlayerId, PlayerMap};
use crate::game::Player;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// The player who won.
    pub winner: PlayerId,

    /// The player whose arrival on the last tile ended the game.
    pub finisher: PlayerId,

    /// The winner's score (always 0 in the race variant).
    pub winning_score: u32,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Decide the winner once `finisher` has reached the last tile.
///
/// - Snakes & ladders: the finisher wins.
/// - Quiz: the highest score wins, whoever finished. Ties go to the player
///   earliest in turn order.
pub fn resolve_winner(
    variant: GameVariant,
    players: &PlayerMap<Player>,
    finisher: PlayerId,
) -> GameResult {
    let winner = match variant {
        GameVariant::SnakesAndLadders => finisher,
        GameVariant::Quiz => highest_score(players).unwrap_or(finisher),
    };
    let winning_score = players.get(winner).map_or(0, Player::score);

    GameResult {
        winner,
        finisher,
        winning_score,
    }
}

/// Player with the strictly highest score, earliest in turn order on ties.
fn highest_score(players: &PlayerMap<Player>) -> Option<PlayerId> {
    let mut best: Option<(PlayerId, u32)> = None;
    for (id, player) in players.iter() {
        match best {
            Some((_, score)) if player.score() <= score => {}
            _ => best = Some((id, player.score())),
        }
    }
    best.map(|(id, _)| id)
}
