//! Move history records.
//!
//! Every completed movement segment is recorded so drivers can replay or
//! display what happened. A segment is one atomic move in the race variant,
//! or the stretch of a quiz roll between two stops (question or roll end).

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::{ActionKind, TileId};

/// One recorded movement segment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// Turn number when the move happened (starts at 1).
    pub turn: u32,

    /// Dice steps consumed by this segment.
    pub steps: u32,

    /// Tile the segment started on.
    pub from: TileId,

    /// Tile the player ended on, after any tile action.
    pub to: TileId,

    /// Tile action that fired at the end of the segment, if any.
    pub action: Option<ActionKind>,
}

impl MoveRecord {
    /// Create a record for a segment with no tile action.
    #[must_use]
    pub fn new(player: PlayerId, turn: u32, steps: u32, from: TileId, to: TileId) -> Self {
        Self {
            player,
            turn,
            steps,
            from,
            to,
            action: None,
        }
    }

    /// Attach the tile action that fired.
    #[must_use]
    pub fn with_action(mut self, action: Option<ActionKind>) -> Self {
        self.action = action;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_with_action() {
        let record = MoveRecord::new(PlayerId::new(1), 3, 4, TileId(6), TileId(40))
            .with_action(Some(ActionKind::Ladder));

        assert_eq!(record.player, PlayerId::new(1));
        assert_eq!(record.steps, 4);
        assert_eq!(record.action, Some(ActionKind::Ladder));
    }

    #[test]
    fn test_record_serde() {
        let record = MoveRecord::new(PlayerId::new(0), 1, 6, TileId(1), TileId(7));

        let json = serde_json::to_string(&record).unwrap();
        let back: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, back);
    }
}
