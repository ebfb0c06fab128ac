//! Quiz questions keyed by tile.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::{Board, TileId};
use crate::core::Result;

/// A multiple-choice question attached to a tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    tile_id: u32,
    question: String,
    options: Vec<String>,
    answer: String,
}

impl Question {
    /// Create a question for tile `tile_id`.
    pub fn new(
        tile_id: u32,
        question: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            tile_id,
            question: question.into(),
            options,
            answer: answer.into(),
        }
    }

    /// Raw tile id from the question source.
    #[must_use]
    pub fn tile_id(&self) -> u32 {
        self.tile_id
    }

    /// Question text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.question
    }

    /// Answer options, in display order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The correct answer.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Exact-match check against the correct answer.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.answer == answer
    }
}

/// Questions indexed by tile. Its keys are the question tiles.
#[derive(Clone, Debug, Default)]
pub struct QuestionBank {
    questions: FxHashMap<TileId, Question>,
}

impl QuestionBank {
    /// Create an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bank from questions. Later questions replace earlier ones on
    /// the same tile.
    pub fn from_questions(questions: impl IntoIterator<Item = Question>) -> Result<Self> {
        let mut bank = Self::new();
        for question in questions {
            bank.insert(question)?;
        }
        Ok(bank)
    }

    /// Parse a JSON list of `{tileId, question, options, answer}` objects.
    ///
    /// ```
    /// use rust_ladders::game::QuestionBank;
    /// use rust_ladders::board::TileId;
    ///
    /// let bank = QuestionBank::from_json(r#"[
    ///     { "tileId": 5, "question": "2 + 2?", "options": ["3", "4"], "answer": "4" }
    /// ]"#).unwrap();
    /// assert!(bank.contains(TileId(5)));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::from_questions(questions)
    }

    /// Add a question, returning any question it replaced.
    ///
    /// Fails with `InvalidTileId` for tile 0.
    pub fn insert(&mut self, question: Question) -> Result<Option<Question>> {
        let tile = TileId::new(question.tile_id)?;
        Ok(self.questions.insert(tile, question))
    }

    /// Question on `tile`, if it is a question tile.
    #[must_use]
    pub fn get(&self, tile: TileId) -> Option<&Question> {
        self.questions.get(&tile)
    }

    /// Check if `tile` is a question tile.
    #[must_use]
    pub fn contains(&self, tile: TileId) -> bool {
        self.questions.contains_key(&tile)
    }

    /// Question tiles in ascending order.
    #[must_use]
    pub fn tile_ids(&self) -> Vec<TileId> {
        let mut ids: Vec<TileId> = self.questions.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Number of questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the bank has no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Check every question tile exists on `board`.
    pub fn validate_against(&self, board: &Board) -> Result<()> {
        for tile in self.tile_ids() {
            board.tile(tile)?;
        }
        Ok(())
    }
}
