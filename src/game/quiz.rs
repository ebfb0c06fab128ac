//! Quiz variant: stepwise movement that can pause on question tiles.
//!
//! A quiz roll is consumed one tile at a time. Landing on a question tile
//! suspends the roll until the question is answered or skipped; the
//! remaining steps are then consumed from the question tile onward.
//!
//! ## Turn phases
//!
//! ```text
//!            roll() / advance(n)
//!   Idle ─────────────────────────► AwaitingStepInput
//!    ▲                                 │        │
//!    │ roll used up / last tile        │        │ question tile
//!    └─────────────────────────────────┘        ▼
//!    ▲                                    AwaitingAnswer
//!    │ answer()/skip_question()                 │
//!    └──────── (via AwaitingStepInput) ◄────────┘
//! ```
//!
//! `advance` refuses to start while a roll is in progress, so at most one
//! question is ever open. Unit steps fire no tile actions; the tile where a
//! roll's movement ends fires its action once, just before the win check.
//! This makes a roll split around questions end where an uninterrupted
//! atomic move of the same length would.

use std::mem;

use tracing::{debug, info, instrument};

use super::board_game::{BoardGame, TurnOutcome};
use super::question::{Question, QuestionBank};
use crate::board::TileId;
use crate::core::{GameError, Result};

/// Where the current turn stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TurnPhase {
    /// No roll in progress.
    #[default]
    Idle,

    /// A roll is being consumed one tile at a time.
    AwaitingStepInput {
        /// Steps of the roll not yet taken.
        remaining: u32,
        /// Tile the current movement segment started on.
        from: TileId,
        /// Steps taken in the current segment.
        consumed: u32,
    },

    /// Movement is suspended on a question tile.
    AwaitingAnswer {
        /// The open question.
        question: Question,
        /// Steps of the roll left once the question is resolved.
        pending_steps: u32,
    },
}

/// A roll suspended on a question tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suspension {
    /// The question tile.
    pub tile: TileId,

    /// Steps left to take after the question.
    pub pending_steps: u32,
}

/// Result of a single unit step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved one tile; more steps remain.
    Moved {
        /// Tile now occupied.
        tile: TileId,
        /// Steps still to take.
        remaining: u32,
    },
    /// Landed on a question tile.
    Suspended(Suspension),
    /// The roll is used up and the turn is resolved.
    Finished(TurnOutcome),
}

/// Result of consuming a roll (or its remainder) without stopping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Stopped on a question tile.
    Suspended(Suspension),
    /// The roll is used up and the turn is resolved.
    Completed(TurnOutcome),
}

/// Drives quiz turns on top of a `BoardGame`.
#[derive(Debug)]
pub struct QuizTurnController {
    game: BoardGame,
    questions: QuestionBank,
    phase: TurnPhase,
}

impl QuizTurnController {
    /// Wrap `game` with a question bank.
    ///
    /// Fails with `TileNotFound` if a question sits on a tile the board lacks.
    pub fn new(game: BoardGame, questions: QuestionBank) -> Result<Self> {
        questions.validate_against(game.board())?;
        Ok(Self {
            game,
            questions,
            phase: TurnPhase::Idle,
        })
    }

    // === Accessors ===

    /// The underlying game.
    #[must_use]
    pub fn game(&self) -> &BoardGame {
        &self.game
    }

    /// Release the underlying game between rolls.
    ///
    /// Fails with `ReentrantAdvance` while a roll or question is in progress.
    pub fn into_game(self) -> Result<BoardGame> {
        self.ensure_idle()?;
        Ok(self.game)
    }

    /// Current turn phase.
    #[must_use]
    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    /// The question bank.
    #[must_use]
    pub fn questions(&self) -> &QuestionBank {
        &self.questions
    }

    /// The open question, if any.
    #[must_use]
    pub fn active_question(&self) -> Option<&Question> {
        match &self.phase {
            TurnPhase::AwaitingAnswer { question, .. } => Some(question),
            _ => None,
        }
    }

    /// Steps held back by the open question; 0 when none is open.
    #[must_use]
    pub fn pending_steps(&self) -> u32 {
        match self.phase {
            TurnPhase::AwaitingAnswer { pending_steps, .. } => pending_steps,
            _ => 0,
        }
    }

    /// Check if a question is blocking the turn.
    #[must_use]
    pub fn is_question_active(&self) -> bool {
        matches!(self.phase, TurnPhase::AwaitingAnswer { .. })
    }

    // === Turn entry points ===

    /// Roll the dice and consume the roll until it ends or hits a question.
    #[instrument(skip(self))]
    pub fn roll_and_advance(&mut self) -> Result<(u32, AdvanceOutcome)> {
        self.ensure_idle()?;
        let roll = self.game.roll_dice()?;
        let outcome = self.begin(roll)?;
        Ok((roll, outcome))
    }

    /// Consume `steps` for the current player until they run out or a
    /// question tile is reached.
    ///
    /// Fails with `ReentrantAdvance` while a roll is already in progress.
    #[instrument(skip(self))]
    pub fn advance(&mut self, steps: u32) -> Result<AdvanceOutcome> {
        self.ensure_idle()?;
        self.game.ensure_playable()?;
        self.game.mark_started();
        self.begin(steps)
    }

    /// Roll the dice and wait for `step` calls to consume the roll.
    #[instrument(skip(self))]
    pub fn roll(&mut self) -> Result<u32> {
        self.ensure_idle()?;
        let roll = self.game.roll_dice()?;
        self.phase = TurnPhase::AwaitingStepInput {
            remaining: roll,
            from: self.game.current()?.tile(),
            consumed: 0,
        };
        Ok(roll)
    }

    /// Take one step of the roll in progress.
    ///
    /// Fails with `NoMoveInProgress` when idle and `ReentrantAdvance` while
    /// a question is open.
    pub fn step(&mut self) -> Result<StepOutcome> {
        match self.phase {
            TurnPhase::Idle => Err(GameError::NoMoveInProgress),
            TurnPhase::AwaitingAnswer { .. } => Err(GameError::ReentrantAdvance),
            TurnPhase::AwaitingStepInput {
                remaining,
                from,
                consumed,
            } => self.step_once(remaining, from, consumed),
        }
    }

    /// Answer the open question and resume the roll.
    ///
    /// A correct answer (exact match) is worth one point.
    #[instrument(skip(self))]
    pub fn answer(&mut self, answer: &str) -> Result<AdvanceOutcome> {
        let (question, pending_steps) = self.take_question()?;
        let player = self.game.current_player()?;
        if question.is_correct(answer) {
            let score = self.game.award_point()?;
            info!(%player, tile = question.tile_id(), score, "question answered correctly");
        } else {
            info!(%player, tile = question.tile_id(), "question answered incorrectly");
        }
        self.begin(pending_steps)
    }

    /// Skip the open question and resume the roll. Never scores.
    #[instrument(skip(self))]
    pub fn skip_question(&mut self) -> Result<AdvanceOutcome> {
        let (question, pending_steps) = self.take_question()?;
        info!(tile = question.tile_id(), "question skipped");
        self.begin(pending_steps)
    }

    // === Internals ===

    fn ensure_idle(&self) -> Result<()> {
        match self.phase {
            TurnPhase::Idle => Ok(()),
            _ => Err(GameError::ReentrantAdvance),
        }
    }

    /// Consume `steps` from the current player's tile.
    fn begin(&mut self, steps: u32) -> Result<AdvanceOutcome> {
        let from = self.game.current()?.tile();
        self.run_steps(steps, from)
    }

    /// Step until the roll ends or a question opens.
    fn run_steps(&mut self, steps: u32, from: TileId) -> Result<AdvanceOutcome> {
        self.phase = TurnPhase::AwaitingStepInput {
            remaining: steps,
            from,
            consumed: 0,
        };
        loop {
            match self.step()? {
                StepOutcome::Moved { .. } => {}
                StepOutcome::Suspended(suspension) => {
                    return Ok(AdvanceOutcome::Suspended(suspension))
                }
                StepOutcome::Finished(outcome) => return Ok(AdvanceOutcome::Completed(outcome)),
            }
        }
    }

    /// Move one tile, then suspend on a question, finish the roll, or wait
    /// for the next step.
    fn step_once(&mut self, remaining: u32, from: TileId, consumed: u32) -> Result<StepOutcome> {
        let last = self.game.board().max_tile_id()?;
        if remaining == 0 || self.game.current()?.tile() == last {
            return self.finish_roll(from, consumed).map(StepOutcome::Finished);
        }

        let tile = self.game.step_current(1)?;
        let remaining = remaining - 1;
        let consumed = consumed + 1;
        debug!(%tile, remaining, "unit step");

        if let Some(question) = self.questions.get(tile) {
            self.game.record_segment(consumed, from, tile, None);
            self.phase = TurnPhase::AwaitingAnswer {
                question: question.clone(),
                pending_steps: remaining,
            };
            info!(%tile, pending_steps = remaining, "question opened");
            return Ok(StepOutcome::Suspended(Suspension {
                tile,
                pending_steps: remaining,
            }));
        }

        if remaining == 0 || tile == last {
            return self.finish_roll(from, consumed).map(StepOutcome::Finished);
        }

        self.phase = TurnPhase::AwaitingStepInput {
            remaining,
            from,
            consumed,
        };
        Ok(StepOutcome::Moved { tile, remaining })
    }

    /// Fire the final tile's action, record the segment, then check for a
    /// win or pass the turn.
    fn finish_roll(&mut self, from: TileId, consumed: u32) -> Result<TurnOutcome> {
        self.phase = TurnPhase::Idle;
        let (to, action) = self.game.land_current()?;
        self.game.record_segment(consumed, from, to, action);
        self.game.end_of_move()
    }

    fn take_question(&mut self) -> Result<(Question, u32)> {
        match mem::replace(&mut self.phase, TurnPhase::Idle) {
            TurnPhase::AwaitingAnswer {
                question,
                pending_steps,
            } => Ok((question, pending_steps)),
            other => {
                self.phase = other;
                Err(GameError::NoActiveQuestion)
            }
        }
    }
}
