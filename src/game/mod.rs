//! Playable games: players, turn orchestration and the quiz protocol.
//!
//! - `Player`: a seat on the board, tracked by tile id
//! - `BoardGame`: turn order, dice, win detection (race variant entry point)
//! - `QuizTurnController`: stepwise movement with question suspensions
//! - `BoardGameBuilder`: wires config, layout, dice and players together

pub mod player;
pub mod question;
pub mod board_game;
pub mod quiz;
pub mod builder;

pub use player::{Landing, Player};
pub use question::{Question, QuestionBank};
pub use board_game::{BoardGame, MoveReport, TurnOutcome};
pub use quiz::{AdvanceOutcome, QuizTurnController, StepOutcome, Suspension, TurnPhase};
pub use builder::BoardGameBuilder;
