//! Quiz variant end-to-end tests.
//!
//! Questions are loaded from JSON the way a driver would load them, and
//! turns are driven through `QuizTurnController`.

use rust_ladders::board::TileId;
use rust_ladders::core::{BoardLayout, FixedRolls, GameError, GameVariant, MessageLog, PlayerId};
use rust_ladders::game::{
    AdvanceOutcome, BoardGameBuilder, QuestionBank, QuizTurnController, Suspension, TurnOutcome,
    TurnPhase,
};

const QUESTIONS: &str = r#"[
    { "tileId": 5,  "question": "Largest planet?", "options": ["Mars", "Jupiter"], "answer": "Jupiter" },
    { "tileId": 12, "question": "H2O is?", "options": ["Water", "Salt"], "answer": "Water" },
    { "tileId": 20, "question": "Binary of 2?", "options": ["10", "11"], "answer": "10" }
]"#;

fn quiz(rolls: Vec<u32>, layout: BoardLayout, log: &MessageLog) -> QuizTurnController {
    BoardGameBuilder::new(GameVariant::Quiz)
        .tile_count(30)
        .dice_sides(12)
        .layout(layout)
        .roll_source(Box::new(FixedRolls::new(rolls)))
        .message_sink(log.clone())
        .player("P1", "Car")
        .player("P2", "Hat")
        .build_quiz(0, QuestionBank::from_json(QUESTIONS).unwrap())
        .unwrap()
}

fn tile(quiz: &QuizTurnController, player: u8) -> TileId {
    quiz.game().player(PlayerId::new(player)).unwrap().tile()
}

fn score(quiz: &QuizTurnController, player: u8) -> u32 {
    quiz.game().player(PlayerId::new(player)).unwrap().score()
}

#[test]
fn test_question_scenario() {
    let log = MessageLog::new();
    let mut quiz = quiz(vec![7], BoardLayout::new(), &log);

    let (roll, outcome) = quiz.roll_and_advance().unwrap();

    assert_eq!(roll, 7);
    assert_eq!(
        outcome,
        AdvanceOutcome::Suspended(Suspension {
            tile: TileId(5),
            pending_steps: 3
        })
    );
    assert!(quiz.is_question_active());
    assert_eq!(quiz.active_question().unwrap().text(), "Largest planet?");

    quiz.answer("Mars").unwrap();

    assert_eq!(tile(&quiz, 0), TileId(8));
    assert_eq!(score(&quiz, 0), 0);
    assert_eq!(quiz.game().current_player().unwrap(), PlayerId::new(1));
    assert_eq!(quiz.phase(), &TurnPhase::Idle);
}

#[test]
fn test_resumption_matches_uninterrupted_move() {
    let log = MessageLog::new();
    let mut interrupted = quiz(vec![6], BoardLayout::new(), &log);
    let mut plain = BoardGameBuilder::new(GameVariant::SnakesAndLadders)
        .tile_count(30)
        .player("P1", "Car")
        .build(0)
        .unwrap();

    let outcome = interrupted.advance(6).unwrap();
    assert!(matches!(outcome, AdvanceOutcome::Suspended(s) if s.pending_steps == 2));
    interrupted.skip_question().unwrap();

    plain.move_current(6).unwrap();

    assert_eq!(tile(&interrupted, 0), plain.player(PlayerId::new(0)).unwrap().tile());
}

#[test]
fn test_resumption_fires_final_action() {
    let log = MessageLog::new();
    let layout = BoardLayout::new().with_ladder(7, 18).with_ladder(5, 25);
    let mut quiz = quiz(vec![6], layout, &log);

    quiz.advance(6).unwrap();
    assert_eq!(tile(&quiz, 0), TileId(5));
    quiz.answer("Jupiter").unwrap();

    // The question tile's own ladder is skipped; the final tile's fires.
    assert_eq!(tile(&quiz, 0), TileId(18));
    assert_eq!(score(&quiz, 0), 1);
    assert_eq!(log.messages(), vec!["P1 climbs up the ladder!".to_string()]);
}

#[test]
fn test_score_changes() {
    let log = MessageLog::new();
    let mut quiz = quiz(vec![4], BoardLayout::new(), &log);

    quiz.advance(4).unwrap(); // P1 lands on 5
    quiz.answer("Jupiter").unwrap();
    assert_eq!(score(&quiz, 0), 1);

    quiz.advance(4).unwrap(); // P2 lands on 5
    quiz.skip_question().unwrap();
    assert_eq!(score(&quiz, 1), 0);

    quiz.advance(7).unwrap(); // P1 5 -> 12
    quiz.answer("Salt").unwrap();
    assert_eq!(score(&quiz, 0), 1);
}

#[test]
fn test_reentrant_advance_rejected() {
    let log = MessageLog::new();
    let mut quiz = quiz(vec![7], BoardLayout::new(), &log);

    quiz.advance(7).unwrap();
    let before = tile(&quiz, 0);

    assert!(matches!(quiz.advance(3), Err(GameError::ReentrantAdvance)));
    assert!(matches!(quiz.roll(), Err(GameError::ReentrantAdvance)));
    assert_eq!(tile(&quiz, 0), before);
    assert_eq!(quiz.pending_steps(), 3);
    assert!(quiz.is_question_active());
}

#[test]
fn test_highest_score_wins_not_first_arrival() {
    let log = MessageLog::new();
    let mut quiz = quiz(vec![4], BoardLayout::new(), &log);

    // P1 skips, P2 answers; both on 5.
    quiz.advance(4).unwrap();
    quiz.skip_question().unwrap();
    quiz.advance(4).unwrap();
    quiz.answer("Jupiter").unwrap();

    // P1 crosses 12 and 20, skipping both, and reaches the end.
    quiz.advance(25).unwrap();
    quiz.skip_question().unwrap();
    let outcome = quiz.skip_question().unwrap();

    let result = match outcome {
        AdvanceOutcome::Completed(TurnOutcome::GameOver(result)) => result,
        other => panic!("expected game over, got {other:?}"),
    };
    assert_eq!(tile(&quiz, 0), TileId(30));
    assert_eq!(result.finisher, PlayerId::new(0));
    assert_eq!(result.winner, PlayerId::new(1));
    assert_eq!(log.count("P2 wins with 1 point!"), 1);
    assert_eq!(quiz.game().winner().unwrap(), Some(PlayerId::new(0)));
}

#[test]
fn test_history_splits_at_questions() {
    let log = MessageLog::new();
    let mut quiz = quiz(vec![10], BoardLayout::new(), &log);

    quiz.roll_and_advance().unwrap();
    quiz.answer("Jupiter").unwrap();

    let history = quiz.game().history();
    assert_eq!(history.len(), 2);
    assert_eq!((history[0].from, history[0].to, history[0].steps), (TileId(1), TileId(5), 4));
    assert_eq!((history[1].from, history[1].to, history[1].steps), (TileId(5), TileId(11), 6));
    assert!(history.iter().all(|record| record.turn == 1));
}

#[test]
fn test_stepwise_suspends_then_auto_resumes() {
    let log = MessageLog::new();
    let mut quiz = quiz(vec![6], BoardLayout::new(), &log);

    quiz.roll().unwrap();
    for _ in 0..3 {
        quiz.step().unwrap();
    }
    assert!(matches!(quiz.step().unwrap(), rust_ladders::StepOutcome::Suspended(_)));
    assert_eq!(quiz.pending_steps(), 2);

    let outcome = quiz.skip_question().unwrap();
    assert_eq!(
        outcome,
        AdvanceOutcome::Completed(TurnOutcome::Continue {
            next: PlayerId::new(1)
        })
    );
    assert_eq!(tile(&quiz, 0), TileId(7));
}

#[test]
fn test_into_game() {
    let log = MessageLog::new();
    let quiz = quiz(vec![3], BoardLayout::new(), &log);
    let game = quiz.into_game().unwrap();
    assert_eq!(game.variant(), GameVariant::Quiz);
}

#[test]
fn test_open_question_cannot_be_bypassed() {
    let log = MessageLog::new();
    let mut quiz = quiz(vec![7], BoardLayout::new(), &log);
    quiz.advance(7).unwrap();

    assert!(matches!(quiz.into_game(), Err(GameError::ReentrantAdvance)));
}

#[test]
fn test_quiz_game_skips_nothing_through_atomic_moves() {
    let mut game = BoardGameBuilder::new(GameVariant::Quiz)
        .tile_count(30)
        .player("P1", "Car")
        .build(0)
        .unwrap();

    assert!(matches!(
        game.move_current(7),
        Err(GameError::WrongVariant(GameVariant::Quiz))
    ));
    assert_eq!(game.player(PlayerId::new(0)).unwrap().tile(), TileId(1));
}
