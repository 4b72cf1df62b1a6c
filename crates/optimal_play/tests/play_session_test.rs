//! Keyboard sessions against the engine, driven from scripted input.

use optimal_play::{EngineContestant, HumanContestant, analyze, play_match};
use optimal_tictactoe::{Board, Outcome};
use std::io::Cursor;

/// Tries every keypad square in order, so a free square is always ahead.
const EVERY_SQUARE: &str = "1\n2\n3\n4\n5\n6\n7\n8\n9\n";

#[test]
fn test_human_as_x_cannot_beat_engine() {
    let mut human = HumanContestant::new("ada", Cursor::new(EVERY_SQUARE), Vec::new());
    let mut engine = EngineContestant::new("minimax");
    let mut board_out = Vec::<u8>::new();

    let report = play_match(&mut human, &mut engine, &mut board_out).unwrap();
    assert!(report.outcome.is_over());
    assert_ne!(report.outcome, Outcome::XWins);

    let text = String::from_utf8(board_out).unwrap();
    assert!(text.contains("ada (X) plays (0, 0)"));
    assert!(text.contains("minimax (O) plays"));
}

#[test]
fn test_human_as_o_sees_rejections_and_hints() {
    let input = format!("foo\n{}", EVERY_SQUARE);
    let mut engine = EngineContestant::new("minimax");
    let mut human =
        HumanContestant::new("ada", Cursor::new(input), Vec::new()).with_hints(true);
    let mut board_out = Vec::<u8>::new();

    let report = play_match(&mut engine, &mut human, &mut board_out).unwrap();
    assert_ne!(report.outcome, Outcome::OWins);

    let (_, prompts) = human.into_parts();
    let prompts = String::from_utf8(prompts).unwrap();
    assert!(prompts.contains("Cannot read move from \"foo\""));
    assert!(prompts.contains("Hint: best squares are"));
    // The engine opens first, so the human's first keypad try is taken.
    assert!(prompts.contains("Not allowed: square (0, 0) is already occupied"));
}

#[test]
fn test_closed_input_ends_session_with_error() {
    let mut human = HumanContestant::new("ada", Cursor::new("5\n"), Vec::new());
    let mut engine = EngineContestant::new("minimax");

    let err = play_match(&mut human, &mut engine, &mut Vec::<u8>::new()).unwrap_err();
    assert!(err.to_string().contains("Input closed"));
}

#[test]
fn test_analyze_empty_board() {
    let board = Board::default();
    let mut out = Vec::<u8>::new();
    analyze(&board, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("To move: X"));
    assert!(text.contains("Value: 0 (best play draws)"));
    assert_eq!(text.matches("Optimal moves:").count(), 1);
}
