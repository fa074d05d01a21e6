use reversi_engine::notation::{format_transcript, parse_transcript};
use reversi_engine::{Color, Game, Outcome, Status, Verdict};

/// Shortest possible game (Maruo, 1975): black wipes out white in nine moves.
const SHORTEST_GAME: &str = "e6 f4 e3 f6 g5 d6 e7 f5 c5";

/// A full 60-move game with four forced passes for black.
const FULL_GAME: &str = "\
    d3c3b3b2b1a1c4c1c2d2d1e1a2a3f5e2f1g1f2e3\
    b5b4a5a4c5a6f4f3g3g2h2h1h3h4g4c6g5h5b6c7\
    d6e6f6g6h6h7a7b7a8d7e7f7g7g8b8c8d8e8f8h8";

#[test]
fn shortest_game_ends_thirteen_to_nothing() {
    let moves = parse_transcript(SHORTEST_GAME).unwrap();

    let game = Game::replay(&moves).unwrap();

    assert!(game.is_terminal());
    assert_eq!(game.outcome(), Some(Outcome::from_counts(13, 0)));
    assert_eq!(game.board().empty_count(), 51);
    assert_eq!(game.status().to_string(), "Game Over! Black wins 13-0");
}

#[test]
fn shortest_game_last_move_flips_three_directions() {
    let moves = parse_transcript(SHORTEST_GAME).unwrap();
    let (last, opening) = moves.split_last().unwrap();
    let mut game = Game::replay(opening).unwrap();

    let mv = game.play(*last).unwrap();

    let flipped: Vec<String> = mv.flipped.iter().map(ToString::to_string).collect();
    assert_eq!(flipped, ["d4", "d5", "e5", "f5", "d6"]);
}

#[test]
fn full_game_reaches_documented_score() {
    let moves = parse_transcript(FULL_GAME).unwrap();
    assert_eq!(moves.len(), 60);
    assert_eq!(format_transcript(&moves).len(), 120);

    let game = Game::replay(&moves).unwrap();

    assert!(game.board().is_full());
    let outcome = game.outcome().unwrap();
    assert_eq!(outcome.verdict, Verdict::WhiteWins);
    assert_eq!((outcome.black_count, outcome.white_count), (19, 45));
}

#[test]
fn full_game_passes_are_reported() {
    let moves = parse_transcript(FULL_GAME).unwrap();
    let mut game = Game::new();
    let mut passes = Vec::new();

    for (index, &mv) in moves.iter().enumerate() {
        game.play(mv).unwrap();
        if let Some(skipped) = game.last_pass() {
            assert_eq!(game.status(), Status::ToMoveAfterPass(Color::White));
            passes.push((index + 1, skipped));
        }
    }

    assert_eq!(
        passes,
        vec![
            (18, Color::Black),
            (19, Color::Black),
            (20, Color::Black),
            (47, Color::Black),
        ]
    );
}

#[test]
fn reset_after_a_finished_game_starts_over() {
    let moves = parse_transcript(SHORTEST_GAME).unwrap();
    let mut game = Game::replay(&moves).unwrap();

    game.reset();

    assert_eq!(game, Game::new());
    assert_eq!(game.turn(), Color::Black);
    assert!(game.outcome().is_none());
}
