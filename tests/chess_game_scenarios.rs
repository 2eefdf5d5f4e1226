use pretty_assertions::assert_eq;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use hub_chess::chess_errors::ChessError;
use hub_chess::game::chess_game::{ChessGame, GameConfig};
use hub_chess::game::score_tally::ScoreTally;
use hub_chess::game_state::chess_types::{Color, GameState, Outcome, Piece, PieceKind};
use hub_chess::move_generation::legal_move_apply::build_move;
use hub_chess::move_generation::legal_move_checks::is_in_check;
use hub_chess::move_generation::legal_move_generator::generate_legal_moves;
use hub_chess::search::difficulty::Difficulty;

fn computer_plays_black(difficulty: Difficulty) -> ChessGame {
    ChessGame::new(GameConfig {
        computer_side: Color::Black,
        difficulty,
    })
}

#[test]
fn fools_mate_ends_in_checkmate_for_white() {
    let mut game = ChessGame::default();
    game.play(6, 5, 5, 5).expect("f3");
    game.play(1, 4, 3, 4).expect("e5");
    game.play(6, 6, 4, 6).expect("g4");
    let mate = game.play(0, 3, 4, 7).expect("Qh4");

    assert_eq!(mate.notation, "Qh4");
    assert_eq!(mate.status, GameState::Checkmate);
    assert_eq!(game.side_to_move(), Color::White);
    assert!(generate_legal_moves(game.position().board(), Color::White).is_empty());
    assert_eq!(game.outcome(), Some(Outcome::BlackWins));
    assert_eq!(
        game.play(6, 4, 4, 4).err(),
        Some(ChessError::GameOver(GameState::Checkmate))
    );
    assert!(!game.legal_move(6, 4, 4, 4));

    let mut tally = ScoreTally::default();
    game.record_outcome(&mut tally);
    assert_eq!(tally.black_wins, 1);
}

#[test]
fn king_a1_against_king_and_queen_is_stalemate() {
    let game = ChessGame::from_fen("8/8/8/8/8/kq6/8/K7 w - - 0 1", GameConfig::default())
        .expect("fixture should parse");
    assert_eq!(game.status(), GameState::Stalemate);
    assert_eq!(game.outcome(), Some(Outcome::Draw));
}

#[test]
fn queen_move_into_stalemate_is_detected() {
    let mut game = ChessGame::from_fen("8/8/8/8/1q6/k7/8/K7 b - - 0 1", GameConfig::default())
        .expect("fixture should parse");
    let played = game.play(4, 1, 5, 1).expect("Qb3 is legal");
    assert_eq!(played.status, GameState::Stalemate);
    assert!(!is_in_check(game.position().board(), Color::White));
}

#[test]
fn opening_pawn_double_step() {
    let mut game = ChessGame::default();
    let played = game.play(6, 4, 4, 4).expect("e2e4 is legal");
    let board = game.board_snapshot();

    assert_eq!(board[4][4], Some(Piece::new(PieceKind::Pawn, Color::White)));
    assert_eq!(board[6][4], None);
    assert_eq!(played.notation, "e4");
    assert_eq!(played.captured, None);
    assert_eq!(played.status, GameState::Playing);
    assert_eq!(game.side_to_move(), Color::Black);
}

#[test]
fn knight_cannot_move_straight() {
    let mut game = ChessGame::default();
    assert!(!game.legal_move(7, 1, 5, 1));
    assert!(game.legal_move(7, 1, 5, 2));
    assert!(matches!(
        game.play(7, 1, 5, 1),
        Err(ChessError::IllegalMove { .. })
    ));
}

#[test]
fn easy_computer_plays_the_back_rank_mate() {
    let mut game = ChessGame::from_fen(
        "r5k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1",
        GameConfig {
            computer_side: Color::Black,
            difficulty: Difficulty::Easy,
        },
    )
    .expect("fixture should parse");

    let reply = game.computer_move(Difficulty::Easy).expect("black has moves");
    assert_eq!((reply.from.to_string(), reply.to.to_string()), ("a8".to_owned(), "a1".to_owned()));
    assert_eq!(reply.notation, "Ra1");
    assert_eq!(reply.status, GameState::Checkmate);
    assert_eq!(game.outcome(), Some(Outcome::BlackWins));
    assert_eq!(
        game.computer_move(Difficulty::Easy).err(),
        Some(ChessError::GameOver(GameState::Checkmate))
    );
}

#[test]
fn computer_move_changes_only_the_committed_move() {
    let mut game = computer_plays_black(Difficulty::Medium);
    game.play(6, 4, 4, 4).expect("e4");
    let before = *game.position();

    let reply = game.play_computer_turn().expect("black has moves");

    let mut expected = before;
    let mv = build_move(before.board(), reply.from, reply.to).expect("search returned a real move");
    expected.commit_move(&mv);
    assert_eq!(*game.position(), expected);
}

#[test]
fn identical_games_get_identical_computer_moves() {
    let mut first = computer_plays_black(Difficulty::Medium);
    let mut second = computer_plays_black(Difficulty::Medium);
    for game in [&mut first, &mut second] {
        game.play(6, 3, 4, 3).expect("d4");
    }
    let a = first.play_computer_turn().expect("black has moves");
    let b = second.play_computer_turn().expect("black has moves");
    assert_eq!(a, b);
}

#[test]
fn random_playouts_keep_one_king_each_and_never_self_check() {
    let white_king = Piece::new(PieceKind::King, Color::White);
    let black_king = Piece::new(PieceKind::King, Color::Black);

    for seed in 0..12u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = ChessGame::default();

        for _ in 0..80 {
            if game.status().is_terminal() {
                break;
            }
            let mover = game.side_to_move();
            let moves = generate_legal_moves(game.position().board(), mover);
            let mv = *moves.choose(&mut rng).expect("non-terminal game has moves");

            assert!(game.legal_move(mv.from.row(), mv.from.col(), mv.to.row(), mv.to.col()));
            game.play(mv.from.row(), mv.from.col(), mv.to.row(), mv.to.col())
                .expect("generated move is legal");

            let board = game.position().board();
            assert_eq!(board.count(white_king), 1, "seed {seed}");
            assert_eq!(board.count(black_king), 1, "seed {seed}");
            assert!(!is_in_check(board, mover), "seed {seed}: {mover} left in check");
            assert_eq!(game.side_to_move(), mover.opposite());
        }
    }
}

#[test]
fn hint_then_undo_round_trip() {
    let mut game = computer_plays_black(Difficulty::Easy);
    let mut rng = StdRng::seed_from_u64(21);
    let start = *game.position();

    let hint = game.hint(&mut rng).expect("white has moves");
    game.play(hint.from.row(), hint.from.col(), hint.to.row(), hint.to.col())
        .expect("hint is legal");
    game.play_computer_turn().expect("black has moves");

    game.undo().expect("human and computer plies");
    assert_eq!(*game.position(), start);
    assert!(game.history().is_empty());
}
