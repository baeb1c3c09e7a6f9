use super::*;
use crate::error::{NotationError, ResolveError};

fn sq(coord: &str) -> Square {
    Square::from_coord(coord).unwrap()
}

#[test]
fn test_open_game_snapshots() {
    let boards = reconstruct("1.e4 e5 2.Nf3 Nc6").unwrap();
    assert_eq!(boards.len(), 4);

    let white_pawn = Some(Piece::new(Color::White, PieceKind::Pawn));
    assert_eq!(boards[0].piece_at(sq("e2")), None);
    assert_eq!(boards[0].piece_at(sq("e4")), white_pawn);

    let white_knight = Some(Piece::new(Color::White, PieceKind::Knight));
    assert_eq!(boards[2].piece_at(sq("g1")), None);
    assert_eq!(boards[2].piece_at(sq("f3")), white_knight);

    assert_eq!(
        boards[3].placement(),
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R"
    );
}

#[test]
fn test_snapshots_are_independent() {
    let boards = reconstruct("1.e4 e5").unwrap();
    // the first snapshot must not see black's reply
    assert_eq!(boards[0].piece_at(sq("e7")), Some(Piece::new(Color::Black, PieceKind::Pawn)));
    assert_eq!(boards[1].piece_at(sq("e7")), None);
}

#[test]
fn test_castle_on_clear_board() {
    let board = Board::from_placement("4k3/8/8/8/8/8/8/4K2R").unwrap();
    let mut game = GameReplay::from_position(board, Color::White);
    let tokens = tokenize("1.O-O").unwrap();
    let boards = game.play_all(&tokens).unwrap();

    assert_eq!(boards.len(), 1);
    let b = &boards[0];
    assert_eq!(b.piece_at(sq("g1")), Some(Piece::new(Color::White, PieceKind::King)));
    assert_eq!(b.piece_at(sq("f1")), Some(Piece::new(Color::White, PieceKind::Rook)));
    assert_eq!(b.piece_at(sq("e1")), None);
    assert_eq!(b.piece_at(sq("h1")), None);
    assert_eq!(game.side_to_move(), Color::Black);
}

#[test]
fn test_sides_alternate() {
    let mut game = GameReplay::new();
    assert_eq!(game.side_to_move(), Color::White);
    for token in tokenize("1.d4 d5 2.c4").unwrap() {
        game.play(&token).unwrap();
    }
    assert_eq!(game.plies(), 3);
    assert_eq!(game.side_to_move(), Color::Black);
}

#[test]
fn test_black_castles_queenside() {
    let text = "1.d4 d5 2.c4 Nc6 3.Nc3 Bf5 4.Nf3 Qd7 5.e3 O-O-O";
    let game = replay(text).unwrap();
    let last = game.final_board().unwrap();
    assert_eq!(last.piece_at(sq("c8")), Some(Piece::new(Color::Black, PieceKind::King)));
    assert_eq!(last.piece_at(sq("d8")), Some(Piece::new(Color::Black, PieceKind::Rook)));
    assert_eq!(last.piece_at(sq("a8")), None);
    assert_eq!(last.piece_at(sq("e8")), None);
}

#[test]
fn test_replay_collects_result() {
    let game = replay("1.e4 e5 2.Bc4 Nc6 3.Qh5 Nf6 4.Qxf7# 1-0").unwrap();
    assert_eq!(game.tokens.len(), 7);
    assert_eq!(game.snapshots.len(), 7);
    assert_eq!(game.result, Some(Outcome::WhiteWins));
    assert_eq!(
        game.final_board().unwrap().placement(),
        "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR"
    );
}

#[test]
fn test_result_in_comment_is_not_the_outcome() {
    let game = replay("1.e4 {white usually scores 1-0 here} e5 0-1").unwrap();
    assert_eq!(game.tokens.len(), 2);
    assert_eq!(game.result, Some(Outcome::BlackWins));
}

#[test]
fn test_unknown_piece_letter_aborts() {
    let err = reconstruct("1.e4 e5 2.Z5").unwrap_err();
    assert!(matches!(
        err,
        ReplayError::Notation(NotationError::UnknownPieceLetter { letter: 'Z', .. })
    ));
}

#[test]
fn test_resolve_error_carries_ply() {
    // White has no knight able to reach e5 at move two.
    let err = reconstruct("1.e4 e5 2.Ne5").unwrap_err();
    match err {
        ReplayError::Resolve { ply, san, source } => {
            assert_eq!(ply, 3);
            assert_eq!(san, "Ne5");
            assert!(matches!(source, ResolveError::NoCandidate { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_text_has_no_snapshots() {
    assert_eq!(reconstruct("").unwrap(), Vec::new());
}
