//! End-to-end replays of real games.

use std::io::Cursor;

use replay_core::{
    read_games, reconstruct, replay, Color, Outcome, Piece, PieceKind, ReplayError, ResolveError,
    Square, DEFAULT_OUTCOME_OFFSET,
};

const ITALIAN: &str = "1.e4 e5 2.Nf3 Nc6 3.Bc4 Bc5 4.c3 Nf6 5.d4 exd4 6.cxd4 Bb4+ \
7.Bd2 Bxd2+ 8.Nbxd2 d5 9.exd5 Nxd5 10.Qb3 Nce7 11.O-O O-O 12.Rfe1 c6 1-0";

const OPERA: &str = "1.e4 e5 2.Nf3 d6 3.d4 Bg4 4.dxe5 Bxf3 5.Qxf3 dxe5 6.Bc4 Nf6 \
7.Qb3 Qe7 8.Nc3 c6 9.Bg5 b5 10.Nxb5 cxb5 11.Bxb5+ Nbd7 12.O-O-O Rd8 13.Rxd7 Rxd7 \
14.Rd1 Qe6 15.Bxd7+ Nxd7 16.Qb8+ Nxb8 17.Rd8# 1-0";

fn sq(coord: &str) -> Square {
    Square::from_coord(coord).unwrap()
}

#[test]
fn test_italian_game_full_replay() {
    let game = replay(ITALIAN).unwrap();
    assert_eq!(game.snapshots.len(), 24);
    assert_eq!(game.result, Some(Outcome::WhiteWins));

    // hints resolve: Nbxd2, Nce7, Rfe1
    assert_eq!(
        game.snapshots[14].placement(),
        "r1bqk2r/pppp1ppp/2n2n2/8/2BPP3/5N2/PP1N1PPP/R2QK2R"
    );
    assert_eq!(
        game.snapshots[19].placement(),
        "r1bqk2r/ppp1nppp/8/3n4/2BP4/1Q3N2/PP1N1PPP/R3K2R"
    );
    assert_eq!(
        game.final_board().unwrap().placement(),
        "r1bq1rk1/pp2nppp/2p5/3n4/2BP4/1Q3N2/PP1N1PPP/R3R1K1"
    );
}

#[test]
fn test_every_snapshot_keeps_both_kings() {
    for board in reconstruct(ITALIAN).unwrap() {
        for color in [Color::White, Color::Black] {
            let kings = board.squares_of(Piece::new(color, PieceKind::King));
            assert_eq!(kings.len(), 1);
        }
    }
}

#[test]
fn test_unmodeled_blocking_surfaces_as_ambiguity() {
    // 12...Rd8: the h8 rook is blocked by the bishop and king, which the
    // geometric rules cannot see.
    let err = reconstruct(OPERA).unwrap_err();
    match err {
        ReplayError::Resolve { ply, san, source } => {
            assert_eq!(ply, 24);
            assert_eq!(san, "Rd8");
            assert_eq!(
                source,
                ResolveError::AmbiguousOrigin {
                    piece: Piece::new(Color::Black, PieceKind::Rook),
                    destination: sq("d8"),
                    candidates: vec![sq("a8"), sq("h8")],
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_read_then_replay_each_game() {
    let input = format!("1.e4 e5 2.Nf3 Nc6\n\n1-0\n{ITALIAN}\n\n1-0\n1.e4 Z5\n\n0-1\n");
    let games = read_games(Cursor::new(input), DEFAULT_OUTCOME_OFFSET).unwrap();
    assert_eq!(games.len(), 3);

    let replayed: Vec<_> = games.iter().map(|g| reconstruct(&g.moves)).collect();
    assert_eq!(replayed[0].as_ref().map(Vec::len), Ok(4));
    assert_eq!(replayed[1].as_ref().map(Vec::len), Ok(24));
    assert!(replayed[2].is_err());
}
