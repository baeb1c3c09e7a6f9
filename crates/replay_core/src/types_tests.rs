use super::*;

#[test]
fn test_square_from_coord() {
    // row 0 is the eighth rank
    assert_eq!(Square::from_coord("a8"), Some(Square { rank: 0, file: 0 }));
    assert_eq!(Square::from_coord("h1"), Some(Square { rank: 7, file: 7 }));
    assert_eq!(Square::from_coord("e4"), Some(Square { rank: 4, file: 4 }));
    assert_eq!(Square::from_coord("i4"), None);
    assert_eq!(Square::from_coord("e9"), None);
    assert_eq!(Square::from_coord("e"), None);
}

#[test]
fn test_square_new_bounds() {
    assert_eq!(Square::new(0, 7), Some(Square { rank: 0, file: 7 }));
    assert_eq!(Square::new(8, 0), None);
    assert_eq!(Square::new(0, 8), None);
    for sq in Square::all() {
        assert_eq!(Square::new(sq.rank, sq.file), Some(sq));
    }
}

#[test]
fn test_square_display() {
    for sq in Square::all() {
        assert_eq!(Square::from_coord(&sq.to_string()), Some(sq));
    }
    assert_eq!(Square { rank: 6, file: 4 }.to_string(), "e2");
}

#[test]
fn test_square_index() {
    assert_eq!(Square::from_index(0), Some(Square { rank: 0, file: 0 }));
    assert_eq!(Square::from_index(63), Some(Square { rank: 7, file: 7 }));
    assert_eq!(Square::from_index(64), None);
    assert_eq!(Square::all().count(), 64);
}

#[test]
fn test_piece_codes() {
    let white_king = Piece::new(Color::White, PieceKind::King);
    let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);
    assert_eq!(white_king.code(), 6);
    assert_eq!(black_pawn.code(), -1);
    assert_eq!(Piece::from_code(-1), Some(black_pawn));
    assert_eq!(Piece::from_code(0), None);
    assert_eq!(Piece::from_code(7), None);

    for kind in PieceKind::ALL {
        for color in [Color::White, Color::Black] {
            let pc = Piece::new(color, kind);
            assert_eq!(Piece::from_code(pc.code()), Some(pc));
        }
    }
}

#[test]
fn test_piece_letters() {
    assert_eq!(PieceKind::from_letter('N'), Some(PieceKind::Knight));
    assert_eq!(PieceKind::from_letter('Z'), None);
    assert_eq!(PieceKind::from_letter('P'), None);
    assert_eq!(PieceKind::Pawn.letter(), None);
    assert_eq!(PieceKind::Queen.letter(), Some('Q'));
}

#[test]
fn test_color_ranks() {
    assert_eq!(Color::White.back_rank(), 7);
    assert_eq!(Color::Black.back_rank(), 0);
    assert_eq!(Color::White.pawn_rank(), 6);
    assert_eq!(Color::Black.pawn_rank(), 1);
    assert_eq!(Color::White.other(), Color::Black);
    assert_eq!(Color::White.sign(), -Color::Black.sign());
}
