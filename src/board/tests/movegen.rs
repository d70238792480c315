//! Legal move generation tests.

use super::make_board;
use crate::board::{Board, Color, Piece, Square};

/// Count generated boards that leave `piece` of `color` on `square`.
fn moves_to(moves: &[Board], square: &str, color: Color, piece: Piece) -> usize {
    let square: Square = square.parse().unwrap();
    moves
        .iter()
        .filter(|board| board.piece_at(square) == Some((color, piece)))
        .count()
}

#[test]
fn test_initial_position_has_twenty_moves() {
    let board = Board::new();
    assert_eq!(board.legal_moves(Color::White).len(), 20);
    assert_eq!(board.legal_moves(Color::Black).len(), 20);
}

#[test]
fn test_initial_position_pawn_and_knight_split() {
    let board = Board::new();
    let moves = board.legal_moves(Color::White);
    // 8 single pushes, 8 double pushes, 4 knight moves.
    let knight_moves: usize = ["a3", "c3", "f3", "h3"]
        .iter()
        .map(|square| moves_to(&moves, square, Color::White, Piece::Knight))
        .sum();
    assert_eq!(knight_moves, 4);
    let pawn_pushes: usize = moves
        .iter()
        .filter(|next| {
            next.pieces()
                .filter(|&(_, c, p)| c == Color::White && p == Piece::Pawn)
                .any(|(square, _, _)| square.rank() < 6)
        })
        .count();
    assert_eq!(pawn_pushes, 16);
}

#[test]
fn test_pawn_double_step_from_start_rank() {
    let board = make_board([
        "       k",
        "        ",
        "        ",
        "        ",
        "        ",
        "        ",
        "    P   ",
        "K       ",
    ]);
    let moves = board.legal_moves(Color::White);
    assert_eq!(moves_to(&moves, "e3", Color::White, Piece::Pawn), 1);
    assert_eq!(moves_to(&moves, "e4", Color::White, Piece::Pawn), 1);
    // Two pawn pushes plus three king moves.
    assert_eq!(moves.len(), 5);
}

#[test]
fn test_pawn_single_step_off_start_rank() {
    let board = make_board([
        "       k",
        "        ",
        "        ",
        "        ",
        "        ",
        "    P   ",
        "        ",
        "K       ",
    ]);
    let moves = board.legal_moves(Color::White);
    assert_eq!(moves_to(&moves, "e4", Color::White, Piece::Pawn), 1);
    assert_eq!(moves_to(&moves, "e5", Color::White, Piece::Pawn), 0);
}

#[test]
fn test_pawn_push_blocked_by_any_piece() {
    let board = make_board([
        "       k",
        "        ",
        "        ",
        "        ",
        "        ",
        "    p   ",
        "    P   ",
        "K       ",
    ]);
    let moves = board.legal_moves(Color::White);
    // The pawn can neither push through the blocker nor capture it head-on.
    assert_eq!(moves_to(&moves, "e3", Color::White, Piece::Pawn), 0);
    assert_eq!(moves_to(&moves, "e4", Color::White, Piece::Pawn), 0);
}

#[test]
fn test_pawn_double_step_blocked_on_far_square() {
    let board = make_board([
        "       k",
        "        ",
        "        ",
        "        ",
        "    p   ",
        "        ",
        "    P   ",
        "K       ",
    ]);
    let moves = board.legal_moves(Color::White);
    assert_eq!(moves_to(&moves, "e3", Color::White, Piece::Pawn), 1);
    assert_eq!(moves_to(&moves, "e4", Color::White, Piece::Pawn), 0);
}

#[test]
fn test_pawn_captures_diagonally_only() {
    let board = make_board([
        "       k",
        "        ",
        "        ",
        "   pp   ",
        "    P   ",
        "        ",
        "        ",
        "K       ",
    ]);
    let moves = board.legal_moves(Color::White);
    // Push to e5 is blocked; the only pawn move takes on d5.
    assert_eq!(moves_to(&moves, "e5", Color::White, Piece::Pawn), 0);
    assert_eq!(moves_to(&moves, "d5", Color::White, Piece::Pawn), 1);
    assert_eq!(moves_to(&moves, "f5", Color::White, Piece::Pawn), 0);
    let d5: Square = "d5".parse().unwrap();
    let capture = moves
        .iter()
        .find(|next| next.piece_at(d5) == Some((Color::White, Piece::Pawn)))
        .unwrap();
    let black_pawns = capture
        .pieces()
        .filter(|&(_, c, p)| c == Color::Black && p == Piece::Pawn)
        .count();
    assert_eq!(black_pawns, 1, "captured pawn should be gone");
}

#[test]
fn test_promotion_yields_four_boards() {
    let board = make_board([
        "k       ",
        "    P   ",
        "        ",
        "        ",
        "        ",
        "        ",
        "        ",
        "       K",
    ]);
    let moves = board.legal_moves(Color::White);
    for piece in [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight] {
        assert_eq!(moves_to(&moves, "e8", Color::White, piece), 1);
    }
    assert_eq!(
        moves_to(&moves, "e8", Color::White, Piece::Pawn),
        0,
        "an unpromoted pawn must never reach the last rank"
    );
    // Four promotions plus three king moves.
    assert_eq!(moves.len(), 7);
}

#[test]
fn test_promotion_by_capture() {
    let board = make_board([
        "k  r    ",
        "    P   ",
        "        ",
        "        ",
        "        ",
        "        ",
        "        ",
        "       K",
    ]);
    let moves = board.legal_moves(Color::White);
    // Four promotions straight ahead and four more taking the rook.
    assert_eq!(moves_to(&moves, "e8", Color::White, Piece::Queen), 1);
    assert_eq!(moves_to(&moves, "d8", Color::White, Piece::Queen), 1);
    assert_eq!(moves_to(&moves, "d8", Color::White, Piece::Knight), 1);
    let pawn_boards = moves
        .iter()
        .filter(|next| {
            next.piece_at("e7".parse().unwrap()) != Some((Color::White, Piece::Pawn))
        })
        .count();
    assert_eq!(pawn_boards, 8);
}

#[test]
fn test_knight_move_counts() {
    let center = make_board([
        "       k",
        "        ",
        "        ",
        "        ",
        "   N    ",
        "        ",
        "        ",
        "K       ",
    ]);
    let knight_moves = center
        .legal_moves(Color::White)
        .iter()
        .filter(|next| next.piece_at("d4".parse().unwrap()).is_none())
        .count();
    assert_eq!(knight_moves, 8);

    let corner = make_board([
        "       k",
        "        ",
        "        ",
        "        ",
        "        ",
        "        ",
        "        ",
        "K     N ",
    ]);
    let knight_moves = corner
        .legal_moves(Color::White)
        .iter()
        .filter(|next| next.piece_at("g1".parse().unwrap()).is_none())
        .count();
    assert_eq!(knight_moves, 3);
}

#[test]
fn test_rook_ray_stops_at_first_piece() {
    let board = make_board([
        "    k   ",
        "        ",
        "p       ",
        "        ",
        "        ",
        "        ",
        "        ",
        "R   K   ",
    ]);
    let moves = board.legal_moves(Color::White);
    // Up the file: four empty squares, then the capture ends the ray.
    assert_eq!(moves_to(&moves, "a6", Color::White, Piece::Rook), 1);
    assert_eq!(moves_to(&moves, "a7", Color::White, Piece::Rook), 0);
    assert_eq!(moves_to(&moves, "a8", Color::White, Piece::Rook), 0);
    // Along the rank: stops short of the friendly king.
    assert_eq!(moves_to(&moves, "d1", Color::White, Piece::Rook), 1);
    assert_eq!(moves_to(&moves, "e1", Color::White, Piece::Rook), 0);
}

#[test]
fn test_pinned_rook_stays_on_the_file() {
    let board = make_board([
        "    q  k",
        "        ",
        "        ",
        "        ",
        "        ",
        "        ",
        "    R   ",
        "    K   ",
    ]);
    let moves = board.legal_moves(Color::White);
    // The rook may slide along the pin or take the queen, never sideways.
    assert_eq!(moves_to(&moves, "e4", Color::White, Piece::Rook), 1);
    assert_eq!(moves_to(&moves, "e8", Color::White, Piece::Rook), 1);
    assert_eq!(moves_to(&moves, "d2", Color::White, Piece::Rook), 0);
    assert_eq!(moves_to(&moves, "h2", Color::White, Piece::Rook), 0);
}

#[test]
fn test_no_legal_move_ever_leaves_own_king_in_check() {
    let board = Board::new();
    for next in board.legal_moves(Color::White) {
        assert!(!next.in_check(Color::White));
    }
    // Same invariant while actually in check.
    let checked = make_board([
        "    k   ",
        "        ",
        "        ",
        "        ",
        "        ",
        "        ",
        "    r   ",
        "  N K   ",
    ]);
    assert!(checked.in_check(Color::White));
    let moves = checked.legal_moves(Color::White);
    assert!(!moves.is_empty());
    for next in &moves {
        assert!(!next.in_check(Color::White));
    }
}
