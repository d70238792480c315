//! Movement and attack vector catalogs.
//!
//! Every piece's movement is a small table of vectors: a file delta, a
//! rank delta, a maximum step count, and what the vector does about
//! captures. Check detection walks a second set of catalogs outward from
//! the king and asks which enemy pieces may legally sit on the first
//! occupied square of each ray.

use super::types::{Color, Piece};

/// What a movement vector does when its target square is occupied.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum CaptureMode {
    /// Moves to empty squares only (pawn pushes)
    Forbidden,
    /// Moves to empty squares and captures enemy pieces (most pieces)
    Allowed,
    /// Moves only when capturing an enemy piece (pawn diagonals)
    Required,
}

/// One direction a piece can move in.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MoveVector {
    /// File delta per step
    pub dx: i8,
    /// Rank delta per step (positive heads toward the bottom of the board)
    pub dy: i8,
    /// Maximum steps along the vector. 0 marks a pawn push and resolves to
    /// 1, or 2 while the pawn still stands on its starting rank.
    pub steps: u8,
    pub capture: CaptureMode,
}

/// One direction a threat can arrive from.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScanVector {
    pub dx: i8,
    pub dy: i8,
    pub steps: u8,
}

/// A family of scan vectors and the enemy pieces that attack along them.
pub(crate) struct CheckTest {
    pub threats: &'static [Piece],
    pub vectors: &'static [ScanVector],
}

const fn mv(dx: i8, dy: i8, steps: u8, capture: CaptureMode) -> MoveVector {
    MoveVector {
        dx,
        dy,
        steps,
        capture,
    }
}

const fn scan(dx: i8, dy: i8, steps: u8) -> ScanVector {
    ScanVector { dx, dy, steps }
}

use CaptureMode::{Allowed, Forbidden, Required};

// ============================================================================
// MOVE VECTORS
// ============================================================================

/// Black pawns advance down the board and capture diagonally downward.
const BLACK_PAWN_MOVES: [MoveVector; 3] = [
    mv(0, 1, 0, Forbidden),
    mv(-1, 1, 1, Required),
    mv(1, 1, 1, Required),
];

/// White pawns advance up the board and capture diagonally upward.
const WHITE_PAWN_MOVES: [MoveVector; 3] = [
    mv(0, -1, 0, Forbidden),
    mv(-1, -1, 1, Required),
    mv(1, -1, 1, Required),
];

const ROOK_MOVES: [MoveVector; 4] = [
    mv(0, -1, 7, Allowed),
    mv(-1, 0, 7, Allowed),
    mv(0, 1, 7, Allowed),
    mv(1, 0, 7, Allowed),
];

const BISHOP_MOVES: [MoveVector; 4] = [
    mv(-1, -1, 7, Allowed),
    mv(1, 1, 7, Allowed),
    mv(-1, 1, 7, Allowed),
    mv(1, -1, 7, Allowed),
];

const KNIGHT_MOVES: [MoveVector; 8] = [
    mv(-2, 1, 1, Allowed),
    mv(2, -1, 1, Allowed),
    mv(2, 1, 1, Allowed),
    mv(-2, -1, 1, Allowed),
    mv(-1, -2, 1, Allowed),
    mv(-1, 2, 1, Allowed),
    mv(1, -2, 1, Allowed),
    mv(1, 2, 1, Allowed),
];

const QUEEN_MOVES: [MoveVector; 8] = [
    mv(0, -1, 7, Allowed),
    mv(-1, 0, 7, Allowed),
    mv(0, 1, 7, Allowed),
    mv(1, 0, 7, Allowed),
    mv(-1, -1, 7, Allowed),
    mv(1, 1, 7, Allowed),
    mv(-1, 1, 7, Allowed),
    mv(1, -1, 7, Allowed),
];

const KING_MOVES: [MoveVector; 8] = [
    mv(0, -1, 1, Allowed),
    mv(-1, 0, 1, Allowed),
    mv(0, 1, 1, Allowed),
    mv(1, 0, 1, Allowed),
    mv(-1, -1, 1, Allowed),
    mv(1, 1, 1, Allowed),
    mv(-1, 1, 1, Allowed),
    mv(1, -1, 1, Allowed),
];

/// Movement vectors for a piece of the given color.
pub(crate) const fn move_vectors(piece: Piece, color: Color) -> &'static [MoveVector] {
    match piece {
        Piece::Pawn => match color {
            Color::White => &WHITE_PAWN_MOVES,
            Color::Black => &BLACK_PAWN_MOVES,
        },
        Piece::Knight => &KNIGHT_MOVES,
        Piece::Bishop => &BISHOP_MOVES,
        Piece::Rook => &ROOK_MOVES,
        Piece::Queen => &QUEEN_MOVES,
        Piece::King => &KING_MOVES,
    }
}

// ============================================================================
// CHECK SCANS
// ============================================================================

const BISHOP_SCANS: [ScanVector; 4] = [
    scan(-1, -1, 7),
    scan(1, 1, 7),
    scan(-1, 1, 7),
    scan(1, -1, 7),
];

const ROOK_SCANS: [ScanVector; 4] = [
    scan(0, -1, 7),
    scan(-1, 0, 7),
    scan(0, 1, 7),
    scan(1, 0, 7),
];

const KNIGHT_SCANS: [ScanVector; 8] = [
    scan(-1, -2, 1),
    scan(-1, 2, 1),
    scan(-2, -1, 1),
    scan(-2, 1, 1),
    scan(1, -2, 1),
    scan(1, 2, 1),
    scan(2, -1, 1),
    scan(2, 1, 1),
];

const KING_SCANS: [ScanVector; 8] = [
    scan(-1, -1, 1),
    scan(1, 1, 1),
    scan(-1, 1, 1),
    scan(1, -1, 1),
    scan(0, -1, 1),
    scan(-1, 0, 1),
    scan(0, 1, 1),
    scan(1, 0, 1),
];

/// Squares a Black pawn attacks a White king from (one rank toward Black).
const WHITE_KING_PAWN_SCANS: [ScanVector; 2] = [scan(-1, -1, 1), scan(1, -1, 1)];

/// Squares a White pawn attacks a Black king from (one rank toward White).
const BLACK_KING_PAWN_SCANS: [ScanVector; 2] = [scan(-1, 1, 1), scan(1, 1, 1)];

const DIAGONAL_THREATS: [Piece; 2] = [Piece::Queen, Piece::Bishop];
const STRAIGHT_THREATS: [Piece; 2] = [Piece::Queen, Piece::Rook];
const KNIGHT_THREATS: [Piece; 1] = [Piece::Knight];
const KING_THREATS: [Piece; 1] = [Piece::King];
const PAWN_THREATS: [Piece; 1] = [Piece::Pawn];

const WHITE_CHECK_TESTS: [CheckTest; 5] = [
    CheckTest {
        threats: &DIAGONAL_THREATS,
        vectors: &BISHOP_SCANS,
    },
    CheckTest {
        threats: &STRAIGHT_THREATS,
        vectors: &ROOK_SCANS,
    },
    CheckTest {
        threats: &KNIGHT_THREATS,
        vectors: &KNIGHT_SCANS,
    },
    CheckTest {
        threats: &KING_THREATS,
        vectors: &KING_SCANS,
    },
    CheckTest {
        threats: &PAWN_THREATS,
        vectors: &WHITE_KING_PAWN_SCANS,
    },
];

const BLACK_CHECK_TESTS: [CheckTest; 5] = [
    CheckTest {
        threats: &DIAGONAL_THREATS,
        vectors: &BISHOP_SCANS,
    },
    CheckTest {
        threats: &STRAIGHT_THREATS,
        vectors: &ROOK_SCANS,
    },
    CheckTest {
        threats: &KNIGHT_THREATS,
        vectors: &KNIGHT_SCANS,
    },
    CheckTest {
        threats: &KING_THREATS,
        vectors: &KING_SCANS,
    },
    CheckTest {
        threats: &PAWN_THREATS,
        vectors: &BLACK_KING_PAWN_SCANS,
    },
];

/// Check scans for a king of the given color.
pub(crate) const fn check_tests(color: Color) -> &'static [CheckTest] {
    match color {
        Color::White => &WHITE_CHECK_TESTS,
        Color::Black => &BLACK_CHECK_TESTS,
    }
}
