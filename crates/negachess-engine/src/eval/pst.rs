//! Piece-square tables.
//!
//! Tables are written from White's side in LERF order, rank 1 on the first
//! row. Black looks up the vertically mirrored square.

use negachess_core::{Board, Color, PieceKind, Square};

#[rustfmt::skip]
const PAWN: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,  10,  10, -20, -20,  10,  10,   5,
      5,  -5, -10,   0,   0, -10,  -5,   5,
      0,   0,   0,  20,  20,   0,   0,   0,
      5,   5,  10,  25,  25,  10,   5,   5,
     10,  10,  20,  30,  30,  20,  10,  10,
     50,  50,  50,  50,  50,  50,  50,  50,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK: [i32; 64] = [
      0,   0,   0,   5,   5,   0,   0,   0,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      5,  10,  10,  10,  10,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -10,   5,   5,   5,   5,   5,   0, -10,
      0,   0,   5,   5,   5,   5,   0,  -5,
     -5,   0,   5,   5,   5,   5,   0,  -5,
    -10,   0,   5,   5,   5,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

/// Middlegame king: stay home behind the pawns.
#[rustfmt::skip]
const KING: [i32; 64] = [
     20,  30,  10,   0,   0,  10,  30,  20,
     20,  20,   0,   0,   0,   0,  20,  20,
    -10, -20, -20, -20, -20, -20, -20, -10,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
];

const TABLES: [&[i32; 64]; PieceKind::COUNT] = [&PAWN, &KNIGHT, &BISHOP, &ROOK, &QUEEN, &KING];

/// Bonus for a `color` piece of `kind` standing on `sq`.
#[inline]
pub fn pst_value(kind: PieceKind, color: Color, sq: Square) -> i32 {
    let sq = match color {
        Color::White => sq,
        Color::Black => sq.flip_rank(),
    };
    TABLES[kind.index()][sq.index()]
}

/// Positional balance from White's perspective.
pub fn pst(board: &Board) -> i32 {
    let mut score = 0;
    for kind in PieceKind::ALL {
        for sq in board.colored(kind, Color::White) {
            score += pst_value(kind, Color::White, sq);
        }
        for sq in board.colored(kind, Color::Black) {
            score -= pst_value(kind, Color::Black, sq);
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_squares_score_alike() {
        for kind in PieceKind::ALL {
            for sq in Square::all() {
                assert_eq!(
                    pst_value(kind, Color::White, sq),
                    pst_value(kind, Color::Black, sq.flip_rank()),
                    "{kind} on {sq}"
                );
            }
        }
    }

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(pst(&Board::starting_position()), 0);
    }

    #[test]
    fn central_knight_beats_rim_knight() {
        assert!(
            pst_value(PieceKind::Knight, Color::White, Square::E4)
                > pst_value(PieceKind::Knight, Color::White, Square::A4)
        );
    }

    #[test]
    fn advanced_pawn_is_rewarded() {
        assert_eq!(pst_value(PieceKind::Pawn, Color::White, Square::D7), 50);
        assert_eq!(pst_value(PieceKind::Pawn, Color::Black, Square::D2), 50);
    }
}
