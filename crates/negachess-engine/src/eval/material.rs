//! Material balance.
//!
//! Scores are from White's perspective (positive = White ahead).

use negachess_core::{Board, Color, PieceKind};

/// Centipawn values indexed by [`PieceKind::index()`]. The king is priceless
/// and never traded, so it counts for nothing here.
pub const PIECE_VALUE: [i32; PieceKind::COUNT] = [
    100, // Pawn
    320, // Knight
    330, // Bishop
    500, // Rook
    900, // Queen
    0,   // King
];

/// White material minus Black material.
pub fn material(board: &Board) -> i32 {
    PieceKind::ALL
        .into_iter()
        .map(|kind| {
            let white = board.colored(kind, Color::White).count() as i32;
            let black = board.colored(kind, Color::Black).count() as i32;
            PIECE_VALUE[kind.index()] * (white - black)
        })
        .sum()
}
