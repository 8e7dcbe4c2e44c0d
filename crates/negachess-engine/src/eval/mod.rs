//! Hand-crafted static evaluation: material plus piece-square tables.

pub mod material;
pub mod pst;

use negachess_core::{Board, Color};

use crate::search::traits::Evaluator;

/// Score of being checkmated at the root. A mate `ply` plies deep scores
/// `MATE_SCORE - ply`, so shorter mates are preferred.
pub const MATE_SCORE: i32 = 29_000;

/// Static score of `board` from the side to move's perspective.
pub fn evaluate(board: &Board) -> i32 {
    let white_view = material::material(board) + pst::pst(board);
    match board.side_to_move() {
        Color::White => white_view,
        Color::Black => -white_view,
    }
}

/// The hand-crafted evaluator, with checkmate and stalemate scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hce;

impl Evaluator<Board> for Hce {
    fn evaluate(&self, board: &Board) -> i32 {
        evaluate(board)
    }

    /// Mated: lose, later rather than sooner. Stalemated: draw.
    fn no_legal_moves(&self, board: &Board, ply: u32) -> Option<i32> {
        if board.in_check() {
            let ply = ply.min(MATE_SCORE as u32) as i32;
            Some(ply - MATE_SCORE)
        } else {
            Some(0)
        }
    }
}
