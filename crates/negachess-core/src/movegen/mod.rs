//! Pseudo-legal move generation.
//!
//! Moves that leave the mover's king attacked are still emitted; they are
//! rejected by [`Board::make_move`]. Castling is the exception: it is only
//! produced when the king's path is safe.

mod castling;
mod pawns;

use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, queen_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::chess_move::{Move, MoveList};
use crate::piece::PieceKind;
use crate::square::Square;

/// Emit one normal move from `source` to every square in `targets`.
fn push_targets(list: &mut MoveList, source: Square, targets: Bitboard) {
    for target in targets {
        list.push(Move::new(source, target));
    }
}

impl Board {
    /// All pseudo-legal moves for the side to move, in a fixed order:
    /// pawns, castling, knights, bishops, rooks, queens, king.
    pub fn generate_moves(&self) -> MoveList {
        let mut list = MoveList::new();
        let us = self.side_to_move();
        let occupied = self.occupied();
        let reachable = !self.side(us);

        pawns::generate(self, &mut list);
        castling::generate(self, &mut list);

        let leapers_and_sliders: [(PieceKind, fn(Square, Bitboard) -> Bitboard); 4] = [
            (PieceKind::Knight, |sq, _| knight_attacks(sq)),
            (PieceKind::Bishop, bishop_attacks),
            (PieceKind::Rook, rook_attacks),
            (PieceKind::Queen, queen_attacks),
        ];
        for (kind, attacks) in leapers_and_sliders {
            for source in self.colored(kind, us) {
                push_targets(&mut list, source, attacks(source, occupied) & reachable);
            }
        }

        for source in self.colored(PieceKind::King, us) {
            push_targets(&mut list, source, king_attacks(source) & reachable);
        }

        list
    }

    /// Moves from [`generate_moves`](Board::generate_moves) that
    /// [`make_move`](Board::make_move) accepts.
    pub fn legal_moves(&self) -> MoveList {
        let mut legal = MoveList::new();
        for &mv in &self.generate_moves() {
            let mut scratch = *self;
            if scratch.make_move(mv) {
                legal.push(mv);
            }
        }
        legal
    }
}
