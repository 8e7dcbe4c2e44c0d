//! Pawn pushes, captures, promotions, and en passant.

use crate::attacks::pawn_attacks;
use crate::board::Board;
use crate::chess_move::{Move, MoveList, Promotion};
use crate::color::Color;
use crate::piece::PieceKind;
use crate::square::Square;

fn push_pawn_move(list: &mut MoveList, source: Square, target: Square, last_rank: u8) {
    if target.rank() == last_rank {
        for piece in Promotion::ALL {
            list.push(Move::promotion(source, target, piece));
        }
    } else {
        list.push(Move::new(source, target));
    }
}

pub(super) fn generate(board: &Board, list: &mut MoveList) {
    let us = board.side_to_move();
    let them = board.side(us.opponent());
    let empty = !board.occupied();
    let (start_rank, last_rank) = match us {
        Color::White => (1, 7),
        Color::Black => (6, 0),
    };

    for source in board.colored(PieceKind::Pawn, us) {
        if let Some(one) = source.offset(us.forward()).filter(|sq| empty.contains(*sq)) {
            push_pawn_move(list, source, one, last_rank);
            if source.rank() == start_rank {
                if let Some(two) = one.offset(us.forward()).filter(|sq| empty.contains(*sq)) {
                    list.push(Move::new(source, two));
                }
            }
        }

        let attacks = pawn_attacks(us, source);
        for target in attacks & them {
            push_pawn_move(list, source, target, last_rank);
        }

        if let Some(ep) = board.en_passant() {
            if (attacks & ep.bitboard()).is_nonempty() {
                list.push(Move::en_passant(source, ep));
            }
        }
    }
}
