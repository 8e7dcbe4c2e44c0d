//! In-place move application with a legality verdict, and attack queries.

use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// Rook relocation for a castle, keyed by the king's destination.
fn castle_rook_squares(king_target: Square) -> Option<(Square, Square)> {
    match king_target {
        Square::G1 => Some((Square::H1, Square::F1)),
        Square::C1 => Some((Square::A1, Square::D1)),
        Square::G8 => Some((Square::H8, Square::F8)),
        Square::C8 => Some((Square::A8, Square::D8)),
        _ => None,
    }
}

impl Board {
    /// Whether any piece of color `by` attacks `sq`.
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let occupied = self.occupied();
        let diagonal = self.colored(PieceKind::Bishop, by) | self.colored(PieceKind::Queen, by);
        let straight = self.colored(PieceKind::Rook, by) | self.colored(PieceKind::Queen, by);

        // A pawn of `by` attacks `sq` iff a pawn of the other color on `sq` would attack it.
        (pawn_attacks(by.opponent(), sq) & self.colored(PieceKind::Pawn, by)).is_nonempty()
            || (knight_attacks(sq) & self.colored(PieceKind::Knight, by)).is_nonempty()
            || (king_attacks(sq) & self.colored(PieceKind::King, by)).is_nonempty()
            || (bishop_attacks(sq, occupied) & diagonal).is_nonempty()
            || (rook_attacks(sq, occupied) & straight).is_nonempty()
    }

    /// Whether the side to move is in check.
    pub fn in_check(&self) -> bool {
        let us = self.side_to_move();
        self.king_square(us)
            .is_some_and(|king| self.is_square_attacked(king, us.opponent()))
    }

    /// Play `mv` for the side to move.
    ///
    /// `mv` must come from [`generate_moves`](Board::generate_moves) on this
    /// position. Returns `false` and leaves the board untouched when the move
    /// would expose the mover's own king.
    pub fn make_move(&mut self, mv: Move) -> bool {
        let before = *self;
        let us = self.side_to_move();
        let them = us.opponent();
        let (source, target) = (mv.source(), mv.target());

        let Some(moving) = self.take(source) else {
            return false;
        };
        let captured = self.take(target);

        match mv.kind() {
            MoveKind::Normal => self.put(target, moving),
            MoveKind::Promotion => {
                let kind = mv
                    .promotion_piece()
                    .map_or(PieceKind::Queen, |promo| promo.piece_kind());
                self.put(target, Piece::new(kind, us));
            }
            MoveKind::EnPassant => {
                self.put(target, moving);
                if let Some(victim) = target.offset(-us.forward()) {
                    self.take(victim);
                }
            }
            MoveKind::Castle => {
                self.put(target, moving);
                if let Some((rook_from, rook_to)) = castle_rook_squares(target) {
                    if let Some(rook) = self.take(rook_from) {
                        self.put(rook_to, rook);
                    }
                }
            }
        }

        let double_push = moving.kind() == PieceKind::Pawn
            && source.rank().abs_diff(target.rank()) == 2;
        self.set_en_passant(if double_push {
            source.offset(us.forward())
        } else {
            None
        });

        let rights = self
            .castling()
            .remove(CastleRights::revoked_by(source))
            .remove(CastleRights::revoked_by(target));
        self.set_castling(rights);

        let halfmove = if moving.kind() == PieceKind::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock().saturating_add(1)
        };
        let fullmove = match us {
            Color::White => self.fullmove_number(),
            Color::Black => self.fullmove_number().saturating_add(1),
        };
        self.set_clocks(halfmove, fullmove);
        self.set_side_to_move(them);

        let exposed = self
            .king_square(us)
            .is_some_and(|king| self.is_square_attacked(king, them));
        if exposed {
            *self = before;
            return false;
        }
        true
    }
}
