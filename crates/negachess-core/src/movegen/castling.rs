//! Castling: emitted only with the right, an empty path, and a safe king route.

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::{Move, MoveList};
use crate::color::Color;
use crate::square::Square;

struct CastlePath {
    right: CastleRights,
    king_from: Square,
    king_to: Square,
    /// Squares that must be empty.
    clear: &'static [Square],
    /// Squares the king crosses, destination included.
    safe: [Square; 2],
}

const WHITE: [CastlePath; 2] = [
    CastlePath {
        right: CastleRights::WHITE_KING,
        king_from: Square::E1,
        king_to: Square::G1,
        clear: &[Square::F1, Square::G1],
        safe: [Square::F1, Square::G1],
    },
    CastlePath {
        right: CastleRights::WHITE_QUEEN,
        king_from: Square::E1,
        king_to: Square::C1,
        clear: &[Square::D1, Square::C1, Square::B1],
        safe: [Square::D1, Square::C1],
    },
];

const BLACK: [CastlePath; 2] = [
    CastlePath {
        right: CastleRights::BLACK_KING,
        king_from: Square::E8,
        king_to: Square::G8,
        clear: &[Square::F8, Square::G8],
        safe: [Square::F8, Square::G8],
    },
    CastlePath {
        right: CastleRights::BLACK_QUEEN,
        king_from: Square::E8,
        king_to: Square::C8,
        clear: &[Square::D8, Square::C8, Square::B8],
        safe: [Square::D8, Square::C8],
    },
];

pub(super) fn generate(board: &Board, list: &mut MoveList) {
    let us = board.side_to_move();
    let them = us.opponent();
    let paths = match us {
        Color::White => &WHITE,
        Color::Black => &BLACK,
    };
    if board.king_square(us).is_none_or(|king| board.is_square_attacked(king, them)) {
        return;
    }

    let occupied = board.occupied();
    for path in paths {
        if !board.castling().contains(path.right)
            || board.king_square(us) != Some(path.king_from)
            || path.clear.iter().any(|sq| occupied.contains(*sq))
            || path.safe.iter().any(|sq| board.is_square_attacked(*sq, them))
        {
            continue;
        }
        list.push(Move::castle(path.king_from, path.king_to));
    }
}
