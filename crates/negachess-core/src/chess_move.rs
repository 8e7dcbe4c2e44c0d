//! Moves packed into 16 bits, and the fixed-capacity list that holds them.

use std::fmt;

use crate::piece::PieceKind;
use crate::square::Square;

const SOURCE_MASK: u16 = 0x003F;
const TARGET_MASK: u16 = 0x0FC0;
const PROMO_MASK: u16 = 0x3000;
const KIND_MASK: u16 = 0xC000;
const TARGET_SHIFT: u32 = 6;
const PROMO_SHIFT: u32 = 12;
const KIND_SHIFT: u32 = 14;

/// What a move does beyond relocating one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveKind {
    Normal = 0,
    Castle = 1,
    EnPassant = 2,
    Promotion = 3,
}

/// The piece a pawn becomes on the last rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Promotion {
    Knight = 0,
    Bishop = 1,
    Rook = 2,
    Queen = 3,
}

impl Promotion {
    /// Generation order: strongest first.
    pub const ALL: [Promotion; 4] = [
        Promotion::Queen,
        Promotion::Rook,
        Promotion::Bishop,
        Promotion::Knight,
    ];

    pub const fn piece_kind(self) -> PieceKind {
        match self {
            Promotion::Knight => PieceKind::Knight,
            Promotion::Bishop => PieceKind::Bishop,
            Promotion::Rook => PieceKind::Rook,
            Promotion::Queen => PieceKind::Queen,
        }
    }

    pub const fn uci_char(self) -> char {
        self.piece_kind().fen_char()
    }

    pub fn from_uci_char(c: char) -> Option<Promotion> {
        match c {
            'n' => Some(Promotion::Knight),
            'b' => Some(Promotion::Bishop),
            'r' => Some(Promotion::Rook),
            'q' => Some(Promotion::Queen),
            _ => None,
        }
    }
}

/// A move encoded in 16 bits.
///
/// ```text
/// bits  0-5   source square
/// bits  6-11  target square
/// bits 12-13  promotion piece (knight, bishop, rook, queen)
/// bits 14-15  kind (normal, castle, en passant, promotion)
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// a1a1; never produced by move generation.
    pub const NULL: Move = Move(0);

    const fn pack(source: Square, target: Square, promo: u16, kind: MoveKind) -> Move {
        Move(
            source.index() as u16
                | (target.index() as u16) << TARGET_SHIFT
                | promo << PROMO_SHIFT
                | (kind as u16) << KIND_SHIFT,
        )
    }

    /// A quiet move or ordinary capture.
    pub const fn new(source: Square, target: Square) -> Move {
        Move::pack(source, target, 0, MoveKind::Normal)
    }

    /// A castle, encoded by the king's source and target squares.
    pub const fn castle(king_source: Square, king_target: Square) -> Move {
        Move::pack(king_source, king_target, 0, MoveKind::Castle)
    }

    pub const fn en_passant(source: Square, target: Square) -> Move {
        Move::pack(source, target, 0, MoveKind::EnPassant)
    }

    pub const fn promotion(source: Square, target: Square, piece: Promotion) -> Move {
        Move::pack(source, target, piece as u16, MoveKind::Promotion)
    }

    pub const fn source(self) -> Square {
        Square::from_index_unchecked((self.0 & SOURCE_MASK) as u8)
    }

    pub const fn target(self) -> Square {
        Square::from_index_unchecked(((self.0 & TARGET_MASK) >> TARGET_SHIFT) as u8)
    }

    pub const fn kind(self) -> MoveKind {
        match (self.0 & KIND_MASK) >> KIND_SHIFT {
            0 => MoveKind::Normal,
            1 => MoveKind::Castle,
            2 => MoveKind::EnPassant,
            _ => MoveKind::Promotion,
        }
    }

    /// The promotion piece, for promotion moves only.
    pub const fn promotion_piece(self) -> Option<Promotion> {
        if !matches!(self.kind(), MoveKind::Promotion) {
            return None;
        }
        Some(match (self.0 & PROMO_MASK) >> PROMO_SHIFT {
            0 => Promotion::Knight,
            1 => Promotion::Bishop,
            2 => Promotion::Rook,
            _ => Promotion::Queen,
        })
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// UCI long algebraic notation; the null move prints as `0000`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("0000");
        }
        write!(f, "{}{}", self.source(), self.target())?;
        if let Some(piece) = self.promotion_piece() {
            write!(f, "{}", piece.uci_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self} {:?})", self.kind())
    }
}

/// Largest move count reachable from a legal position is 218.
///
/// Generation assumes a board that passed [`Board::validate`](crate::Board::validate),
/// whose material limits keep the pseudo-legal count below this capacity.
pub const MAX_MOVES: usize = 256;

/// Stack-allocated move buffer with a length.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::NULL; MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES, "move list overflow");
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[Move]> for MoveList {
    fn as_ref(&self) -> &[Move] {
        self.as_slice()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(|mv| mv.to_string())).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveKind, MoveList, Promotion};
    use crate::square::Square;

    #[test]
    fn fits_in_two_bytes() {
        assert_eq!(std::mem::size_of::<Move>(), 2);
    }

    #[test]
    fn fields_survive_packing() {
        let mv = Move::promotion(Square::B7, Square::A8, Promotion::Knight);
        assert_eq!(mv.source(), Square::B7);
        assert_eq!(mv.target(), Square::A8);
        assert_eq!(mv.kind(), MoveKind::Promotion);
        assert_eq!(mv.promotion_piece(), Some(Promotion::Knight));

        let castle = Move::castle(Square::E8, Square::C8);
        assert_eq!(castle.kind(), MoveKind::Castle);
        assert_eq!(castle.promotion_piece(), None);
    }

    #[test]
    fn uci_text() {
        assert_eq!(Move::new(Square::G1, Square::F3).to_string(), "g1f3");
        assert_eq!(
            Move::promotion(Square::E7, Square::E8, Promotion::Queen).to_string(),
            "e7e8q"
        );
        assert_eq!(Move::en_passant(Square::E5, Square::D6).to_string(), "e5d6");
        assert_eq!(Move::NULL.to_string(), "0000");
    }

    #[test]
    fn kinds_distinguish_equal_squares() {
        let normal = Move::new(Square::E5, Square::D6);
        let ep = Move::en_passant(Square::E5, Square::D6);
        assert_ne!(normal, ep);
    }

    #[test]
    fn move_list_push_and_slice() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        list.push(Move::new(Square::E2, Square::E4));
        list.push(Move::new(Square::D2, Square::D4));
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[1], Move::new(Square::D2, Square::D4));
        assert_eq!(list.iter().count(), 2);
    }
}
