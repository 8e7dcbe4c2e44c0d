//! Board squares in little-endian rank-file order (a1 = 0, h1 = 7, h8 = 63).

use std::fmt;

use crate::bitboard::Bitboard;

/// A square on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

macro_rules! named_squares {
    ($($name:ident = $index:expr),* $(,)?) => {
        impl Square {
            $(pub const $name: Square = Square($index);)*
        }
    };
}

#[rustfmt::skip]
named_squares! {
    A1 = 0,  B1 = 1,  C1 = 2,  D1 = 3,  E1 = 4,  F1 = 5,  G1 = 6,  H1 = 7,
    A2 = 8,  B2 = 9,  C2 = 10, D2 = 11, E2 = 12, F2 = 13, G2 = 14, H2 = 15,
    A3 = 16, B3 = 17, C3 = 18, D3 = 19, E3 = 20, F3 = 21, G3 = 22, H3 = 23,
    A4 = 24, B4 = 25, C4 = 26, D4 = 27, E4 = 28, F4 = 29, G4 = 30, H4 = 31,
    A5 = 32, B5 = 33, C5 = 34, D5 = 35, E5 = 36, F5 = 37, G5 = 38, H5 = 39,
    A6 = 40, B6 = 41, C6 = 42, D6 = 43, E6 = 44, F6 = 45, G6 = 46, H6 = 47,
    A7 = 48, B7 = 49, C7 = 50, D7 = 51, E7 = 52, F7 = 53, G7 = 54, H7 = 55,
    A8 = 56, B8 = 57, C8 = 58, D8 = 59, E8 = 60, F8 = 61, G8 = 62, H8 = 63,
}

impl Square {
    /// Number of squares.
    pub const COUNT: usize = 64;

    /// Build a square from zero-based file and rank, each in `0..8`.
    #[inline]
    pub const fn from_coords(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Build a square from its index, or `None` when `index >= 64`.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Build a square from an index already known to be in range.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parse algebraic notation such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        match s.as_bytes() {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Square::from_coords(file - b'a', rank - b'1')
            }
            _ => None,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Zero-based file (a = 0).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Zero-based rank (rank 1 = 0).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Square reflected across the horizontal midline (a1 <-> a8).
    #[inline]
    pub const fn flip_rank(self) -> Square {
        Square(self.0 ^ 56)
    }

    /// Square displaced by `delta` indices, if it stays on the board.
    ///
    /// Only meaningful for vertical offsets; horizontal wrap is not detected.
    #[inline]
    pub const fn offset(self, delta: i8) -> Option<Square> {
        let target = self.0 as i16 + delta as i16;
        if target >= 0 && target < 64 {
            Some(Square(target as u8))
        } else {
            None
        }
    }

    /// Single-bit bitboard for this square.
    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(1u64 << self.0)
    }

    /// All squares from a1 to h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, self.rank() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn algebraic_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::from_algebraic(&sq.to_string()), Some(sq));
        }
        assert_eq!(Square::from_algebraic("e4"), Some(Square::E4));
    }

    #[test]
    fn algebraic_rejects_garbage() {
        for bad in ["", "e", "e9", "i1", "E4", "e44"] {
            assert_eq!(Square::from_algebraic(bad), None, "accepted {bad:?}");
        }
    }

    #[test]
    fn coords() {
        assert_eq!(Square::G7.file(), 6);
        assert_eq!(Square::G7.rank(), 6);
        assert_eq!(Square::from_coords(4, 0), Some(Square::E1));
        assert_eq!(Square::from_coords(8, 0), None);
    }

    #[test]
    fn flip_rank_mirrors() {
        assert_eq!(Square::A1.flip_rank(), Square::A8);
        assert_eq!(Square::E2.flip_rank(), Square::E7);
        assert_eq!(Square::H5.flip_rank(), Square::H4);
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Square::E2.offset(16), Some(Square::E4));
        assert_eq!(Square::E7.offset(-16), Some(Square::E5));
        assert_eq!(Square::A8.offset(8), None);
        assert_eq!(Square::H1.offset(-8), None);
    }
}
