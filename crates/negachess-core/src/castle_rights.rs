//! Castling rights as a 4-bit set.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

/// Castling rights: bit 0 = White king side, 1 = White queen side,
/// 2 = Black king side, 3 = Black queen side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastleRights(u8);

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const ALL: CastleRights = CastleRights(0b1111);
    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn union(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// King-side right for `color`.
    #[inline]
    pub const fn king_side(color: Color) -> CastleRights {
        match color {
            Color::White => CastleRights::WHITE_KING,
            Color::Black => CastleRights::BLACK_KING,
        }
    }

    /// Queen-side right for `color`.
    #[inline]
    pub const fn queen_side(color: Color) -> CastleRights {
        match color {
            Color::White => CastleRights::WHITE_QUEEN,
            Color::Black => CastleRights::BLACK_QUEEN,
        }
    }

    /// Rights lost when a move starts or ends on `sq`.
    pub const fn revoked_by(sq: Square) -> CastleRights {
        match sq.index() {
            0 => CastleRights::WHITE_QUEEN,
            4 => CastleRights(0b0011),
            7 => CastleRights::WHITE_KING,
            56 => CastleRights::BLACK_QUEEN,
            60 => CastleRights(0b1100),
            63 => CastleRights::BLACK_KING,
            _ => CastleRights::NONE,
        }
    }

    /// Parse the FEN castling field (`"KQkq"`, `"-"`, ...).
    pub fn from_fen(field: &str) -> Result<CastleRights, FenError> {
        if field == "-" {
            return Ok(CastleRights::NONE);
        }
        let mut rights = CastleRights::NONE;
        for c in field.chars() {
            let right = match c {
                'K' => CastleRights::WHITE_KING,
                'Q' => CastleRights::WHITE_QUEEN,
                'k' => CastleRights::BLACK_KING,
                'q' => CastleRights::BLACK_QUEEN,
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            rights = rights.union(right);
        }
        Ok(rights)
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        let letters = [
            (CastleRights::WHITE_KING, 'K'),
            (CastleRights::WHITE_QUEEN, 'Q'),
            (CastleRights::BLACK_KING, 'k'),
            (CastleRights::BLACK_QUEEN, 'q'),
        ];
        for (right, letter) in letters {
            if self.contains(right) {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}
