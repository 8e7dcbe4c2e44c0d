//! Side colors.

use std::fmt;
use std::ops::Not;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Number of sides.
    pub const COUNT: usize = 2;

    /// Both sides, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Array index for per-side tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The opponent.
    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank offset of a single pawn push for this side, in square indices.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 8,
            Color::Black => -8,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.opponent()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "w",
            Color::Black => "b",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn opponent_is_an_involution() {
        for color in Color::ALL {
            assert_eq!(color.opponent().opponent(), color);
            assert_ne!(color.opponent(), color);
        }
        assert_eq!(!Color::White, Color::Black);
    }

    #[test]
    fn forward_points_toward_promotion() {
        assert_eq!(Color::White.forward(), 8);
        assert_eq!(Color::Black.forward(), -8);
    }

    #[test]
    fn fen_letters() {
        assert_eq!(Color::White.to_string(), "w");
        assert_eq!(Color::Black.to_string(), "b");
    }
}
