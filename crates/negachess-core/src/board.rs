//! Position state: piece bitboards, side to move, castling, en passant, clocks.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// A chess position.
///
/// `Board` is `Copy`: a snapshot is a plain value copy, and restoring one is an
/// assignment.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// One set per piece kind, both colors merged.
    pieces: [Bitboard; PieceKind::COUNT],
    /// One set per color.
    sides: [Bitboard; Color::COUNT],
    side_to_move: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// A board with no pieces, White to move, no rights.
    pub(crate) fn empty() -> Board {
        Board {
            pieces: [Bitboard::EMPTY; PieceKind::COUNT],
            sides: [Bitboard::EMPTY; Color::COUNT],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The standard initial position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (file, kind) in (0u8..).zip(BACK_RANK) {
            for (color, back, pawns) in [(Color::White, 0, 1), (Color::Black, 7, 6)] {
                if let (Some(back_sq), Some(pawn_sq)) =
                    (Square::from_coords(file, back), Square::from_coords(file, pawns))
                {
                    board.put(back_sq, Piece::new(kind, color));
                    board.put(pawn_sq, Piece::new(PieceKind::Pawn, color));
                }
            }
        }
        board.castling = CastleRights::ALL;
        board
    }

    pub fn piece_on(&self, sq: Square) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| self.pieces[kind.index()].contains(sq))
    }

    pub fn color_on(&self, sq: Square) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|color| self.sides[color.index()].contains(sq))
    }

    /// The colored piece on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        Some(Piece::new(self.piece_on(sq)?, self.color_on(sq)?))
    }

    /// Squares holding `kind`, either color.
    #[inline]
    pub fn pieces(&self, kind: PieceKind) -> Bitboard {
        self.pieces[kind.index()]
    }

    /// Squares holding pieces of `color`.
    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        self.sides[color.index()]
    }

    /// Squares holding `kind` of `color`.
    #[inline]
    pub fn colored(&self, kind: PieceKind, color: Color) -> Bitboard {
        self.pieces[kind.index()] & self.sides[color.index()]
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.sides[Color::White.index()] | self.sides[Color::Black.index()]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Square a pawn may capture onto en passant, if the last move was a double push.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Square of `color`'s king, or `None` on a board without one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.colored(PieceKind::King, color).lsb()
    }

    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        let bb = sq.bitboard();
        self.pieces[piece.kind().index()] |= bb;
        self.sides[piece.color().index()] |= bb;
    }

    /// Lift whatever stands on `sq`.
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_at(sq)?;
        let clear = !sq.bitboard();
        self.pieces[piece.kind().index()] &= clear;
        self.sides[piece.color().index()] &= clear;
        Some(piece)
    }

    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    pub(crate) fn set_clocks(&mut self, halfmove_clock: u16, fullmove_number: u16) {
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
    }

    /// Check structural consistency: one king per side, no pawns on the back
    /// ranks, and piece sets that agree with color sets.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let name = match color {
                Color::White => "white",
                Color::Black => "black",
            };

            let count = self.colored(PieceKind::King, color).count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color: name, count });
            }

            // Every piece beyond the initial set must be a promoted pawn.
            let pawns = self.colored(PieceKind::Pawn, color).count();
            let promoted: u32 = [
                (PieceKind::Knight, 2),
                (PieceKind::Bishop, 2),
                (PieceKind::Rook, 2),
                (PieceKind::Queen, 1),
            ]
            .into_iter()
            .map(|(kind, initial)| self.colored(kind, color).count().saturating_sub(initial))
            .sum();
            if pawns > 8 || pawns + promoted > 8 {
                return Err(BoardError::ImpossibleMaterial { color: name });
            }
        }

        if (self.pieces(PieceKind::Pawn) & (Bitboard::RANK_1 | Bitboard::RANK_8)).is_nonempty() {
            return Err(BoardError::PawnsOnBackRank);
        }

        let mut seen = Bitboard::EMPTY;
        for set in self.pieces {
            if (seen & set).is_nonempty() {
                return Err(BoardError::OverlappingPieces);
            }
            seen |= set;
        }

        let [white, black] = self.sides;
        if (white & black).is_nonempty() || seen != (white | black) {
            return Err(BoardError::InconsistentSides);
        }

        Ok(())
    }

    /// An 8x8 text diagram of the position.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{self}\")")
    }
}

/// Diagram view of a [`Board`], rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0u8..8 {
                let c = Square::from_coords(file, rank)
                    .and_then(|sq| self.0.piece_at(sq))
                    .map_or('.', Piece::fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::piece::{Piece, PieceKind};
    use crate::square::Square;

    #[test]
    fn starting_position_is_valid() {
        let board = Board::starting_position();
        board.validate().unwrap();
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(
            board.piece_at(Square::D1),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        assert_eq!(
            board.piece_at(Square::G8),
            Some(Piece::new(PieceKind::Knight, Color::Black))
        );
        assert_eq!(board.piece_on(Square::E7), Some(PieceKind::Pawn));
        assert_eq!(board.piece_at(Square::E4), None);
        assert_eq!(board.king_square(Color::Black), Some(Square::E8));
    }

    #[test]
    fn take_and_put() {
        let mut board = Board::starting_position();
        let pawn = board.take(Square::E2).unwrap();
        assert_eq!(board.piece_at(Square::E2), None);
        board.put(Square::E4, pawn);
        assert_eq!(board.color_on(Square::E4), Some(Color::White));
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.take(Square::E3), None);
    }

    #[test]
    fn missing_king_fails_validation() {
        let mut board = Board::starting_position();
        board.take(Square::E8);
        assert_eq!(board.king_square(Color::Black), None);
        assert_eq!(
            board.validate(),
            Err(BoardError::InvalidKingCount { color: "black", count: 0 })
        );
    }

    #[test]
    fn pawn_on_back_rank_fails_validation() {
        let mut board = Board::starting_position();
        board.take(Square::A1);
        let pawn = board.take(Square::A2).unwrap();
        board.put(Square::A1, pawn);
        assert_eq!(board.validate(), Err(BoardError::PawnsOnBackRank));
    }

    #[test]
    fn extra_piece_beside_eight_pawns_fails_validation() {
        let mut board = Board::starting_position();
        board.put(Square::E4, Piece::new(PieceKind::Queen, Color::White));
        assert_eq!(
            board.validate(),
            Err(BoardError::ImpossibleMaterial { color: "white" })
        );
    }

    #[test]
    fn promoted_piece_replacing_a_pawn_is_valid() {
        let mut board = Board::starting_position();
        board.take(Square::H7);
        board.put(Square::E5, Piece::new(PieceKind::Knight, Color::Black));
        assert_eq!(board.validate(), Ok(()));
    }

    #[test]
    fn pretty_diagram() {
        let text = Board::starting_position().pretty().to_string();
        assert!(text.starts_with("8  r n b q k b n r"));
        assert!(text.contains("1  R N B Q K B N R"));
        assert!(text.ends_with("a b c d e f g h"));
    }
}
