//! Long algebraic move strings (`e2e4`, `e7e8q`).

use crate::board::Board;
use crate::chess_move::{Move, Promotion};
use crate::error::MoveParseError;
use crate::square::Square;

/// Check the shape of a move string without consulting a position.
fn well_formed(text: &str) -> bool {
    let squares_ok = |from: &str, to: &str| {
        Square::from_algebraic(from).is_some() && Square::from_algebraic(to).is_some()
    };
    match text.len() {
        4 => squares_ok(&text[..2], &text[2..4]),
        5 => {
            squares_ok(&text[..2], &text[2..4])
                && text[4..].chars().next().and_then(Promotion::from_uci_char).is_some()
        }
        _ => false,
    }
}

impl Board {
    /// Resolve `text` against the legal moves of this position.
    pub fn parse_uci_move(&self, text: &str) -> Result<Move, MoveParseError> {
        if !text.is_ascii() || !well_formed(text) {
            return Err(MoveParseError::Malformed { text: text.to_string() });
        }
        self.legal_moves()
            .iter()
            .copied()
            .find(|mv| mv.to_string() == text)
            .ok_or_else(|| MoveParseError::Illegal { text: text.to_string() })
    }

    /// Play each move string in order.
    ///
    /// Stops at the first string that does not name a legal move; the moves
    /// before it stay played.
    pub fn play_uci_moves<'a, I>(&mut self, moves: I) -> Result<(), MoveParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for text in moves {
            let mv = self.parse_uci_move(text)?;
            if !self.make_move(mv) {
                return Err(MoveParseError::Illegal { text: text.to_string() });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::{Move, Promotion};
    use crate::error::MoveParseError;
    use crate::square::Square;

    #[test]
    fn parses_legal_moves() {
        let board = Board::starting_position();
        assert_eq!(
            board.parse_uci_move("g1f3"),
            Ok(Move::new(Square::G1, Square::F3))
        );
    }

    #[test]
    fn parses_promotion_and_castle() {
        let board: Board = "r3k3/1P6/8/8/8/8/8/4K2R w K - 0 1".parse().unwrap();
        assert_eq!(
            board.parse_uci_move("b7a8n"),
            Ok(Move::promotion(Square::B7, Square::A8, Promotion::Knight))
        );
        assert_eq!(
            board.parse_uci_move("e1g1"),
            Ok(Move::castle(Square::E1, Square::G1))
        );
    }

    #[test]
    fn rejects_malformed_and_illegal() {
        let board = Board::starting_position();
        for bad in ["", "e2", "e2e9", "e2e4x", "e2-e4", "é2e4"] {
            assert!(
                matches!(board.parse_uci_move(bad), Err(MoveParseError::Malformed { .. })),
                "accepted {bad:?}"
            );
        }
        assert_eq!(
            board.parse_uci_move("e2e5"),
            Err(MoveParseError::Illegal { text: "e2e5".into() })
        );
    }

    #[test]
    fn plays_a_sequence() {
        let mut board = Board::starting_position();
        board.play_uci_moves(["e2e4", "e7e5", "g1f3"]).unwrap();
        assert_eq!(
            board.to_string(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
        );
    }

    #[test]
    fn stops_at_first_bad_move() {
        let mut board = Board::starting_position();
        let err = board.play_uci_moves(["e2e4", "e2e4", "d7d5"]).unwrap_err();
        assert_eq!(err, MoveParseError::Illegal { text: "e2e4".into() });
        assert_eq!(board.side_to_move(), crate::color::Color::Black);
    }
}
