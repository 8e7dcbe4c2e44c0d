//! Errors from FEN parsing, board validation, and move-string parsing.

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have six space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount { found: usize },

    /// The placement field does not have eight ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount { found: usize },

    /// A rank describes more or fewer than eight squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based position in the FEN (0 = rank 8).
        rank_index: usize,
        length: usize,
    },

    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },

    #[error("invalid active color: \"{found}\"")]
    InvalidColor { found: String },

    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar { character: char },

    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant { found: String },

    /// The halfmove clock or fullmove number is not a number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter { field: &'static str, found: String },

    /// The placement parses but describes an impossible board.
    #[error("invalid board: {source}")]
    InvalidBoard {
        #[from]
        source: BoardError,
    },
}

/// Structural problems with a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount { color: &'static str, count: u32 },

    /// More pawns, or more promoted pieces, than eight pawns could supply.
    #[error("{color} has more material than a game can produce")]
    ImpossibleMaterial { color: &'static str },

    #[error("pawns found on back rank")]
    PawnsOnBackRank,

    #[error("overlapping piece bitboards")]
    OverlappingPieces,

    #[error("side bitboards are inconsistent with piece bitboards")]
    InconsistentSides,
}

/// Errors from turning a UCI move string into a [`Move`](crate::Move).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    /// Not of the form `e2e4` or `e7e8q`.
    #[error("malformed move string: \"{text}\"")]
    Malformed { text: String },

    /// Well formed, but not a legal move in the position.
    #[error("illegal move in this position: \"{text}\"")]
    Illegal { text: String },
}
