//! The chess board as a searchable position.
//!
//! A snapshot is a copy of the whole `Board`; restoring assigns it back.

use negachess_core::{Board, Move, MoveList};

use crate::search::traits::{BoardMutator, MoveGenerator};

impl BoardMutator for Board {
    type Move = Move;
    type Snapshot = Board;

    #[inline]
    fn snapshot(&self) -> Board {
        *self
    }

    #[inline]
    fn apply(&mut self, mv: Move) -> bool {
        self.make_move(mv)
    }

    #[inline]
    fn restore(&mut self, snapshot: Board) {
        *self = snapshot;
    }
}

impl MoveGenerator for Board {
    type MoveList = MoveList;

    #[inline]
    fn generate_moves(&self) -> MoveList {
        Board::generate_moves(self)
    }
}
