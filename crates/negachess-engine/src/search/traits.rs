//! What the search needs from a game: mutation with undo, move generation,
//! and a static evaluation.
//!
//! The search never looks inside a move or a position. Anything that can
//! produce candidate moves, apply them with a legality verdict, and roll back
//! to a saved state can be searched.

use std::fmt::Debug;

/// A position that can be changed in place and rolled back.
pub trait BoardMutator {
    /// An encoded move. Only equality and being handed back to
    /// [`apply`](BoardMutator::apply) matter to the search.
    type Move: Copy + PartialEq + Debug;

    /// A save point produced by [`snapshot`](BoardMutator::snapshot).
    type Snapshot;

    /// Capture the current state.
    fn snapshot(&self) -> Self::Snapshot;

    /// Play `mv` in place and report whether it was legal.
    ///
    /// After a `false` the position may be in any state; only
    /// [`restore`](BoardMutator::restore) is required to repair it.
    fn apply(&mut self, mv: Self::Move) -> bool;

    /// Return to exactly the state `snapshot` captured.
    fn restore(&mut self, snapshot: Self::Snapshot);
}

/// Candidate move production.
pub trait MoveGenerator: BoardMutator {
    type MoveList: AsRef<[Self::Move]>;

    /// Candidates for the side to move, in a deterministic order. The list may
    /// contain moves that [`apply`](BoardMutator::apply) rejects.
    fn generate_moves(&self) -> Self::MoveList;
}

/// Static evaluation of a position, from the side to move's point of view.
pub trait Evaluator<P> {
    fn evaluate(&self, position: &P) -> i32;

    /// Score for a node where every candidate move was rejected.
    ///
    /// `None` leaves the node's lower bound as its value. `Some` is clamped into
    /// the node's window.
    fn no_legal_moves(&self, _position: &P, _ply: u32) -> Option<i32> {
        None
    }
}

impl<P, F> Evaluator<P> for F
where
    F: Fn(&P) -> i32,
{
    fn evaluate(&self, position: &P) -> i32 {
        self(position)
    }
}
