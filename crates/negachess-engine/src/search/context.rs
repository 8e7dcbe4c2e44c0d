//! Per-search state, the alpha-beta window, and the scoped move trial.

use std::ops::{Deref, DerefMut};

use crate::error::SearchError;
use crate::search::traits::BoardMutator;

/// Score bound wider than any evaluation or mate score.
pub const INF: i32 = 30_000;

/// An `(alpha, beta)` window with `alpha < beta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBounds {
    alpha: i32,
    beta: i32,
}

impl SearchBounds {
    /// Build a window, rejecting empty or inverted ones.
    pub fn new(alpha: i32, beta: i32) -> Result<SearchBounds, SearchError> {
        for value in [alpha, beta] {
            if value == i32::MIN {
                return Err(SearchError::UnnegatableBound { value });
            }
        }
        if alpha >= beta {
            return Err(SearchError::InvertedWindow { alpha, beta });
        }
        Ok(SearchBounds { alpha, beta })
    }

    /// `(-INF, INF)`.
    pub const fn full() -> SearchBounds {
        SearchBounds { alpha: -INF, beta: INF }
    }

    #[inline]
    pub const fn alpha(self) -> i32 {
        self.alpha
    }

    #[inline]
    pub const fn beta(self) -> i32 {
        self.beta
    }

    /// The window as seen from the opponent's side: `(-beta, -alpha)`.
    #[inline]
    pub const fn child(self) -> SearchBounds {
        SearchBounds {
            alpha: -self.beta,
            beta: -self.alpha,
        }
    }
}

impl Default for SearchBounds {
    fn default() -> Self {
        SearchBounds::full()
    }
}

/// Counters and the root result register shared by one search call tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchContext<M> {
    /// Moves applied between the root and the current node.
    pub ply: u32,
    /// Internal nodes visited; leaf evaluations are not counted.
    pub nodes: u64,
    /// Best root move committed so far.
    pub best_move: Option<M>,
}

impl<M> SearchContext<M> {
    pub const fn new() -> SearchContext<M> {
        SearchContext {
            ply: 0,
            nodes: 0,
            best_move: None,
        }
    }

    /// Back to the state a top-level search must start from.
    pub fn reset(&mut self) {
        *self = SearchContext::new();
    }

    /// Whether the current node is the root of the search.
    #[inline]
    pub fn at_root(&self) -> bool {
        self.ply == 0
    }
}

impl<M> Default for SearchContext<M> {
    fn default() -> Self {
        SearchContext::new()
    }
}

/// One attempt at a move.
///
/// Takes a snapshot when created and restores it when dropped, so the
/// position is rolled back whether the attempt is rejected, searched, or
/// cut off. Dereferences to the position for the recursive call.
pub struct MoveTrial<'a, P: BoardMutator> {
    position: &'a mut P,
    snapshot: Option<P::Snapshot>,
}

impl<'a, P: BoardMutator> MoveTrial<'a, P> {
    pub fn begin(position: &'a mut P) -> MoveTrial<'a, P> {
        let snapshot = Some(position.snapshot());
        MoveTrial { position, snapshot }
    }

    /// Play `mv` on the guarded position; `false` if it was illegal.
    pub fn apply(&mut self, mv: P::Move) -> bool {
        self.position.apply(mv)
    }
}

impl<P: BoardMutator> Deref for MoveTrial<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        &*self.position
    }
}

impl<P: BoardMutator> DerefMut for MoveTrial<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        &mut *self.position
    }
}

impl<P: BoardMutator> Drop for MoveTrial<'_, P> {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.position.restore(snapshot);
        }
    }
}
