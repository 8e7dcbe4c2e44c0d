//! Fixed-depth game-tree search.

pub mod context;
pub mod negamax;
pub mod traits;

use tracing::debug;

use context::{SearchBounds, SearchContext};
use negamax::negamax;
use traits::{Evaluator, MoveGenerator};

/// Outcome of one top-level search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<M> {
    /// Root score from the side to move's point of view.
    pub score: i32,
    /// Root move that raised alpha the most, or `None` if nothing beat the
    /// initial lower bound.
    pub best_move: Option<M>,
    /// Internal nodes visited.
    pub nodes: u64,
    /// Depth searched, in plies.
    pub depth: u32,
}

/// Runs fixed-depth searches inside a configured window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Searcher {
    bounds: SearchBounds,
}

impl Searcher {
    pub fn new(bounds: SearchBounds) -> Searcher {
        Searcher { bounds }
    }

    pub fn bounds(&self) -> SearchBounds {
        self.bounds
    }

    /// Search `position` to `depth` plies from a fresh context.
    ///
    /// `position` is restored before returning.
    pub fn search<P, E>(&self, position: &mut P, evaluator: &E, depth: u32) -> SearchResult<P::Move>
    where
        P: MoveGenerator,
        E: Evaluator<P>,
    {
        let mut ctx = SearchContext::new();
        self.search_with(&mut ctx, position, evaluator, depth)
    }

    /// Search against a caller-owned context without resetting it.
    ///
    /// A best move already in `ctx` survives unless the search raises alpha.
    /// Node counts accumulate. `ctx.ply` must be zero.
    pub fn search_with<P, E>(
        &self,
        ctx: &mut SearchContext<P::Move>,
        position: &mut P,
        evaluator: &E,
        depth: u32,
    ) -> SearchResult<P::Move>
    where
        P: MoveGenerator,
        E: Evaluator<P>,
    {
        debug_assert!(ctx.at_root(), "search started at ply {}", ctx.ply);

        let score = negamax(
            position,
            evaluator,
            ctx,
            self.bounds.alpha(),
            self.bounds.beta(),
            depth,
        );
        debug!(
            depth,
            score,
            nodes = ctx.nodes,
            best_move = ?ctx.best_move,
            "search complete"
        );

        SearchResult {
            score,
            best_move: ctx.best_move,
            nodes: ctx.nodes,
            depth,
        }
    }
}
