//! Fixed-depth negamax with fail-hard alpha-beta pruning.

use tracing::trace;

use crate::search::context::{MoveTrial, SearchContext};
use crate::search::traits::{Evaluator, MoveGenerator};

/// Search `position` to `depth` plies inside the window `(alpha, beta)`.
///
/// Scores are from the side to move's point of view. A child is searched
/// with the window `(-beta, -alpha)` and its score negated. A move scoring
/// `beta` or more ends the node with `beta` itself.
///
/// At the root (`ctx.ply == 0`) the first move that raises alpha the most is
/// written to `ctx.best_move`, but only if alpha ended above where it started.
///
/// `depth == 0` returns the static evaluation and leaves `ctx` untouched.
/// Every move attempt is rolled back before the next one, so `position` is
/// unchanged on return.
///
/// # Panics
///
/// Panics if `alpha >= beta`. Build the window with
/// [`SearchBounds::new`](crate::SearchBounds::new) to reject it as an error instead.
pub fn negamax<P, E>(
    position: &mut P,
    evaluator: &E,
    ctx: &mut SearchContext<P::Move>,
    mut alpha: i32,
    beta: i32,
    depth: u32,
) -> i32
where
    P: MoveGenerator,
    E: Evaluator<P>,
{
    assert!(alpha < beta, "window ({alpha}, {beta}) is empty");

    if depth == 0 {
        return evaluator.evaluate(position);
    }

    ctx.nodes += 1;
    let old_alpha = alpha;
    let mut root_candidate = None;
    let mut any_legal = false;

    let moves = position.generate_moves();
    for &mv in moves.as_ref() {
        let score = {
            let mut trial = MoveTrial::begin(position);
            ctx.ply += 1;
            if !trial.apply(mv) {
                ctx.ply -= 1;
                continue;
            }
            any_legal = true;
            let score = -negamax(&mut *trial, evaluator, ctx, -beta, -alpha, depth - 1);
            ctx.ply -= 1;
            score
        };

        if score >= beta {
            if ctx.at_root() {
                trace!(?mv, score, beta, "root cutoff");
            }
            return beta;
        }

        if score > alpha {
            debug_assert!(score > old_alpha);
            alpha = score;
            if ctx.at_root() {
                trace!(?mv, score, "new root best");
                root_candidate = Some(mv);
            }
        }
    }

    if !any_legal && let Some(terminal) = evaluator.no_legal_moves(position, ctx.ply) {
        return terminal.clamp(alpha, beta);
    }

    if alpha != old_alpha && let Some(mv) = root_candidate {
        ctx.best_move = Some(mv);
    }
    alpha
}

#[cfg(test)]
mod tests {
    use super::negamax;
    use crate::search::context::{INF, SearchContext};
    use crate::search::traits::{BoardMutator, Evaluator, MoveGenerator};

    /// A Nim-like pile: take 1, 2 or 3; taking more than remains is illegal.
    /// The player who takes the last stone wins.
    #[derive(Debug, Clone, PartialEq)]
    struct Pile {
        stones: u32,
        log: Vec<u32>,
    }

    impl BoardMutator for Pile {
        type Move = u32;
        type Snapshot = u32;

        fn snapshot(&self) -> u32 {
            self.stones
        }

        fn apply(&mut self, take: u32) -> bool {
            self.log.push(take);
            match self.stones.checked_sub(take) {
                Some(left) => {
                    self.stones = left;
                    true
                }
                None => false,
            }
        }

        fn restore(&mut self, stones: u32) {
            self.stones = stones;
        }
    }

    impl MoveGenerator for Pile {
        type MoveList = [u32; 3];

        fn generate_moves(&self) -> [u32; 3] {
            [1, 2, 3]
        }
    }

    struct PileEval;

    impl Evaluator<Pile> for PileEval {
        fn evaluate(&self, _: &Pile) -> i32 {
            0
        }

        fn no_legal_moves(&self, pile: &Pile, _ply: u32) -> Option<i32> {
            // Unreachable with moves of 1..=3 unless the pile is empty:
            // the previous player took the last stone.
            (pile.stones == 0).then_some(-100)
        }
    }

    fn pile(stones: u32) -> Pile {
        Pile { stones, log: Vec::new() }
    }

    #[test]
    fn depth_zero_is_the_static_eval() {
        let mut p = pile(5);
        let mut ctx = SearchContext::new();
        let score = negamax(&mut p, &|pile: &Pile| pile.stones as i32, &mut ctx, -INF, INF, 0);
        assert_eq!(score, 5);
        assert_eq!(ctx, SearchContext::new());
        assert!(p.log.is_empty());
    }

    #[test]
    fn winning_pile_takes_the_remainder() {
        // From 3 stones, taking all three wins at once.
        let mut p = pile(3);
        let mut ctx = SearchContext::new();
        let score = negamax(&mut p, &PileEval, &mut ctx, -INF, INF, 2);
        assert_eq!(score, 100);
        assert_eq!(ctx.best_move, Some(3));
        assert_eq!(ctx.ply, 0);
        assert_eq!(p.stones, 3);
    }

    #[test]
    fn multiple_of_four_is_lost() {
        let mut p = pile(4);
        let mut ctx = SearchContext::new();
        let score = negamax(&mut p, &PileEval, &mut ctx, -INF, INF, 4);
        assert_eq!(score, -100);
        // Every move loses equally; the first one raised alpha above -INF.
        assert_eq!(ctx.best_move, Some(1));
    }

    #[test]
    fn terminal_score_is_clamped_into_window() {
        let mut p = pile(0);
        let mut ctx = SearchContext::new();
        let score = negamax(&mut p, &PileEval, &mut ctx, -50, 50, 3);
        assert_eq!(score, -50);
        assert_eq!(ctx.best_move, None);
        assert_eq!(ctx.nodes, 1);
    }

    #[test]
    fn default_terminal_policy_returns_alpha() {
        let mut p = pile(0);
        let mut ctx = SearchContext::new();
        let score = negamax(&mut p, &|_: &Pile| 7, &mut ctx, -20, 20, 3);
        assert_eq!(score, -20);
        assert_eq!(ctx.best_move, None);
    }

    #[test]
    #[should_panic(expected = "is empty")]
    fn inverted_window_panics_even_without_legal_moves() {
        let mut p = pile(0);
        let mut ctx = SearchContext::new();
        negamax(&mut p, &PileEval, &mut ctx, 30, -30, 2);
    }
}
