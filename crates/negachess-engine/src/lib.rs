//! Search and evaluation for negachess.
//!
//! The search is generic over [`BoardMutator`], [`MoveGenerator`] and
//! [`Evaluator`]; [`negachess_core::Board`] implements the first two.

mod chess;
mod error;
#[cfg(feature = "hce")]
pub mod eval;
pub mod search;

pub use error::SearchError;
#[cfg(feature = "hce")]
pub use eval::{Hce, MATE_SCORE, evaluate};
pub use search::context::{INF, MoveTrial, SearchBounds, SearchContext};
pub use search::negamax::negamax;
pub use search::traits::{BoardMutator, Evaluator, MoveGenerator};
pub use search::{SearchResult, Searcher};
