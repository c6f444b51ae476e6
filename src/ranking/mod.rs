//! Ranking pipeline: filter, scorer, majority-vote comparator, runner.
//!
//! The pipeline is a single synchronous pass over a small in-memory
//! list: discard incomplete rows, attach the two derived criterion
//! scores, then stable-sort with the pairwise majority-vote comparator.
//!
//! # Key Types
//!
//! - [`RankRunner`]: Executes the end-to-end pipeline
//! - [`RankOutcome`]: Ordered result or the no-valid-input signal
//! - [`RankResult`]: Ordered rows plus admission statistics
//! - [`ScoredRow`]: A row with its ephemeral per-invocation scores
//!
//! # The comparator is a vote, not a formula
//!
//! Relative priority is decided by a majority vote over three
//! independent criteria (age, condition score, sickness score), not by
//! a weighted sum. The vote is intentionally not transitive — see
//! [`majority_vote`] — so the final order is whatever one stable sort
//! pass produces. Collapsing the vote into a single scalar would
//! silently change the output on cyclic inputs and is not an
//! equivalent implementation.

mod comparator;
mod filter;
mod runner;
mod score;

pub use comparator::majority_vote;
pub use filter::admit;
pub use runner::{RankOutcome, RankResult, RankRunner};
pub use score::{attach_scores, ScoredRow};
