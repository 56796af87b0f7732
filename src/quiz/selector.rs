//! Quiz round selection

use crate::bank::{Bank, Question};
use crate::error::{Error, Result};
use crate::types::{CategoryFilter, QuestionId};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Result of one quiz round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// A question not seen before in this session
    Picked(Question),
    /// Every eligible question has already been presented
    Exhausted,
}

impl QuizOutcome {
    /// Check if the session is complete
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// The picked question, if one was picked
    pub fn picked(&self) -> Option<&Question> {
        match self {
            Self::Picked(question) => Some(question),
            Self::Exhausted => None,
        }
    }
}

/// Select the next question from a pool snapshot.
///
/// `previously_seen` ids that are not in the pool (stale client state from a
/// prior category) drop out in the set difference and have no effect.
///
/// An empty pool fails with [`Error::NotFound`]: the category has no
/// questions at all, which is a data problem rather than a finished session.
/// The pick is uniform over the remaining questions; seed `rng` for a
/// deterministic choice.
pub fn select_next<R: Rng + ?Sized>(
    pool: &[Question],
    previously_seen: &HashSet<QuestionId>,
    rng: &mut R,
) -> Result<QuizOutcome> {
    if pool.is_empty() {
        return Err(Error::not_found("no questions in the requested pool"));
    }

    // Filter first, sample once. Drawing from the full pool and retrying on
    // seen ids is unbounded as the pool drains toward all-seen.
    let remaining: Vec<&Question> = pool
        .iter()
        .filter(|q| !previously_seen.contains(&q.id))
        .collect();

    Ok(match remaining.choose(rng) {
        Some(question) => QuizOutcome::Picked((*question).clone()),
        None => QuizOutcome::Exhausted,
    })
}

/// Resolve the eligible pool from the store and select from it.
///
/// The pool is queried exactly once, so the round works on one consistent
/// snapshot even if the bank changes concurrently.
pub async fn draw<R: Rng + ?Sized>(
    bank: &dyn Bank,
    filter: CategoryFilter,
    previously_seen: &HashSet<QuestionId>,
    rng: &mut R,
) -> Result<QuizOutcome> {
    let pool = bank.list_questions(filter).await?;
    select_next(&pool, previously_seen, rng)
}
