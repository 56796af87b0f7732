//! Quiz selection module
//!
//! Picks one random unseen question per round of a quiz session.
//!
//! # Overview
//!
//! The caller supplies the set of question ids already presented this
//! session; the selector filters those out of the eligible pool and samples
//! once from what remains. When nothing remains the round ends with
//! [`QuizOutcome::Exhausted`], which is a normal terminal outcome and
//! distinct from an empty pool (that is a `NotFound` error).
//!
//! Both entry points are pure with respect to shared state: every call works
//! on its own pool snapshot and seen-set, so they are safe to invoke from
//! concurrent request handlers.

mod selector;

pub use selector::{draw, select_next, QuizOutcome};

#[cfg(test)]
mod tests;
