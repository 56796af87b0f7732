//! Question bank module
//!
//! The store behind every endpoint: two collections, `Question` and
//! `Category`, with exact-match, substring, and filter-by-category lookups.
//!
//! # Overview
//!
//! The bank module provides:
//! - [`Bank`] - the store interface the API and quiz selector consume
//! - [`MemoryBank`] - in-memory implementation seeded from a definition
//! - YAML bank-definition parsing with validation

mod loader;
mod memory;
mod types;

pub use loader::{builtin_bank, load_bank, load_bank_from_str};
pub use memory::MemoryBank;
pub use types::{
    BankDefinition, Category, Question, QuestionDraft, MAX_DIFFICULTY, MIN_DIFFICULTY,
};

use crate::error::Result;
use crate::types::{CategoryFilter, CategoryId, QuestionId};
use async_trait::async_trait;

/// Interface to the question store.
///
/// Listings are ordered by ascending id so pagination over them is stable.
/// Mutations are single-row; there are no cross-mutation transactions.
#[async_trait]
pub trait Bank: Send + Sync {
    /// List questions, optionally scoped to one category
    async fn list_questions(&self, filter: CategoryFilter) -> Result<Vec<Question>>;

    /// Case-insensitive substring search over question and answer text
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>>;

    /// Insert a new question, assigning the next id
    async fn insert_question(&self, draft: QuestionDraft) -> Result<Question>;

    /// Delete a question; `NotFound` when the id does not exist
    async fn delete_question(&self, id: QuestionId) -> Result<()>;

    /// List all categories
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// Look up one category by id
    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>>;
}
