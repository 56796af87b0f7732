//! Bank entity types
//!
//! Defines the stored entities and the declarative bank definition.
//! Serialized shapes are flat attribute maps; they are the wire contract
//! with the calling layer.

use crate::error::{Error, Result};
use crate::types::{CategoryId, QuestionId};
use serde::{Deserialize, Serialize};

/// Lowest allowed difficulty score
pub const MIN_DIFFICULTY: u8 = 1;

/// Highest allowed difficulty score
pub const MAX_DIFFICULTY: u8 = 5;

/// A trivia question
///
/// Immutable once created except via explicit delete. The id is unique and
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Store-assigned identifier
    pub id: QuestionId,
    /// Question text shown to the player
    pub question: String,
    /// Answer text
    pub answer: String,
    /// Ordinal difficulty score, 1 (easiest) to 5
    pub difficulty: u8,
    /// Category this question belongs to
    pub category: CategoryId,
}

impl Question {
    /// Substring match over question and answer text.
    ///
    /// `term_lower` must already be lowercased; the two text columns are
    /// lowercased here so the match is case-insensitive on both sides.
    pub fn matches_term(&self, term_lower: &str) -> bool {
        self.question.to_lowercase().contains(term_lower)
            || self.answer.to_lowercase().contains(term_lower)
    }
}

/// A question category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier
    pub id: CategoryId,
    /// Type label, e.g. "Science"
    #[serde(rename = "type")]
    pub kind: String,
}

/// Fields required to create a question; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    /// Question text
    pub question: String,
    /// Answer text
    pub answer: String,
    /// Ordinal difficulty score, 1 to 5
    pub difficulty: u8,
    /// Category the question belongs to
    pub category: CategoryId,
}

impl QuestionDraft {
    /// Validate the draft's own fields (category existence is the store's job)
    pub fn validate(&self) -> Result<()> {
        if self.question.trim().is_empty() {
            return Err(Error::invalid_argument("question text cannot be empty"));
        }
        if self.answer.trim().is_empty() {
            return Err(Error::invalid_argument("answer text cannot be empty"));
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.difficulty) {
            return Err(Error::invalid_argument(format!(
                "difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}, got {}",
                self.difficulty
            )));
        }
        Ok(())
    }

    /// Attach a store-assigned id, producing the stored entity
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            difficulty: self.difficulty,
            category: self.category,
        }
    }
}

/// Declarative bank definition, parsed from YAML
///
/// Question ids are not part of the definition; the store assigns them in
/// definition order when seeding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BankDefinition {
    /// Fixed category set
    pub categories: Vec<Category>,
    /// Seed questions
    #[serde(default)]
    pub questions: Vec<QuestionDraft>,
}
