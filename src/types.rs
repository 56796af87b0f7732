//! Common types used throughout quizbank
//!
//! This module contains the identifier newtypes and the category filter
//! shared across the store, the quiz selector, and the API layer.

use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier of a question (store-assigned)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct QuestionId(pub u64);

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for QuestionId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Unique identifier of a category
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CategoryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// ============================================================================
// Category Filter
// ============================================================================

/// Scopes a question lookup to one category or the whole bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// All questions regardless of category
    #[default]
    Any,
    /// Only questions belonging to this category
    Category(CategoryId),
}

impl CategoryFilter {
    /// Build a filter from a wire-level category id, where 0 means "any".
    ///
    /// The quiz-play request encodes "all categories" as id 0.
    pub fn from_wire(id: u64) -> Self {
        if id == 0 {
            Self::Any
        } else {
            Self::Category(CategoryId(id))
        }
    }

    /// Check whether a question in `category` passes this filter
    pub fn matches(&self, category: CategoryId) -> bool {
        match self {
            Self::Any => true,
            Self::Category(id) => *id == category,
        }
    }

    /// The category id this filter selects, if it selects one
    pub fn category(&self) -> Option<CategoryId> {
        match self {
            Self::Any => None,
            Self::Category(id) => Some(*id),
        }
    }
}

impl From<Option<CategoryId>> for CategoryFilter {
    fn from(id: Option<CategoryId>) -> Self {
        match id {
            Some(id) => Self::Category(id),
            None => Self::Any,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serde_transparent() {
        let id: QuestionId = serde_json::from_str("7").unwrap();
        assert_eq!(id, QuestionId(7));
        assert_eq!(serde_json::to_string(&CategoryId(3)).unwrap(), "3");
    }

    #[test]
    fn test_filter_from_wire() {
        assert_eq!(CategoryFilter::from_wire(0), CategoryFilter::Any);
        assert_eq!(
            CategoryFilter::from_wire(4),
            CategoryFilter::Category(CategoryId(4))
        );
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::Any.matches(CategoryId(9)));
        assert!(CategoryFilter::Category(CategoryId(2)).matches(CategoryId(2)));
        assert!(!CategoryFilter::Category(CategoryId(2)).matches(CategoryId(3)));
    }

    #[test]
    fn test_filter_from_option() {
        assert_eq!(CategoryFilter::from(None), CategoryFilter::Any);
        assert_eq!(
            CategoryFilter::from(Some(CategoryId(1))),
            CategoryFilter::Category(CategoryId(1))
        );
    }
}
