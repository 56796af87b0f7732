//! In-memory bank implementation
//!
//! Backed by `BTreeMap`s behind a `tokio::sync::RwLock`, so listings come
//! back in ascending id order and the store is safe to share across request
//! handlers.

use super::types::{BankDefinition, Category, Question, QuestionDraft};
use super::Bank;
use crate::error::{Error, Result};
use crate::types::{CategoryFilter, CategoryId, QuestionId};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// In-memory question store
#[derive(Debug, Default)]
pub struct MemoryBank {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<QuestionId, Question>,
    next_id: u64,
}

impl MemoryBank {
    /// Create an empty bank
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bank seeded from a validated definition.
    ///
    /// Question ids are assigned in definition order starting at 1.
    pub fn from_definition(def: BankDefinition) -> Result<Self> {
        let mut inner = Inner::default();

        for category in def.categories {
            inner.categories.insert(category.id, category);
        }

        for draft in def.questions {
            draft.validate()?;
            if !inner.categories.contains_key(&draft.category) {
                return Err(Error::bank_definition(format!(
                    "question '{}' references unknown category {}",
                    draft.question, draft.category
                )));
            }
            inner.next_id += 1;
            let id = QuestionId(inner.next_id);
            inner.questions.insert(id, draft.into_question(id));
        }

        Ok(Self {
            inner: RwLock::new(inner),
        })
    }
}

#[async_trait]
impl Bank for MemoryBank {
    async fn list_questions(&self, filter: CategoryFilter) -> Result<Vec<Question>> {
        let inner = self.inner.read().await;
        Ok(inner
            .questions
            .values()
            .filter(|q| filter.matches(q.category))
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let term_lower = term.to_lowercase();
        let inner = self.inner.read().await;
        Ok(inner
            .questions
            .values()
            .filter(|q| q.matches_term(&term_lower))
            .cloned()
            .collect())
    }

    async fn insert_question(&self, draft: QuestionDraft) -> Result<Question> {
        draft.validate()?;

        let mut inner = self.inner.write().await;
        if !inner.categories.contains_key(&draft.category) {
            return Err(Error::not_found(format!(
                "category {} does not exist",
                draft.category
            )));
        }

        inner.next_id += 1;
        let id = QuestionId(inner.next_id);
        let question = draft.into_question(id);
        inner.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<()> {
        let mut inner = self.inner.write().await;
        match inner.questions.remove(&id) {
            Some(_) => Ok(()),
            None => Err(Error::not_found(format!("question {id} does not exist"))),
        }
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let inner = self.inner.read().await;
        Ok(inner.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>> {
        let inner = self.inner.read().await;
        Ok(inner.categories.get(&id).cloned())
    }
}
