//! Tests for the quiz selection module

use super::*;
use crate::bank::{BankDefinition, Category, MemoryBank, Question, QuestionDraft};
use crate::error::Error;
use crate::types::{CategoryFilter, CategoryId, QuestionId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn question(id: u64) -> Question {
    Question {
        id: QuestionId(id),
        question: format!("Question {id}?"),
        answer: format!("Answer {id}"),
        difficulty: 2,
        category: CategoryId(1),
    }
}

fn pool(ids: &[u64]) -> Vec<Question> {
    ids.iter().copied().map(question).collect()
}

fn seen(ids: &[u64]) -> HashSet<QuestionId> {
    ids.iter().copied().map(QuestionId).collect()
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ============================================================================
// select_next
// ============================================================================

#[test]
fn test_picks_from_remaining() {
    let outcome = select_next(&pool(&[1, 2, 3]), &seen(&[1, 2]), &mut rng()).unwrap();
    assert_eq!(outcome.picked().unwrap().id, QuestionId(3));
}

#[test]
fn test_exhausted_when_all_seen() {
    let outcome = select_next(&pool(&[1]), &seen(&[1]), &mut rng()).unwrap();
    assert!(outcome.is_exhausted());
}

#[test]
fn test_exhausted_when_seen_is_superset_of_pool() {
    let outcome = select_next(&pool(&[1, 2]), &seen(&[1, 2, 3, 4]), &mut rng()).unwrap();
    assert!(outcome.is_exhausted());
}

#[test]
fn test_empty_pool_is_not_found_never_exhausted() {
    let err = select_next(&[], &seen(&[]), &mut rng()).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));

    // Even with a non-empty seen set the empty pool stays an error.
    let err = select_next(&[], &seen(&[1, 2]), &mut rng()).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn test_stale_seen_ids_are_ignored() {
    // Ids 90 and 91 come from a prior category and are not in this pool.
    let outcome = select_next(&pool(&[5]), &seen(&[90, 91]), &mut rng()).unwrap();
    assert_eq!(outcome.picked().unwrap().id, QuestionId(5));
}

#[test]
fn test_fixed_seed_is_deterministic() {
    let pool = pool(&[1, 2, 3, 4, 5]);
    let seen = seen(&[2]);

    let first = select_next(&pool, &seen, &mut rng()).unwrap();
    let second = select_next(&pool, &seen, &mut rng()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_never_picks_a_seen_question() {
    let pool = pool(&[1, 2, 3, 4, 5, 6, 7, 8]);
    let seen = seen(&[1, 3, 5, 7]);

    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let outcome = select_next(&pool, &seen, &mut rng).unwrap();
        let picked = outcome.picked().unwrap();
        assert!(!seen.contains(&picked.id), "picked seen id {}", picked.id);
    }
}

#[test]
fn test_every_remaining_question_is_reachable() {
    let pool = pool(&[1, 2, 3]);
    let seen = seen(&[]);

    let mut rng = StdRng::seed_from_u64(7);
    let mut picked: HashSet<QuestionId> = HashSet::new();
    for _ in 0..200 {
        let outcome = select_next(&pool, &seen, &mut rng).unwrap();
        picked.insert(outcome.picked().unwrap().id);
    }
    assert_eq!(picked.len(), 3);
}

// ============================================================================
// draw (pool resolution through the store)
// ============================================================================

fn store() -> MemoryBank {
    let def = BankDefinition {
        categories: vec![
            Category {
                id: CategoryId(1),
                kind: "Science".to_string(),
            },
            Category {
                id: CategoryId(5),
                kind: "Entertainment".to_string(),
            },
        ],
        questions: vec![
            QuestionDraft {
                question: "What is H2O?".to_string(),
                answer: "Water".to_string(),
                difficulty: 1,
                category: CategoryId(1),
            },
            QuestionDraft {
                question: "Who discovered penicillin?".to_string(),
                answer: "Alexander Fleming".to_string(),
                difficulty: 3,
                category: CategoryId(1),
            },
        ],
    };
    MemoryBank::from_definition(def).unwrap()
}

#[tokio::test]
async fn test_draw_respects_category_filter() {
    let bank = store();
    let outcome = draw(
        &bank,
        CategoryFilter::Category(CategoryId(1)),
        &seen(&[1]),
        &mut rng(),
    )
    .await
    .unwrap();

    assert_eq!(outcome.picked().unwrap().id, QuestionId(2));
}

#[tokio::test]
async fn test_draw_empty_category_is_not_found() {
    let bank = store();
    // Category 5 exists but holds zero questions.
    let err = draw(
        &bank,
        CategoryFilter::Category(CategoryId(5)),
        &seen(&[]),
        &mut rng(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_draw_any_category_exhausts() {
    let bank = store();
    let outcome = draw(&bank, CategoryFilter::Any, &seen(&[1, 2]), &mut rng())
        .await
        .unwrap();
    assert!(outcome.is_exhausted());
}
