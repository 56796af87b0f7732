//! Tests for the pagination module

use super::*;
use crate::error::Error;
use test_case::test_case;

fn items(n: usize) -> Vec<usize> {
    (1..=n).collect()
}

// ============================================================================
// Slicing
// ============================================================================

#[test]
fn test_first_page_of_exact_fit() {
    let page = paginate(&items(10), 1, 10).unwrap();
    assert_eq!(page.items, items(10));
    assert_eq!(page.total, 10);
}

#[test]
fn test_first_page_clips_to_page_size() {
    let page = paginate(&items(11), 1, 10).unwrap();
    assert_eq!(page.items, items(10));
    assert_eq!(page.total, 11);
}

#[test]
fn test_last_partial_page() {
    let page = paginate(&items(11), 2, 10).unwrap();
    assert_eq!(page.items, vec![11]);
    assert_eq!(page.total, 11);
}

#[test]
fn test_middle_page_is_contiguous() {
    let page = paginate(&items(25), 2, 10).unwrap();
    assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
    assert_eq!(page.total, 25);
}

#[test]
fn test_source_is_not_mutated() {
    let source = items(7);
    let _ = paginate(&source, 1, 3).unwrap();
    assert_eq!(source, items(7));
}

// ============================================================================
// Out-of-range pages
// ============================================================================

#[test_case(3, 10, 11 ; "one past the last page")]
#[test_case(100, 10, 11 ; "far past the last page")]
#[test_case(2, 10, 10 ; "exact fit has no second page")]
fn test_out_of_range_page_is_empty_with_total(page: usize, page_size: usize, len: usize) {
    let result = paginate(&items(len), page, page_size).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.total, len);
}

#[test]
fn test_empty_collection() {
    let result = paginate(&Vec::<usize>::new(), 1, 10).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.total, 0);
}

// ============================================================================
// Total reporting
// ============================================================================

#[test]
fn test_total_is_independent_of_page() {
    for page in 1..6 {
        let result = paginate(&items(23), page, 10).unwrap();
        assert_eq!(result.total, 23);
    }
}

// ============================================================================
// Invalid arguments
// ============================================================================

#[test]
fn test_zero_page_rejected() {
    let err = paginate(&items(5), 0, 10).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_zero_page_size_rejected() {
    let err = paginate(&items(5), 1, 0).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

// ============================================================================
// Page resolution from query values
// ============================================================================

#[test]
fn test_resolve_page_defaults_to_one() {
    assert_eq!(resolve_page(None).unwrap(), DEFAULT_PAGE);
}

#[test]
fn test_resolve_page_passes_positive() {
    assert_eq!(resolve_page(Some(4)).unwrap(), 4);
}

#[test_case(0 ; "zero")]
#[test_case(-1 ; "negative")]
fn test_resolve_page_rejects_non_positive(raw: i64) {
    let err = resolve_page(Some(raw)).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}
