//! Tests for page module

use super::*;
use crate::types::PageSize;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn size(n: usize) -> PageSize {
    PageSize::new(n).unwrap()
}

// ============================================================================
// Page Count Tests
// ============================================================================

#[test_case(3, 0, 0 ; "empty collection has no pages")]
#[test_case(3, 1, 1 ; "single item")]
#[test_case(3, 6, 2 ; "exact division")]
#[test_case(3, 7, 3 ; "remainder adds a page")]
#[test_case(1, 5, 5 ; "page size one")]
#[test_case(10, 9, 1 ; "fewer items than page size")]
#[test_case(10, 101, 11 ; "large with remainder")]
fn test_page_count(page_size: usize, total: usize, expected: usize) {
    assert_eq!(page_count(size(page_size), total), expected);
}

#[test]
fn test_page_count_is_zero_only_for_empty() {
    for page_size in 1..=7 {
        assert_eq!(page_count(size(page_size), 0), 0);
        for total in 1..=50 {
            let count = page_count(size(page_size), total);
            assert!(count > 0);
            assert_eq!(count, total.div_ceil(page_size));
        }
    }
}

// ============================================================================
// Page Window Tests
// ============================================================================

#[test]
fn test_window_first_page_starts_at_zero() {
    let window = PageWindow::for_page(1, size(3));
    assert_eq!(window, PageWindow { offset: 0, length: 3 });
}

#[test]
fn test_window_later_pages() {
    assert_eq!(PageWindow::for_page(2, size(3)).offset, 3);
    assert_eq!(PageWindow::for_page(3, size(3)).offset, 6);
    assert_eq!(PageWindow::for_page(5, size(10)).offset, 40);
}

#[test]
fn test_window_apply_truncates_at_end() {
    let items = [1, 2, 3, 4, 5, 6, 7];
    assert_eq!(PageWindow::for_page(1, size(3)).apply(&items), &[1, 2, 3]);
    assert_eq!(PageWindow::for_page(3, size(3)).apply(&items), &[7]);
    assert!(PageWindow::for_page(4, size(3)).apply(&items).is_empty());
}

// ============================================================================
// PagedResult Tests
// ============================================================================

#[test]
fn test_paged_result_display() {
    let result = PagedResult::new(2, 3, 3, 7, vec!["a", "b", "c"]);
    assert_eq!(result.to_string(), "Page 2 of 3");
}

#[test]
fn test_paged_result_accessors() {
    let result = PagedResult::new(3, 3, 3, 7, vec!["nuget"]);
    assert_eq!(result.current_page_number(), 3);
    assert_eq!(result.page_count(), 3);
    assert_eq!(result.page_size(), 3);
    assert_eq!(result.total_item_count(), 7);
    assert_eq!(result.items(), &["nuget"]);
    assert!(!result.has_next());
    assert!(result.has_previous());
    assert!(!result.is_empty());
}

#[test]
fn test_paged_result_empty_page() {
    let result: PagedResult<String> = PagedResult::new(1, 0, 3, 0, Vec::new());
    assert!(result.is_empty());
    assert!(!result.has_next());
    assert!(!result.has_previous());
    assert_eq!(result.to_string(), "Page 1 of 0");
}

#[test]
fn test_paged_result_convert_to() {
    let result = PagedResult::new(1, 2, 2, 3, vec![1, 2]);
    let converted = result.convert_to(vec!["one", "two"]);
    assert_eq!(converted.current_page_number(), 1);
    assert_eq!(converted.page_count(), 2);
    assert_eq!(converted.total_item_count(), 3);
    assert_eq!(converted.items(), &["one", "two"]);
}

#[test]
fn test_paged_result_map_items() {
    let result = PagedResult::new(2, 2, 2, 3, vec![3]);
    let mapped = result.map_items(|n| n * 10);
    assert_eq!(mapped.current_page_number(), 2);
    assert_eq!(mapped.into_items(), vec![30]);
}

#[test]
fn test_paged_result_serializes() {
    let result = PagedResult::new(1, 1, 5, 2, vec!["a", "b"]);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "current_page_number": 1,
            "page_count": 1,
            "page_size": 5,
            "total_item_count": 2,
            "items": ["a", "b"]
        })
    );
}
