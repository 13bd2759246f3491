//! Page arithmetic
//!
//! Pure functions mapping item counts to page counts and page numbers to
//! item windows. Page numbers are 1-based everywhere.

use crate::types::PageSize;

/// Number of pages needed to hold `total_item_count` items
///
/// Returns 0 for an empty collection, otherwise the ceiling of
/// `total_item_count / page_size`.
pub fn page_count(page_size: PageSize, total_item_count: usize) -> usize {
    if total_item_count == 0 {
        return 0;
    }

    let page_size = page_size.get();
    let remainder = total_item_count % page_size;
    (total_item_count / page_size) + usize::from(remainder != 0)
}

/// Offset/length window of one page within the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Number of items to skip
    pub offset: usize,
    /// Maximum number of items to take
    pub length: usize,
}

impl PageWindow {
    /// Window for a 1-based page number
    ///
    /// The length is always the page size; sources truncate it at the end.
    /// Callers validate `page_number >= 1` before asking for a window.
    pub fn for_page(page_number: usize, page_size: PageSize) -> Self {
        let page_size = page_size.get();
        Self {
            offset: (page_number * page_size) - page_size,
            length: page_size,
        }
    }

    /// Skip `offset` items, then take at most `length`
    pub fn apply<'s, T>(&self, items: &'s [T]) -> &'s [T] {
        let start = self.offset.min(items.len());
        let end = start.saturating_add(self.length).min(items.len());
        &items[start..end]
    }
}
