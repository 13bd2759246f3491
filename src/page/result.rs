//! Paged result value type

use serde::Serialize;
use std::fmt;

/// One page of a paged collection
///
/// Snapshots the paginator's scalars at the time of the request together with
/// the page's items. Holds no reference back to the paginator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagedResult<T> {
    current_page_number: usize,
    page_count: usize,
    page_size: usize,
    total_item_count: usize,
    items: Vec<T>,
}

impl<T> PagedResult<T> {
    /// Create a paged result
    pub fn new(
        current_page_number: usize,
        page_count: usize,
        page_size: usize,
        total_item_count: usize,
        items: Vec<T>,
    ) -> Self {
        Self {
            current_page_number,
            page_count,
            page_size,
            total_item_count,
            items,
        }
    }

    /// The 1-based number of this page
    pub fn current_page_number(&self) -> usize {
        self.current_page_number
    }

    /// Total number of pages in the collection
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Maximum number of items per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total number of items across all pages
    pub fn total_item_count(&self) -> usize {
        self.total_item_count
    }

    /// Items on this page
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the result, returning its items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Check if this page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if a page follows this one
    pub fn has_next(&self) -> bool {
        self.current_page_number < self.page_count
    }

    /// Check if a page precedes this one
    pub fn has_previous(&self) -> bool {
        self.current_page_number > 1
    }

    /// Carry this page's metadata over to an already converted item list
    pub fn convert_to<U>(&self, converted_items: Vec<U>) -> PagedResult<U> {
        PagedResult {
            current_page_number: self.current_page_number,
            page_count: self.page_count,
            page_size: self.page_size,
            total_item_count: self.total_item_count,
            items: converted_items,
        }
    }

    /// Convert every item, keeping the page metadata
    pub fn map_items<U, F>(self, f: F) -> PagedResult<U>
    where
        F: FnMut(T) -> U,
    {
        PagedResult {
            current_page_number: self.current_page_number,
            page_count: self.page_count,
            page_size: self.page_size,
            total_item_count: self.total_item_count,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

impl<T> IntoIterator for PagedResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> fmt::Display for PagedResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Page {} of {}",
            self.current_page_number, self.page_count
        )
    }
}
