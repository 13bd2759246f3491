//! Synchronous paged collection
//!
//! Counts the source once at construction and slices it on every request.

use crate::error::{Error, Result};
use crate::page::{page_count, PageWindow, PagedResult};
use crate::source::PageSource;
use crate::types::PageSize;
use tracing::debug;

/// Paginator over a source that answers without suspension
///
/// The item count and page count are fixed when the collection is built.
/// Page slices are not cached; every request re-reads the source window.
#[derive(Debug)]
pub struct PagedCollection<'a, S: ?Sized> {
    source: &'a S,
    page_size: PageSize,
    page_count: usize,
    total_item_count: usize,
}

impl<'a, S> PagedCollection<'a, S>
where
    S: PageSource + ?Sized,
{
    /// Create a paged collection, failing if `page_size` is less than 1
    pub fn new(source: &'a S, page_size: usize) -> Result<Self> {
        Self::with_page_size(source, PageSize::new(page_size)?)
    }

    /// Create a paged collection from an already validated page size
    pub fn with_page_size(source: &'a S, page_size: PageSize) -> Result<Self> {
        let total_item_count = source.count()?;
        let page_count = page_count(page_size, total_item_count);
        debug!(
            "Paged collection: {} items, {} pages of {}",
            total_item_count, page_count, page_size
        );

        Ok(Self {
            source,
            page_size,
            page_count,
            total_item_count,
        })
    }

    /// Maximum number of items per page
    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Total number of pages
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Total number of items in the source
    pub fn total_item_count(&self) -> usize {
        self.total_item_count
    }

    /// Items on a 1-based page
    ///
    /// Page 1 of an empty collection is valid and empty. Any other page
    /// outside `1..=page_count` is out of range.
    pub fn get_items(&self, page_number: usize) -> Result<Vec<S::Item>> {
        if page_number == 1 && self.page_count == 0 {
            return Ok(Vec::new());
        }

        if page_number < 1 || page_number > self.page_count {
            return Err(Error::out_of_range(page_number, self.page_count));
        }

        let window = PageWindow::for_page(page_number, self.page_size);
        self.source.slice(window.offset, window.length)
    }

    /// A page with its metadata
    pub fn get_page(&self, page_number: usize) -> Result<PagedResult<S::Item>> {
        let items = self.get_items(page_number)?;
        Ok(PagedResult::new(
            page_number,
            self.page_count,
            self.page_size.get(),
            self.total_item_count,
            items,
        ))
    }

    /// Alias of [`get_page`](Self::get_page)
    pub fn page(&self, page_number: usize) -> Result<PagedResult<S::Item>> {
        self.get_page(page_number)
    }

    /// Every page in order, computed lazily
    ///
    /// Yields exactly `page_count` results. Each call starts a new pass.
    pub fn get_all_pages(&self) -> Pages<'_, 'a, S> {
        Pages {
            collection: self,
            next_page: 1,
        }
    }

    /// Every item in the source, not paginated
    pub fn get_all_items(&self) -> Result<Vec<S::Item>> {
        self.source.all_items()
    }
}

/// Iterator over every page of a [`PagedCollection`]
#[derive(Debug)]
pub struct Pages<'c, 'a, S: ?Sized> {
    collection: &'c PagedCollection<'a, S>,
    next_page: usize,
}

impl<S> Iterator for Pages<'_, '_, S>
where
    S: PageSource + ?Sized,
{
    type Item = Result<PagedResult<S::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_page > self.collection.page_count {
            return None;
        }
        let page = self.collection.get_page(self.next_page);
        self.next_page += 1;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.collection.page_count + 1).saturating_sub(self.next_page);
        (remaining, Some(remaining))
    }
}

impl<S> ExactSizeIterator for Pages<'_, '_, S> where S: PageSource + ?Sized {}
