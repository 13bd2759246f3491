//! Deferred paged collection
//!
//! Every derived quantity is computed on first demand and cached for the
//! lifetime of the collection.
//!
//! # Concurrency
//!
//! A collection may be polled by several futures at once. Cache locks are
//! only held to read or write a value, never across a source call, so two
//! concurrent first requests for the same quantity can both reach the source
//! and both store the (equal) result. Memoization is best-effort under
//! concurrent use; sequential callers hit the source at most once per
//! quantity.

use crate::error::{Error, Result};
use crate::page::{page_count, PageWindow, PagedResult};
use crate::source::AsyncPageSource;
use crate::types::PageSize;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

/// Paginator over a source whose operations may suspend
///
/// Nothing is read from the source at construction. The item count, page
/// count, each requested page and the full item list are fetched once and
/// then served from memory.
pub struct AsyncPagedCollection<'a, S>
where
    S: AsyncPageSource + ?Sized,
{
    source: &'a S,
    page_size: PageSize,
    total_item_count: RwLock<Option<usize>>,
    page_count: RwLock<Option<usize>>,
    pages: RwLock<HashMap<usize, Vec<S::Item>>>,
    all_items: RwLock<Option<Vec<S::Item>>>,
}

impl<'a, S> AsyncPagedCollection<'a, S>
where
    S: AsyncPageSource + ?Sized,
    S::Item: Clone,
{
    /// Create a deferred paged collection, failing if `page_size` is less than 1
    pub fn new(source: &'a S, page_size: usize) -> Result<Self> {
        Ok(Self::with_page_size(source, PageSize::new(page_size)?))
    }

    /// Create a deferred paged collection from an already validated page size
    ///
    /// Infallible, unlike the synchronous constructor: the source is not
    /// touched until the first request.
    pub fn with_page_size(source: &'a S, page_size: PageSize) -> Self {
        Self {
            source,
            page_size,
            total_item_count: RwLock::new(None),
            page_count: RwLock::new(None),
            pages: RwLock::new(HashMap::new()),
            all_items: RwLock::new(None),
        }
    }

    /// Maximum number of items per page
    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Total number of items in the source
    pub async fn total_item_count(&self, cancel: &CancellationToken) -> Result<usize> {
        let cached = *self.total_item_count.read().await;
        if let Some(count) = cached {
            trace!("Item count served from cache");
            return Ok(count);
        }

        debug!("Counting items in source");
        let count = cancellable(cancel, self.source.count()).await?;
        *self.total_item_count.write().await = Some(count);
        Ok(count)
    }

    /// Total number of pages
    pub async fn page_count(&self, cancel: &CancellationToken) -> Result<usize> {
        let cached = *self.page_count.read().await;
        if let Some(count) = cached {
            return Ok(count);
        }

        let total = self.total_item_count(cancel).await?;
        let count = page_count(self.page_size, total);
        *self.page_count.write().await = Some(count);
        Ok(count)
    }

    /// Items on a 1-based page
    ///
    /// Page 1 of an empty collection is valid and empty. Any other page
    /// outside `1..=page_count` is out of range. A page not yet cached is
    /// fetched from the source as a single window.
    pub async fn get_items(
        &self,
        page_number: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<S::Item>> {
        let page_count = self.page_count(cancel).await?;

        if page_number == 1 && page_count == 0 {
            return Ok(Vec::new());
        }

        if page_number < 1 || page_number > page_count {
            return Err(Error::out_of_range(page_number, page_count));
        }

        let cached = self.pages.read().await.get(&page_number).cloned();
        if let Some(items) = cached {
            trace!("Page {} served from cache", page_number);
            return Ok(items);
        }

        let window = PageWindow::for_page(page_number, self.page_size);
        debug!(
            "Fetching page {} (offset {}, limit {}) from source",
            page_number, window.offset, window.length
        );
        let fetch = self.source.slice(window.offset, window.length);
        let items = cancellable(cancel, fetch).await?;
        self.pages.write().await.insert(page_number, items.clone());
        Ok(items)
    }

    /// A page with its metadata
    pub async fn get_page(
        &self,
        page_number: usize,
        cancel: &CancellationToken,
    ) -> Result<PagedResult<S::Item>> {
        let items = self.get_items(page_number, cancel).await?;
        let page_count = self.page_count(cancel).await?;
        let total_item_count = self.total_item_count(cancel).await?;

        Ok(PagedResult::new(
            page_number,
            page_count,
            self.page_size.get(),
            total_item_count,
            items,
        ))
    }

    /// Alias of [`get_page`](Self::get_page)
    pub async fn page(
        &self,
        page_number: usize,
        cancel: &CancellationToken,
    ) -> Result<PagedResult<S::Item>> {
        self.get_page(page_number, cancel).await
    }

    /// Every page in order
    ///
    /// Materializes the whole source once and splits it in memory, rather
    /// than fetching each page window separately. The per-page cache is
    /// neither read nor filled.
    pub async fn get_all_pages(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<PagedResult<S::Item>>> {
        let all_items = self.get_all_items(cancel).await?;
        let page_count = self.page_count(cancel).await?;
        let total_item_count = self.total_item_count(cancel).await?;

        let pages = (1..=page_count)
            .map(|page_number| {
                let window = PageWindow::for_page(page_number, self.page_size);
                let items = window.apply(&all_items);
                PagedResult::new(
                    page_number,
                    page_count,
                    self.page_size.get(),
                    total_item_count,
                    items.to_vec(),
                )
            })
            .collect();

        Ok(pages)
    }

    /// Every item in the source, not paginated
    pub async fn get_all_items(&self, cancel: &CancellationToken) -> Result<Vec<S::Item>> {
        let cached = self.all_items.read().await.clone();
        if let Some(items) = cached {
            trace!("Full item list served from cache");
            return Ok(items);
        }

        debug!("Materializing all items from source");
        let items = cancellable(cancel, self.source.materialize_all()).await?;
        *self.all_items.write().await = Some(items.clone());
        Ok(items)
    }
}

impl<S> fmt::Debug for AsyncPagedCollection<'_, S>
where
    S: AsyncPageSource + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncPagedCollection")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

/// Run a source operation unless the token fires first
///
/// On cancellation the source future is dropped and nothing is returned to
/// be cached.
async fn cancellable<T, F>(cancel: &CancellationToken, operation: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        () = cancel.cancelled() => {
            warn!("Source operation cancelled");
            Err(Error::Cancelled)
        }
        result = operation => result,
    }
}
