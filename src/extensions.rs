//! One-shot pagination helpers
//!
//! Each call builds a throwaway paged collection, fetches a single page and
//! drops the collection. Nothing is shared between calls.
//!
//! ```rust,ignore
//! use pagekit::{Paginate, AsyncPaginate};
//!
//! let words = vec!["a", "b", "c", "d"];
//! let page = words.page(2, 3)?;
//! assert_eq!(page.items(), &["d"]);
//!
//! let page = words.page_async(1, 3).await?;
//! assert_eq!(page.to_string(), "Page 1 of 2");
//! ```

use crate::collection::{AsyncPagedCollection, PagedCollection};
use crate::error::Result;
use crate::page::PagedResult;
use crate::source::{AsyncPageSource, PageSource};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Fetch one page of a synchronous source
pub fn paginate<S>(
    source: &S,
    page_number: usize,
    page_size: usize,
) -> Result<PagedResult<S::Item>>
where
    S: PageSource + ?Sized,
{
    PagedCollection::new(source, page_size)?.get_page(page_number)
}

/// Fetch one page of a deferred source
pub async fn paginate_async<S>(
    source: &S,
    page_number: usize,
    page_size: usize,
) -> Result<PagedResult<S::Item>>
where
    S: AsyncPageSource + ?Sized,
    S::Item: Clone,
{
    paginate_async_with_cancel(source, page_number, page_size, &CancellationToken::new()).await
}

/// Fetch one page of a deferred source, aborting when `cancel` fires
pub async fn paginate_async_with_cancel<S>(
    source: &S,
    page_number: usize,
    page_size: usize,
    cancel: &CancellationToken,
) -> Result<PagedResult<S::Item>>
where
    S: AsyncPageSource + ?Sized,
    S::Item: Clone,
{
    AsyncPagedCollection::new(source, page_size)?
        .get_page(page_number, cancel)
        .await
}

/// `source.page(n, size)` for every synchronous source
pub trait Paginate: PageSource {
    /// Fetch one page of this source
    fn page(&self, page_number: usize, page_size: usize) -> Result<PagedResult<Self::Item>> {
        paginate(self, page_number, page_size)
    }
}

impl<S: PageSource + ?Sized> Paginate for S {}

/// `source.page_async(n, size)` for every deferred source
#[async_trait]
pub trait AsyncPaginate: AsyncPageSource
where
    Self::Item: Clone,
{
    /// Fetch one page of this source
    async fn page_async(
        &self,
        page_number: usize,
        page_size: usize,
    ) -> Result<PagedResult<Self::Item>> {
        paginate_async(self, page_number, page_size).await
    }
}

impl<S> AsyncPaginate for S
where
    S: AsyncPageSource + ?Sized,
    S::Item: Clone,
{
}
