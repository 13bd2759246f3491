//! Data source module
//!
//! Sources are the collaborators a paged collection reads from. The core only
//! needs a source to report its item count and to produce an arbitrary
//! `offset/limit` window of items.
//!
//! # Overview
//!
//! - [`PageSource`] is answered immediately (in-memory slices, vectors).
//! - [`AsyncPageSource`] may suspend while it waits on I/O. Ready-made
//!   implementations are provided for vectors, stream factories and line
//!   oriented text files.
//!
//! Sources report their own failures as [`Error`](crate::Error) values; the
//! collections hand those errors back to the caller untouched.

mod lines;
mod memory;
mod stream;

pub use lines::LineFileSource;
pub use stream::StreamSource;

use crate::error::Result;
use async_trait::async_trait;

/// A source whose count and slices are available without suspension
pub trait PageSource {
    /// Item type produced by the source
    type Item;

    /// Total number of items in the source
    fn count(&self) -> Result<usize>;

    /// Skip `offset` items and return at most `limit` of the following ones
    ///
    /// Returns fewer than `limit` items only at the end of the source.
    fn slice(&self, offset: usize, limit: usize) -> Result<Vec<Self::Item>>;

    /// Every item in the source, in order
    fn all_items(&self) -> Result<Vec<Self::Item>>;
}

/// A source whose count and slices may suspend pending external completion
#[async_trait]
pub trait AsyncPageSource: Send + Sync {
    /// Item type produced by the source
    type Item: Send + Sync;

    /// Total number of items in the source
    async fn count(&self) -> Result<usize>;

    /// Skip `offset` items and return at most `limit` of the following ones
    ///
    /// Returns fewer than `limit` items only at the end of the source.
    async fn slice(&self, offset: usize, limit: usize) -> Result<Vec<Self::Item>>;

    /// Every item in the source, in order
    async fn materialize_all(&self) -> Result<Vec<Self::Item>>;
}
