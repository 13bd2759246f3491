//! Stream-backed deferred source
//!
//! Wraps a factory producing a fresh `futures::Stream` of items. Each source
//! operation opens a new stream and enumerates it, so counting and slicing
//! cost one pass over the underlying producer.

use super::AsyncPageSource;
use crate::error::{Error, Result};
use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use std::fmt;

/// Deferred source over a re-enumerable stream of items
pub struct StreamSource<F> {
    factory: F,
}

impl<F> StreamSource<F> {
    /// Create a source from a stream factory
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F> fmt::Debug for StreamSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamSource").finish_non_exhaustive()
    }
}

#[async_trait]
impl<T, F> AsyncPageSource for StreamSource<F>
where
    T: Send + Sync + 'static,
    F: Fn() -> BoxStream<'static, Result<T>> + Send + Sync,
{
    type Item = T;

    async fn count(&self) -> Result<usize> {
        (self.factory)()
            .try_fold(0usize, |count, _| async move { Ok::<_, Error>(count + 1) })
            .await
    }

    async fn slice(&self, offset: usize, limit: usize) -> Result<Vec<T>> {
        let mut items = (self.factory)();
        // Skipped items are still checked so a failure before the window surfaces.
        for _ in 0..offset {
            if items.try_next().await?.is_none() {
                return Ok(Vec::new());
            }
        }
        items.take(limit).try_collect().await
    }

    async fn materialize_all(&self) -> Result<Vec<T>> {
        (self.factory)().try_collect().await
    }
}
