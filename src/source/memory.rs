//! In-memory sources
//!
//! Slices and vectors answer both the synchronous and the deferred contract.

use super::{AsyncPageSource, PageSource};
use crate::error::Result;
use async_trait::async_trait;

fn window<T: Clone>(items: &[T], offset: usize, limit: usize) -> Vec<T> {
    items.iter().skip(offset).take(limit).cloned().collect()
}

impl<T: Clone> PageSource for [T] {
    type Item = T;

    fn count(&self) -> Result<usize> {
        Ok(self.len())
    }

    fn slice(&self, offset: usize, limit: usize) -> Result<Vec<T>> {
        Ok(window(self, offset, limit))
    }

    fn all_items(&self) -> Result<Vec<T>> {
        Ok(self.to_vec())
    }
}

impl<T: Clone> PageSource for Vec<T> {
    type Item = T;

    fn count(&self) -> Result<usize> {
        Ok(self.len())
    }

    fn slice(&self, offset: usize, limit: usize) -> Result<Vec<T>> {
        Ok(window(self, offset, limit))
    }

    fn all_items(&self) -> Result<Vec<T>> {
        Ok(self.clone())
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> AsyncPageSource for Vec<T> {
    type Item = T;

    async fn count(&self) -> Result<usize> {
        Ok(self.len())
    }

    async fn slice(&self, offset: usize, limit: usize) -> Result<Vec<T>> {
        Ok(window(self, offset, limit))
    }

    async fn materialize_all(&self) -> Result<Vec<T>> {
        Ok(self.clone())
    }
}
