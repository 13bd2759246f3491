//! Paged collections
//!
//! Two paginators share the same addressing rules (1-based pages, page 1 of
//! an empty collection is valid, everything else outside `1..=page_count` is
//! out of range):
//!
//! - [`PagedCollection`] counts its source eagerly and slices on demand.
//! - [`AsyncPagedCollection`] computes everything lazily, memoizes the
//!   results, and accepts a cancellation token on every operation.

mod deferred;
mod sync;

pub use deferred::AsyncPagedCollection;
pub use sync::{PagedCollection, Pages};
