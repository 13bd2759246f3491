//! Page module
//!
//! Page arithmetic, page windows and the `PagedResult` value type shared by
//! the synchronous and deferred collections.

mod arithmetic;
mod result;

pub use arithmetic::{page_count, PageWindow};
pub use result::PagedResult;

#[cfg(test)]
mod tests;
