// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # pagekit
//!
//! Fixed-size pagination over ordered, countable data sources.
//!
//! ## Features
//!
//! - **Synchronous paging**: count once, slice on demand ([`PagedCollection`])
//! - **Deferred paging**: lazy, memoized counts and pages over sources that
//!   suspend on I/O ([`AsyncPagedCollection`])
//! - **Cancellation**: every deferred operation takes a `CancellationToken`;
//!   cancelled reads never reach the cache
//! - **One-shot helpers**: `source.page(n, size)` and `source.page_async(n, size)`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagekit::{AsyncPagedCollection, PagedCollection, Result};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let words = vec!["alpha", "beta", "gamma", "delta"];
//!
//!     let pages = PagedCollection::new(&words, 3)?;
//!     assert_eq!(pages.page_count(), 2);
//!     println!("{}", pages.get_page(2)?); // Page 2 of 2
//!
//!     let deferred = AsyncPagedCollection::new(&words, 3)?;
//!     let cancel = CancellationToken::new();
//!     let first = deferred.get_page(1, &cancel).await?;
//!     assert_eq!(first.items(), &["alpha", "beta", "gamma"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              paginate() / page() / page_async()             │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │
//! ┌─────────────────────────────┬───────────────────────────────┐
//! │   PagedCollection (eager)   │   AsyncPagedCollection (lazy) │
//! ├─────────────────────────────┴───────────────────────────────┤
//! │   page_count / PageWindow / PagedResult                     │
//! ├─────────────────────────────┬───────────────────────────────┤
//! │   PageSource                │   AsyncPageSource             │
//! │   [T], Vec<T>               │   Vec<T>, StreamSource, lines │
//! └─────────────────────────────┴───────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Page arithmetic and paged results
pub mod page;

/// Data source traits and adapters
pub mod source;

/// Synchronous and deferred paged collections
pub mod collection;

/// One-shot pagination helpers
pub mod extensions;

/// Pager configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use collection::{AsyncPagedCollection, PagedCollection};
pub use config::PagerConfig;
pub use extensions::{
    paginate, paginate_async, paginate_async_with_cancel, AsyncPaginate, Paginate,
};
pub use page::{page_count, PageWindow, PagedResult};
pub use source::{AsyncPageSource, LineFileSource, PageSource, StreamSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
