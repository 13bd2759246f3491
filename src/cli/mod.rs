//! CLI module
//!
//! Command-line interface paging through line-oriented text files.
//!
//! # Commands
//!
//! - `count` - Show total item and page counts
//! - `page <N>` - Show one page
//! - `pages` - Show every page

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::{render_counts, render_page, Runner};
