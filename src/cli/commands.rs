//! CLI commands and argument parsing

use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Page through a text file, one item per line
#[derive(Parser, Debug)]
#[command(name = "pagekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file (one item per line)
    pub input: PathBuf,

    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Items per page (overrides the configuration file)
    #[arg(short = 'n', long, global = true)]
    pub page_size: Option<usize>,

    /// Output format (overrides the configuration file)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the item and page counts
    Count,

    /// Show a single page
    Page {
        /// Page number (1-based)
        number: usize,
    },

    /// Show every page
    Pages,
}
