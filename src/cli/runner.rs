//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::collection::AsyncPagedCollection;
use crate::config::PagerConfig;
use crate::error::Result;
use crate::page::PagedResult;
use crate::source::LineFileSource;
use crate::types::OutputFormat;
use serde_json::json;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Resolve settings from the config file and command-line overrides
    pub fn config(&self) -> Result<PagerConfig> {
        let mut config = match &self.cli.config {
            Some(path) => PagerConfig::from_file(path)?,
            None => PagerConfig::default(),
        };

        if let Some(page_size) = self.cli.page_size {
            config.page_size = page_size;
        }
        if let Some(format) = self.cli.format {
            config.format = format;
        }

        config.validate()?;
        Ok(config)
    }

    /// Run the CLI command
    ///
    /// Ctrl-C cancels whatever source read is in flight.
    pub async fn run(&self) -> Result<()> {
        let cancel = CancellationToken::new();
        let signal_token = cancel.clone();
        let signal_task = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Interrupted, cancelling");
                signal_token.cancel();
            }
        });

        let result = self.execute(&cancel).await;
        signal_task.abort();

        let output = result?;
        print!("{output}");
        Ok(())
    }

    /// Execute the command, returning the rendered output
    pub async fn execute(&self, cancel: &CancellationToken) -> Result<String> {
        let config = self.config()?;
        let source = LineFileSource::new(&self.cli.input);
        let pages = AsyncPagedCollection::with_page_size(&source, config.validate()?);
        debug!(
            "Paging {} with {} items per page",
            self.cli.input.display(),
            config.page_size
        );

        match &self.cli.command {
            Commands::Count => {
                let total_item_count = pages.total_item_count(cancel).await?;
                let page_count = pages.page_count(cancel).await?;
                Ok(render_counts(
                    total_item_count,
                    page_count,
                    pages.page_size(),
                    config.format,
                ))
            }
            Commands::Page { number } => {
                let page = pages.get_page(*number, cancel).await?;
                render_page(&page, config.format)
            }
            Commands::Pages => {
                let mut output = String::new();
                for page in pages.get_all_pages(cancel).await? {
                    output.push_str(&render_page(&page, config.format)?);
                }
                Ok(output)
            }
        }
    }
}

/// Render item and page counts
pub fn render_counts(
    total_item_count: usize,
    page_count: usize,
    page_size: usize,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Json => format!(
            "{}\n",
            json!({
                "total_item_count": total_item_count,
                "page_count": page_count,
                "page_size": page_size,
            })
        ),
        OutputFormat::Pretty => {
            format!("{total_item_count} items, {page_count} pages of {page_size}\n")
        }
    }
}

/// Render one page
pub fn render_page(page: &PagedResult<String>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(page)?)),
        OutputFormat::Pretty => {
            let mut output = format!("{page}\n");
            for item in page.items() {
                output.push_str(&format!("  {item}\n"));
            }
            Ok(output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn input_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for word in ["dotnet", "standard", "pagination", "collection", "nuget"] {
            writeln!(file, "{word}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn runner(args: &[&str]) -> Runner {
        Runner::new(Cli::try_parse_from(args).unwrap())
    }

    #[test]
    fn test_render_counts() {
        assert_eq!(
            render_counts(7, 3, 3, OutputFormat::Pretty),
            "7 items, 3 pages of 3\n"
        );
        assert_eq!(
            render_counts(7, 3, 3, OutputFormat::Json),
            "{\"page_count\":3,\"page_size\":3,\"total_item_count\":7}\n"
        );
    }

    #[test]
    fn test_render_page_pretty() {
        let page = PagedResult::new(3, 3, 3, 7, vec!["nuget".to_string()]);
        assert_eq!(
            render_page(&page, OutputFormat::Pretty).unwrap(),
            "Page 3 of 3\n  nuget\n"
        );

        let page = PagedResult::new(1, 3, 3, 7, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(
            render_page(&page, OutputFormat::Pretty).unwrap(),
            "Page 1 of 3\n  a\n  b\n"
        );
    }

    #[test]
    fn test_config_overrides() {
        let runner = runner(&["pagekit", "words.txt", "-n", "4", "-f", "pretty", "count"]);
        let config = runner.config().unwrap();
        assert_eq!(config.page_size, 4);
        assert_eq!(config.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_config_rejects_zero_page_size() {
        let runner = runner(&["pagekit", "words.txt", "-n", "0", "count"]);
        assert!(runner.config().is_err());
    }

    #[tokio::test]
    async fn test_execute_count() {
        let file = input_file();
        let path = file.path().to_str().unwrap();
        let runner = runner(&["pagekit", path, "-n", "2", "-f", "pretty", "count"]);

        let output = runner.execute(&CancellationToken::new()).await.unwrap();
        assert_eq!(output, "5 items, 3 pages of 2\n");
    }

    #[tokio::test]
    async fn test_execute_page() {
        let file = input_file();
        let path = file.path().to_str().unwrap();
        let runner = runner(&["pagekit", path, "-n", "2", "-f", "pretty", "page", "2"]);

        let output = runner.execute(&CancellationToken::new()).await.unwrap();
        assert_eq!(output, "Page 2 of 3\n  pagination\n  collection\n");
    }

    #[tokio::test]
    async fn test_execute_pages_json() {
        let file = input_file();
        let path = file.path().to_str().unwrap();
        let runner = runner(&["pagekit", path, "-n", "2", "pages"]);

        let output = runner.execute(&CancellationToken::new()).await.unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2]["current_page_number"], 3);
        assert_eq!(lines[2]["items"], json!(["nuget"]));
    }

    #[tokio::test]
    async fn test_execute_out_of_range() {
        let file = input_file();
        let path = file.path().to_str().unwrap();
        let runner = runner(&["pagekit", path, "-n", "2", "page", "9"]);

        let err = runner.execute(&CancellationToken::new()).await.unwrap_err();
        assert!(err.is_out_of_range());
    }
}
