//! Common types used throughout the crate

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Page Size
// ============================================================================

/// Maximum number of items per page, always at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PageSize(usize);

impl PageSize {
    /// Validate and wrap a page size
    pub fn new(size: usize) -> Result<Self> {
        if size < 1 {
            return Err(Error::invalid_argument(
                "page_size",
                format!("page size must be at least 1, got {size}"),
            ));
        }
        Ok(Self(size))
    }

    /// The raw page size
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let size = usize::deserialize(deserializer)?;
        Self::new(size).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Output Format
// ============================================================================

/// How pages are rendered by the CLI
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output (one page per line)
    #[default]
    Json,
    /// Human-readable output
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_rejects_zero() {
        let err = PageSize::new(0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { ref name, .. } if name == "page_size"));
    }

    #[test]
    fn test_page_size_accepts_positive() {
        let size = PageSize::try_from(3).unwrap();
        assert_eq!(size.get(), 3);
        assert_eq!(usize::from(size), 3);
        assert_eq!(size.to_string(), "3");
    }

    #[test]
    fn test_page_size_serde() {
        let size: PageSize = serde_json::from_str("25").unwrap();
        assert_eq!(size.get(), 25);
        assert_eq!(serde_json::to_string(&size).unwrap(), "25");

        let err = serde_json::from_str::<PageSize>("0").unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_output_format_serde() {
        let format: OutputFormat = serde_json::from_str("\"pretty\"").unwrap();
        assert_eq!(format, OutputFormat::Pretty);
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }
}
