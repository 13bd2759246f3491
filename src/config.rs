//! Pager configuration
//!
//! Settings for embedding a paginator, loadable from YAML or JSON.
//!
//! ```yaml
//! page_size: 25
//! format: pretty
//! ```

use crate::error::{Error, Result};
use crate::types::{OutputFormat, PageSize};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Paginator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Number of items per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// How pages are rendered
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            format: OutputFormat::default(),
        }
    }
}

impl PagerConfig {
    /// Parse settings from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings from a file
    ///
    /// Files ending in `.json` are read as JSON, everything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Check the settings, returning the validated page size
    pub fn validate(&self) -> Result<PageSize> {
        PageSize::new(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PagerConfig::from_yaml("{}").unwrap();
        assert_eq!(config, PagerConfig::default());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_from_yaml() {
        let config = PagerConfig::from_yaml("page_size: 25\nformat: pretty\n").unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.format, OutputFormat::Pretty);
        assert_eq!(config.validate().unwrap().get(), 25);
    }

    #[test]
    fn test_from_json() {
        let config = PagerConfig::from_json(r#"{"page_size": 3}"#).unwrap();
        assert_eq!(config.page_size, 3);
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let err = PagerConfig::from_yaml("page_size: 0").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(matches!(
            PagerConfig::from_json("{not json").unwrap_err(),
            Error::JsonParse(_)
        ));
        assert!(matches!(
            PagerConfig::from_yaml("page_size: [1, 2]").unwrap_err(),
            Error::YamlParse(_)
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"page_size": 7, "format": "pretty"}}"#).unwrap();
        file.flush().unwrap();

        let config = PagerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.page_size, 7);
        assert_eq!(config.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PagerConfig::from_file(dir.path().join("pager.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
