//! Configuration structures for the ui-elf tool.
//!
//! This module provides configuration types for the components around the
//! scanner:
//!
//! - [`DiscoveryConfig`] - Which files the directory walk hands to the scanner
//! - [`OutputConfig`] - How results are presented
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`] and deserialize with
//! `#[serde(default)]`, so a config file only needs the fields it changes.

use std::fmt;
use std::fs;
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default location of the JSON results file.
pub const DEFAULT_JSON_PATH: &str = "ui-elf-results.json";

/// How scan results are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Human-readable report on stdout.
    #[default]
    Terminal,
    /// JSON written to a results file.
    Json,
    /// Terminal report plus the JSON file.
    Both,
}

impl OutputFormat {
    /// Returns the name used on the command line and in config files.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Json => "json",
            Self::Both => "both",
        }
    }

    /// Returns `true` if this format prints the terminal report.
    #[inline]
    #[must_use]
    pub const fn includes_terminal(self) -> bool {
        matches!(self, Self::Terminal | Self::Both)
    }

    /// Returns `true` if this format writes the JSON file.
    #[inline]
    #[must_use]
    pub const fn includes_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "terminal" => Ok(Self::Terminal),
            "json" => Ok(Self::Json),
            "both" => Ok(Self::Both),
            other => Err(ConfigError::invalid_option(
                "output",
                format!("'{other}' must be one of: terminal, json, both"),
            )),
        }
    }
}

/// Configuration for file discovery.
///
/// # Examples
///
/// ```
/// use elf_core::DiscoveryConfig;
///
/// let config = DiscoveryConfig::default();
/// assert_eq!(config.file_extensions, vec!["vue", "jsx", "tsx"]);
/// assert!(config.exclude_patterns.contains(&"node_modules".to_owned()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// File extensions to scan, without the leading dot.
    pub file_extensions: Vec<String>,

    /// Substrings or path components that exclude a file.
    pub exclude_patterns: Vec<String>,

    /// Root-relative directories to restrict the scan to.
    ///
    /// Empty means the whole tree.
    pub include_dirs: Vec<String>,

    /// Whether to follow symbolic links.
    pub follow_links: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            file_extensions: vec!["vue".to_owned(), "jsx".to_owned(), "tsx".to_owned()],
            exclude_patterns: vec![
                "node_modules".to_owned(),
                "test".to_owned(),
                "tests".to_owned(),
                "__tests__".to_owned(),
                ".test.".to_owned(),
                ".spec.".to_owned(),
            ],
            include_dirs: Vec::new(),
            follow_links: false,
        }
    }
}

/// Configuration for result presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format.
    pub format: OutputFormat,

    /// Where JSON results are written.
    pub json_path: Utf8PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Terminal,
            json_path: Utf8PathBuf::from(DEFAULT_JSON_PATH),
        }
    }
}

/// Root configuration for the ui-elf tool.
///
/// # Examples
///
/// ```
/// use elf_core::{Config, OutputFormat};
///
/// let config: Config = serde_json::from_str(r#"{"output": {"format": "both"}}"#).unwrap();
/// assert_eq!(config.output.format, OutputFormat::Both);
/// assert_eq!(config.discovery.file_extensions.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File discovery configuration.
    pub discovery: DiscoveryConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

impl Config {
    /// Loads and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Parse`] if it is not valid JSON for this schema, and
    /// [`ConfigError::InvalidOption`] if validation fails.
    pub fn from_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_std_path())?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks option values that deserialization alone cannot enforce.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] for an empty extension list,
    /// a blank extension, or an empty JSON output path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.discovery.file_extensions.is_empty() {
            return Err(ConfigError::invalid_option(
                "discovery.file_extensions",
                "must not be empty",
            ));
        }

        if self
            .discovery
            .file_extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').is_empty())
        {
            return Err(ConfigError::invalid_option(
                "discovery.file_extensions",
                "extensions must not be blank",
            ));
        }

        if self.output.json_path.as_str().is_empty() {
            return Err(ConfigError::invalid_option(
                "output.json_path",
                "must not be empty",
            ));
        }

        Ok(())
    }
}
