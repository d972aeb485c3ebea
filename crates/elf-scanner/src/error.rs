//! Error types for the elf-scanner crate.
//!
//! This module provides the [`ScanError`] type for errors that can occur
//! during directory traversal and per-file analysis.

use camino::Utf8PathBuf;

/// Errors that can occur during discovery and scanning.
///
/// # Error Recovery Strategy
///
/// - **Walker errors** ([`ScanError::Walk`]): Fatal for discovery
/// - **File read errors** ([`ScanError::Read`]): The file contributes nothing, scan continues
/// - **Parse errors** ([`ScanError::Parse`]): The file contributes nothing, scan continues
/// - **Unsupported files** ([`ScanError::UnsupportedFormat`]): Skipped, scan continues
///
/// [`Scanner::scan`](crate::Scanner::scan) never surfaces the recoverable
/// variants; they are only visible through
/// [`FileAnalyzer::analyze_file`](crate::FileAnalyzer::analyze_file) and the
/// streaming API.
///
/// # Examples
///
/// ```
/// use elf_scanner::ScanError;
///
/// fn handle_error(err: ScanError) {
///     match err {
///         ScanError::Walk(e) => eprintln!("Walk error: {e}"),
///         ScanError::Read { path, .. } => eprintln!("Read error: {path}"),
///         ScanError::Parse { path, .. } => eprintln!("Parse error: {path}"),
///         ScanError::UnsupportedFormat(path) => eprintln!("Unsupported: {path}"),
///         ScanError::Config(msg) => eprintln!("Config error: {msg}"),
///         ScanError::NonUtf8Path(p) => eprintln!("Invalid path: {}", p.display()),
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Failed to walk a directory.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Failed to read a file.
    #[error("failed to read file {path}: {source}")]
    Read {
        /// The path of the file that couldn't be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A parser could not run on a file.
    #[error("failed to parse file {path}: {source}")]
    Parse {
        /// The path of the file that couldn't be parsed.
        path: Utf8PathBuf,
        /// The underlying parse error.
        #[source]
        source: elf_parser::ParseError,
    },

    /// No parser claims the file.
    #[error("no parser supports file {0}")]
    UnsupportedFormat(Utf8PathBuf),

    /// Invalid discovery configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A path is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", _0.display())]
    NonUtf8Path(std::path::PathBuf),
}

impl ScanError {
    /// Creates a new [`ScanError::Read`] error.
    #[inline]
    pub fn read(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`ScanError::Parse`] error.
    #[inline]
    pub fn parse(path: impl Into<Utf8PathBuf>, source: elf_parser::ParseError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`ScanError::Config`] error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns `true` if this error only affects a single file.
    #[inline]
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Read { .. } | Self::Parse { .. } | Self::UnsupportedFormat(_)
        )
    }

    /// Returns `true` if this error should stop the operation.
    #[inline]
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }

    /// Returns the file path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8PathBuf> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::UnsupportedFormat(path) => {
                Some(path)
            }
            Self::Walk(_) | Self::Config(_) | Self::NonUtf8Path(_) => None,
        }
    }
}
