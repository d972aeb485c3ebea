//! Concurrent component scanner and file discovery for Vue and React sources.
//!
//! This crate turns a list of source files into a
//! [`ScanResult`](elf_core::ScanResult): every usage of a requested
//! semantic component type, with file and line.
//!
//! # Overview
//!
//! The main entry point is [`Scanner`], which combines:
//!
//! - [`FileAnalyzer`]: per-file select, read, parse, classify, plus the
//!   concurrent fan-out over a batch
//! - [`ScanStats`]: atomic counters for what happened to each file
//!
//! [`FileWalker`] is independent of the scanner: it discovers the paths a
//! caller hands to [`Scanner::scan`].
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use camino::Utf8Path;
//! use elf_core::ComponentRegistry;
//! use elf_scanner::{FileWalker, Scanner};
//!
//! let paths = FileWalker::new(Utf8Path::new("./src"))?.collect_paths()?;
//! let scanner = Scanner::new(Arc::new(ComponentRegistry::new()));
//!
//! let result = scanner.scan(&paths, "form")?;
//! println!("{} forms in {} files", result.total_count, result.scanned_files);
//! # Ok::<(), elf_scanner::ScanError>(())
//! ```
//!
//! # Streaming API
//!
//! [`Scanner::scan_streaming`] reports each file as soon as it is done.
//! It blocks, so run it off the async runtime:
//!
//! ```ignore
//! let (tx, mut rx) = tokio::sync::mpsc::channel(256);
//! let worker = scanner.clone();
//! tokio::task::spawn_blocking(move || worker.scan_streaming(&paths, "dialog", tx));
//!
//! while let Some(update) = rx.recv().await {
//!     match update {
//!         ScanUpdate::FileScanned { path, matches } => println!("{path}: {matches}"),
//!         ScanUpdate::FileSkipped(path) => println!("skipped {path}"),
//!         ScanUpdate::FileError { path, error } => println!("{path}: {error}"),
//!         ScanUpdate::Complete(result) => println!("done: {}", result.total_count),
//!     }
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Scanner (main entry point)
//!     │
//!     ├── FileAnalyzer (one rayon task per file)
//!     │       │
//!     │       ├── select_parser (elf-parser)
//!     │       ├── ComponentRegistry (elf-core, shared via Arc)
//!     │       └── mpsc collector (tokio, sized to the batch)
//!     │
//!     └── ScanStats (atomic counters)
//!
//! FileWalker (discovery, WalkBuilder from the ignore crate)
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod analyzer;
mod error;
mod stats;
mod walker;

pub use analyzer::FileAnalyzer;
pub use error::ScanError;
pub use stats::{ScanStats, StatsSnapshot};
pub use walker::FileWalker;

use std::sync::Arc;
use std::time::Instant;

use camino::Utf8PathBuf;
use elf_core::{ComponentRegistry, ScanResult};
use elf_parser::{default_parsers, ComponentParser};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Update sent during a streaming scan.
///
/// Exactly one per-file update is sent for every input path, followed by a
/// single [`ScanUpdate::Complete`].
#[derive(Debug)]
pub enum ScanUpdate {
    /// A file was parsed.
    FileScanned {
        /// The file's path.
        path: Utf8PathBuf,
        /// Number of classified matches in the file.
        matches: usize,
    },

    /// No parser claims the file.
    FileSkipped(Utf8PathBuf),

    /// A file could not be read or parsed.
    FileError {
        /// The path of the file that failed.
        path: Utf8PathBuf,
        /// The error that occurred.
        error: ScanError,
    },

    /// Every file is done.
    Complete(ScanResult),
}

/// Scans batches of files for usages of a semantic component type.
///
/// # Cloning
///
/// `Scanner` is cheaply cloneable via internal `Arc` references. Clones
/// share the parsers, registry, and statistics, so a clone can run a
/// streaming scan on a blocking thread while the original reads
/// [`stats`](Self::stats).
#[derive(Debug, Clone)]
pub struct Scanner {
    /// Parsers in precedence order.
    parsers: Arc<[Box<dyn ComponentParser>]>,
    /// Type registry used for classification.
    registry: Arc<ComponentRegistry>,
    /// Counters for the most recent scan.
    stats: Arc<ScanStats>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(Arc::new(ComponentRegistry::new()))
    }
}

impl Scanner {
    /// Creates a scanner with the built-in Vue and JSX/TSX parsers.
    #[must_use]
    pub fn new(registry: Arc<ComponentRegistry>) -> Self {
        Self::with_parsers(default_parsers(), registry)
    }

    /// Creates a scanner with a custom parser list.
    ///
    /// For each file the first parser that claims it is used.
    #[must_use]
    pub fn with_parsers(
        parsers: Vec<Box<dyn ComponentParser>>,
        registry: Arc<ComponentRegistry>,
    ) -> Self {
        Self {
            parsers: parsers.into(),
            registry,
            stats: Arc::new(ScanStats::new()),
        }
    }

    /// Scans `paths` for usages of `requested_type`.
    ///
    /// Files are analyzed concurrently. A file that no parser claims, that
    /// cannot be read, or that cannot be parsed contributes no matches and
    /// does not fail the scan. `scanned_files` in the result is always
    /// `paths.len()`; see [`stats`](Self::stats) for how many were parsed.
    ///
    /// # Errors
    ///
    /// Per-file failures are never returned. The `Result` is reserved for
    /// scan-level failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use elf_scanner::Scanner;
    ///
    /// let result = Scanner::default().scan(&[], "form")?;
    /// assert!(result.is_empty());
    /// assert_eq!(result.scanned_files, 0);
    /// # Ok::<(), elf_scanner::ScanError>(())
    /// ```
    pub fn scan(
        &self,
        paths: &[Utf8PathBuf],
        requested_type: &str,
    ) -> Result<ScanResult, ScanError> {
        self.stats.reset();

        if paths.is_empty() {
            debug!(component_type = requested_type, "Nothing to scan");
            return Ok(ScanResult::empty(requested_type));
        }

        let start = Instant::now();
        info!(
            files = paths.len(),
            component_type = requested_type,
            "Starting scan"
        );

        let matches = self
            .analyzer()
            .analyze_files(paths, requested_type, &self.stats);

        let result = ScanResult::new(matches, elapsed_ms(start), requested_type, paths.len());
        self.log_completion(&result, "Scan completed");

        Ok(result)
    }

    /// Scans `paths`, streaming one [`ScanUpdate`] per file and a final
    /// [`ScanUpdate::Complete`].
    ///
    /// The sender is dropped on return, closing the channel once the
    /// receiver has drained it.
    ///
    /// # Blocking
    ///
    /// Uses `blocking_send` and panics if called from within an async
    /// runtime; use `tokio::task::spawn_blocking` or a plain thread.
    ///
    /// # Errors
    ///
    /// Same contract as [`scan`](Self::scan). A dropped receiver is not an
    /// error.
    #[allow(clippy::needless_pass_by_value)] // Dropped on return to close the channel
    pub fn scan_streaming(
        &self,
        paths: &[Utf8PathBuf],
        requested_type: &str,
        tx: mpsc::Sender<ScanUpdate>,
    ) -> Result<(), ScanError> {
        self.stats.reset();

        let result = if paths.is_empty() {
            ScanResult::empty(requested_type)
        } else {
            let start = Instant::now();
            info!(
                files = paths.len(),
                component_type = requested_type,
                "Starting streaming scan"
            );

            let matches = self.analyzer().analyze_files_streaming(
                paths,
                requested_type,
                &self.stats,
                &tx,
            );

            let result = ScanResult::new(matches, elapsed_ms(start), requested_type, paths.len());
            self.log_completion(&result, "Streaming scan completed");
            result
        };

        let _ = tx.blocking_send(ScanUpdate::Complete(result));
        Ok(())
    }

    /// Returns an analyzer over this scanner's parsers and registry.
    #[must_use]
    pub fn analyzer(&self) -> FileAnalyzer<'_> {
        FileAnalyzer::new(&self.parsers, &self.registry)
    }

    /// Returns a snapshot of the counters for the most recent scan.
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Returns the type registry used for classification.
    #[must_use]
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Returns the parsers in precedence order.
    #[must_use]
    pub fn parsers(&self) -> &[Box<dyn ComponentParser>] {
        &self.parsers
    }

    fn log_completion(&self, result: &ScanResult, message: &str) {
        let stats = self.stats.snapshot();
        info!(
            matches = result.total_count,
            files = result.scanned_files,
            elapsed_ms = result.scan_time_ms,
            "{message}"
        );
        debug!(
            parsed = stats.parsed,
            unsupported = stats.unsupported,
            failed = stats.failed,
            "Scan statistics"
        );
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
