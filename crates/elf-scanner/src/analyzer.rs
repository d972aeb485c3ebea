//! Per-file analysis and the concurrent fan-out over a batch of files.
//!
//! A unit of work is one file: pick the first parser that claims it, read
//! it, parse it, and keep only the matches the registry classifies as the
//! requested type. Units never fail the batch; a file that cannot be read,
//! parsed, or claimed simply contributes nothing.
//!
//! # Design
//!
//! [`FileAnalyzer::analyze_files`] spawns one rayon task per path inside a
//! [`rayon::scope`]. Each task delivers its batch exactly once over a
//! bounded [`tokio::sync::mpsc`] channel sized to the input, so `try_send`
//! never finds it full. The collector drains the channel after the scope
//! has joined every task.

use std::borrow::Cow;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use elf_core::{ComponentMatch, ComponentRegistry};
use elf_parser::{select_parser, ComponentParser};
use parking_lot::Mutex;
use rayon::prelude::*;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::error::ScanError;
use crate::stats::ScanStats;
use crate::ScanUpdate;

/// Runs the select, read, parse, and classify pipeline on files.
///
/// Borrows the parser list and registry; both are shared read-only by
/// every worker.
///
/// # Examples
///
/// ```no_run
/// use camino::Utf8Path;
/// use elf_core::ComponentRegistry;
/// use elf_parser::default_parsers;
/// use elf_scanner::FileAnalyzer;
///
/// let parsers = default_parsers();
/// let registry = ComponentRegistry::new();
/// let analyzer = FileAnalyzer::new(&parsers, &registry);
///
/// let matches = analyzer.analyze_file(Utf8Path::new("src/Login.vue"), "form")?;
/// for m in &matches {
///     println!("{}:{} {}", m.file_path, m.line, m.component_name);
/// }
/// # Ok::<(), elf_scanner::ScanError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FileAnalyzer<'a> {
    parsers: &'a [Box<dyn ComponentParser>],
    registry: &'a ComponentRegistry,
}

impl<'a> FileAnalyzer<'a> {
    /// Creates an analyzer over `parsers` (in precedence order) and `registry`.
    #[inline]
    #[must_use]
    pub const fn new(
        parsers: &'a [Box<dyn ComponentParser>],
        registry: &'a ComponentRegistry,
    ) -> Self {
        Self { parsers, registry }
    }

    /// Analyzes a single file.
    ///
    /// Returned matches have their component type set to `requested_type`.
    /// File content that is not valid UTF-8 is decoded lossily.
    ///
    /// # Errors
    ///
    /// - [`ScanError::UnsupportedFormat`] if no parser claims the path
    /// - [`ScanError::Read`] if the file cannot be read
    /// - [`ScanError::Parse`] if the parser cannot run
    pub fn analyze_file(
        &self,
        path: &Utf8Path,
        requested_type: &str,
    ) -> Result<Vec<ComponentMatch>, ScanError> {
        let parser = select_parser(self.parsers, path)
            .ok_or_else(|| ScanError::UnsupportedFormat(path.to_owned()))?;

        let bytes = fs::read(path.as_std_path()).map_err(|e| ScanError::read(path, e))?;
        let content: Cow<'_, str> = String::from_utf8_lossy(&bytes);

        let raw = parser
            .parse(&content, path)
            .map_err(|e| ScanError::parse(path, e))?;

        Ok(raw
            .into_iter()
            .filter(|m| {
                self.registry
                    .matches_component_type(&m.component_name, requested_type)
            })
            .map(|m| m.with_type(requested_type))
            .collect())
    }

    /// Analyzes every path concurrently and returns the joined matches.
    ///
    /// Match order is unspecified. Per-file outcomes are recorded in `stats`
    /// and logged at trace level.
    #[must_use]
    pub fn analyze_files(
        &self,
        paths: &[Utf8PathBuf],
        requested_type: &str,
        stats: &ScanStats,
    ) -> Vec<ComponentMatch> {
        let (tx, mut rx) = mpsc::channel::<Vec<ComponentMatch>>(paths.len().max(1));

        rayon::scope(|scope| {
            for path in paths {
                let tx = tx.clone();
                scope.spawn(move |_| {
                    let outcome = self.analyze_file(path, requested_type);
                    record_outcome(path, &outcome, stats);

                    let batch = outcome.unwrap_or_default();
                    if let Err(err) = tx.try_send(batch) {
                        debug!(path = %path, error = %err, "Collector rejected batch");
                    }
                });
            }
        });

        // Every task has joined; dropping the last sender closes the channel
        drop(tx);

        let mut matches = Vec::new();
        while let Ok(batch) = rx.try_recv() {
            matches.extend(batch);
        }
        matches
    }

    /// Analyzes every path concurrently, sending one [`ScanUpdate`] per file.
    ///
    /// Returns the joined matches once all files are done. Uses
    /// `blocking_send`, so it must not be called from an async context.
    ///
    /// # Cancellation
    ///
    /// If the receiver is dropped, updates are discarded but every file is
    /// still analyzed.
    #[must_use]
    pub fn analyze_files_streaming(
        &self,
        paths: &[Utf8PathBuf],
        requested_type: &str,
        stats: &ScanStats,
        tx: &mpsc::Sender<ScanUpdate>,
    ) -> Vec<ComponentMatch> {
        let collected: Mutex<Vec<ComponentMatch>> = Mutex::new(Vec::new());

        paths.par_iter().for_each_with(tx.clone(), |sender, path| {
            let outcome = self.analyze_file(path, requested_type);
            record_outcome(path, &outcome, stats);

            let update = match outcome {
                Ok(matches) => {
                    let count = matches.len();
                    collected.lock().extend(matches);
                    ScanUpdate::FileScanned {
                        path: path.clone(),
                        matches: count,
                    }
                }
                Err(ScanError::UnsupportedFormat(skipped)) => ScanUpdate::FileSkipped(skipped),
                Err(error) => ScanUpdate::FileError {
                    path: path.clone(),
                    error,
                },
            };

            let _ = sender.blocking_send(update);
        });

        collected.into_inner()
    }
}

/// Updates counters and logs the outcome of one unit.
fn record_outcome(
    path: &Utf8Path,
    outcome: &Result<Vec<ComponentMatch>, ScanError>,
    stats: &ScanStats,
) {
    stats.increment_total();

    match outcome {
        Ok(matches) => {
            stats.increment_parsed();
            stats.add_matches(matches.len());
            trace!(path = %path, matches = matches.len(), "Scanned file");
        }
        Err(ScanError::UnsupportedFormat(_)) => {
            stats.increment_unsupported();
            trace!(path = %path, "Skipped unsupported file");
        }
        Err(err) => {
            stats.increment_failed();
            trace!(path = %path, error = %err, "Failed to scan file");
        }
    }
}
