//! Scan statistics with atomic counters.
//!
//! [`ScanResult::scanned_files`](elf_core::ScanResult::scanned_files) counts
//! every path handed to the scanner. [`ScanStats`] tracks what actually
//! happened to each one.
//!
//! # Examples
//!
//! ```
//! use elf_scanner::ScanStats;
//!
//! let stats = ScanStats::new();
//! stats.increment_total();
//! stats.increment_parsed();
//! stats.add_matches(3);
//!
//! let snapshot = stats.snapshot();
//! assert_eq!(snapshot.parsed, 1);
//! assert_eq!(snapshot.matches, 3);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Atomic counters for scan statistics.
///
/// Counters use relaxed ordering; they are informational and read only
/// after the workers that update them have finished.
#[derive(Debug, Default)]
pub struct ScanStats {
    /// Paths handed to the scanner.
    total: AtomicU64,
    /// Files read and parsed.
    parsed: AtomicU64,
    /// Files no parser claims.
    unsupported: AtomicU64,
    /// Files that could not be read or parsed.
    failed: AtomicU64,
    /// Classified matches across all parsed files.
    matches: AtomicU64,
}

impl ScanStats {
    /// Creates a new [`ScanStats`] with all counters at zero.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the total paths counter.
    #[inline]
    pub fn increment_total(&self) {
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the parsed files counter.
    #[inline]
    pub fn increment_parsed(&self) {
        self.parsed.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the unsupported files counter.
    #[inline]
    pub fn increment_unsupported(&self) {
        self.unsupported.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the failed files counter.
    #[inline]
    pub fn increment_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Adds `count` classified matches.
    #[inline]
    pub fn add_matches(&self, count: usize) {
        let count = u64::try_from(count).unwrap_or(u64::MAX);
        self.matches.fetch_add(count, Ordering::Relaxed);
    }

    /// Returns a point-in-time snapshot of all counters.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total: self.total.load(Ordering::Relaxed),
            parsed: self.parsed.load(Ordering::Relaxed),
            unsupported: self.unsupported.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            matches: self.matches.load(Ordering::Relaxed),
        }
    }

    /// Resets all counters to zero.
    pub fn reset(&self) {
        self.total.store(0, Ordering::Relaxed);
        self.parsed.store(0, Ordering::Relaxed);
        self.unsupported.store(0, Ordering::Relaxed);
        self.failed.store(0, Ordering::Relaxed);
        self.matches.store(0, Ordering::Relaxed);
    }
}

/// A point-in-time copy of [`ScanStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Paths handed to the scanner.
    pub total: u64,
    /// Files read and parsed.
    pub parsed: u64,
    /// Files no parser claims.
    pub unsupported: u64,
    /// Files that could not be read or parsed.
    pub failed: u64,
    /// Classified matches across all parsed files.
    pub matches: u64,
}

impl StatsSnapshot {
    /// Returns the number of paths that did not produce a parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use elf_scanner::StatsSnapshot;
    ///
    /// let snap = StatsSnapshot {
    ///     total: 10,
    ///     parsed: 7,
    ///     unsupported: 2,
    ///     failed: 1,
    ///     matches: 4,
    /// };
    /// assert_eq!(snap.skipped(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn skipped(&self) -> u64 {
        self.unsupported + self.failed
    }

    /// Returns `true` if every path was read and parsed.
    #[inline]
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.skipped() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new_is_zero() {
        assert_eq!(ScanStats::new().snapshot(), StatsSnapshot::default());
    }

    #[test]
    fn test_stats_increments() {
        let stats = ScanStats::new();
        stats.increment_total();
        stats.increment_total();
        stats.increment_total();
        stats.increment_parsed();
        stats.increment_unsupported();
        stats.increment_failed();
        stats.add_matches(2);
        stats.add_matches(5);

        let snap = stats.snapshot();
        assert_eq!(snap.total, 3);
        assert_eq!(snap.parsed, 1);
        assert_eq!(snap.unsupported, 1);
        assert_eq!(snap.failed, 1);
        assert_eq!(snap.matches, 7);
        assert_eq!(snap.skipped(), 2);
        assert!(!snap.is_clean());
    }

    #[test]
    fn test_stats_reset() {
        let stats = ScanStats::new();
        stats.increment_total();
        stats.increment_failed();
        stats.add_matches(1);
        stats.reset();

        let snap = stats.snapshot();
        assert_eq!(snap, StatsSnapshot::default());
        assert!(snap.is_clean());
    }

    #[test]
    fn test_stats_concurrent_updates() {
        let stats = ScanStats::new();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..250 {
                        stats.increment_total();
                    }
                });
            }
        });
        assert_eq!(stats.snapshot().total, 1000);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = StatsSnapshot {
            total: 4,
            parsed: 3,
            unsupported: 1,
            failed: 0,
            matches: 9,
        };
        insta::assert_snapshot!(
            serde_json::to_string(&snap).unwrap(),
            @r#"{"total":4,"parsed":3,"unsupported":1,"failed":0,"matches":9}"#
        );
    }
}
