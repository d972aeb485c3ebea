//! Scan result types.
//!
//! This module provides [`ScanResult`], the value a scan hands to the
//! presentation layer.

use serde::{Deserialize, Serialize};

use super::component::ComponentMatch;

/// Aggregate outcome of one scan run.
///
/// # Counting
///
/// `scanned_files` is the size of the input batch, not the number of files
/// that were actually parsed. Unsupported or unreadable files still count.
///
/// # Ordering
///
/// `matches` is filled by concurrent producers and its order changes from
/// run to run. Do not rely on it.
///
/// # Examples
///
/// ```
/// use elf_core::{ComponentMatch, ScanResult};
///
/// let matches = vec![ComponentMatch::new("a.vue", 3, "q-form").with_type("form")];
/// let result = ScanResult::new(matches, 12, "form", 4);
///
/// assert_eq!(result.total_count, 1);
/// assert_eq!(result.scanned_files, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// Every classified match across all files.
    pub matches: Vec<ComponentMatch>,

    /// Number of matches (always `matches.len()`).
    pub total_count: usize,

    /// Elapsed wall-clock time in milliseconds.
    pub scan_time_ms: u64,

    /// The requested component type, unchanged.
    pub component_type: String,

    /// Number of files in the input batch.
    pub scanned_files: usize,
}

impl ScanResult {
    /// Builds a result, deriving `total_count` from `matches`.
    #[must_use]
    pub fn new(
        matches: Vec<ComponentMatch>,
        scan_time_ms: u64,
        component_type: impl Into<String>,
        scanned_files: usize,
    ) -> Self {
        Self {
            total_count: matches.len(),
            matches,
            scan_time_ms,
            component_type: component_type.into(),
            scanned_files,
        }
    }

    /// Returns the result of scanning an empty batch.
    ///
    /// # Examples
    ///
    /// ```
    /// use elf_core::ScanResult;
    ///
    /// let result = ScanResult::empty("dialog");
    /// assert!(result.is_empty());
    /// assert_eq!(result.scan_time_ms, 0);
    /// assert_eq!(result.scanned_files, 0);
    /// ```
    #[must_use]
    pub fn empty(component_type: impl Into<String>) -> Self {
        Self::new(Vec::new(), 0, component_type, 0)
    }

    /// Returns `true` if no component was found.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Returns the matches sorted by path, line, and name.
    ///
    /// Handy for stable display and for comparisons in tests.
    #[must_use]
    pub fn sorted_matches(&self) -> Vec<&ComponentMatch> {
        let mut sorted: Vec<_> = self.matches.iter().collect();
        sorted.sort();
        sorted
    }
}
