//! Component usage types.
//!
//! This module provides [`ComponentMatch`], one occurrence of an element
//! usage in a source file.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// A single component usage found in a source file.
///
/// Parsers produce matches with an empty `component_type`; the scanner
/// stamps the requested type on the matches the registry accepts via
/// [`with_type`](Self::with_type).
///
/// # Field Conventions
///
/// - `file_path` is kept exactly as the caller supplied it
/// - `line` is 1-indexed and counts from the start of the whole file,
///   even for matches found inside a `<template>` or `<script>` region
///
/// # Ordering
///
/// Matches order by path, then line, then name. Scan results arrive in
/// no particular order, so sort before comparing.
///
/// # Examples
///
/// ```
/// use elf_core::ComponentMatch;
///
/// let raw = ComponentMatch::new("src/App.vue", 3, "q-form");
/// assert!(!raw.is_classified());
///
/// let typed = raw.with_type("form");
/// assert_eq!(typed.component_type, "form");
/// assert_eq!(typed.line, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMatch {
    /// Path of the file containing the usage.
    pub file_path: Utf8PathBuf,

    /// Line number (1-indexed, relative to the whole file).
    pub line: u32,

    /// Element name exactly as it appears in the source (e.g. `q-form`).
    pub component_name: String,

    /// Semantic type assigned by the scanner (e.g. `form`).
    ///
    /// Empty for raw matches that have not been classified yet.
    pub component_type: String,
}

impl ComponentMatch {
    /// Creates a raw, unclassified match.
    #[inline]
    #[must_use]
    pub fn new(
        file_path: impl Into<Utf8PathBuf>,
        line: u32,
        component_name: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            component_name: component_name.into(),
            component_type: String::new(),
        }
    }

    /// Returns this match with its component type set.
    #[inline]
    #[must_use]
    pub fn with_type(self, component_type: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            ..self
        }
    }

    /// Returns `true` once a component type has been assigned.
    #[inline]
    #[must_use]
    pub fn is_classified(&self) -> bool {
        !self.component_type.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_match_new_is_unclassified() {
        let m = ComponentMatch::new("a.vue", 7, "QBtn");
        assert_eq!(m.file_path.as_str(), "a.vue");
        assert_eq!(m.line, 7);
        assert_eq!(m.component_name, "QBtn");
        assert!(m.component_type.is_empty());
        assert!(!m.is_classified());
    }

    #[test]
    fn test_with_type_keeps_location() {
        let m = ComponentMatch::new("a.tsx", 12, "Dialog").with_type("dialog");
        assert!(m.is_classified());
        assert_eq!(m.component_type, "dialog");
        assert_eq!(m.line, 12);
        assert_eq!(m.component_name, "Dialog");
    }

    #[test]
    fn test_ordering_by_path_then_line() {
        let mut matches = vec![
            ComponentMatch::new("b.vue", 1, "QForm"),
            ComponentMatch::new("a.vue", 9, "QForm"),
            ComponentMatch::new("a.vue", 2, "QForm"),
        ];
        matches.sort();
        let order: Vec<_> = matches
            .iter()
            .map(|m| (m.file_path.as_str(), m.line))
            .collect();
        assert_eq!(order, vec![("a.vue", 2), ("a.vue", 9), ("b.vue", 1)]);
    }

    #[test]
    fn test_json_field_names() {
        let m = ComponentMatch::new("src/Form.vue", 4, "q-form").with_type("form");
        let json = serde_json::to_string(&m).unwrap();
        insta::assert_snapshot!(json, @r#"{"filePath":"src/Form.vue","line":4,"componentName":"q-form","componentType":"form"}"#);
    }
}
