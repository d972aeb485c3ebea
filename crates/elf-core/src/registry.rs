//! Component type registry.
//!
//! This module provides [`ComponentRegistry`], which maps a semantic
//! component type (`form`, `button`, `dialog`) to the literal element names
//! that realize it across UI libraries, and [`ComponentMapping`], the
//! per-type table.
//!
//! # Built-in Mappings
//!
//! | Type | native | quasar | material |
//! |------|--------|--------|----------|
//! | `form` | `form` | `q-form`, `QForm` | `v-form`, `VForm`, `Form`, `MuiForm` |
//! | `button` | `button` | `q-btn`, `QBtn` | `v-btn`, `VBtn`, `Button`, `MuiButton` |
//! | `dialog` | `dialog` | `q-dialog`, `QDialog` | `v-dialog`, `VDialog`, `Dialog`, `MuiDialog` |
//!
//! # Custom Types
//!
//! A type with no entry in the table matches elements whose name equals the
//! type itself (ignoring case), so `Widget` finds `<Widget>` and `<widget>`
//! without any registration.
//!
//! # Thread Safety
//!
//! The registry is never mutated after construction. Share it across scan
//! workers with an `Arc`.

use crate::hash::FxHashMap;

/// Library groups and their element names, one table per semantic type.
type LibraryTable = &'static [(&'static str, &'static [&'static str])];

const FORM_LIBRARIES: LibraryTable = &[
    ("native", &["form"]),
    ("quasar", &["q-form", "QForm"]),
    ("material", &["v-form", "VForm", "Form", "MuiForm"]),
];

const BUTTON_LIBRARIES: LibraryTable = &[
    ("native", &["button"]),
    ("quasar", &["q-btn", "QBtn"]),
    ("material", &["v-btn", "VBtn", "Button", "MuiButton"]),
];

const DIALOG_LIBRARIES: LibraryTable = &[
    ("native", &["dialog"]),
    ("quasar", &["q-dialog", "QDialog"]),
    ("material", &["v-dialog", "VDialog", "Dialog", "MuiDialog"]),
];

/// The element names registered for one semantic component type.
///
/// # Examples
///
/// ```
/// use elf_core::ComponentRegistry;
///
/// let registry = ComponentRegistry::new();
/// let mapping = registry.get_mapping("button").unwrap();
///
/// assert_eq!(mapping.component_type(), "button");
/// assert!(mapping.contains("q-btn"));
/// assert!(mapping.libraries().any(|(lib, _)| lib == "quasar"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentMapping {
    component_type: &'static str,
    libraries: LibraryTable,
}

impl ComponentMapping {
    /// Returns the semantic type this mapping describes.
    #[inline]
    #[must_use]
    pub const fn component_type(&self) -> &'static str {
        self.component_type
    }

    /// Iterates over `(library, element names)` groups.
    pub fn libraries(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
        self.libraries.iter().copied()
    }

    /// Iterates over every element name across all library groups.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.libraries
            .iter()
            .flat_map(|(_, names)| names.iter().copied())
    }

    /// Returns `true` if `element_name` equals any registered name, ignoring case.
    #[must_use]
    pub fn contains(&self, element_name: &str) -> bool {
        self.names().any(|name| eq_ignore_case(name, element_name))
    }
}

/// Maps semantic component types to library-specific element names.
///
/// # Examples
///
/// ```
/// use elf_core::ComponentRegistry;
///
/// let registry = ComponentRegistry::new();
///
/// // Known types match any registered name, ignoring case
/// assert!(registry.matches_component_type("Q-FORM", "form"));
/// assert!(!registry.matches_component_type("q-form-extended", "form"));
///
/// // Unknown types fall back to a literal name comparison
/// assert!(registry.matches_component_type("widget", "Widget"));
/// assert!(!registry.matches_component_type("OtherWidget", "Widget"));
/// ```
#[derive(Debug, Clone)]
pub struct ComponentRegistry {
    /// Keyed by lowercase component type.
    mappings: FxHashMap<&'static str, ComponentMapping>,
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentRegistry {
    /// Creates a registry populated with the built-in mappings.
    #[must_use]
    pub fn new() -> Self {
        let mut mappings = FxHashMap::default();
        for (component_type, libraries) in [
            ("form", FORM_LIBRARIES),
            ("button", BUTTON_LIBRARIES),
            ("dialog", DIALOG_LIBRARIES),
        ] {
            mappings.insert(
                component_type,
                ComponentMapping {
                    component_type,
                    libraries,
                },
            );
        }
        Self { mappings }
    }

    /// Returns the mapping for a component type, if one is registered.
    ///
    /// The lookup ignores case: `"Form"` and `"FORM"` both find `form`.
    #[must_use]
    pub fn get_mapping(&self, component_type: &str) -> Option<&ComponentMapping> {
        self.mappings.get(component_type.to_lowercase().as_str())
    }

    /// Returns `true` if `element_name` realizes `component_type`.
    ///
    /// For a registered type, the name must equal one of the type's element
    /// names. For any other type, the name must equal the type itself. Both
    /// comparisons ignore case and are exact: no prefix or partial matching.
    #[must_use]
    pub fn matches_component_type(&self, element_name: &str, component_type: &str) -> bool {
        match self.get_mapping(component_type) {
            Some(mapping) => mapping.contains(element_name),
            None => eq_ignore_case(element_name, component_type),
        }
    }

    /// Returns `true` if the type has built-in mappings.
    #[inline]
    #[must_use]
    pub fn is_known_type(&self, component_type: &str) -> bool {
        self.get_mapping(component_type).is_some()
    }

    /// Iterates over the registered component types, sorted.
    pub fn known_types(&self) -> impl Iterator<Item = &'static str> {
        let mut types: Vec<_> = self.mappings.keys().copied().collect();
        types.sort_unstable();
        types.into_iter()
    }

    /// Returns the number of registered types.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Returns `true` if no types are registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

/// Unicode-aware case-insensitive equality without allocating.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
