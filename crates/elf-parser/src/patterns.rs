//! Pre-compiled text patterns shared by all parsers.
//!
//! Every pattern is compiled once per process and cached in a [`OnceLock`],
//! so parsers on every scan worker share the same [`Regex`] instances.
//!
//! # Patterns
//!
//! | Pattern | Matches |
//! |---------|---------|
//! | [`TEMPLATE_REGION`] | Body of the first `<template ...>...</template>` |
//! | [`SCRIPT_REGION`] | Body of the first `<script ...>...</script>` |
//! | [`MARKUP_TAG`] | `<name` with a letter start, letters/digits/hyphens after |
//! | [`JSX_TAG`] | `<Name` with an uppercase start, letters/digits after |
//!
//! Both tag patterns require the name to be followed by whitespace, `>`,
//! `/`, or the end of the line, and are applied one line at a time.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ParseError;

/// Opening `<template>` (any attributes) through the first `</template>`.
pub const TEMPLATE_REGION: &str = r"(?s)<template[^>]*>(.*?)</template>";

/// Opening `<script>` (any attributes) through the first `</script>`.
pub const SCRIPT_REGION: &str = r"(?s)<script[^>]*>(.*?)</script>";

/// Opening tag in template markup, including kebab-case names.
pub const MARKUP_TAG: &str = r"<([A-Za-z][A-Za-z0-9-]*)(?:[\s>/]|$)";

/// Opening tag of a JSX component (capitalized name).
pub const JSX_TAG: &str = r"<([A-Z][A-Za-z0-9]*)(?:[\s>/]|$)";

static TEMPLATE_REGION_RE: OnceLock<Regex> = OnceLock::new();
static SCRIPT_REGION_RE: OnceLock<Regex> = OnceLock::new();
static MARKUP_TAG_RE: OnceLock<Regex> = OnceLock::new();
static JSX_TAG_RE: OnceLock<Regex> = OnceLock::new();

/// Returns the compiled [`TEMPLATE_REGION`] pattern.
pub fn template_region() -> Result<&'static Regex, ParseError> {
    cached(&TEMPLATE_REGION_RE, TEMPLATE_REGION)
}

/// Returns the compiled [`SCRIPT_REGION`] pattern.
pub fn script_region() -> Result<&'static Regex, ParseError> {
    cached(&SCRIPT_REGION_RE, SCRIPT_REGION)
}

/// Returns the compiled [`MARKUP_TAG`] pattern.
pub fn markup_tag() -> Result<&'static Regex, ParseError> {
    cached(&MARKUP_TAG_RE, MARKUP_TAG)
}

/// Returns the compiled [`JSX_TAG`] pattern.
pub fn jsx_tag() -> Result<&'static Regex, ParseError> {
    cached(&JSX_TAG_RE, JSX_TAG)
}

/// Compiles `pattern` on first use and caches it in `cell`.
///
/// Two threads racing on first use may both compile; only one result is kept.
fn cached(cell: &'static OnceLock<Regex>, pattern: &'static str) -> Result<&'static Regex, ParseError> {
    if let Some(regex) = cell.get() {
        return Ok(regex);
    }

    let regex =
        Regex::new(pattern).map_err(|source| ParseError::PatternCompile { pattern, source })?;

    Ok(cell.get_or_init(|| regex))
}
