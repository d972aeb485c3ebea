//! Standard HTML and SVG element names excluded from template matches.
//!
//! Template markup mixes native elements with component usages; reporting
//! every `<div>` would drown the results. Names in [`HTML_TAG_NAMES`] are
//! skipped, but only when written exactly in lowercase: `<Div>` is treated
//! as a component.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

/// Lowercase element names skipped by the template pass.
pub const HTML_TAG_NAMES: &[&str] = &[
    "div", "span", "p", "a", "img", "ul", "ol", "li", "table", "tr", "td", "th", "thead", "tbody",
    "tfoot", "h1", "h2", "h3", "h4", "h5", "h6", "header", "footer", "nav", "section", "article",
    "aside", "main", "input", "textarea", "select", "option", "label", "fieldset", "legend",
    "strong", "em", "b", "i", "u", "br", "hr", "pre", "code", "blockquote", "iframe", "video",
    "audio", "canvas", "svg", "path", "circle", "rect", "line", "polygon", "template", "slot",
    "script", "style", "link", "meta", "title", "head", "body", "html", "button", "form",
    "dialog",
];

static HTML_TAGS: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| HTML_TAG_NAMES.iter().copied().collect());

/// Returns `true` if `tag_name` is a standard element name in exact lowercase.
///
/// # Examples
///
/// ```
/// use elf_parser::is_html_tag;
///
/// assert!(is_html_tag("div"));
/// assert!(!is_html_tag("Div"));
/// assert!(!is_html_tag("q-form"));
/// ```
#[inline]
pub fn is_html_tag(tag_name: &str) -> bool {
    HTML_TAGS.contains(tag_name)
}
