//! The [`ComponentParser`] capability trait.
//!
//! A parser claims files by extension and turns their text into raw
//! [`ComponentMatch`]es. Adding a format means adding an implementor; the
//! scanner only ever talks to `dyn ComponentParser`.

use std::fmt;

use camino::Utf8Path;
use elf_core::ComponentMatch;

use crate::error::ParseError;
use crate::jsx::JsxParser;
use crate::sfc::SfcParser;

/// Extracts component usages from one file format.
///
/// Implementors must be `Send + Sync`: a single instance is shared by every
/// scan worker.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use elf_parser::{ComponentParser, JsxParser};
///
/// let parser = JsxParser::new();
/// let path = Utf8Path::new("src/App.tsx");
/// assert!(parser.supports_file(path));
///
/// let matches = parser.parse("<Button>Click me</Button>", path)?;
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].component_name, "Button");
/// assert_eq!(matches[0].line, 1);
/// # Ok::<(), elf_parser::ParseError>(())
/// ```
pub trait ComponentParser: Send + Sync + fmt::Debug {
    /// Short name of the format (e.g. `"vue"`), used in logs.
    fn name(&self) -> &'static str;

    /// File suffixes this parser claims, lowercase and with the leading dot.
    fn extensions(&self) -> &'static [&'static str];

    /// Returns `true` if the path ends with one of [`extensions`](Self::extensions),
    /// ignoring case.
    fn supports_file(&self, path: &Utf8Path) -> bool {
        has_suffix_ignore_case(path.as_str(), self.extensions())
    }

    /// Extracts raw, unclassified matches from the full text of a file.
    ///
    /// Line numbers are 1-based and relative to the start of `content`.
    /// Malformed markup never produces an error.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] only if the parser cannot run at all.
    fn parse(&self, content: &str, path: &Utf8Path) -> Result<Vec<ComponentMatch>, ParseError>;
}

/// Returns the built-in parsers in precedence order: Vue, then JSX/TSX.
pub fn default_parsers() -> Vec<Box<dyn ComponentParser>> {
    vec![Box::new(SfcParser::new()), Box::new(JsxParser::new())]
}

/// Returns the first parser in `parsers` that claims `path`.
pub fn select_parser<'p>(
    parsers: &'p [Box<dyn ComponentParser>],
    path: &Utf8Path,
) -> Option<&'p dyn ComponentParser> {
    parsers
        .iter()
        .find(|parser| parser.supports_file(path))
        .map(|parser| &**parser)
}

fn has_suffix_ignore_case(path: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| {
        path.len()
            .checked_sub(suffix.len())
            .and_then(|start| path.get(start..))
            .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
    })
}
