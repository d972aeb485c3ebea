//! Error types for the elf-parser crate.
//!
//! This module provides the [`ParseError`] type. Text scanning itself never
//! fails: malformed or unbalanced markup simply yields fewer matches. The
//! only failure is a parser that cannot run at all because one of its
//! patterns does not compile.

/// Errors that can occur while preparing or running a component parser.
///
/// # Examples
///
/// ```
/// use elf_parser::ParseError;
///
/// fn handle_error(err: ParseError) {
///     match err {
///         ParseError::PatternCompile { pattern, .. } => {
///             eprintln!("pattern failed to compile: {pattern}");
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    /// A tag or region pattern failed to compile.
    #[error("failed to compile pattern `{pattern}`: {source}")]
    PatternCompile {
        /// The pattern source text.
        pattern: &'static str,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}
