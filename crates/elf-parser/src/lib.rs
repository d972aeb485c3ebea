//! Text-pattern component parsers for Vue and React sources.
//!
//! This crate turns the text of a single source file into a list of raw
//! [`ComponentMatch`](elf_core::ComponentMatch)es: one per component tag
//! name per physical line. Matches come out unclassified (empty
//! `component_type`); classification is the scanner's job.
//!
//! # Overview
//!
//! Parsers implement the [`ComponentParser`] trait. Two ship with the crate:
//!
//! | Parser | Files | Strategy |
//! |--------|-------|----------|
//! | [`SfcParser`] | `.vue` | Template pass (all non-HTML tags) + script pass (JSX tags) |
//! | [`JsxParser`] | `.jsx`, `.tsx` | Whole-file JSX pass (capitalized tags) |
//!
//! ```
//! use camino::Utf8Path;
//! use elf_parser::{default_parsers, select_parser};
//!
//! let parsers = default_parsers();
//! let path = Utf8Path::new("src/Login.vue");
//! let parser = select_parser(&parsers, path).expect("vue is supported");
//!
//! let matches = parser.parse("<template><q-form></q-form></template>", path)?;
//! assert_eq!(matches[0].component_name, "q-form");
//! # Ok::<(), elf_parser::ParseError>(())
//! ```
//!
//! # Limitations
//!
//! Matching is purely textual. Tags inside comments and string literals are
//! reported, and TypeScript generics that look like tags (`Array<Form>`) are
//! reported by the JSX pass.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
mod extract;
mod html;
mod jsx;
mod parser;
pub mod patterns;
mod sfc;

pub use error::ParseError;
pub use html::{is_html_tag, HTML_TAG_NAMES};
pub use jsx::JsxParser;
pub use parser::{default_parsers, select_parser, ComponentParser};
pub use sfc::SfcParser;
