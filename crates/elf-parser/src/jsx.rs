//! Parser for React component modules (`.jsx`, `.tsx`).
//!
//! The whole file is a single JSX pass starting at line 1. Only capitalized
//! tags are reported: lowercase JSX elements are host elements, not
//! components.
//!
//! TypeScript generics written like tags (`useState<Form>()`) and tags in
//! comments are reported too. That is a known limitation of text matching.

use camino::Utf8Path;
use elf_core::ComponentMatch;

use crate::error::ParseError;
use crate::extract::{collect_tags, Region};
use crate::parser::ComponentParser;
use crate::patterns;

const JSX_EXTENSIONS: &[&str] = &[".jsx", ".tsx"];

/// Parser for `.jsx` and `.tsx` modules.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsxParser {
    _private: (),
}

impl JsxParser {
    /// Creates a new JSX/TSX parser.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ComponentParser for JsxParser {
    fn name(&self) -> &'static str {
        "jsx"
    }

    fn extensions(&self) -> &'static [&'static str] {
        JSX_EXTENSIONS
    }

    fn parse(&self, content: &str, path: &Utf8Path) -> Result<Vec<ComponentMatch>, ParseError> {
        let mut matches = Vec::new();
        collect_tags(
            Region::whole(content),
            patterns::jsx_tag()?,
            path,
            |_| true,
            &mut matches,
        );
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Vec<(String, u32)> {
        JsxParser::new()
            .parse(source, Utf8Path::new("App.tsx"))
            .unwrap()
            .into_iter()
            .map(|m| (m.component_name, m.line))
            .collect()
    }

    #[test]
    fn test_supports_file() {
        let parser = JsxParser::new();
        assert!(parser.supports_file(Utf8Path::new("App.jsx")));
        assert!(parser.supports_file(Utf8Path::new("App.TSX")));
        assert!(!parser.supports_file(Utf8Path::new("App.ts")));
        assert!(!parser.supports_file(Utf8Path::new("App.js")));
        assert!(!parser.supports_file(Utf8Path::new("App.vue")));
    }

    #[test]
    fn test_single_line() {
        assert_eq!(parse("<Button>Click me</Button>"), vec![("Button".to_owned(), 1)]);
    }

    #[test]
    fn test_multi_line_component() {
        let source = "import React from 'react';\n\nfunction MyComponent() {\n  return (\n    <div>\n      <Button onClick={handleClick}>Click me</Button>\n    </div>\n  );\n}";
        assert_eq!(parse(source), vec![("Button".to_owned(), 6)]);
    }

    #[test]
    fn test_lowercase_and_closing_tags_ignored() {
        assert!(parse("<div><span></span></div>").is_empty());
        assert!(parse("</Button>").is_empty());
    }

    #[test]
    fn test_per_line_dedup() {
        let source = "<Form><Form.Item /><Field/><Field/></Form>\n<Field/>";
        assert_eq!(
            parse(source),
            vec![
                ("Form".to_owned(), 1),
                ("Field".to_owned(), 1),
                ("Field".to_owned(), 2),
            ]
        );
    }

    #[test]
    fn test_self_closing_and_line_end() {
        let source = "<Dialog\n  open\n/>\n<MuiDialog/>";
        assert_eq!(
            parse(source),
            vec![("Dialog".to_owned(), 1), ("MuiDialog".to_owned(), 4)]
        );
    }

    #[test]
    fn test_generic_false_positive() {
        // Documented limitation: generics look like tags
        assert_eq!(
            parse("const [f] = useState<Form >(null);"),
            vec![("Form".to_owned(), 1)]
        );
    }
}
