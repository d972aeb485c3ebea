//! Parser for Vue single-file components (`.vue`).
//!
//! A single-file component holds a `<template>` region of markup and a
//! `<script>` region of code, each at most once. They are scanned in two
//! independent passes:
//!
//! 1. **Template pass**: every opening tag, kebab-case or PascalCase, minus
//!    the lowercase standard elements in [`HTML_TAG_NAMES`](crate::HTML_TAG_NAMES).
//! 2. **Script pass**: capitalized JSX tags only, so render functions are
//!    covered while ordinary script syntax is not.
//!
//! Each region keeps its own line base, so reported lines always refer to
//! the whole file. A missing region contributes nothing.
//!
//! Tags inside HTML or JS comments are reported like any other text.

use camino::Utf8Path;
use elf_core::ComponentMatch;

use crate::error::ParseError;
use crate::extract::{collect_tags, Region};
use crate::html::is_html_tag;
use crate::parser::ComponentParser;
use crate::patterns;

const SFC_EXTENSIONS: &[&str] = &[".vue"];

/// Parser for `.vue` single-file components.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use elf_parser::{ComponentParser, SfcParser};
///
/// let source = "<template>\n  <div>\n    <q-form>\n    </q-form>\n  </div>\n</template>";
/// let matches = SfcParser::new().parse(source, Utf8Path::new("Login.vue"))?;
///
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].component_name, "q-form");
/// assert_eq!(matches[0].line, 3);
/// # Ok::<(), elf_parser::ParseError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SfcParser {
    _private: (),
}

impl SfcParser {
    /// Creates a new single-file component parser.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ComponentParser for SfcParser {
    fn name(&self) -> &'static str {
        "vue"
    }

    fn extensions(&self) -> &'static [&'static str] {
        SFC_EXTENSIONS
    }

    fn parse(&self, content: &str, path: &Utf8Path) -> Result<Vec<ComponentMatch>, ParseError> {
        let mut matches = Vec::new();

        if let Some(template) = Region::locate(content, patterns::template_region()?) {
            collect_tags(
                template,
                patterns::markup_tag()?,
                path,
                |name| !is_html_tag(name),
                &mut matches,
            );
        }

        if let Some(script) = Region::locate(content, patterns::script_region()?) {
            collect_tags(script, patterns::jsx_tag()?, path, |_| true, &mut matches);
        }

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HTML_TAG_NAMES;

    fn parse(source: &str) -> Vec<ComponentMatch> {
        SfcParser::new()
            .parse(source, Utf8Path::new("Test.vue"))
            .unwrap()
    }

    fn names_and_lines(matches: &[ComponentMatch]) -> Vec<(&str, u32)> {
        matches
            .iter()
            .map(|m| (m.component_name.as_str(), m.line))
            .collect()
    }

    #[test]
    fn test_supports_file() {
        let parser = SfcParser::new();
        assert!(parser.supports_file(Utf8Path::new("App.vue")));
        assert!(parser.supports_file(Utf8Path::new("src/App.VUE")));
        assert!(!parser.supports_file(Utf8Path::new("App.jsx")));
        assert!(!parser.supports_file(Utf8Path::new("App.vue.bak")));
    }

    #[test]
    fn test_template_component_on_first_content_line() {
        let matches = parse(r#"<template><q-form><input type="text" /></q-form></template>"#);
        assert_eq!(names_and_lines(&matches), vec![("q-form", 1)]);
        assert!(matches.iter().all(|m| m.component_type.is_empty()));
        assert_eq!(matches[0].file_path.as_str(), "Test.vue");
    }

    #[test]
    fn test_template_line_base_counts_leading_lines() {
        let source = "<!-- banner -->\n\n<template>\n  <div>\n    <QDialog v-model=\"open\">\n    </QDialog>\n  </div>\n</template>\n";
        let matches = parse(source);
        assert_eq!(names_and_lines(&matches), vec![("QDialog", 5)]);
    }

    #[test]
    fn test_template_with_attributes_on_opening_tag() {
        let source = "<template lang=\"html\">\n<v-btn\n  color=\"primary\"\n>Save</v-btn>\n</template>";
        let matches = parse(source);
        assert_eq!(names_and_lines(&matches), vec![("v-btn", 2)]);
    }

    #[test]
    fn test_denylisted_names_are_never_reported() {
        let mut body = String::new();
        for name in HTML_TAG_NAMES {
            body.push_str(&format!("<{name}>\n<{name} class=\"x\">\n<{name}/>\n<{name} />\n"));
        }
        let source = format!("<template>\n{body}</template>");
        assert!(parse(&source).is_empty());
    }

    #[test]
    fn test_denylist_is_case_sensitive() {
        let matches = parse("<template>\n<Div>\n<FORM>\n<form>\n</template>");
        assert_eq!(names_and_lines(&matches), vec![("Div", 2), ("FORM", 3)]);
    }

    #[test]
    fn test_per_line_dedup() {
        let source = "<template>\n<q-btn/><q-btn/><q-icon/>\n<q-btn/>\n</template>";
        let matches = parse(source);
        assert_eq!(
            names_and_lines(&matches),
            vec![("q-btn", 2), ("q-icon", 2), ("q-btn", 3)]
        );
    }

    #[test]
    fn test_script_pass_uses_whole_file_lines() {
        let source = "<template>\n  <q-card/>\n</template>\n\n<script setup lang=\"tsx\">\nconst render = () => <MuiDialog open />\nconst x = <div />\n</script>\n";
        let matches = parse(source);
        assert_eq!(
            names_and_lines(&matches),
            vec![("q-card", 2), ("MuiDialog", 6)]
        );
    }

    #[test]
    fn test_script_pass_ignores_kebab_case() {
        let source = "<script>\nconst tpl = '<q-form>'\n</script>";
        assert!(parse(source).is_empty());
    }

    #[test]
    fn test_script_only_file() {
        let source = "<script>\nexport default {\n  render() { return <Button /> }\n}\n</script>";
        let matches = parse(source);
        assert_eq!(names_and_lines(&matches), vec![("Button", 3)]);
    }

    #[test]
    fn test_missing_regions_yield_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("<style>.a { color: red }</style>").is_empty());
        // Unclosed template is not a region
        assert!(parse("<template>\n<q-form>\n").is_empty());
    }

    #[test]
    fn test_commented_markup_is_still_reported() {
        let matches = parse("<template>\n<!-- <q-form> -->\n</template>");
        assert_eq!(names_and_lines(&matches), vec![("q-form", 2)]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let matches = parse("<template>\r\n  <q-form>\r\n  </q-form>\r\n</template>\r\n");
        assert_eq!(names_and_lines(&matches), vec![("q-form", 2)]);
    }
}
