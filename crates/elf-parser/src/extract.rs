//! Line-oriented tag extraction shared by the parsers.
//!
//! A region of text is scanned one line at a time with a tag pattern. Each
//! tag name is reported at most once per physical line; the same name on a
//! different line is reported again.

use camino::Utf8Path;
use elf_core::ComponentMatch;
use regex::Regex;
use smallvec::SmallVec;

/// A delimited slice of a file with the line its first character sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Region<'a> {
    /// The text between the opening and closing delimiters.
    pub body: &'a str,
    /// 1-based line of `body`'s first character within the whole file.
    pub start_line: u32,
}

impl<'a> Region<'a> {
    /// Treats the whole content as a region starting on line 1.
    pub(crate) const fn whole(content: &'a str) -> Self {
        Self {
            body: content,
            start_line: 1,
        }
    }

    /// Finds the first region whose body is capture group 1 of `pattern`.
    pub(crate) fn locate(content: &'a str, pattern: &Regex) -> Option<Self> {
        let body = pattern.captures(content)?.get(1)?;
        let newlines = content[..body.start()].bytes().filter(|&b| b == b'\n').count();

        Some(Self {
            body: body.as_str(),
            start_line: u32::try_from(newlines).unwrap_or(u32::MAX).saturating_add(1),
        })
    }
}

/// Appends one match per (line, tag name) in `region` to `out`.
///
/// Names for which `keep` returns `false` are skipped.
pub(crate) fn collect_tags(
    region: Region<'_>,
    tag_pattern: &Regex,
    path: &Utf8Path,
    keep: impl Fn(&str) -> bool,
    out: &mut Vec<ComponentMatch>,
) {
    for (line_number, line) in (region.start_line..).zip(region.body.split('\n')) {
        let mut seen: SmallVec<[&str; 8]> = SmallVec::new();

        for caps in tag_pattern.captures_iter(line) {
            let Some(name) = caps.get(1).map(|m| m.as_str()) else {
                continue;
            };

            if !keep(name) || seen.contains(&name) {
                continue;
            }
            seen.push(name);

            out.push(ComponentMatch::new(path, line_number, name));
        }
    }
}
