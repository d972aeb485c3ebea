//! Terminal and JSON rendering of scan results.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};

use camino::Utf8Path;
use color_eyre::eyre::WrapErr;
use elf_core::{OutputFormat, ScanResult};

/// Width of the header and summary rules.
const RULE_WIDTH: usize = 50;

/// Renders the human-readable report.
///
/// Matches are listed sorted by path, then line.
pub fn format_terminal(result: &ScanResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "Component Finder Results - {}", result.component_type);
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out);

    if result.is_empty() {
        let _ = writeln!(out, "No components found.");
    } else {
        let _ = writeln!(out, "Found components in:");
        let _ = writeln!(out);
        for m in result.sorted_matches() {
            let _ = writeln!(
                out,
                "  {} (line {}): {}",
                m.file_path, m.line, m.component_name
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    let _ = writeln!(out, "Total components found: {}", result.total_count);
    let _ = writeln!(out, "Files scanned: {}", result.scanned_files);
    let _ = writeln!(out, "Scan time: {}ms", result.scan_time_ms);

    out
}

/// Renders the result as pretty-printed JSON.
pub fn format_json(result: &ScanResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// Writes `result` to stdout and/or `json_path` according to `format`.
pub fn write(result: &ScanResult, format: OutputFormat, json_path: &Utf8Path) -> color_eyre::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_to(&mut handle, result, format, json_path)
}

fn write_to<W: Write>(
    out: &mut W,
    result: &ScanResult,
    format: OutputFormat,
    json_path: &Utf8Path,
) -> color_eyre::Result<()> {
    if format.includes_terminal() {
        out.write_all(format_terminal(result).as_bytes())?;
    }

    if format.includes_json() {
        let json = format_json(result).wrap_err("failed to serialize results")?;
        fs::write(json_path.as_std_path(), json)
            .wrap_err_with(|| format!("failed to write JSON file {json_path}"))?;

        if format.includes_terminal() {
            writeln!(out)?;
            writeln!(out, "Results also written to {json_path}")?;
        } else {
            writeln!(out, "Results written to {json_path}")?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use elf_core::ComponentMatch;
    use tempfile::TempDir;

    fn sample() -> ScanResult {
        ScanResult::new(
            vec![
                ComponentMatch::new("src/views/Edit.vue", 7, "q-form").with_type("form"),
                ComponentMatch::new("src/App.jsx", 12, "Form").with_type("form"),
            ],
            15,
            "form",
            3,
        )
    }

    fn json_path(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join("results.json")).unwrap()
    }

    #[test]
    fn test_format_terminal_empty() {
        let rendered = format_terminal(&ScanResult::empty("dialog"));
        let expected = format!(
            "\nComponent Finder Results - dialog\n{}\n\nNo components found.\n\n{}\nTotal components found: 0\nFiles scanned: 0\nScan time: 0ms\n",
            "=".repeat(50),
            "-".repeat(50),
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_format_terminal_lists_sorted_matches() {
        let rendered = format_terminal(&sample());
        let expected = format!(
            "\nComponent Finder Results - form\n{}\n\nFound components in:\n\n  src/App.jsx (line 12): Form\n  src/views/Edit.vue (line 7): q-form\n\n{}\nTotal components found: 2\nFiles scanned: 3\nScan time: 15ms\n",
            "=".repeat(50),
            "-".repeat(50),
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_format_json_is_pretty_and_parses_back() {
        let result = sample();
        let json = format_json(&result).unwrap();
        assert!(json.contains("\n  \"totalCount\": 2"));
        assert!(json.contains("\"componentName\": \"q-form\""));

        let parsed: ScanResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_write_terminal_only() {
        let dir = TempDir::new().unwrap();
        let path = json_path(&dir);
        let mut out = Vec::new();

        write_to(&mut out, &sample(), OutputFormat::Terminal, &path).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), format_terminal(&sample()));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_json_only() {
        let dir = TempDir::new().unwrap();
        let path = json_path(&dir);
        let mut out = Vec::new();

        write_to(&mut out, &sample(), OutputFormat::Json, &path).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("Results written to {path}\n")
        );
        let written: ScanResult =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, sample());
    }

    #[test]
    fn test_write_both() {
        let dir = TempDir::new().unwrap();
        let path = json_path(&dir);
        let mut out = Vec::new();

        write_to(&mut out, &sample(), OutputFormat::Both, &path).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with(&format_terminal(&sample())));
        assert!(printed.ends_with(&format!("\nResults also written to {path}\n")));
        assert!(path.exists());
    }

    #[test]
    fn test_write_json_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("missing/results.json")).unwrap();
        let mut out = Vec::new();

        let err = write_to(&mut out, &sample(), OutputFormat::Json, &path).unwrap_err();
        assert!(err.to_string().contains("failed to write JSON file"));
    }
}
