//! CLI entry point for the ui-elf component finder.
//!
//! Scans a Vue.js or React codebase for usages of a semantic component type
//! (forms, buttons, dialogs, or a custom element name) and reports every
//! occurrence with its file and line.
//!
//! # Usage
//!
//! ```bash
//! # Scan for forms in the current directory
//! ui-elf --component-type form
//!
//! # Scan for buttons under ./src, writing JSON
//! ui-elf -t button -d ./src -o json
//!
//! # Restrict the scan to some directories
//! ui-elf -t dialog -f src/components,src/views -o both
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod output;

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use elf_core::{ComponentRegistry, Config, ConfigError, DiscoveryConfig, ScanResult};
use elf_scanner::{FileWalker, Scanner};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Component types accepted on the command line.
const COMPONENT_TYPES: &[&str] = &["form", "button", "dialog", "custom"];

const LONG_ABOUT: &str = "\
UI Elf scans your codebase to locate specific component types
(forms, buttons, dialogs, and custom components) in Vue.js and React projects.

Files ending in .vue, .jsx, and .tsx are scanned. Dependencies, test
directories, and .test./.spec. files are skipped.";

const EXAMPLES: &str = "\
Examples:
  # Scan for forms in current directory
  ui-elf --component-type form --directory .

  # Scan for buttons in src directory with JSON output
  ui-elf --component-type button --directory ./src --output json

  # Scan for custom component with directory filter
  ui-elf --component-type custom --directory . --filter src/components,src/views

  # Scan for dialogs with both terminal and JSON output
  ui-elf --component-type dialog --directory . --output both";

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Scan Vue.js and React codebases for specific component types.
#[derive(Debug, Parser)]
#[command(name = "ui-elf", version, about, long_about = LONG_ABOUT, after_help = EXAMPLES)]
struct Cli {
    /// Component type to search for (form, button, dialog, custom).
    #[arg(short = 't', long)]
    component_type: String,

    /// Directory to scan.
    #[arg(short, long, default_value = ".", env = "UI_ELF_DIRECTORY")]
    directory: Utf8PathBuf,

    /// Comma-separated list of directories to include (e.g. src/components,src/views).
    #[arg(short, long, value_delimiter = ',')]
    filter: Vec<String>,

    /// Output format: terminal, json, or both [default: terminal].
    #[arg(short, long)]
    output: Option<String>,

    /// Where to write JSON results [default: ui-elf-results.json].
    #[arg(long)]
    output_file: Option<Utf8PathBuf>,

    /// JSON configuration file.
    #[arg(short, long, env = "UI_ELF_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored log output.
    #[arg(long)]
    no_color: bool,
}

/// Validated settings for one run.
#[derive(Debug)]
struct Options {
    component_type: String,
    root: Utf8PathBuf,
    config: Config,
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects `RUST_LOG` if set. Otherwise logs at `debug` with `--verbose`
/// and `warn` by default. Logs go to stderr so stdout only carries results.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    let use_ansi = !no_color && std::env::var_os("NO_COLOR").is_none();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Validates arguments and merges them over the optional config file.
///
/// # Errors
///
/// Returns an error for an unknown component type or output format, an
/// unreadable config file, or a scan directory that is missing or not a
/// directory.
fn build_options(cli: &Cli) -> color_eyre::Result<Options> {
    if !COMPONENT_TYPES.contains(&cli.component_type.as_str()) {
        return Err(eyre!(
            "invalid component type '{}': must be one of: {}",
            cli.component_type,
            COMPONENT_TYPES.join(", ")
        ));
    }

    let mut config = match &cli.config {
        Some(path) => {
            Config::from_file(path).wrap_err_with(|| format!("failed to load config {path}"))?
        }
        None => Config::default(),
    };

    if let Some(output) = &cli.output {
        config.output.format = output.parse()?;
    }
    if let Some(path) = &cli.output_file {
        config.output.json_path.clone_from(path);
    }

    let filter: Vec<String> = cli
        .filter
        .iter()
        .map(|dir| dir.trim().to_owned())
        .filter(|dir| !dir.is_empty())
        .collect();
    if !filter.is_empty() {
        config.discovery.include_dirs = filter;
    }

    config.validate()?;

    if !cli.directory.exists() {
        return Err(ConfigError::MissingDirectory(cli.directory.clone()).into());
    }
    if !cli.directory.is_dir() {
        return Err(ConfigError::InvalidPath {
            path: cli.directory.clone(),
            reason: "not a directory".to_owned(),
        }
        .into());
    }

    Ok(Options {
        component_type: cli.component_type.clone(),
        root: cli.directory.clone(),
        config,
    })
}

// =============================================================================
// COMMAND IMPLEMENTATION
// =============================================================================

/// Discovers files under `root` and scans them for `component_type`.
///
/// Blocking: walks the filesystem and fans out on the rayon pool.
fn scan_directory(
    root: &Utf8Path,
    discovery: &DiscoveryConfig,
    component_type: &str,
) -> color_eyre::Result<ScanResult> {
    let paths = FileWalker::from_config(root, discovery)?
        .collect_paths()
        .wrap_err("failed to discover files")?;

    info!(root = %root, files = paths.len(), "Discovered component files");

    let scanner = Scanner::new(Arc::new(ComponentRegistry::new()));
    let result = scanner
        .scan(&paths, component_type)
        .wrap_err("scan failed")?;

    debug!(stats = ?scanner.stats(), "Scan statistics");
    Ok(result)
}

/// Runs discovery and the scan on a blocking thread.
async fn run_scan(options: &Options) -> color_eyre::Result<ScanResult> {
    let root = options.root.clone();
    let discovery = options.config.discovery.clone();
    let component_type = options.component_type.clone();

    tokio::task::spawn_blocking(move || scan_directory(&root, &discovery, &component_type)).await?
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.no_color);

    let options = build_options(&cli)?;
    let result = run_scan(&options).await?;

    output::write(
        &result,
        options.config.output.format,
        &options.config.output.json_path,
    )
    .wrap_err("failed to display output")
}
