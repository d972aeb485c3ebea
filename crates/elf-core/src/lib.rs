//! Core types, component registry, and configuration for the ui-elf tool.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - Domain types ([`ComponentMatch`], [`ScanResult`])
//! - The [`ComponentRegistry`] mapping semantic component types to the
//!   element names that realize them in each UI library
//! - Configuration structures ([`Config`], [`DiscoveryConfig`], [`OutputConfig`])
//! - Error types for configuration loading ([`ConfigError`])
//! - Type aliases for `FxHashMap`/`FxHashSet` (faster than std)

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;
pub mod registry;
pub mod types;

pub use config::{Config, DiscoveryConfig, OutputConfig, OutputFormat};
pub use error::ConfigError;
pub use hash::{FxHashMap, FxHashSet};
pub use registry::{ComponentMapping, ComponentRegistry};
pub use types::{ComponentMatch, ScanResult};
