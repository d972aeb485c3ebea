//! Domain types for the ui-elf tool.
//!
//! - [`component`] - A single component usage found in a source file
//! - [`result`] - The aggregate outcome of one scan run
//!
//! All public types are re-exported here and at the crate root:
//!
//! ```
//! use elf_core::{ComponentMatch, ScanResult};
//! ```

mod component;
mod result;

pub use component::ComponentMatch;
pub use result::ScanResult;
