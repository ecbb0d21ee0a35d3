//! Source discovery: find the files to tabulate.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **Directory scanning**: list the regular files of a single directory
//! - **File filtering**: exclude filenames with glob patterns
//!
//! ## Example
//!
//! ```rust,ignore
//! use tablegenlib::source::{scan_directory, FilterConfig};
//!
//! let filter = FilterConfig::new().exclude("*.md")?;
//! let filenames = scan_directory("slides", &filter)?;
//! ```

pub mod filter;
pub mod scan;

pub use filter::FilterConfig;
pub use scan::scan_directory;
