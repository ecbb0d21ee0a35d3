//! # tablegenlib
//!
//! Generate markdown table rows from courseware filenames.
//!
//! ## Overview
//!
//! Course material is stored as flat directories of files named
//!
//! ```text
//! <module>.<section>.<resource>.<description-slug>.<attribution>.<extension>
//! ```
//!
//! e.g. `1.2.3.intro-to-mems.1.ipynb`. This library turns such a directory
//! into table rows of the form
//!
//! ```text
//! | 1.2.3 | Intro to mems | [colab](https://colab.../1.2.3.intro-to-mems.1.ipynb) | [[1]](#1-...) |
//! ```
//!
//! The work happens in four stages:
//!
//! - **source**: list the regular files of one directory
//! - **data**: parse filenames and sort them by identifier triple
//! - **output**: build links and attribution footnotes into a `MarkdownTable`
//! - **options**: the `TableConfig` the output stage reads
//!
//! Any malformed filename, unsupported extension or non-numeric attribution
//! aborts generation; nothing is skipped.
//!
//! ## Example
//!
//! ```rust
//! use tablegenlib::{generate_table, FilterConfig, TableConfig};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("1.1.2.sensors.0.pptx"), "").unwrap();
//! fs::write(dir.path().join("1.1.1.what-is-ml.1.docx"), "").unwrap();
//!
//! let path = dir.path().to_str().unwrap();
//! let table = generate_table(path, &FilterConfig::new(), &TableConfig::new()).unwrap();
//!
//! assert_eq!(table.rows[0].id, "1.1.1");
//! assert_eq!(table.rows[0].description, "What is ml");
//! assert!(table.rows[1].link.starts_with("[slides]("));
//! assert_eq!(table.rows[1].attribution, "");
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod source;

pub use data::{
    parse_all, parse_filename, render_description, sort_records, FileKind, FilenameRecord,
    Identifier,
};
pub use error::TablegenError;
pub use options::TableConfig;
pub use output::{build_link, resolve_attribution, MarkdownTable, TableRow};
pub use source::{scan_directory, FilterConfig};

use tracing::info;

/// Result type for tablegenlib operations
pub type Result<T> = std::result::Result<T, TablegenError>;

/// Scan `dir`, parse and sort its filenames, and render every row.
///
/// `dir` is used verbatim as the path prefix in generated links. All rows
/// are validated before the table is returned, so an error means no output.
pub fn generate_table(
    dir: &str,
    filter: &FilterConfig,
    config: &TableConfig,
) -> Result<MarkdownTable> {
    let filenames = scan_directory(dir, filter)?;
    let mut records = parse_all(dir, &filenames)?;
    sort_records(&mut records);

    let table = MarkdownTable::from_records(&records, config)?;
    info!(rows = table.len(), dir, "generated table");

    Ok(table)
}
