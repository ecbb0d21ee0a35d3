//! Output formatting: turn sorted records into table rows.
//!
//! This module handles the final stage of the pipeline:
//!
//! - **link**: `[doc]`, `[slides]` or `[colab]` links per file kind
//! - **attribution**: optional `[[N]](url)` license footnotes
//! - **table**: `TableRow` and `MarkdownTable`, the presentation layer
//!
//! ## Example
//!
//! ```rust,ignore
//! use tablegenlib::output::MarkdownTable;
//!
//! let table = MarkdownTable::from_records(&records, &config)?;
//! print!("{}", table.to_markdown(false));
//! ```

pub mod attribution;
pub mod link;
pub mod table;

pub use attribution::resolve_attribution;
pub use link::build_link;
pub use table::{MarkdownTable, TableRow, HEADERS};
