//! Table-ready rows.
//!
//! `MarkdownTable` holds fully formatted strings. It can be printed as
//! pipe-delimited markdown or serialized to JSON; no further computation
//! happens here.

use serde::{Deserialize, Serialize};

use super::attribution::resolve_attribution;
use super::link::build_link;
use crate::data::FilenameRecord;
use crate::options::TableConfig;
use crate::Result;

/// Column titles, used when a header is requested.
pub const HEADERS: [&str; 4] = ["ID", "Description", "Link", "Attribution"];

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// `module.section.resource` as written in the filename
    pub id: String,
    pub description: String,
    /// Markdown link, e.g. `[slides](path?raw=true)`
    pub link: String,
    /// Footnote link, or empty
    pub attribution: String,
}

impl TableRow {
    /// Render a record, failing on an unsupported extension or a
    /// non-numeric attribution.
    pub fn from_record(record: &FilenameRecord, config: &TableConfig) -> Result<Self> {
        Ok(TableRow {
            id: record.id_text.clone(),
            description: record.description(),
            link: build_link(record, config)?,
            attribution: resolve_attribution(record, config)?,
        })
    }

    /// Pipe-delimited markdown line.
    pub fn to_markdown(&self) -> String {
        format_line(&[
            self.id.as_str(),
            self.description.as_str(),
            self.link.as_str(),
            self.attribution.as_str(),
        ])
    }
}

/// Rows in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownTable {
    pub rows: Vec<TableRow>,
}

impl MarkdownTable {
    /// Render sorted records into rows. Stops at the first record that
    /// cannot be rendered.
    pub fn from_records(records: &[FilenameRecord], config: &TableConfig) -> Result<Self> {
        let rows = records
            .iter()
            .map(|record| TableRow::from_record(record, config))
            .collect::<Result<Vec<_>>>()?;
        Ok(MarkdownTable { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// One line per row, each terminated by a newline. With `header`, the
    /// column titles and a separator line come first.
    pub fn to_markdown(&self, header: bool) -> String {
        let mut out = String::new();
        if header {
            out.push_str(&format_line(&HEADERS));
            out.push('\n');
            out.push_str(&format_line(&["---"; 4]));
            out.push('\n');
        }
        for row in &self.rows {
            out.push_str(&row.to_markdown());
            out.push('\n');
        }
        out
    }
}

fn format_line(cells: &[&str]) -> String {
    format!("| {} |", cells.join(" | "))
}
