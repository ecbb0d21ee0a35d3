//! Data stage: parse filenames into records and order them.
//!
//! - **record**: `FilenameRecord`, `Identifier`, `FileKind` and the parser
//! - **sort_records**: stable ordering by identifier triple

pub mod record;

pub use record::{parse_filename, render_description, FileKind, FilenameRecord, Identifier};

use tracing::debug;

use crate::Result;

/// Parse every filename, stopping at the first malformed one.
pub fn parse_all(dir: &str, filenames: &[String]) -> Result<Vec<FilenameRecord>> {
    filenames
        .iter()
        .map(|name| {
            let record = parse_filename(dir, name)?;
            debug!(id = %record.id, extension = %record.extension, "parsed {name}");
            Ok(record)
        })
        .collect()
}

/// Sort records by identifier, keeping the incoming order of equal triples.
///
/// Duplicate identifiers are allowed and each produces its own row.
pub fn sort_records(records: &mut [FilenameRecord]) {
    records.sort_by_key(|r| r.id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TablegenError;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sort_is_numeric() {
        let mut records = parse_all(
            "d",
            &names(&[
                "1.10.1.later.0.docx",
                "2.0.0.next-module.0.docx",
                "1.9.1.earlier.0.docx",
                "1.9.0.first.0.docx",
            ]),
        )
        .unwrap();

        sort_records(&mut records);

        let ids: Vec<String> = records.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["1.9.0", "1.9.1", "1.10.1", "2.0.0"]);
    }

    #[test]
    fn test_sort_is_stable_for_duplicates() {
        let mut records = parse_all(
            "d",
            &names(&[
                "1.1.1.slides.0.pptx",
                "1.1.0.zero.0.docx",
                "1.1.1.notes.0.docx",
            ]),
        )
        .unwrap();

        sort_records(&mut records);

        let slugs: Vec<&str> = records.iter().map(|r| r.description_slug.as_str()).collect();
        assert_eq!(slugs, vec!["zero", "slides", "notes"]);
    }

    #[test]
    fn test_parse_all_stops_at_malformed_name() {
        let result = parse_all(
            "d",
            &names(&["1.1.1.ok.0.docx", "1.2.intro.docx", "x.y"]),
        );

        match result {
            Err(TablegenError::Parse { filename, .. }) => assert_eq!(filename, "1.2.intro.docx"),
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }
}
