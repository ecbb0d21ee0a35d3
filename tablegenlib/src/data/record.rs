//! Filename parsing.
//!
//! Courseware files are named
//! `<module>.<section>.<resource>.<description-slug>.<attribution>.<extension...>`,
//! for example `1.2.3.intro-to-mems.1.ipynb`. Everything past the fifth dot is
//! the extension, so `1.2.3.notes.0.tar.gz` has extension `tar.gz`.

use std::fmt;

use crate::error::TablegenError;
use crate::Result;

const DELIMITER: char = '.';
const MIN_SEGMENTS: usize = 6;

/// The (module, section, resource) triple keying and ordering each entry.
///
/// Ordering is lexicographic over the integers, so `1.10.1` sorts after
/// `1.9.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    pub module: u64,
    pub section: u64,
    pub resource: u64,
}

impl Identifier {
    pub fn new(module: u64, section: u64, resource: u64) -> Self {
        Self {
            module,
            section,
            resource,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.module, self.section, self.resource)
    }
}

/// Kind of course material, selected by the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `docx` written material
    Document,
    /// `pptx` slide deck
    Slides,
    /// `ipynb` notebook, opened in Colab
    Notebook,
}

impl FileKind {
    /// Match an extension exactly (case-sensitive).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "docx" => Some(FileKind::Document),
            "pptx" => Some(FileKind::Slides),
            "ipynb" => Some(FileKind::Notebook),
            _ => None,
        }
    }

    /// Link text used in the table.
    pub fn label(self) -> &'static str {
        match self {
            FileKind::Document => "doc",
            FileKind::Slides => "slides",
            FileKind::Notebook => "colab",
        }
    }
}

/// One parsed directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameRecord {
    /// Parsed triple, used for ordering
    pub id: Identifier,
    /// First three segments exactly as written, e.g. `01.02.003`
    pub id_text: String,
    /// Hyphen-separated slug, e.g. `intro-to-mems`
    pub description_slug: String,
    /// Raw attribution segment; validated when the row is rendered
    pub attribution: String,
    /// Segments six onwards rejoined with `.`
    pub extension: String,
    /// Filename as found in the directory
    pub filename: String,
    /// Directory joined with the filename, used as the link path
    pub full_path: String,
}

impl FilenameRecord {
    /// Human-readable description derived from the slug.
    pub fn description(&self) -> String {
        render_description(&self.description_slug)
    }

    /// File kind, or `None` when the extension is not supported.
    pub fn kind(&self) -> Option<FileKind> {
        FileKind::from_extension(&self.extension)
    }
}

/// Parse a filename found in `dir`.
pub fn parse_filename(dir: &str, filename: &str) -> Result<FilenameRecord> {
    let segments: Vec<&str> = filename.split(DELIMITER).collect();

    if segments.len() < MIN_SEGMENTS {
        return Err(TablegenError::Parse {
            filename: filename.to_string(),
            reason: format!(
                "expected at least {MIN_SEGMENTS} dot-separated segments, found {}",
                segments.len()
            ),
        });
    }

    let id = Identifier::new(
        parse_id_segment(filename, "module", segments[0])?,
        parse_id_segment(filename, "section", segments[1])?,
        parse_id_segment(filename, "resource", segments[2])?,
    );

    Ok(FilenameRecord {
        id,
        id_text: segments[..3].join("."),
        description_slug: segments[3].to_string(),
        attribution: segments[4].to_string(),
        extension: segments[MIN_SEGMENTS - 1..].join("."),
        filename: filename.to_string(),
        full_path: join_path(dir, filename),
    })
}

fn parse_id_segment(filename: &str, field: &str, segment: &str) -> Result<u64> {
    segment.parse().map_err(|_| TablegenError::Parse {
        filename: filename.to_string(),
        reason: format!("{field} '{segment}' is not a non-negative integer"),
    })
}

fn join_path(dir: &str, filename: &str) -> String {
    if dir.is_empty() {
        return filename.to_string();
    }
    let trimmed = dir.trim_end_matches('/');
    if trimmed.is_empty() {
        // dir is the filesystem root
        format!("/{filename}")
    } else {
        format!("{trimmed}/{filename}")
    }
}

/// Turn a slug into a phrase: hyphens become spaces, the first character is
/// upper-cased and the rest lower-cased.
///
/// ```
/// use tablegenlib::render_description;
///
/// assert_eq!(render_description("intro-to-MEMS"), "Intro to mems");
/// ```
pub fn render_description(slug: &str) -> String {
    let phrase = slug.replace('-', " ");
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
