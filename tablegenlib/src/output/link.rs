//! Markdown links to course material.

use crate::data::{FileKind, FilenameRecord};
use crate::error::TablegenError;
use crate::options::TableConfig;
use crate::Result;

/// Build the `[label](url)` link for a record.
///
/// Documents and slides link to the file itself: relative paths get the raw
/// download suffix, absolute ones go through the repository's raw content
/// path. Notebooks always open in the Colab viewer.
pub fn build_link(record: &FilenameRecord, config: &TableConfig) -> Result<String> {
    let kind = record
        .kind()
        .ok_or_else(|| TablegenError::UnsupportedFileType {
            filename: record.filename.clone(),
            extension: record.extension.clone(),
        })?;

    let url = match kind {
        FileKind::Document | FileKind::Slides => {
            if config.absolute_paths {
                format!(
                    "{}{}{}",
                    config.repo_url, config.raw_url_segment, record.full_path
                )
            } else {
                format!("{}{}", record.full_path, config.raw_suffix)
            }
        }
        FileKind::Notebook => format!("{}{}", config.colab_url, record.full_path),
    };

    Ok(format!("[{}]({})", kind.label(), encode_spaces(&url)))
}

fn encode_spaces(url: &str) -> String {
    url.replace(' ', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_filename;

    fn link_for(dir: &str, name: &str, config: &TableConfig) -> Result<String> {
        build_link(&parse_filename(dir, name).unwrap(), config)
    }

    #[test]
    fn test_document_link_relative() {
        let link = link_for("Written", "1.1.1.intro.1.docx", &TableConfig::new()).unwrap();

        assert_eq!(link, "[doc](Written/1.1.1.intro.1.docx?raw=true)");
    }

    #[test]
    fn test_slides_link_relative() {
        let link = link_for("Slides", "1.1.2.deck.1.pptx", &TableConfig::new()).unwrap();

        assert_eq!(link, "[slides](Slides/1.1.2.deck.1.pptx?raw=true)");
    }

    #[test]
    fn test_document_link_absolute() {
        let config = TableConfig::new()
            .absolute_paths(true)
            .repo_url("https://example.com/repo/");

        let link = link_for("Written", "1.1.1.intro.1.docx", &config).unwrap();

        assert_eq!(
            link,
            "[doc](https://example.com/repo/raw/main/Written/1.1.1.intro.1.docx)"
        );
    }

    #[test]
    fn test_notebook_link_ignores_absolute_setting() {
        let config = TableConfig::new().colab_url("https://colab.example/");

        let relative = link_for("nb", "1.2.3.intro-to-mems.1.ipynb", &config).unwrap();
        let absolute =
            link_for("nb", "1.2.3.intro-to-mems.1.ipynb", &config.clone().absolute_paths(true))
                .unwrap();

        assert_eq!(relative, "[colab](https://colab.example/nb/1.2.3.intro-to-mems.1.ipynb)");
        assert_eq!(relative, absolute);
    }

    #[test]
    fn test_spaces_are_encoded() {
        let link = link_for("Written Material", "1.1.1.intro.1.docx", &TableConfig::new()).unwrap();

        assert_eq!(link, "[doc](Written%20Material/1.1.1.intro.1.docx?raw=true)");
    }

    #[test]
    fn test_unsupported_extension() {
        let result = link_for("d", "1.1.1.archive.0.zip", &TableConfig::new());

        match result {
            Err(TablegenError::UnsupportedFileType { filename, extension }) => {
                assert_eq!(filename, "1.1.1.archive.0.zip");
                assert_eq!(extension, "zip");
            }
            other => panic!("Expected UnsupportedFileType error, got {other:?}"),
        }
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let result = link_for("d", "1.1.1.intro.0.PPTX", &TableConfig::new());

        assert!(matches!(result, Err(TablegenError::UnsupportedFileType { .. })));
    }
}
