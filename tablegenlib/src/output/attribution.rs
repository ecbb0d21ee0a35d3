//! Attribution footnotes.

use crate::data::FilenameRecord;
use crate::error::TablegenError;
use crate::options::TableConfig;
use crate::Result;

/// Resolve the record's attribution segment into a `[[N]](url)` footnote.
///
/// The segment must be made of ASCII digits. Index 0, or any index past the
/// configured URLs, means "no attribution" and yields an empty string.
pub fn resolve_attribution(record: &FilenameRecord, config: &TableConfig) -> Result<String> {
    let token = record.attribution.as_str();

    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TablegenError::InvalidAttribution {
            filename: record.filename.clone(),
            token: token.to_string(),
        });
    }

    // Digits that overflow usize are necessarily out of range.
    let Ok(index) = token.parse::<usize>() else {
        return Ok(String::new());
    };

    let Some(url) = index
        .checked_sub(1)
        .and_then(|i| config.attribution_urls.get(i))
    else {
        return Ok(String::new());
    };

    let prefix = if config.absolute_paths {
        config.repo_url.as_str()
    } else {
        ""
    };

    Ok(format!("[[{index}]]({prefix}{url})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_filename;
    use crate::options::DEFAULT_ATTRIBUTION_URLS;

    fn attribution_for(token: &str, config: &TableConfig) -> Result<String> {
        let record = parse_filename("d", &format!("1.1.1.intro.{token}.docx")).unwrap();
        resolve_attribution(&record, config)
    }

    #[test]
    fn test_zero_means_none() {
        assert_eq!(attribution_for("0", &TableConfig::new()).unwrap(), "");
    }

    #[test]
    fn test_out_of_range_means_none() {
        assert_eq!(attribution_for("4", &TableConfig::new()).unwrap(), "");
        assert_eq!(
            attribution_for("99999999999999999999999", &TableConfig::new()).unwrap(),
            ""
        );
    }

    #[test]
    fn test_in_range_links_to_configured_url() {
        let footnote = attribution_for("2", &TableConfig::new()).unwrap();

        assert_eq!(footnote, format!("[[2]]({})", DEFAULT_ATTRIBUTION_URLS[1]));
    }

    #[test]
    fn test_leading_zeros_are_numeric() {
        let footnote = attribution_for("01", &TableConfig::new()).unwrap();

        assert_eq!(footnote, format!("[[1]]({})", DEFAULT_ATTRIBUTION_URLS[0]));
    }

    #[test]
    fn test_absolute_prefixes_repo_url() {
        let config = TableConfig::new()
            .absolute_paths(true)
            .repo_url("https://example.com/repo/")
            .attribution_urls(["#license"]);

        let footnote = attribution_for("1", &config).unwrap();

        assert_eq!(footnote, "[[1]](https://example.com/repo/#license)");
    }

    #[test]
    fn test_non_numeric_is_rejected() {
        for token in ["x", "-1", "1a", "²"] {
            let result = attribution_for(token, &TableConfig::new());
            match result {
                Err(TablegenError::InvalidAttribution { token: t, .. }) => assert_eq!(t, token),
                other => panic!("Expected InvalidAttribution for {token}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty_is_rejected() {
        let record = parse_filename("d", "1.1.1.intro..docx").unwrap();

        let result = resolve_attribution(&record, &TableConfig::new());

        assert!(matches!(result, Err(TablegenError::InvalidAttribution { .. })));
    }
}
