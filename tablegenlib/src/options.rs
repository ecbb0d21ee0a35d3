//! Link and attribution settings.
//!
//! `TableConfig` is immutable once built and is passed by reference to the
//! link and attribution stages. The defaults point at the embedded machine
//! learning courseware repository.

/// Repository that hosts the course material.
pub const DEFAULT_REPO_URL: &str =
    "https://github.com/edgeimpulse/courseware-embedded-machine-learning/";

/// Colab viewer prefix for notebooks in the repository.
pub const DEFAULT_COLAB_URL: &str = "https://colab.research.google.com/github/edgeimpulse/courseware-embedded-machine-learning/blob/main/";

/// Path segment that serves raw file contents from the repository.
pub const DEFAULT_RAW_URL_SEGMENT: &str = "raw/main/";

/// Query suffix asking the host for raw bytes instead of a preview.
pub const DEFAULT_RAW_SUFFIX: &str = "?raw=true";

/// License anchors in the course README, referenced by attribution index 1..=3.
pub const DEFAULT_ATTRIBUTION_URLS: [&str; 3] = [
    "#1-slides-and-written-material-for-introduction-to-embedded-machine-learning-by-edge-impulse-is-licensed-under-cc-by-nc-sa-40",
    "#2-slides-and-written-material-for-computer-vision-with-embedded-machine-learning-by-edge-impulse-is-licensed-under-cc-by-nc-sa-40",
    "#3-slides-and-written-material-for-tinyml-courseware-by-tinymlx-is-licensed-under-cc-by-nc-sa-40",
];

/// Settings for building links and attribution footnotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Prefix every document link and footnote with `repo_url`
    pub absolute_paths: bool,
    pub repo_url: String,
    pub colab_url: String,
    pub raw_url_segment: String,
    pub raw_suffix: String,
    /// Footnote targets, 1-indexed by the attribution segment
    pub attribution_urls: Vec<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            absolute_paths: false,
            repo_url: DEFAULT_REPO_URL.to_string(),
            colab_url: DEFAULT_COLAB_URL.to_string(),
            raw_url_segment: DEFAULT_RAW_URL_SEGMENT.to_string(),
            raw_suffix: DEFAULT_RAW_SUFFIX.to_string(),
            attribution_urls: DEFAULT_ATTRIBUTION_URLS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl TableConfig {
    /// Create a config with the courseware defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: toggle absolute links
    pub fn absolute_paths(mut self, enabled: bool) -> Self {
        self.absolute_paths = enabled;
        self
    }

    /// Builder: set the repository URL
    pub fn repo_url(mut self, url: impl Into<String>) -> Self {
        self.repo_url = url.into();
        self
    }

    /// Builder: set the notebook viewer prefix
    pub fn colab_url(mut self, url: impl Into<String>) -> Self {
        self.colab_url = url.into();
        self
    }

    /// Builder: set the raw content path segment
    pub fn raw_url_segment(mut self, segment: impl Into<String>) -> Self {
        self.raw_url_segment = segment.into();
        self
    }

    /// Builder: set the raw download suffix
    pub fn raw_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.raw_suffix = suffix.into();
        self
    }

    /// Builder: replace the attribution footnote URLs
    pub fn attribution_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attribution_urls = urls.into_iter().map(Into::into).collect();
        self
    }
}
