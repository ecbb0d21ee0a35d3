//! Filename filtering with glob pattern support.
//!
//! Patterns are matched against the bare filename, never the directory
//! part, since the scanner only ever looks at one directory level.

use glob::Pattern;

use crate::error::TablegenError;
use crate::Result;

/// Configuration for filename filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
}

impl FilterConfig {
    /// Create a new empty filter config (passes every file).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| TablegenError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.exclude.push(pat);
        Ok(self)
    }

    /// Check if a filename passes the filter, i.e. matches no exclude
    /// pattern.
    pub fn matches(&self, filename: &str) -> bool {
        !self.exclude.iter().any(|p| p.matches(filename))
    }
}
