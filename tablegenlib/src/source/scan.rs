//! Directory scanning: list the regular files of one directory.

use std::io;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use super::filter::FilterConfig;
use crate::error::TablegenError;
use crate::Result;

/// List the regular files directly inside `dir` that pass `filter`.
///
/// Subdirectories are neither listed nor descended into. Symlinks are kept
/// when they point at a regular file. Names come back sorted so that records
/// sharing an identifier keep a reproducible order.
pub fn scan_directory(dir: impl AsRef<Path>, filter: &FilterConfig) -> Result<Vec<String>> {
    let dir = dir.as_ref();

    let metadata = std::fs::metadata(dir).map_err(|source| TablegenError::Filesystem {
        path: dir.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(TablegenError::Filesystem {
            path: dir.to_path_buf(),
            source: io::Error::other("not a directory"),
        });
    }

    let mut filenames = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|err| {
            let message = err.to_string();
            TablegenError::Filesystem {
                path: dir.to_path_buf(),
                source: err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other(message)),
            }
        })?;

        let file_type = entry.file_type();
        let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
        if !is_file {
            debug!(path = %entry.path().display(), "skipping non-file entry");
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            return Err(TablegenError::Parse {
                filename: entry.file_name().to_string_lossy().into_owned(),
                reason: "filename is not valid UTF-8".to_string(),
            });
        };

        if !filter.matches(name) {
            debug!(filename = name, "excluded by filter");
            continue;
        }

        filenames.push(name.to_string());
    }

    filenames.sort();
    debug!(count = filenames.len(), dir = %dir.display(), "scanned directory");

    Ok(filenames)
}
