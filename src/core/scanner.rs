use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::{DepsError, DepsResult};
use super::graph::FileKey;

/// Extension of Astro component files.
pub const DEFAULT_EXTENSION: &str = "astro";

#[derive(Debug, Clone)]
pub struct FileInfo {
    /// Absolute path, joined onto the working directory when the root is relative.
    pub path: PathBuf,
    pub key: FileKey,
}

pub struct FileScanner {
    extension: String,
}

impl FileScanner {
    /// Accepts the extension with or without its leading dot.
    pub fn new(extension: &str) -> Self {
        Self {
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Lists every file below `root_path` carrying the configured extension.
    ///
    /// Order is unspecified. Symlinked files are followed; symlinked
    /// directories are not descended into. Any traversal error aborts the scan.
    pub fn scan_directory(&self, root_path: &Path) -> DepsResult<Vec<FileInfo>> {
        let cwd = std::env::current_dir().map_err(|source| DepsError::Resolve {
            path: root_path.to_path_buf(),
            source,
        })?;

        let mut entries = Vec::new();
        for entry in WalkDir::new(root_path).follow_links(false) {
            let entry = entry.map_err(|source| DepsError::Traversal {
                path: source
                    .path()
                    .map_or_else(|| root_path.to_path_buf(), Path::to_path_buf),
                source,
            })?;
            if entry.path().is_file() {
                entries.push(entry.into_path());
            }
        }

        let files: Vec<FileInfo> = entries
            .into_par_iter()
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext == self.extension)
            })
            .map(|path| {
                let relative = path.strip_prefix(root_path).unwrap_or(&path);
                let key = FileKey::from_relative_path(relative);
                FileInfo {
                    path: cwd.join(&path),
                    key,
                }
            })
            .collect();

        tracing::debug!(
            root = %root_path.display(),
            extension = %self.extension,
            count = files.len(),
            "scanned directory"
        );
        Ok(files)
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSION)
    }
}
