use std::fs;
use std::path::Path;

use super::error::{DepsError, DepsResult};
use super::extractor::ImportExtractor;
use super::graph::DependencyMap;
use super::scanner::FileScanner;

/// Builds a [`DependencyMap`] for a source tree.
///
/// Holds no state between calls; every `build` starts from an empty map.
pub struct DependencyMapBuilder {
    file_scanner: FileScanner,
}

impl DependencyMapBuilder {
    pub fn new(extension: &str) -> Self {
        Self {
            file_scanner: FileScanner::new(extension),
        }
    }

    pub fn build(&self, root_path: &Path) -> DepsResult<DependencyMap> {
        tracing::info!(
            root = %root_path.display(),
            extension = %self.file_scanner.extension(),
            "scanning files"
        );
        let files = self.file_scanner.scan_directory(root_path)?;
        tracing::info!(count = files.len(), "found files to analyze");

        let extractor = ImportExtractor::new(root_path)?;
        let mut dependencies = DependencyMap::new();

        for file_info in files {
            let bytes = fs::read(&file_info.path).map_err(|source| DepsError::FileRead {
                path: file_info.path.clone(),
                source,
            })?;
            // Invalid UTF-8 is replaced rather than rejected.
            let source = String::from_utf8_lossy(&bytes);
            let imports = extractor.extract(&file_info.path, &source);
            tracing::debug!(file = %file_info.key, imports = imports.len(), "extracted imports");
            dependencies.insert(file_info.key, imports);
        }

        tracing::info!(
            files = dependencies.len(),
            edges = dependencies.edge_count(),
            dangling = dependencies.dangling_references().len(),
            "built dependency map"
        );
        Ok(dependencies)
    }
}

impl Default for DependencyMapBuilder {
    fn default() -> Self {
        Self {
            file_scanner: FileScanner::default(),
        }
    }
}
