use std::fs;
use std::path::Path;

use crate::core::{DependencyMap, DepsError, DepsResult};

/// Dependency map document: an object from file key to its ordered imports,
/// pretty-printed with two-space indentation.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_to_file(&self, map: &DependencyMap, output_path: &Path) -> DepsResult<String> {
        let json = self.format_map(map)?;
        fs::write(output_path, &json).map_err(|source| DepsError::Write {
            path: output_path.to_path_buf(),
            source,
        })?;
        Ok(json)
    }

    pub fn format_map(&self, map: &DependencyMap) -> DepsResult<String> {
        Ok(serde_json::to_string_pretty(map)?)
    }

    pub fn parse(&self, json: &str) -> DepsResult<DependencyMap> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
