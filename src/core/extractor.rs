//! Textual import extraction.
//!
//! Only the single-line form `import ... from '<path>'` (single or double
//! quotes) is recognised. Side-effect imports, dynamic `import()` calls and
//! declarations spanning several lines are not detected.

use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

use super::error::{DepsError, DepsResult};
use super::graph::FileKey;

const IMPORT_PATTERN: &str = r#"\bimport\b.*?\bfrom\s+(?:'([^'\r\n]+)'|"([^"\r\n]+)")"#;

pub struct ImportExtractor {
    root: PathBuf,
    cwd: PathBuf,
}

impl ImportExtractor {
    /// Creates an extractor that expresses targets relative to `root_path`.
    pub fn new(root_path: &Path) -> DepsResult<Self> {
        let cwd = std::env::current_dir().map_err(|source| DepsError::Resolve {
            path: root_path.to_path_buf(),
            source,
        })?;
        let root = normalize(&cwd.join(root_path));
        Ok(Self { root, cwd })
    }

    /// Raw specifiers in the order they appear in `source`.
    pub fn specifiers<'a>(&self, source: &'a str) -> Vec<&'a str> {
        import_regex()
            .captures_iter(source)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str())
            .collect()
    }

    /// Resolved, root-relative targets of every import in `source`.
    ///
    /// Each specifier is joined onto the directory of `file_path`, bare
    /// package names included, so targets that match no scanned file are
    /// expected. Duplicates and self-imports are kept.
    pub fn extract(&self, file_path: &Path, source: &str) -> Vec<FileKey> {
        let file_path = normalize(&self.cwd.join(file_path));
        let directory = file_path.parent().unwrap_or(file_path.as_path());

        self.specifiers(source)
            .into_iter()
            .map(|specifier| {
                let resolved = normalize(&directory.join(specifier));
                self.relative_key(&resolved)
            })
            .collect()
    }

    fn relative_key(&self, target: &Path) -> FileKey {
        let root: Vec<Component> = self.root.components().collect();
        let target: Vec<Component> = target.components().collect();
        let common = root
            .iter()
            .zip(&target)
            .take_while(|(a, b)| a == b)
            .count();

        let mut relative = PathBuf::new();
        for _ in common..root.len() {
            relative.push("..");
        }
        for component in &target[common..] {
            relative.push(component.as_os_str());
        }
        FileKey::from_relative_path(&relative)
    }
}

fn import_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(IMPORT_PATTERN).expect("import regex"))
}

/// Lexically collapses `.` and `..` without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    normalized
}
