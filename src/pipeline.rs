use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{DependencyMap, DependencyMapBuilder, DepsError, DepsResult, DEFAULT_EXTENSION};
use crate::formatters::{DotFormatter, JsonFormatter, Renderer};

pub const DEFAULT_SOURCE_DIR: &str = "src";
pub const JSON_FILE_NAME: &str = "dependencies.json";
pub const DOT_FILE_NAME: &str = "dependencies.dot";
pub const SVG_FILE_NAME: &str = "dependencies.svg";

#[derive(Debug, Clone)]
pub struct Config {
    pub source_dir: PathBuf,
    pub extension: String,
    pub use_clusters: bool,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            use_clusters: false,
            output_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub bytes: usize,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub dependencies: DependencyMap,
    pub artifacts: Vec<Artifact>,
    /// Set when the renderer failed; the JSON and DOT artifacts are still written.
    pub render_error: Option<String>,
}

/// Fails with [`DepsError::MissingSourceDirectory`] unless `dir` exists.
pub fn check_source_dir(dir: &Path) -> DepsResult<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(DepsError::MissingSourceDirectory {
            path: dir.to_path_buf(),
        })
    }
}

/// Builds the dependency map for `config.source_dir` and writes the JSON,
/// DOT and rendered SVG documents into `config.output_dir`.
///
/// A render failure is logged and reported, not returned as an error.
pub fn generate(config: &Config, renderer: &dyn Renderer) -> DepsResult<Report> {
    check_source_dir(&config.source_dir)?;

    let dependencies = DependencyMapBuilder::new(&config.extension).build(&config.source_dir)?;
    let dot_formatter = DotFormatter::new().with_clusters(config.use_clusters);

    fs::create_dir_all(&config.output_dir).map_err(|source| DepsError::Write {
        path: config.output_dir.clone(),
        source,
    })?;

    let mut artifacts = Vec::with_capacity(3);

    let json_path = config.output_dir.join(JSON_FILE_NAME);
    let json = JsonFormatter::new().format_to_file(&dependencies, &json_path)?;
    artifacts.push(Artifact {
        path: json_path,
        bytes: json.len(),
    });

    let dot_path = config.output_dir.join(DOT_FILE_NAME);
    let dot = dot_formatter.format_to_file(&dependencies, &dot_path)?;
    artifacts.push(Artifact {
        path: dot_path,
        bytes: dot.len(),
    });

    let render_error = match renderer.render(&dot) {
        Ok(svg) => {
            let svg_path = config.output_dir.join(SVG_FILE_NAME);
            fs::write(&svg_path, &svg).map_err(|source| DepsError::Write {
                path: svg_path.clone(),
                source,
            })?;
            artifacts.push(Artifact {
                path: svg_path,
                bytes: svg.len(),
            });
            None
        }
        Err(err) => {
            tracing::error!(error = %err, "Error converting DOT to SVG");
            Some(err.to_string())
        }
    };

    Ok(Report {
        dependencies,
        artifacts,
        render_error,
    })
}
