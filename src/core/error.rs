use std::path::PathBuf;

/// Errors raised while building, encoding or rendering a dependency graph.
#[derive(Debug, thiserror::Error)]
pub enum DepsError {
    /// The configured source root is absent.
    #[error("Directory {} does not exist. Is this the root of an Astro project?", .path.display())]
    MissingSourceDirectory { path: PathBuf },

    /// A directory could not be listed or stat'ed during the scan.
    #[error("Failed to traverse {}: {source}", .path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A candidate file could not be read.
    #[error("Failed to read file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scan root could not be made absolute.
    #[error("Failed to resolve {}: {source}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external renderer failed to produce an image.
    #[error("Failed to render graph: {0}")]
    Render(String),

    #[error("Dependency map JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An output artifact could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type DepsResult<T> = Result<T, DepsError>;
