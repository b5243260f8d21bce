pub mod analyzer;
pub mod error;
pub mod extractor;
pub mod graph;
pub mod scanner;

pub use analyzer::DependencyMapBuilder;
pub use error::{DepsError, DepsResult};
pub use extractor::ImportExtractor;
pub use graph::{
    sanitize_name, DependencyGraph, DependencyMap, FileKey, GraphBuilder, GraphNode,
};
pub use scanner::{FileInfo, FileScanner, DEFAULT_EXTENSION};
