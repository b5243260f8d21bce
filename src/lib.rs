//! # astro-deps
//!
//! Dependency graph extraction for Astro component trees.
//!
//! Scans a source tree for component files, collects the targets of their
//! `import ... from '<path>'` declarations, and encodes the resulting map as
//! Graphviz DOT, optionally clustered by top-level directory.
//!
//! ## Output Documents
//!
//! - **dependencies.json**: file key to ordered list of imported keys
//! - **dependencies.dot**: left-to-right directed graph
//! - **dependencies.svg**: the DOT graph rendered by Graphviz

pub mod core;
pub mod formatters;
pub mod pipeline;

pub use crate::core::{DependencyMap, DependencyMapBuilder, DepsError, FileKey};
pub use crate::pipeline::{generate, Config};
