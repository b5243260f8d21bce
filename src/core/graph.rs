use petgraph::{graph::EdgeIndex, graph::NodeIndex, Directed, Graph};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::path::{Component, Path};

/// Separator used in every key, whatever the host platform.
pub const KEY_SEPARATOR: &str = "/";

/// Root-relative path of a source file or import target.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileKey(String);

impl FileKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Builds a key from a path already relative to the scan root.
    ///
    /// `.` components are dropped and `..` components are kept verbatim, so a
    /// path escaping the root stays recognisable as such.
    pub fn from_relative_path(path: &Path) -> Self {
        let parts: Vec<String> = path
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                Component::ParentDir => Some("..".to_string()),
                Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
            })
            .collect();
        Self(parts.join(KEY_SEPARATOR))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First path segment, or the whole key when it has no directory part.
    pub fn top_level_segment(&self) -> &str {
        match self.0.split_once(KEY_SEPARATOR) {
            Some((head, _)) => head,
            None => &self.0,
        }
    }
}

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for FileKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FileKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for FileKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// One entry per scanned file, mapping it to its imports in source order.
///
/// Duplicated imports are kept. Entries are ordered by key, so iteration does
/// not depend on the order in which the tree was walked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyMap {
    entries: BTreeMap<FileKey, Vec<FileKey>>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: FileKey, dependencies: Vec<FileKey>) -> Option<Vec<FileKey>> {
        self.entries.insert(key, dependencies)
    }

    pub fn get(&self, key: &str) -> Option<&[FileKey]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FileKey, &[FileKey])> {
        self.entries.iter().map(|(key, deps)| (key, deps.as_slice()))
    }

    /// Total number of import entries, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Targets that never appear as a key, sorted and deduplicated.
    pub fn dangling_references(&self) -> Vec<&FileKey> {
        self.entries
            .values()
            .flatten()
            .filter(|target| !self.entries.contains_key(target.as_str()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl FromIterator<(FileKey, Vec<FileKey>)> for DependencyMap {
    fn from_iter<I: IntoIterator<Item = (FileKey, Vec<FileKey>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Turns a key into a node identifier by mapping `-` and `@` to `_`.
///
/// Not injective: `a-b` and `a_b` collapse onto the same node.
pub fn sanitize_name(name: &str) -> String {
    name.replace(['-', '@'], "_")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    /// Sanitized identifier.
    pub id: String,
    /// Raw key this node was first created from.
    pub key: FileKey,
    /// Top-level segment of `key`, used as the cluster label.
    pub cluster: String,
}

impl GraphNode {
    pub fn new(key: &FileKey) -> Self {
        Self {
            id: sanitize_name(key.as_str()),
            key: key.clone(),
            cluster: key.top_level_segment().to_string(),
        }
    }
}

pub type DependencyGraph = Graph<GraphNode, (), Directed>;

/// Accumulates nodes keyed by sanitized identifier, in first-encounter order.
pub struct GraphBuilder {
    graph: DependencyGraph,
    node_map: HashMap<String, NodeIndex>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Derives the graph view of a map: keys and targets become nodes, each
    /// import entry becomes one edge.
    pub fn from_map(map: &DependencyMap) -> DependencyGraph {
        let mut builder = Self::new();
        for (key, dependencies) in map.iter() {
            let source = builder.add_node(key);
            for dependency in dependencies {
                let target = builder.add_node(dependency);
                builder.add_edge(source, target);
            }
        }
        builder.build()
    }

    /// Returns the existing node for the key's identifier or creates it.
    pub fn add_node(&mut self, key: &FileKey) -> NodeIndex {
        let id = sanitize_name(key.as_str());
        if let Some(&index) = self.node_map.get(&id) {
            return index;
        }
        let index = self.graph.add_node(GraphNode::new(key));
        self.node_map.insert(id, index);
        index
    }

    pub fn add_edge(&mut self, source: NodeIndex, target: NodeIndex) -> EdgeIndex {
        self.graph.add_edge(source, target, ())
    }

    pub fn get_node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    pub fn build(self) -> DependencyGraph {
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
