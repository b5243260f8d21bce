use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::{sanitize_name, DependencyGraph, DependencyMap, DepsError, DepsResult, GraphBuilder};

const INDENT: &str = "  ";

/// Encodes a dependency map as Graphviz DOT text.
///
/// Output is a pure function of the map: nodes appear in first-encounter
/// order (each key, then its imports), edges in key order then import order.
pub struct DotFormatter {
    /// Group nodes into one cluster per top-level directory.
    use_clusters: bool,
}

struct Cluster<'a> {
    name: String,
    label: &'a str,
    node_ids: Vec<&'a str>,
}

impl DotFormatter {
    pub fn new() -> Self {
        Self {
            use_clusters: false,
        }
    }

    pub fn with_clusters(mut self, enabled: bool) -> Self {
        self.use_clusters = enabled;
        self
    }

    pub fn format_to_file(&self, map: &DependencyMap, output_path: &Path) -> DepsResult<String> {
        let dot = self.format_map(map);
        fs::write(output_path, &dot).map_err(|source| DepsError::Write {
            path: output_path.to_path_buf(),
            source,
        })?;
        Ok(dot)
    }

    pub fn format_map(&self, map: &DependencyMap) -> String {
        self.format_graph(&GraphBuilder::from_map(map))
    }

    pub fn format_graph(&self, graph: &DependencyGraph) -> String {
        let mut dot = String::from("digraph G {\n");
        dot.push_str(INDENT);
        dot.push_str("rankdir=LR;\n");

        if self.use_clusters {
            for cluster in Self::clusters(graph) {
                dot.push_str(&format!("{INDENT}subgraph {} {{\n", quote(&cluster.name)));
                dot.push_str(&format!("{INDENT}{INDENT}label={};\n", quote(cluster.label)));
                for id in cluster.node_ids {
                    dot.push_str(&format!("{INDENT}{INDENT}{};\n", quote(id)));
                }
                dot.push_str(INDENT);
                dot.push_str("}\n");
            }
        } else {
            for node in graph.node_weights() {
                dot.push_str(&format!("{INDENT}{};\n", quote(&node.id)));
            }
        }

        for edge in graph.edge_references() {
            let source = &graph[edge.source()].id;
            let target = &graph[edge.target()].id;
            dot.push_str(&format!("{INDENT}{} -> {};\n", quote(source), quote(target)));
        }

        dot.push_str("}\n");
        dot
    }

    /// Partitions nodes by the top-level segment of the key that created them.
    ///
    /// Clusters are opened in node order and labelled with the first raw
    /// segment seen for their sanitized name.
    fn clusters(graph: &DependencyGraph) -> Vec<Cluster<'_>> {
        let mut clusters: Vec<Cluster<'_>> = Vec::new();
        let mut cluster_map: HashMap<String, usize> = HashMap::new();

        for node in graph.node_weights() {
            let name = format!("cluster_{}", sanitize_name(&node.cluster));
            let index = *cluster_map.entry(name.clone()).or_insert_with(|| {
                clusters.push(Cluster {
                    name,
                    label: &node.cluster,
                    node_ids: Vec::new(),
                });
                clusters.len() - 1
            });
            clusters[index].node_ids.push(&node.id);
        }

        clusters
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// DOT double-quoted string.
fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}
