use astro_deps::core::{sanitize_name, DependencyMap, FileKey, GraphBuilder};
use petgraph::Direction;

fn map(entries: &[(&str, &[&str])]) -> DependencyMap {
    entries
        .iter()
        .map(|(key, deps)| {
            (
                FileKey::from(*key),
                deps.iter().map(|d| FileKey::from(*d)).collect::<Vec<_>>(),
            )
        })
        .collect()
}

#[test]
fn sanitize_replaces_hyphen_and_at_sign_only() {
    assert_eq!(sanitize_name("@scope/my-comp.astro"), "_scope/my_comp.astro");
    assert_eq!(sanitize_name("a/b_c.d"), "a/b_c.d");
}

#[test]
fn nodes_are_union_of_keys_and_targets() {
    let deps = map(&[
        ("a/x.astro", &["a/y", "shared/z.astro"]),
        ("shared/z.astro", &[]),
    ]);
    let graph = GraphBuilder::from_map(&deps);

    let ids: Vec<_> = graph.node_weights().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["a/x.astro", "a/y", "shared/z.astro"]);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn dangling_targets_have_no_outgoing_edges() {
    let deps = map(&[("a/x.astro", &["a/missing", "b/gone.astro"])]);
    let graph = GraphBuilder::from_map(&deps);

    let dangling: Vec<_> = deps
        .dangling_references()
        .into_iter()
        .map(FileKey::as_str)
        .collect();
    assert_eq!(dangling, vec!["a/missing", "b/gone.astro"]);

    for index in graph.node_indices() {
        let node = &graph[index];
        if !deps.contains_key(node.key.as_str()) {
            assert_eq!(
                graph.neighbors_directed(index, Direction::Outgoing).count(),
                0
            );
        }
    }
}

#[test]
fn repeated_imports_produce_repeated_edges() {
    let deps = map(&[("p.astro", &["c.astro", "c.astro"]), ("c.astro", &[])]);
    let graph = GraphBuilder::from_map(&deps);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn colliding_identifiers_share_one_node() {
    let deps = map(&[("my-comp.astro", &["my_comp.astro"])]);
    let graph = GraphBuilder::from_map(&deps);
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 1);

    let node = graph.node_weights().next().unwrap();
    assert_eq!(node.id, "my_comp.astro");
    assert_eq!(node.key.as_str(), "my-comp.astro");
}

#[test]
fn add_node_reuses_existing_identifier() {
    let mut gb = GraphBuilder::new();
    let a = gb.add_node(&FileKey::from("a@1.astro"));
    let b = gb.add_node(&FileKey::from("a_1.astro"));
    assert_eq!(a, b);
    assert_eq!(gb.get_node_index("a_1.astro"), Some(a));
    assert!(gb.get_node_index("a@1.astro").is_none());
}

#[test]
fn top_level_segment_falls_back_to_whole_key() {
    assert_eq!(FileKey::from("pages/blog/post.astro").top_level_segment(), "pages");
    assert_eq!(FileKey::from("index.astro").top_level_segment(), "index.astro");
}
