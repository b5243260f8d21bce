use astro_deps::core::DepsError;
use astro_deps::formatters::{GraphvizRenderer, Renderer, DEFAULT_DOT_PROGRAM};

#[test]
fn default_renderer_uses_dot() {
    assert_eq!(GraphvizRenderer::default().program(), DEFAULT_DOT_PROGRAM);
}

#[test]
fn missing_program_is_a_render_error() {
    let renderer = GraphvizRenderer::new("astro-deps-no-such-graphviz");
    let err = renderer.render("digraph G {\n}\n").unwrap_err();
    match err {
        DepsError::Render(message) => assert!(message.contains("failed to spawn")),
        other => panic!("unexpected error: {other}"),
    }
}

#[cfg(unix)]
#[test]
fn early_exit_reports_status_and_stderr() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::TempDir::new().unwrap();
    let script = dir.path().join("fake-dot");
    std::fs::write(
        &script,
        "#!/bin/sh\necho 'Error: <stdin>: syntax error in line 1' >&2\nexit 1\n",
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    // Large enough that the process exits before the input is consumed.
    let mut dot = String::from("digraph G {\n");
    for i in 0..50_000 {
        dot.push_str(&format!("  \"node{i}\" -> \"node{}\";\n", i + 1));
    }
    dot.push_str("}\n");

    let renderer = GraphvizRenderer::new(script.to_string_lossy());
    let err = renderer.render(&dot).unwrap_err();
    match err {
        DepsError::Render(message) => {
            assert!(message.contains("exited with code 1"), "{message}");
            assert!(message.contains("syntax error in line 1"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}
