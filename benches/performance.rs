use astro_deps::core::DependencyMapBuilder;
use astro_deps::formatters::DotFormatter;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

fn write_site(root: &std::path::Path, sections: usize, per_section: usize) {
    for s in 0..sections {
        let section = root.join(format!("section-{s}"));
        std::fs::create_dir_all(&section).unwrap();
        for i in 0..per_section {
            let content = format!(
                r#"---
import Layout from '../layouts/Base.astro';
import Card from './Card{next}.astro';
import {{ Image }} from 'astro:assets';
const title = "Component {i}";
---
<Layout title={{title}}>
  <Card />
</Layout>
"#,
                next = (i + 1) % per_section,
            );
            std::fs::write(section.join(format!("Card{i}.astro")), content).unwrap();
        }
    }
    let layouts = root.join("layouts");
    std::fs::create_dir_all(&layouts).unwrap();
    std::fs::write(layouts.join("Base.astro"), "<slot />\n").unwrap();
}

fn benchmark_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("dependency_map");

    let small = TempDir::new().unwrap();
    write_site(small.path(), 2, 10);
    group.bench_function("small_site", |b| {
        b.iter(|| {
            let result = DependencyMapBuilder::default().build(black_box(small.path()));
            black_box(result)
        });
    });

    let large = TempDir::new().unwrap();
    write_site(large.path(), 20, 50);
    group.bench_function("large_site", |b| {
        b.iter(|| {
            let result = DependencyMapBuilder::default().build(black_box(large.path()));
            black_box(result)
        });
    });

    group.finish();
}

fn benchmark_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot_encoding");

    let dir = TempDir::new().unwrap();
    write_site(dir.path(), 20, 50);
    let deps = DependencyMapBuilder::default().build(dir.path()).unwrap();

    group.bench_function("flat", |b| {
        let formatter = DotFormatter::new();
        b.iter(|| black_box(formatter.format_map(black_box(&deps))));
    });
    group.bench_function("clustered", |b| {
        let formatter = DotFormatter::new().with_clusters(true);
        b.iter(|| black_box(formatter.format_map(black_box(&deps))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_analysis, benchmark_encoding);
criterion_main!(benches);
