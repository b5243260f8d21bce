use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use astro_deps::core::DEFAULT_EXTENSION;
use astro_deps::formatters::{GraphvizRenderer, DEFAULT_DOT_PROGRAM};
use astro_deps::pipeline::{self, Config, DEFAULT_SOURCE_DIR};
use astro_deps::DepsError;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "astro-deps",
    version,
    about = "Generate a graph of the dependencies between astro files in a project."
)]
struct Cli {
    /// Use clusters in the output graph
    #[arg(short, long)]
    clusters: bool,

    /// Output directory for the generated files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    outpath: PathBuf,

    /// Source directory to scan
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SOURCE_DIR)]
    src: PathBuf,

    /// Extension of the component files to scan
    #[arg(long, value_name = "EXT", default_value = DEFAULT_EXTENSION)]
    ext: String,

    /// Graphviz executable used to render the SVG
    #[arg(long, value_name = "PROGRAM", env = "ASTRO_DEPS_DOT", default_value = DEFAULT_DOT_PROGRAM)]
    dot: String,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let Cli {
        clusters,
        outpath,
        src,
        ext,
        dot,
    } = cli;

    let start_time = Instant::now();
    let config = Config {
        source_dir: src,
        extension: ext,
        use_clusters: clusters,
        output_dir: outpath,
    };
    let renderer = GraphvizRenderer::new(dot);
    tracing::debug!(program = renderer.program(), "using graphviz renderer");

    let report = match pipeline::generate(&config, &renderer) {
        Ok(report) => report,
        Err(err @ DepsError::MissingSourceDirectory { .. }) => {
            println!("{err}");
            return Ok(ExitCode::from(1));
        }
        Err(err) => {
            return Err(err).with_context(|| {
                format!(
                    "Error getting dependencies from {}",
                    config.source_dir.display()
                )
            })
        }
    };

    for artifact in &report.artifacts {
        println!(
            "Created file {} ({} bytes)",
            artifact.path.display(),
            artifact.bytes
        );
    }

    tracing::info!(
        files = report.dependencies.len(),
        rendered = report.render_error.is_none(),
        elapsed_secs = start_time.elapsed().as_secs_f64(),
        "done"
    );

    Ok(ExitCode::SUCCESS)
}
