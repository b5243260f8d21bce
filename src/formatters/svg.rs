use std::io::Write;
use std::process::{Command, Stdio};

use crate::core::{DepsError, DepsResult};

/// Graphviz executable used when none is configured.
pub const DEFAULT_DOT_PROGRAM: &str = "dot";

/// Turns DOT text into a rendered image. The payload is passed through
/// untouched.
pub trait Renderer {
    fn render(&self, dot: &str) -> DepsResult<Vec<u8>>;
}

/// Renders SVG by piping DOT text through a Graphviz `dot` process.
pub struct GraphvizRenderer {
    program: String,
}

impl GraphvizRenderer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_DOT_PROGRAM)
    }
}

impl Renderer for GraphvizRenderer {
    fn render(&self, dot: &str) -> DepsResult<Vec<u8>> {
        let mut child = Command::new(&self.program)
            .arg("-Tsvg")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| DepsError::Render(format!("failed to spawn {}: {err}", self.program)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| DepsError::Render(format!("{} stdin unavailable", self.program)))?;
        let input = dot.as_bytes().to_vec();
        let writer = std::thread::spawn(move || stdin.write_all(&input));

        let output = child
            .wait_with_output()
            .map_err(|err| DepsError::Render(format!("{} did not finish: {err}", self.program)))?;

        let written = writer.join();
        let stderr = String::from_utf8_lossy(&output.stderr);

        // A process that rejects its input may exit before reading all of it,
        // so its status and diagnostics take precedence over a broken pipe.
        if !output.status.success() {
            return Err(DepsError::Render(format!(
                "{} exited with code {}: {}",
                self.program,
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        match written {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                return Err(DepsError::Render(format!(
                    "failed to write to {}: {err}: {}",
                    self.program,
                    stderr.trim()
                )))
            }
            Err(_) => {
                return Err(DepsError::Render(format!(
                    "writer thread for {} panicked",
                    self.program
                )))
            }
        }

        Ok(output.stdout)
    }
}
