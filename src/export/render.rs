//! Rasterize a DOT file with an external Graphviz binary

use crate::graph::{WordGraphError, WordGraphResult};
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Invokes `<program> -T<format> <dot> -o <image>`
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    pub program: String,
    pub format: String,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self {
            program: "dot".to_string(),
            format: "png".to_string(),
        }
    }
}

impl GraphvizRenderer {
    pub fn new(program: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            format: format.into(),
        }
    }

    /// Render `dot_path` into `image_path`. Blocks until the renderer exits.
    pub fn render(&self, dot_path: &Path, image_path: &Path) -> WordGraphResult<()> {
        debug!(program = %self.program, format = %self.format, "invoking renderer");
        let output = Command::new(&self.program)
            .arg(format!("-T{}", self.format))
            .arg(dot_path)
            .arg("-o")
            .arg(image_path)
            .output()
            .map_err(|e| WordGraphError::Render(format!("failed to run {}: {}", self.program, e)))?;

        if !output.status.success() {
            return Err(WordGraphError::Render(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        info!(image = %image_path.display(), "rendered graph image");
        Ok(())
    }
}
