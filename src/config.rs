//! Configuration for graph building, export and random choice.
//!
//! Loaded from an optional YAML file; every field has a default so a
//! partial file (or none at all) is valid.

use crate::export::GraphvizRenderer;
use crate::graph::WordGraphResult;
use crate::text::{NormalizationPolicy, WordTokenizer};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordGraphConfig {
    pub tokenizer: TokenizerConfig,
    pub export: ExportConfig,
    pub walk: WalkConfig,
}

/// How source text is normalized
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    pub policy: NormalizationPolicy,
}

/// Where the DOT description goes and whether to rasterize it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub dot_path: PathBuf,
    pub image_path: PathBuf,
    /// Run Graphviz after writing the DOT file
    pub render: bool,
    /// Graphviz executable
    pub graphviz: String,
    /// Graphviz output format (`-T` argument)
    pub format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dot_path: PathBuf::from("graph.dot"),
            image_path: PathBuf::from("graph.png"),
            render: false,
            graphviz: "dot".to_string(),
            format: "png".to_string(),
        }
    }
}

/// Randomness and walk output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Seed for every random choice; OS entropy when unset
    pub seed: Option<u64>,
    /// File the walk trace is written to, if any
    pub output: Option<PathBuf>,
}

impl WordGraphConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> WordGraphResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml(&raw)
    }

    /// Parse configuration from YAML text. Empty text yields the defaults.
    pub fn from_yaml(raw: &str) -> WordGraphResult<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn tokenizer(&self) -> WordTokenizer {
        WordTokenizer::new(self.tokenizer.policy)
    }

    pub fn renderer(&self) -> GraphvizRenderer {
        GraphvizRenderer::new(&self.export.graphviz, &self.export.format)
    }
}
