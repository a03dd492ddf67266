//! GraphBuilder: accumulates consecutive-word edges into a WordGraph

use super::word_graph::WordGraph;
use crate::text::{Tokenizer, WordTokenizer};
use tracing::debug;

/// Builds a [`WordGraph`] from text in a single pass over its tokens
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    tokenizer: WordTokenizer,
}

impl GraphBuilder {
    /// Create a builder using the default letters-only tokenizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tokenizer used by [`GraphBuilder::build_from_text`]
    pub fn tokenizer(mut self, tokenizer: WordTokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Tokenize `text` and build its graph
    pub fn build_from_text(&self, text: &str) -> WordGraph {
        let tokens = self.tokenizer.tokenize(text);
        self.build_from_tokens(&tokens)
    }

    /// Add one edge occurrence per adjacent token pair.
    ///
    /// Fewer than two tokens yields an empty graph.
    pub fn build_from_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> WordGraph {
        let mut graph = WordGraph::new();
        for pair in tokens.windows(2) {
            graph.add_occurrence(pair[0].as_ref(), pair[1].as_ref());
        }

        debug!(
            tokens = tokens.len(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built word graph"
        );
        graph
    }
}

impl WordGraph {
    /// Build a graph from raw text with the default tokenizer
    pub fn from_text(text: &str) -> Self {
        GraphBuilder::new().build_from_text(text)
    }
}
