//! Bridge-word lookup

use super::types::BridgeResult;
use crate::graph::WordGraph;
use tracing::debug;

/// Query for words `w` with edges `word1 -> w` and `w -> word2`
#[derive(Debug, Clone)]
pub struct BridgeQuery {
    /// Word the bridge follows
    pub word1: String,
    /// Word the bridge precedes
    pub word2: String,
}

impl BridgeQuery {
    pub fn between(word1: impl Into<String>, word2: impl Into<String>) -> Self {
        Self {
            word1: word1.into(),
            word2: word2.into(),
        }
    }

    /// Execute the query.
    ///
    /// Both words must have outgoing edges in the graph, otherwise the result
    /// is [`BridgeResult::UnknownWords`].
    pub fn execute(&self, graph: &WordGraph) -> BridgeResult {
        let word1 = self.word1.clone();
        let word2 = self.word2.clone();

        if !graph.is_source(&self.word1) || !graph.is_source(&self.word2) {
            debug!(%word1, %word2, "bridge query on unknown words");
            return BridgeResult::UnknownWords { word1, word2 };
        }

        let words: Vec<String> = bridge_candidates(graph, &self.word1, &self.word2)
            .into_iter()
            .map(str::to_string)
            .collect();

        debug!(%word1, %word2, count = words.len(), "bridge query");
        if words.is_empty() {
            BridgeResult::NoBridge { word1, word2 }
        } else {
            BridgeResult::Found { word1, word2, words }
        }
    }
}

/// Bridge words from `word1` to `word2`, in graph order.
///
/// Unknown words simply produce no candidates.
pub fn bridge_candidates<'g>(graph: &'g WordGraph, word1: &str, word2: &str) -> Vec<&'g str> {
    let Some(successors) = graph.successors(word1) else {
        return Vec::new();
    };

    successors
        .keys()
        .map(String::as_str)
        .filter(|candidate| graph.has_edge(candidate, word2))
        .collect()
}
