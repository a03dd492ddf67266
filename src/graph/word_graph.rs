//! WordGraph: weighted directed adjacency between consecutive words

use super::error::WordGraphError;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};

/// Outgoing edges of one word: destination -> occurrence count
pub type Successors = BTreeMap<String, u32>;

/// A directed word-adjacency graph.
///
/// Maps each source word to its successors and the number of times the
/// ordered pair occurred. Every stored weight is at least 1. A word with no
/// outgoing edges is not a key, although it may still appear as a
/// destination. The graph is immutable once built; all queries borrow it.
///
/// Serializes as the nested map. Deserialization rejects zero weights and
/// sources without successors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, Successors>")]
pub struct WordGraph {
    adjacency: BTreeMap<String, Successors>,
}

impl Serialize for WordGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.adjacency.serialize(serializer)
    }
}

impl TryFrom<BTreeMap<String, Successors>> for WordGraph {
    type Error = WordGraphError;

    fn try_from(adjacency: BTreeMap<String, Successors>) -> Result<Self, Self::Error> {
        for (source, successors) in &adjacency {
            if successors.is_empty() {
                return Err(WordGraphError::InvalidGraph(format!(
                    "{} has no outgoing edges",
                    source
                )));
            }
            if let Some((target, _)) = successors.iter().find(|(_, w)| **w == 0) {
                return Err(WordGraphError::InvalidGraph(format!(
                    "edge {} -> {} has zero weight",
                    source, target
                )));
            }
        }
        Ok(Self { adjacency })
    }
}

impl WordGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more occurrence of `source` followed by `target`
    pub(crate) fn add_occurrence(&mut self, source: &str, target: &str) {
        let weight = self
            .adjacency
            .entry(source.to_string())
            .or_default()
            .entry(target.to_string())
            .or_insert(0);
        *weight += 1;
    }

    /// Outgoing edges of `word`, or `None` if it has none
    pub fn successors(&self, word: &str) -> Option<&Successors> {
        self.adjacency.get(word)
    }

    /// Weight of the edge `source -> target`, if present
    pub fn weight(&self, source: &str, target: &str) -> Option<u32> {
        self.adjacency.get(source)?.get(target).copied()
    }

    /// Whether the edge `source -> target` exists
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.weight(source, target).is_some()
    }

    /// Whether `word` has at least one outgoing edge
    pub fn is_source(&self, word: &str) -> bool {
        self.adjacency.contains_key(word)
    }

    /// Whether `word` appears anywhere in the graph, as source or destination
    pub fn contains(&self, word: &str) -> bool {
        self.is_source(word) || self.adjacency.values().any(|s| s.contains_key(word))
    }

    /// Words with outgoing edges, in sorted order
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Every word in the graph, including words that only appear as destinations
    pub fn vertices(&self) -> BTreeSet<&str> {
        let mut vertices: BTreeSet<&str> = self.sources().collect();
        for successors in self.adjacency.values() {
            vertices.extend(successors.keys().map(String::as_str));
        }
        vertices
    }

    /// Number of distinct words, sinks included
    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Number of distinct ordered pairs
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    /// Sum of all edge weights (number of adjacent token pairs in the source text)
    pub fn total_weight(&self) -> u64 {
        self.edges().map(|(_, _, w)| u64::from(w)).sum()
    }

    /// All edges as `(source, target, weight)`, ordered by source then target
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u32)> {
        self.adjacency.iter().flat_map(|(source, successors)| {
            successors
                .iter()
                .map(move |(target, weight)| (source.as_str(), target.as_str(), *weight))
        })
    }

    /// Whether the graph has no edges
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
