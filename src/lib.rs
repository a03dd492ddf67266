//! Wordgraph: directed word-adjacency graphs built from text
//!
//! Consecutive words in a text become weighted edges. The built graph is
//! immutable and supports four read-only analyses.
//!
//! # Core Concepts
//!
//! - **Vertices**: normalized words
//! - **Edges**: ordered word pairs weighted by how often they occur
//! - **Queries**: bridge words, bridge-word text generation, shortest paths
//!   and random traversal
//!
//! # Example
//!
//! ```
//! use wordgraph::{BridgeQuery, PathQuery, WordGraph};
//!
//! let graph = WordGraph::from_text("The quick brown fox jumps over the lazy dog");
//! assert_eq!(graph.weight("the", "quick"), Some(1));
//!
//! let bridges = BridgeQuery::between("the", "brown").execute(&graph);
//! assert_eq!(bridges.words(), ["quick"]);
//!
//! let path = PathQuery::between("quick", "lazy").execute(&graph);
//! assert_eq!(path.length(), Some(6));
//! ```

pub mod config;
pub mod export;
mod graph;
pub mod query;
pub mod text;

pub use config::WordGraphConfig;
pub use graph::{GraphBuilder, Successors, WordGraph, WordGraphError, WordGraphResult};
pub use query::{
    BridgeQuery, BridgeResult, Chooser, PathPolicy, PathQuery, PathResult, RandomWalk,
    RngChooser, ScriptedChooser, TerminationReason, TextGenerator, WalkResult,
};
pub use text::{NormalizationPolicy, Tokenizer, WordTokenizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
