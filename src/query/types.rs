//! Query result types
//!
//! "Unknown word" and "empty answer" are distinct variants; neither is an
//! error. `Display` renders the user-facing message for each outcome.

use serde::Serialize;
use std::fmt;

/// Outcome of a bridge-word query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BridgeResult {
    /// One or both words have no outgoing edges in the graph
    UnknownWords { word1: String, word2: String },
    /// Both words are known but nothing links them
    NoBridge { word1: String, word2: String },
    /// Bridge words in graph order, without duplicates
    Found {
        word1: String,
        word2: String,
        words: Vec<String>,
    },
}

impl BridgeResult {
    /// Bridge words found, empty for the other outcomes
    pub fn words(&self) -> &[String] {
        match self {
            Self::Found { words, .. } => words,
            _ => &[],
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

impl fmt::Display for BridgeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownWords { word1, word2 } => {
                write!(f, "No {} or {} in the graph!", word1, word2)
            }
            Self::NoBridge { word1, word2 } => {
                write!(f, "No bridge words from {} to {}!", word1, word2)
            }
            Self::Found { word1, word2, words } => write!(
                f,
                "The bridge words from {} to {} are: {}.",
                word1,
                word2,
                words.join(", ")
            ),
        }
    }
}

/// Outcome of a shortest-path query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PathResult {
    /// Start or end has no outgoing edges in the graph
    UnknownWords { start: String, end: String },
    /// Both words are known but `end` is unreachable from `start`
    NoPath { start: String, end: String },
    /// One or more paths, all of the same minimal hop count
    Found {
        start: String,
        end: String,
        paths: Vec<Vec<String>>,
    },
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// All returned paths, empty unless found
    pub fn paths(&self) -> &[Vec<String>] {
        match self {
            Self::Found { paths, .. } => paths,
            _ => &[],
        }
    }

    /// First returned path
    pub fn path(&self) -> Option<&[String]> {
        self.paths().first().map(Vec::as_slice)
    }

    /// Path length in edges
    pub fn length(&self) -> Option<usize> {
        self.path().map(|p| p.len() - 1)
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownWords { start, end } => {
                write!(f, "No path exists between {} and {}.", start, end)
            }
            Self::NoPath { start, end } => {
                write!(f, "No shortest path exists between {} and {}.", start, end)
            }
            Self::Found { start, end, paths } => {
                if paths.len() == 1 {
                    write!(f, "Shortest path from {} to {}:", start, end)?;
                } else {
                    write!(f, "Shortest path(s) from {} to {}:", start, end)?;
                }
                for path in paths {
                    write!(f, "\n{}", path.join(" -> "))?;
                }
                Ok(())
            }
        }
    }
}

/// Why a random walk stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// Reached a word with no outgoing edges
    DeadEnd,
    /// Backtracked all the way out of the start word
    Exhausted,
}

/// Result of a random walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkResult {
    /// Starting word
    pub start: String,
    /// Every word visited, in first-visit order. Never pruned on backtrack.
    pub trace: Vec<String>,
    /// Un-backtracked stack at the moment the walk stopped
    pub stack: Vec<String>,
    /// Loop iterations (forward steps plus backtracks)
    pub steps: usize,
    /// Why the walk stopped
    pub termination: TerminationReason,
}

impl WalkResult {
    /// Trace rendered as `a -> b -> c`
    pub fn trace_line(&self) -> String {
        self.trace.join(" -> ")
    }
}
