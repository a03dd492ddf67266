//! Random traversal with backtracking

use super::choice::{choose, Chooser};
use super::types::{TerminationReason, WalkResult};
use crate::graph::WordGraph;
use std::collections::HashSet;
use tracing::debug;

/// Randomized depth-first walk that never revisits a word.
///
/// From the top of the stack, step to a random unvisited successor. When
/// every successor is visited, pop the word and continue from the one
/// below. Stops at a word with no outgoing edges or when the stack empties.
#[derive(Debug, Clone, Default)]
pub struct RandomWalk {
    /// Fixed starting word; a random source word when unset
    pub start: Option<String>,
}

impl RandomWalk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `word` instead of a random source word
    pub fn start_at(mut self, word: impl Into<String>) -> Self {
        self.start = Some(word.into());
        self
    }

    /// Run the walk.
    ///
    /// Returns `None` when the graph is empty or the fixed start word is
    /// not in the graph.
    pub fn execute(&self, graph: &WordGraph, chooser: &mut impl Chooser) -> Option<WalkResult> {
        let start: &str = match &self.start {
            Some(word) if graph.contains(word) => word,
            Some(_) => return None,
            None => {
                let sources: Vec<&str> = graph.sources().collect();
                choose(&sources, chooser).copied()?
            }
        };

        let mut visited: HashSet<&str> = HashSet::from([start]);
        let mut stack: Vec<&str> = vec![start];
        let mut trace: Vec<&str> = vec![start];
        let mut steps = 0;
        let mut termination = TerminationReason::Exhausted;

        while let Some(&current) = stack.last() {
            steps += 1;

            let Some(successors) = graph.successors(current) else {
                termination = TerminationReason::DeadEnd;
                break;
            };

            let unvisited: Vec<&str> = successors
                .keys()
                .map(String::as_str)
                .filter(|word| !visited.contains(word))
                .collect();

            match choose(&unvisited, chooser) {
                Some(&next) => {
                    visited.insert(next);
                    stack.push(next);
                    trace.push(next);
                }
                None => {
                    stack.pop();
                }
            }
        }

        debug!(start, visited = trace.len(), steps, ?termination, "random walk finished");
        Some(WalkResult {
            start: start.to_string(),
            trace: trace.into_iter().map(str::to_string).collect(),
            stack: stack.into_iter().map(str::to_string).collect(),
            steps,
            termination,
        })
    }
}
