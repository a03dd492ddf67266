//! Shortest paths by hop count (edge weights are ignored)

use super::types::PathResult;
use crate::graph::WordGraph;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

/// Which shortest paths a [`PathQuery`] returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathPolicy {
    /// The first shortest path found by breadth-first search
    #[default]
    Single,
    /// Every path of minimal length, sorted lexicographically
    AllShortest,
}

/// Query for the shortest path(s) between two words
#[derive(Debug, Clone)]
pub struct PathQuery {
    /// Word the path starts from
    pub start: String,
    /// Word the path ends at
    pub end: String,
    /// Single path or every shortest path
    pub policy: PathPolicy,
}

impl PathQuery {
    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            policy: PathPolicy::Single,
        }
    }

    /// Set the result policy
    pub fn policy(mut self, policy: PathPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Return every shortest path instead of the first one
    pub fn all_shortest(self) -> Self {
        self.policy(PathPolicy::AllShortest)
    }

    /// Execute the query.
    ///
    /// Both words must have outgoing edges in the graph, otherwise the result
    /// is [`PathResult::UnknownWords`].
    pub fn execute(&self, graph: &WordGraph) -> PathResult {
        let start = self.start.clone();
        let end = self.end.clone();

        if !graph.is_source(&self.start) || !graph.is_source(&self.end) {
            debug!(%start, %end, "path query on unknown words");
            return PathResult::UnknownWords { start, end };
        }

        let paths = match self.policy {
            PathPolicy::Single => self.first_shortest(graph).into_iter().collect(),
            PathPolicy::AllShortest => self.all_shortest_paths(graph),
        };

        debug!(%start, %end, policy = ?self.policy, found = paths.len(), "path query");
        if paths.is_empty() {
            PathResult::NoPath { start, end }
        } else {
            PathResult::Found { start, end, paths }
        }
    }

    /// BFS over partial paths. Each word is marked visited when first
    /// enqueued, so the first path reaching `end` has minimal hop count.
    fn first_shortest(&self, graph: &WordGraph) -> Option<Vec<String>> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<Vec<&str>> = VecDeque::new();

        visited.insert(self.start.as_str());
        queue.push_back(vec![self.start.as_str()]);

        while let Some(path) = queue.pop_front() {
            let current = *path.last()?;
            if current == self.end {
                return Some(path.into_iter().map(str::to_string).collect());
            }

            let Some(successors) = graph.successors(current) else {
                continue;
            };
            for neighbor in successors.keys() {
                if visited.insert(neighbor) {
                    let mut extended = path.clone();
                    extended.push(neighbor);
                    queue.push_back(extended);
                }
            }
        }

        None
    }

    /// Layered BFS recording every predecessor on a shortest route, then
    /// backtracking from `end` through those predecessors.
    fn all_shortest_paths(&self, graph: &WordGraph) -> Vec<Vec<String>> {
        if self.start == self.end {
            return vec![vec![self.start.clone()]];
        }

        let mut depth: HashMap<&str, usize> = HashMap::new();
        let mut predecessors: HashMap<&str, Vec<&str>> = HashMap::new();
        let mut frontier: Vec<&str> = vec![self.start.as_str()];
        depth.insert(self.start.as_str(), 0);

        let mut level = 0;
        while !frontier.is_empty() && !depth.contains_key(self.end.as_str()) {
            level += 1;
            let mut next: Vec<&str> = Vec::new();

            for &current in &frontier {
                let Some(successors) = graph.successors(current) else {
                    continue;
                };
                for neighbor in successors.keys().map(String::as_str) {
                    match depth.get(neighbor) {
                        None => {
                            depth.insert(neighbor, level);
                            predecessors.entry(neighbor).or_default().push(current);
                            next.push(neighbor);
                        }
                        Some(&d) if d == level => {
                            predecessors.entry(neighbor).or_default().push(current);
                        }
                        Some(_) => {}
                    }
                }
            }

            frontier = next;
        }

        if !depth.contains_key(self.end.as_str()) {
            return Vec::new();
        }

        let mut paths = Vec::new();
        let mut suffix = vec![self.end.as_str()];
        collect_paths(&self.start, &predecessors, &mut suffix, &mut paths);
        paths.sort();
        paths
    }
}

/// Walk predecessor lists back to `start`; `suffix` holds the path reversed.
fn collect_paths<'a>(
    start: &str,
    predecessors: &HashMap<&'a str, Vec<&'a str>>,
    suffix: &mut Vec<&'a str>,
    paths: &mut Vec<Vec<String>>,
) {
    let Some(&current) = suffix.last() else {
        return;
    };

    if current == start {
        paths.push(suffix.iter().rev().map(|w| w.to_string()).collect());
        return;
    }

    for &pred in predecessors.get(current).into_iter().flatten() {
        suffix.push(pred);
        collect_paths(start, predecessors, suffix, paths);
        suffix.pop();
    }
}
