//! Shared helpers for integration tests

pub mod corpus;

use std::collections::{HashMap, VecDeque};
use wordgraph::WordGraph;

/// Hop distance from `start` to every reachable word, by plain BFS
pub fn bfs_distances(graph: &WordGraph, start: &str) -> HashMap<String, usize> {
    let mut distances = HashMap::from([(start.to_string(), 0)]);
    let mut queue = VecDeque::from([start.to_string()]);

    while let Some(current) = queue.pop_front() {
        let depth = distances[&current];
        for next in graph.successors(&current).into_iter().flat_map(|s| s.keys()) {
            if !distances.contains_key(next) {
                distances.insert(next.clone(), depth + 1);
                queue.push_back(next.clone());
            }
        }
    }
    distances
}

/// Whether every consecutive pair in `path` is an edge
pub fn is_connected_path(graph: &WordGraph, path: &[String]) -> bool {
    path.windows(2).all(|pair| graph.has_edge(&pair[0], &pair[1]))
}
