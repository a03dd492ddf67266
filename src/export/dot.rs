//! Graphviz DOT serialization

use crate::graph::{WordGraph, WordGraphResult};
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

/// Render `graph` as a DOT digraph with one labelled, weighted arc per edge
pub fn to_dot(graph: &WordGraph) -> String {
    let mut out = String::from("digraph G {\n");
    for (source, target, weight) in graph.edges() {
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "  \"{}\" -> \"{}\" [label=\"{}\", weight={}];",
            escape(source),
            escape(target),
            weight,
            weight
        );
    }
    out.push_str("}\n");
    out
}

/// Write the DOT description of `graph` to `path`
pub fn write_dot(graph: &WordGraph, path: &Path) -> WordGraphResult<()> {
    std::fs::write(path, to_dot(graph))?;
    info!(path = %path.display(), edges = graph.edge_count(), "wrote DOT file");
    Ok(())
}

fn escape(word: &str) -> String {
    word.replace('\\', "\\\\").replace('"', "\\\"")
}
