//! Core graph data structures

mod builder;
mod error;
mod word_graph;


pub use builder::GraphBuilder;
pub use error::{WordGraphError, WordGraphResult};
pub use word_graph::{Successors, WordGraph};
