//! Diagram export: Graphviz DOT text and optional rasterization

mod dot;
mod render;

pub use dot::{to_dot, write_dot};
pub use render::GraphvizRenderer;
