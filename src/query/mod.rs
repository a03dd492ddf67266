//! Query system for word graphs
//!
//! Bridge-word lookup, bridge-word text generation, shortest paths and
//! random traversal. All queries borrow a built graph read-only.

mod bridge;
pub mod choice;
mod generate;
mod path;
mod types;
mod walk;

pub use bridge::{bridge_candidates, BridgeQuery};
pub use choice::{Chooser, RngChooser, ScriptedChooser};
pub use generate::TextGenerator;
pub use path::{PathPolicy, PathQuery};
pub use types::{BridgeResult, PathResult, TerminationReason, WalkResult};
pub use walk::RandomWalk;
