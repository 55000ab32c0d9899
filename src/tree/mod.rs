//! Directory tree walking logic
//!
//! `TreeWalker` reads the whole filtered hierarchy into a `TreeNode` tree
//! before anything is rendered.

mod config;
mod node;
mod walker;

pub use config::WalkerConfig;
pub use node::TreeNode;
pub use walker::{TreeWalker, WalkOutcome};
