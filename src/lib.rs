//! tree-extended - a directory tree with level-aware ignore/only filters

pub mod error;
pub mod filter;
pub mod git;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{EntryUnreadable, Result, TreeError};
pub use filter::{FilterRule, FilterSet, Side, parse_filter_list};
pub use git::{GitIgnoreSource, GitignoreFilter};
pub use output::{OutputConfig, RenderLine, TreeRenderer, print_json};
pub use tree::{TreeNode, TreeWalker, WalkOutcome, WalkerConfig};
