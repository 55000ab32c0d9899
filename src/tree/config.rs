//! Configuration types for the tree walker

use crate::filter::FilterSet;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Deepest level shown; directories at this level are not descended into.
    pub max_level: Option<usize>,
    /// Mark directories cut off by `max_level` that still have visible entries.
    pub show_not_empty: bool,
    /// Honour the root `.gitignore` and hide `.git`.
    pub gitignore: bool,
    pub filters: FilterSet,
}

impl WalkerConfig {
    /// Whether a directory at `depth` is shown without its children.
    pub fn at_max_level(&self, depth: usize) -> bool {
        self.max_level.is_some_and(|max| depth >= max)
    }
}
