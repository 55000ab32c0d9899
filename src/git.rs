//! `.gitignore` integration

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::Result;

/// Source of gitignore-style exclusions, consulted for every entry when
/// gitignore support is enabled.
pub trait GitIgnoreSource {
    /// `relative_path` is relative to the walk root and ends in `name`.
    fn matches(&self, name: &str, relative_path: &Path, is_dir: bool) -> bool;
}

/// Patterns from the `.gitignore` at the root of the walk.
pub struct GitignoreFilter {
    inner: Gitignore,
}

impl GitignoreFilter {
    /// Load `<root>/.gitignore`. A missing file yields a filter that matches nothing.
    pub fn new(root: &Path) -> Result<Self> {
        let gitignore_path = root.join(".gitignore");
        if !gitignore_path.is_file() {
            tracing::debug!(root = %root.display(), "no .gitignore at root");
            return Ok(Self::empty());
        }

        let mut builder = GitignoreBuilder::new(root);
        // Bad lines are reported but the valid ones still apply
        if let Some(err) = builder.add(&gitignore_path) {
            tracing::warn!("{}: {}", gitignore_path.display(), err);
        }
        let inner = builder.build()?;
        tracing::debug!(patterns = inner.num_ignores(), "loaded .gitignore");
        Ok(Self { inner })
    }

    /// Build from in-memory lines, rooted at `root`.
    pub fn from_lines<'a>(root: &Path, lines: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut builder = GitignoreBuilder::new(root);
        for line in lines {
            builder.add_line(None, line)?;
        }
        Ok(Self {
            inner: builder.build()?,
        })
    }

    pub fn empty() -> Self {
        Self {
            inner: Gitignore::empty(),
        }
    }
}

impl GitIgnoreSource for GitignoreFilter {
    fn matches(&self, _name: &str, relative_path: &Path, is_dir: bool) -> bool {
        self.inner
            .matched_path_or_any_parents(relative_path, is_dir)
            .is_ignore()
    }
}
