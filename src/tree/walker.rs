//! TreeWalker - builds the filtered tree in memory

use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{EntryUnreadable, Result, TreeError};
use crate::git::{GitIgnoreSource, GitignoreFilter};

use super::config::WalkerConfig;
use super::node::TreeNode;

/// Result of a walk: the tree plus any subdirectories that had to be skipped.
#[derive(Debug)]
pub struct WalkOutcome {
    pub tree: TreeNode,
    pub warnings: Vec<EntryUnreadable>,
}

/// Tree walker that applies filters and the depth limit while reading the disk.
pub struct TreeWalker {
    config: WalkerConfig,
    gitignore: Option<Box<dyn GitIgnoreSource>>,
}

impl TreeWalker {
    pub fn new(mut config: WalkerConfig) -> Self {
        if config.gitignore {
            config.filters.deny_git_dir();
        }
        Self {
            config,
            gitignore: None,
        }
    }

    /// Use `source` instead of loading `<root>/.gitignore`.
    /// Only consulted when `config.gitignore` is set.
    pub fn with_gitignore_source(mut self, source: impl GitIgnoreSource + 'static) -> Self {
        self.gitignore = Some(Box::new(source));
        self
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walk `root`. The root node is named after `root` exactly as given.
    pub fn walk(&self, root: &Path) -> Result<WalkOutcome> {
        let abs_root = resolve_root(root)?;
        tracing::debug!(root = %abs_root.display(), "walking");

        let loaded;
        let gitignore: Option<&dyn GitIgnoreSource> = match (&self.gitignore, self.config.gitignore)
        {
            (_, false) => None,
            (Some(source), true) => Some(&**source),
            (None, true) => {
                loaded = GitignoreFilter::new(&abs_root)?;
                Some(&loaded as &dyn GitIgnoreSource)
            }
        };

        let mut traversal = Traversal {
            config: &self.config,
            gitignore,
            warnings: Vec::new(),
        };

        let root_name = root.display().to_string();
        let tree = if self.config.at_max_level(0) {
            let truncated = self.config.show_not_empty
                && traversal.has_visible_entries(&abs_root, Path::new(""), 0);
            TreeNode::pruned_dir(root_name, 0, truncated)
        } else {
            let children = traversal
                .children(&abs_root, Path::new(""), 0)
                .map_err(|source| TreeError::RootUnreadable {
                    path: abs_root.clone(),
                    source,
                })?;
            TreeNode::dir(root_name, 0, children)
        };

        Ok(WalkOutcome {
            tree,
            warnings: traversal.warnings,
        })
    }
}

/// Make `root` absolute and check that it is a readable directory.
fn resolve_root(root: &Path) -> Result<PathBuf> {
    let abs_root = if root.is_absolute() {
        root.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(root))
            .unwrap_or_else(|_| root.to_path_buf())
    };

    match fs::metadata(&abs_root) {
        Ok(meta) if meta.is_dir() => Ok(abs_root),
        Ok(_) => Err(TreeError::NotADirectory(root.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(TreeError::PathNotFound(root.to_path_buf()))
        }
        Err(source) => Err(TreeError::RootUnreadable {
            path: abs_root,
            source,
        }),
    }
}

/// State for a single walk.
struct Traversal<'a> {
    config: &'a WalkerConfig,
    gitignore: Option<&'a dyn GitIgnoreSource>,
    warnings: Vec<EntryUnreadable>,
}

impl Traversal<'_> {
    /// Build the visible children of `dir`, which sits at `depth`.
    fn children(&mut self, dir: &Path, rel_dir: &Path, depth: usize) -> io::Result<Vec<TreeNode>> {
        let child_depth = depth + 1;
        let mut nodes = Vec::new();

        for entry in read_sorted(dir)? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let rel_path = rel_dir.join(&name);
            let is_dir = is_real_dir(&entry);

            if self.is_excluded(&name, &rel_path, child_depth, is_dir) {
                tracing::trace!(path = %rel_path.display(), "filtered out");
                continue;
            }

            if !is_dir {
                nodes.push(TreeNode::file(name, child_depth));
                continue;
            }

            let path = entry.path();
            if self.config.at_max_level(child_depth) {
                let truncated = self.config.show_not_empty
                    && self.has_visible_entries(&path, &rel_path, child_depth);
                tracing::debug!(path = %rel_path.display(), truncated, "depth limit reached");
                nodes.push(TreeNode::pruned_dir(name, child_depth, truncated));
                continue;
            }

            match self.children(&path, &rel_path, child_depth) {
                Ok(children) => nodes.push(TreeNode::dir(name, child_depth, children)),
                Err(source) => {
                    let warning = EntryUnreadable { path, source };
                    tracing::warn!("{}", warning);
                    self.warnings.push(warning);
                }
            }
        }

        Ok(nodes)
    }

    /// Whether `dir` (at `depth`) holds at least one entry that would survive filtering.
    fn has_visible_entries(&self, dir: &Path, rel_dir: &Path, depth: usize) -> bool {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(path = %dir.display(), error = %e, "cannot peek into directory");
                return false;
            }
        };

        entries.filter_map(|e| e.ok()).any(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            let rel_path = rel_dir.join(&name);
            !self.is_excluded(&name, &rel_path, depth + 1, is_real_dir(&entry))
        })
    }

    fn is_excluded(&self, name: &str, rel_path: &Path, depth: usize, is_dir: bool) -> bool {
        self.config.filters.is_excluded(name, depth)
            || self
                .gitignore
                .is_some_and(|g| g.matches(name, rel_path, is_dir))
    }
}

/// List `dir` sorted by file name.
fn read_sorted(dir: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}

/// Directory check that does not follow symlinks, so links are always leaves.
fn is_real_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_ok_and(|t| t.is_dir())
}
