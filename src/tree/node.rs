//! In-memory tree produced by the walker

use serde::{Serialize, Serializer};

/// One visited entry. Directories own their children; files have none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(rename = "type", serialize_with = "serialize_kind")]
    pub is_dir: bool,
    #[serde(skip)]
    pub depth: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
    /// Descent stopped at the depth limit while visible entries remained on disk.
    #[serde(skip_serializing_if = "is_false")]
    pub truncated: bool,
}

impl TreeNode {
    pub fn file(name: impl Into<String>, depth: usize) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            depth,
            children: Vec::new(),
            truncated: false,
        }
    }

    pub fn dir(name: impl Into<String>, depth: usize, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            depth,
            children,
            truncated: false,
        }
    }

    /// Directory whose children were not read because of the depth limit.
    pub fn pruned_dir(name: impl Into<String>, depth: usize, truncated: bool) -> Self {
        Self {
            truncated,
            ..Self::dir(name, depth, Vec::new())
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Number of nodes below this one (the node itself excluded).
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }
}

fn serialize_kind<S: Serializer>(is_dir: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *is_dir { "directory" } else { "file" })
}

fn is_false(value: &bool) -> bool {
    !*value
}
