//! Error and warning types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors. Any of these aborts before a single line of tree output.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    PathNotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot read directory '{}': {source}", .path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid filter '{token}': {reason}")]
    InvalidFilterSyntax { token: String, reason: &'static str },

    #[error("cannot load .gitignore: {0}")]
    Gitignore(#[from] ignore::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;

/// A subdirectory that could not be listed during traversal.
/// Its subtree is left out of the tree; the walk continues.
#[derive(Debug, Error)]
#[error("cannot read directory '{}': {source}", .path.display())]
pub struct EntryUnreadable {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}
