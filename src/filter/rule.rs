//! Single filter entries and the `[level:]name` token grammar

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TreeError};

/// A file or directory name, optionally pinned to one tree level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterRule {
    name: String,
    level: Option<usize>,
}

impl FilterRule {
    /// Build a rule. The name is trimmed and must not be empty.
    pub fn new(name: impl AsRef<str>, level: Option<usize>) -> Result<Self> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TreeError::InvalidFilterSyntax {
                token: name.as_ref().to_string(),
                reason: "empty name",
            });
        }
        Ok(Self {
            name: trimmed.to_string(),
            level,
        })
    }

    /// Rule that applies at every depth.
    pub fn any_level(name: impl AsRef<str>) -> Result<Self> {
        Self::new(name, None)
    }

    /// Rule that applies only at `level`.
    pub fn at_level(name: impl AsRef<str>, level: usize) -> Result<Self> {
        Self::new(name, Some(level))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Option<usize> {
        self.level
    }

    /// Exact, case-sensitive name comparison; an unscoped rule matches at any depth.
    pub fn matches(&self, name: &str, depth: usize) -> bool {
        self.name == name && self.level.is_none_or(|level| level == depth)
    }
}

impl FromStr for FilterRule {
    type Err = TreeError;

    /// Parse `name` or `level:name`.
    fn from_str(token: &str) -> Result<Self> {
        let invalid = |reason| TreeError::InvalidFilterSyntax {
            token: token.trim().to_string(),
            reason,
        };

        let mut parts = token.split(':');
        let first = parts.next().unwrap_or_default();
        let second = parts.next();
        if parts.next().is_some() {
            return Err(invalid("more than one ':' separator"));
        }

        match second {
            None => Self::any_level(first).map_err(|_| invalid("empty name")),
            Some(name) => {
                let level = first
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| invalid("level must be a non-negative integer"))?;
                Self::at_level(name, level).map_err(|_| invalid("empty name"))
            }
        }
    }
}

impl fmt::Display for FilterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            Some(level) => write!(f, "{}:{}", level, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Parse a comma-separated filter list such as `node_modules, 1:target`.
///
/// Blank tokens (for example from a trailing comma) are skipped. Any malformed
/// token fails the whole list.
pub fn parse_filter_list(list: &str) -> Result<Vec<FilterRule>> {
    list.split(',')
        .filter(|token| !token.trim().is_empty())
        .map(|token| token.parse::<FilterRule>())
        .collect()
}
