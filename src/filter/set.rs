//! Deny/allow rule sets

use super::rule::FilterRule;

/// Which half of a [`FilterSet`] a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// `--ignore` rules
    Deny,
    /// `--only` rules
    Allow,
}

/// Deny and allow rules consulted for every entry during traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    deny_rules: Vec<FilterRule>,
    allow_rules: Vec<FilterRule>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deny(mut self, rules: impl IntoIterator<Item = FilterRule>) -> Self {
        for rule in rules {
            self.insert(Side::Deny, rule);
        }
        self
    }

    pub fn with_allow(mut self, rules: impl IntoIterator<Item = FilterRule>) -> Self {
        for rule in rules {
            self.insert(Side::Allow, rule);
        }
        self
    }

    /// Add a rule; duplicates are ignored.
    pub fn insert(&mut self, side: Side, rule: FilterRule) {
        let rules = self.rules_mut(side);
        if !rules.contains(&rule) {
            rules.push(rule);
        }
    }

    /// Deny `.git` at every depth. Used when gitignore support is on.
    pub fn deny_git_dir(&mut self) {
        if let Ok(rule) = FilterRule::any_level(".git") {
            self.insert(Side::Deny, rule);
        }
    }

    pub fn rules(&self, side: Side) -> &[FilterRule] {
        match side {
            Side::Deny => &self.deny_rules,
            Side::Allow => &self.allow_rules,
        }
    }

    fn rules_mut(&mut self, side: Side) -> &mut Vec<FilterRule> {
        match side {
            Side::Deny => &mut self.deny_rules,
            Side::Allow => &mut self.allow_rules,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.deny_rules.is_empty() && self.allow_rules.is_empty()
    }

    /// Whether any rule on `side` matches `name` at `depth`.
    pub fn matches(&self, name: &str, depth: usize, side: Side) -> bool {
        self.rules(side).iter().any(|rule| rule.matches(name, depth))
    }

    /// Decide whether an entry is left out of the tree.
    ///
    /// A non-empty allow set acts as a whitelist at every depth. Deny rules are
    /// checked after the allow gate and always win.
    pub fn is_excluded(&self, name: &str, depth: usize) -> bool {
        let allowed = self.allow_rules.is_empty() || self.matches(name, depth, Side::Allow);
        !allowed || self.matches(name, depth, Side::Deny)
    }
}
