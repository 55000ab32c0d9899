//! Connector glyph sets

/// The four segments a tree line is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    /// Connector for a node with later siblings
    pub branch: &'static str,
    /// Connector for the last sibling
    pub last_branch: &'static str,
    /// Ancestor segment when that ancestor has later siblings
    pub vertical: &'static str,
    /// Ancestor segment when that ancestor was the last sibling
    pub blank: &'static str,
}

pub const UNICODE: GlyphSet = GlyphSet {
    branch: "├── ",
    last_branch: "└── ",
    vertical: "│   ",
    blank: "    ",
};

pub const ASCII: GlyphSet = GlyphSet {
    branch: "|-- ",
    last_branch: "`-- ",
    vertical: "|   ",
    blank: "    ",
};

impl GlyphSet {
    pub fn for_ascii(ascii: bool) -> Self {
        if ascii { ASCII } else { UNICODE }
    }

    pub fn connector(&self, is_last: bool) -> &'static str {
        if is_last {
            self.last_branch
        } else {
            self.branch
        }
    }

    /// Segment drawn under a node for its descendants' lines.
    pub fn continuation(&self, is_last: bool) -> &'static str {
        if is_last { self.blank } else { self.vertical }
    }
}
