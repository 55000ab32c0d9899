//! Tree renderer
//!
//! Turns a walked `TreeNode` tree into connector-drawn lines, either as plain
//! strings or printed to stdout with colours.

use std::fmt;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeNode;

use super::config::OutputConfig;
use super::glyphs::GlyphSet;

/// Text of the synthetic child drawn under a truncated directory.
pub const PLACEHOLDER: &str = "...";

/// What a rendered line stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Root,
    Dir,
    File,
    Placeholder,
}

/// One output line: the connector prefix and the entry name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLine {
    pub prefix: String,
    pub name: String,
    pub kind: LineKind,
}

impl fmt::Display for RenderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.name)
    }
}

/// Renderer for a fully built tree.
pub struct TreeRenderer {
    config: OutputConfig,
}

impl TreeRenderer {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    fn glyphs(&self) -> GlyphSet {
        GlyphSet::for_ascii(self.config.ascii)
    }

    /// Structured lines: the root header first, then every node depth-first.
    pub fn lines(&self, root: &TreeNode) -> Vec<RenderLine> {
        let mut lines = vec![RenderLine {
            prefix: String::new(),
            name: root.name.clone(),
            kind: LineKind::Root,
        }];
        self.push_children(root, "", &mut lines);
        lines
    }

    fn push_children(&self, node: &TreeNode, prefix: &str, lines: &mut Vec<RenderLine>) {
        let glyphs = self.glyphs();
        let count = node.children.len();

        for (i, child) in node.children.iter().enumerate() {
            // The placeholder, when present, comes after every real child
            let is_last = i + 1 == count && !node.truncated;
            lines.push(RenderLine {
                prefix: format!("{}{}", prefix, glyphs.connector(is_last)),
                name: child.name.clone(),
                kind: if child.is_dir {
                    LineKind::Dir
                } else {
                    LineKind::File
                },
            });
            if child.is_dir {
                let child_prefix = format!("{}{}", prefix, glyphs.continuation(is_last));
                self.push_children(child, &child_prefix, lines);
            }
        }

        if node.truncated {
            lines.push(RenderLine {
                prefix: format!("{}{}", prefix, glyphs.last_branch),
                name: PLACEHOLDER.to_string(),
                kind: LineKind::Placeholder,
            });
        }
    }

    pub fn render(&self, root: &TreeNode) -> Vec<String> {
        self.lines(root).iter().map(ToString::to_string).collect()
    }

    pub fn render_to_string(&self, root: &TreeNode) -> String {
        self.render(root).join("\n")
    }

    /// Print to stdout, colouring directory names when enabled.
    pub fn print(&self, root: &TreeNode) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);

        for line in self.lines(root) {
            write!(stdout, "{}", line.prefix)?;
            match line.kind {
                LineKind::Root | LineKind::Dir => {
                    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                }
                LineKind::Placeholder => {
                    stdout.set_color(ColorSpec::new().set_dimmed(true))?;
                }
                LineKind::File => {}
            }
            write!(stdout, "{}", line.name)?;
            stdout.reset()?;
            writeln!(stdout)?;
        }
        Ok(())
    }
}
