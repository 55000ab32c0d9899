//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Draw connectors with ASCII instead of box-drawing characters.
    pub ascii: bool,
    /// Colour directory names when printing to a terminal.
    pub use_color: bool,
}
