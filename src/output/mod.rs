//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `glyphs` - Unicode and ASCII connector sets
//! - `tree` - Line renderer for a complete tree
//! - `json` - JSON output

mod config;
mod glyphs;
mod json;
mod tree;

pub use config::OutputConfig;
pub use glyphs::{ASCII, GlyphSet, UNICODE};
pub use json::print_json;
pub use tree::{LineKind, PLACEHOLDER, RenderLine, TreeRenderer};
