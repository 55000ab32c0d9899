//! Level-aware name filters
//!
//! - `rule` - a single `[level:]name` entry and the list parser
//! - `set` - deny (`--ignore`) and allow (`--only`) rules with precedence logic

mod rule;
mod set;

pub use rule::{FilterRule, parse_filter_list};
pub use set::{FilterSet, Side};
