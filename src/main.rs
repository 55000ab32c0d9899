//! CLI entry point for tree-extended

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use tree_extended::{
    FilterSet, OutputConfig, TreeRenderer, TreeWalker, WalkerConfig, parse_filter_list, print_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").is_ok_and(|t| t == "dumb") {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tree-extended")]
#[command(about = "Print a directory tree with level-aware ignore/only filters")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Deepest level to show (root is level 0)
    #[arg(long = "max", value_name = "LEVEL")]
    max: Option<usize>,

    /// Show '...' under directories cut off by --max that still have content
    #[arg(long = "max-show-not-empty", requires = "max")]
    max_show_not_empty: bool,

    /// Draw the tree with ASCII characters
    #[arg(long = "ascii")]
    ascii: bool,

    /// Hide the .git folder and everything matched by the root .gitignore
    #[arg(long = "gitignore")]
    gitignore: bool,

    /// Entries to hide: "[level1:]name1, [level2:]name2, ..."
    #[arg(long = "ignore", value_name = "LIST")]
    ignore: Option<String>,

    /// Only show these entries: "[level1:]name1, [level2:]name2, ..."
    #[arg(long = "only", value_name = "LIST")]
    only: Option<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Parse an optional filter list, exiting on bad syntax.
fn filter_rules(list: Option<&str>) -> Vec<tree_extended::FilterRule> {
    match list.map(parse_filter_list).transpose() {
        Ok(rules) => rules.unwrap_or_default(),
        Err(e) => {
            eprintln!("tree-extended: {}", e);
            process::exit(1);
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging();

    // Filters are validated before anything touches the disk
    let filters = FilterSet::new()
        .with_deny(filter_rules(args.ignore.as_deref()))
        .with_allow(filter_rules(args.only.as_deref()));

    let walker_config = WalkerConfig {
        max_level: args.max,
        show_not_empty: args.max_show_not_empty,
        gitignore: args.gitignore,
        filters,
    };

    let outcome = match TreeWalker::new(walker_config).walk(&args.path) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("tree-extended: {}", e);
            process::exit(1);
        }
    };

    let result = if args.json {
        print_json(&outcome.tree)
    } else {
        let renderer = TreeRenderer::new(OutputConfig {
            ascii: args.ascii,
            use_color: should_use_color(args.color),
        });
        renderer.print(&outcome.tree)
    };

    if let Err(e) = result {
        eprintln!("tree-extended: error writing output: {}", e);
        process::exit(1);
    }
}
