//! CLI definitions for recap
//!
//! The clap structure lives in the library so tests can parse arguments
//! without spawning the binary.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};

use crate::analyzer::segment::SegmenterKind;

/// Clap styles: green headers and literals, red errors.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "recap")]
#[command(about = "Year-in-review statistics for a Threads data export")]
#[command(long_about = "Year-in-review statistics for a Threads data export.

recap reads an already-parsed archive bundle (posts, followers, following,
likes, saved posts) as JSON and prints a recap: writing volume, top
mentions and keywords, monthly and weekday activity, social growth, and
a few fun facts.

QUICK START:
    recap analyze bundle.json             Analyze with the configured year
    recap analyze bundle.json --year 2024 Review a different year
    recap config show                     Show the effective configuration")]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a parsed archive bundle and print the recap as JSON
    #[command(long_about = "Analyze a parsed archive bundle and print the recap as JSON.

Progress is drawn on stderr; the recap goes to stdout. By default the
analysis runs on a background worker thread; --sync runs it inline.

EXAMPLES:
    recap analyze bundle.json
    recap analyze bundle.json --sync --compact
    recap analyze bundle.json --timeout 30 --segmenter regex")]
    Analyze(AnalyzeArgs),

    /// Serve analysis requests as JSON lines on stdin/stdout
    #[command(long_about = "Serve analysis requests as JSON lines on stdin/stdout.

Each input line is a request such as {\"type\":\"analyze\",\"data\":{...}}.
The worker answers with progress lines followed by one result or error
line, and keeps serving until stdin closes.")]
    Worker {
        /// Review year (overrides config)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Flags for `recap analyze`.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct AnalyzeArgs {
    /// Path to the bundle JSON file
    pub file: String,
    /// Review year (overrides config)
    #[arg(long)]
    pub year: Option<i32>,
    /// Run on the calling thread instead of a worker
    #[arg(long)]
    pub sync: bool,
    /// Keyword tokenizer: unicode or regex. Word counts always count each
    /// CJK character as one word plus whitespace-separated runs.
    #[arg(long)]
    pub segmenter: Option<SegmenterKind>,
    /// Give up after this many seconds (worker mode only)
    #[arg(long)]
    pub timeout: Option<u64>,
    /// Print the recap on one line
    #[arg(long)]
    pub compact: bool,
    /// Do not draw progress on stderr
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}
