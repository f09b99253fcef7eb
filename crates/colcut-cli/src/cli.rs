//! CLI argument definitions for colcut.
//!
//! `-s`, `-c` and `-K` are position sensitive: each applies to the inputs
//! that follow it. Every occurrence is recorded with its index so the plan
//! builder can replay them in command-line order.

use std::path::PathBuf;

use clap::builder::StyledStr;
use clap::{ArgAction, CommandFactory, Parser, ValueEnum, value_parser};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

// Ids match the derive defaults (field names).
/// Argument id of `-s`.
pub const SKIP_HEADER: &str = "skip_header";
/// Argument id of `-c`.
pub const ONE_BASED: &str = "one_based";
/// Argument id of `-K`.
pub const ZERO_BASED: &str = "zero_based";
/// Argument id of the input paths.
pub const INPUTS: &str = "inputs";

#[derive(Parser)]
#[command(
    name = "colcut",
    version,
    about = "Print selected columns to standard output.",
    override_usage = "colcut [-h] [-s] -(c|K) <COLUMNS> [INPUT.csv]...",
    after_help = "Options affect only those files that appear after them. Specifying options at\n\
                  the end assumes standard input is the last file.",
    disable_help_flag = true
)]
pub struct Cli {
    /// Print this help to standard error.
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    /// Skip the header (the first line) of the files that follow.
    #[arg(
        short = 's',
        num_args = 0,
        action = ArgAction::Append,
        value_parser = value_parser!(bool),
        default_missing_value = "true"
    )]
    pub skip_header: Vec<bool>,

    /// Comma-separated list of 1-based column ranges to print.
    #[arg(
        short = 'c',
        value_name = "COLUMNS",
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub one_based: Vec<String>,

    /// Comma-separated list of 0-based column ranges to print.
    #[arg(
        short = 'K',
        value_name = "COLUMNS",
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub zero_based: Vec<String>,

    /// Input files; standard input when none follows the last -c/-K.
    #[arg(value_name = "INPUT.csv", action = ArgAction::Append)]
    pub inputs: Vec<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Full help text, as printed for `-h` and usage errors.
pub fn usage_text() -> StyledStr {
    Cli::command().render_help()
}
