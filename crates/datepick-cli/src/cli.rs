//! CLI argument definitions for datepick.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use datepick_model::{DateRange, DateValue};

#[derive(Parser)]
#[command(
    name = "datepick",
    version,
    about = "Date range picker engine - replay selection sessions and inspect availability",
    long_about = "Drive the date range selection engine from the command line.\n\n\
                  Replays scripted pick, highlight and paging events and reports the\n\
                  engine state after each one, or scans the available range around an anchor."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replay a JSON session script and report the state after each event.
    Replay(ReplayArgs),

    /// Compute the available range around an anchor date.
    Scan(ScanArgs),
}

#[derive(Parser)]
pub struct ReplayArgs {
    /// Path to the session script.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct ScanArgs {
    /// Anchor date (YYYY-MM-DD).
    #[arg(value_name = "ANCHOR")]
    pub anchor: DateValue,

    /// Visible window as START/END.
    #[arg(long = "window", value_name = "START/END")]
    pub window: DateRange,

    /// Comma-separated unavailable dates.
    #[arg(long = "unavailable", value_name = "DATES", value_delimiter = ',')]
    pub unavailable: Vec<DateValue>,

    /// Allow ranges to span unavailable dates (disables the scan).
    #[arg(long = "non-contiguous")]
    pub non_contiguous: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
    Plain,
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
