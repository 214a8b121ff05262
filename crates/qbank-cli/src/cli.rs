//! Command line definitions for `qbank`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "qbank",
    version,
    about = "Import exam questions from loosely structured CSV and Excel files",
    long_about = "Import multiple-choice questions from CSV and Excel uploads.\n\n\
                  Column headers may be named almost anything; qbank works out which\n\
                  column holds which question field and stores every row as a draft."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
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

    /// Allow question content in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Configuration file (default: ./qbank.toml).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Stage a file, import it, and store the questions as drafts.
    Import(ImportArgs),

    /// Show how a file's headers resolve and preview normalized records.
    Inspect(InspectArgs),

    /// List the canonical fields and the header names each one accepts.
    Fields,

    /// Delete staged uploads older than the configured age.
    Sweep(SweepArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// CSV, XLSX or XLS file to import.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Question store to append to (overrides config).
    #[arg(long = "store", value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Import into memory and report without touching the store.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// CSV, XLSX or XLS file to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of records to preview (overrides config).
    #[arg(long = "rows", value_name = "N")]
    pub rows: Option<usize>,
}

#[derive(Parser)]
pub struct SweepArgs {
    /// Staging directory to sweep (overrides config).
    #[arg(long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Age in hours after which a staged file is deleted (overrides config).
    #[arg(long = "max-age-hours", value_name = "N")]
    pub max_age_hours: Option<u64>,
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
