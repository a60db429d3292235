//! CLI argument definitions for the bikeshare explorer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use bikeshare_model::{City, DayFilter, MonthFilter};

#[derive(Parser)]
#[command(
    name = "bikeshare",
    version,
    about = "Explore US bikeshare trip data",
    long_about = "Explore historical bikeshare trip records for Chicago, New York City,\n\
                  and Washington: popular travel times, stations, trip durations, and\n\
                  user demographics, optionally filtered by month and day of week."
)]
pub struct Cli {
    /// Defaults to the interactive session when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory containing the city CSV files.
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = ".",
        global = true
    )]
    pub data_dir: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Run one analysis with filters given on the command line.
    Analyze(AnalyzeArgs),

    /// Prompt for a city and filters, then loop until the user quits.
    Interactive,

    /// List the supported cities and their data files.
    Cities,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// City to analyze (chicago, new-york-city, washington).
    #[arg(long, value_name = "CITY")]
    pub city: City,

    /// Month filter: all, or january through june.
    #[arg(long, value_name = "MONTH", default_value = "all")]
    pub month: MonthFilter,

    /// Day-of-week filter: all, or monday through sunday.
    #[arg(long, value_name = "DAY", default_value = "all")]
    pub day: DayFilter,

    /// Report per-stage timings alongside the statistics.
    #[arg(long)]
    pub timings: bool,

    /// Emit the report as JSON instead of tables.
    #[arg(long)]
    pub json: bool,
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
