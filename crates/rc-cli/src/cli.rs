//! CLI argument definitions for the report checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "report-checker",
    version,
    about = "Check a student report's title page and sections against its submission",
    long_about = "Check an extracted student report against the metadata it was submitted with.\n\n\
                  The title page must name the student, group, subject, task, instructor and\n\
                  year; the remaining pages must contain every required section."
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

    /// Include names and extracted text in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check an extracted report against its submission metadata.
    Check(CheckArgs),

    /// List task-type categories and their accepted variants.
    Rules(RulesArgs),

    /// Verify a rules directory against its manifest.
    VerifyRules(VerifyRulesArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Extracted document: a JSON page dump or `pdftotext` output.
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Submission metadata as JSON (student and report records).
    #[arg(long = "submission", value_name = "FILE")]
    pub submission: PathBuf,

    /// Document format (default: from the file extension).
    #[arg(long = "document-format", value_enum)]
    pub document_format: Option<DocumentFormatArg>,

    /// Result output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Also print matcher diagnostics.
    #[arg(long = "diagnostics")]
    pub diagnostics: bool,

    /// Rules directory (default: $REPORT_CHECKER_RULES_DIR, then built-in rules).
    #[arg(long = "rules-dir", value_name = "DIR")]
    pub rules_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// Rules directory (default: $REPORT_CHECKER_RULES_DIR, then built-in rules).
    #[arg(long = "rules-dir", value_name = "DIR")]
    pub rules_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct VerifyRulesArgs {
    /// Directory containing `manifest.toml`.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Plain,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DocumentFormatArg {
    Json,
    Text,
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
