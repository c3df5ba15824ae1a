//! Report checker CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use rc_cli::commands::{run_check, run_rules, run_verify_rules};
use rc_cli::logging::{LogConfig, LogFormat, init_logging};
use rc_cli::summary::{print_report, print_report_json, print_verify_summary, render_report};
use rc_cli::types::CheckRequest;
use rc_ingest::DocumentFormat;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{
    CheckArgs, Cli, Command, DocumentFormatArg, LogFormatArg, LogLevelArg, OutputFormatArg,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Check(args) => check(&args),
        Command::Rules(args) => match run_rules(args.rules_dir.as_deref()) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::VerifyRules(args) => match run_verify_rules(&args.dir) {
            Ok(summary) => {
                print_verify_summary(&summary);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn check(args: &CheckArgs) -> i32 {
    let request = CheckRequest {
        document: args.document.clone(),
        submission: args.submission.clone(),
        document_format: args.document_format.map(|format| match format {
            DocumentFormatArg::Json => DocumentFormat::Json,
            DocumentFormatArg::Text => DocumentFormat::Text,
        }),
        rules_dir: args.rules_dir.clone(),
    };
    let result = match run_check(&request) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("error: {error:#}");
            return 1;
        }
    };
    match args.format {
        OutputFormatArg::Table => print_report(&result, args.diagnostics),
        OutputFormatArg::Plain => print!("{}", render_report(&result, args.diagnostics)),
        OutputFormatArg::Json => {
            if let Err(error) = print_report_json(&result) {
                eprintln!("error: {error:#}");
                return 1;
            }
        }
    }
    if result.has_issues() { 1 } else { 0 }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
