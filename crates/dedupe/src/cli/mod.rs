//! Command-line interface for dedupe.
//!
//! This module provides the CLI structure for the `dedupe` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, DemoCommand, InputFormatArg, OutputFormatArg, OutputOrderArg, RunCommand,
};

/// dedupe - Keep one record per key
///
/// Reads `identifier,key` records and keeps, for every key, the record with
/// the lowest identifier.
#[derive(Debug, Parser)]
#[command(name = "dedupe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Deduplicate records from a file or stdin
    Run(RunCommand),

    /// Deduplicate the built-in sample records
    Demo(DemoCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Command {
    /// Whether this command needs the active configuration loaded first.
    ///
    /// `config path` and `config validate` must work even when the active
    /// configuration is broken.
    #[must_use]
    pub fn needs_config(&self) -> bool {
        !matches!(
            self,
            Self::Config(ConfigCommand::Path | ConfigCommand::Validate { .. })
        )
    }
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Verbosity;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "dedupe");
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&["dedupe", "demo"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["dedupe", "-v", "demo"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["dedupe", "-vv", "demo"]).verbosity(), Verbosity::Trace);
        assert_eq!(parse(&["dedupe", "-q", "demo"]).verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_quiet_wins_over_verbose() {
        assert_eq!(
            parse(&["dedupe", "-q", "-v", "demo"]).verbosity(),
            Verbosity::Quiet
        );
    }

    #[test]
    fn test_parse_run_defaults() {
        let cli = parse(&["dedupe", "run"]);
        match cli.command {
            Command::Run(run) => {
                assert!(run.file.is_none());
                assert!(run.format.is_none());
                assert!(run.order.is_none());
                assert!(!run.report);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_run_with_options() {
        let cli = parse(&[
            "dedupe",
            "run",
            "users.txt",
            "--input-format",
            "lines",
            "--format",
            "table",
            "--order",
            "identifier",
            "--report",
        ]);
        match cli.command {
            Command::Run(run) => {
                assert_eq!(run.file, Some(PathBuf::from("users.txt")));
                assert_eq!(run.input_format, Some(InputFormatArg::Lines));
                assert_eq!(run.format, Some(OutputFormatArg::Table));
                assert_eq!(run.order, Some(OutputOrderArg::Identifier));
                assert!(run.report);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_demo_json() {
        let cli = parse(&["dedupe", "demo", "-f", "json"]);
        assert!(matches!(
            cli.command,
            Command::Demo(DemoCommand {
                format: Some(OutputFormatArg::Json)
            })
        ));
    }

    #[test]
    fn test_parse_config_show() {
        let cli = parse(&["dedupe", "config", "show", "--json"]);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Show { json: true })
        ));
    }

    #[test]
    fn test_needs_config() {
        assert!(parse(&["dedupe", "run"]).command.needs_config());
        assert!(parse(&["dedupe", "demo"]).command.needs_config());
        assert!(parse(&["dedupe", "config", "show"]).command.needs_config());
    }

    #[test]
    fn test_validate_and_path_skip_active_config() {
        let cli = parse(&[
            "dedupe",
            "-c",
            "/tmp/bad.toml",
            "config",
            "validate",
            "--file",
            "/tmp/good.toml",
        ]);
        assert!(!cli.command.needs_config());
        assert!(!parse(&["dedupe", "config", "path"]).command.needs_config());
    }

    #[test]
    fn test_parse_with_config() {
        let cli = parse(&["dedupe", "-c", "/custom/config.toml", "demo"]);
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["dedupe", "run", "--format", "yaml"]).is_err());
    }
}
