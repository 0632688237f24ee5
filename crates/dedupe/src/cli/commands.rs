//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::config::Config;

/// Run command arguments.
#[derive(Debug, Args)]
pub struct RunCommand {
    /// Input file (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,

    /// How to interpret the input
    #[arg(short, long, value_enum)]
    pub input_format: Option<InputFormatArg>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Order of the deduplicated records
    #[arg(short, long, value_enum)]
    pub order: Option<OutputOrderArg>,

    /// Print a summary of kept and dropped records to stderr
    #[arg(short, long)]
    pub report: bool,
}

impl RunCommand {
    /// Overlay the flags that were given onto `config`; absent flags leave
    /// the configured value in place.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(format) = self.input_format {
            config.input.format = format.into();
        }
        if let Some(format) = self.format {
            config.output.format = format.into();
        }
        if let Some(order) = self.order {
            config.output.order = order.into();
        }
    }
}

/// Demo command arguments.
#[derive(Debug, Args)]
pub struct DemoCommand {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormatArg>,
}

impl DemoCommand {
    /// Overlay `--format` onto `config` when given.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.output.format = format.into();
        }
    }
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Input format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormatArg {
    /// Detect from the first character
    Auto,
    /// JSON array of records
    Json,
    /// `identifier,key` lines
    Lines,
}

impl From<InputFormatArg> for crate::input::InputFormat {
    fn from(arg: InputFormatArg) -> Self {
        match arg {
            InputFormatArg::Auto => Self::Auto,
            InputFormatArg::Json => Self::Json,
            InputFormatArg::Lines => Self::Lines,
        }
    }
}

/// Output format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Plain text output
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}

impl From<OutputFormatArg> for crate::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Plain => Self::Plain,
            OutputFormatArg::Table => Self::Table,
            OutputFormatArg::Json => Self::Json,
        }
    }
}

/// Output order argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputOrderArg {
    /// Order in which keys first appeared
    FirstSeen,
    /// Ascending key
    Key,
    /// Ascending identifier
    Identifier,
}

impl From<OutputOrderArg> for crate::dedup::OutputOrder {
    fn from(arg: OutputOrderArg) -> Self {
        match arg {
            OutputOrderArg::FirstSeen => Self::FirstSeen,
            OutputOrderArg::Key => Self::Key,
            OutputOrderArg::Identifier => Self::Identifier,
        }
    }
}
