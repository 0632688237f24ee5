//! `dedupe` - CLI for the dedupe library
//!
//! This binary reads records, keeps the lowest identifier per key, and prints
//! the result.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use dedupe::cli::{Cli, Command, ConfigCommand, DemoCommand, RunCommand};
use dedupe::demo::sample_records;
use dedupe::output::{render_report, write_stdout};
use dedupe::{deduplicate, deduplicate_with_report, init_logging, read_records, render, Config};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            let code = err
                .chain()
                .find_map(|cause| cause.downcast_ref::<dedupe::Error>())
                .map_or(1, dedupe::Error::exit_code);
            ExitCode::from(code)
        }
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<()> {
    // `config path` and `config validate` run without loading the active
    // configuration, so a broken file can still be inspected.
    if !cli.command.needs_config() {
        if let Command::Config(config_cmd) = cli.command {
            return handle_config_file(cli.config, config_cmd);
        }
    }

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Run(run_cmd) => handle_run(config, &run_cmd),
        Command::Demo(demo_cmd) => handle_demo(config, &demo_cmd),
        Command::Config(config_cmd) => handle_config_show(&config, &config_cmd),
    }
}

fn handle_run(mut config: Config, cmd: &RunCommand) -> anyhow::Result<()> {
    cmd.apply_to(&mut config);

    let records = read_records(cmd.file.as_deref(), &config.input).with_context(|| {
        match &cmd.file {
            Some(path) => format!("loading records from {}", path.display()),
            None => "loading records from stdin".to_string(),
        }
    })?;

    let (mut kept, report) = deduplicate_with_report(records);
    config.output.order.apply(&mut kept);

    write_stdout(&render(&kept, config.output.format)?)?;

    if cmd.report {
        eprint!("{}", render_report(&report, config.output.format)?);
    }
    debug!(kept = report.kept, dropped = report.dropped(), "Done");
    Ok(())
}

fn handle_demo(mut config: Config, cmd: &DemoCommand) -> anyhow::Result<()> {
    cmd.apply_to(&mut config);
    let format = config.output.format;
    let records = sample_records();

    let mut out = String::from("Original list:\n");
    out.push_str(&render(&records, format)?);

    let mut kept = deduplicate(records);
    config.output.order.apply(&mut kept);

    out.push_str("\nFiltered list (lowest identifier kept):\n");
    out.push_str(&render(&kept, format)?);

    write_stdout(&out)?;
    Ok(())
}

fn handle_config_show(config: &Config, cmd: &ConfigCommand) -> anyhow::Result<()> {
    let ConfigCommand::Show { json } = cmd else {
        anyhow::bail!("unexpected configuration command: {cmd:?}");
    };

    let mut out = String::new();
    if *json {
        out.push_str(&serde_json::to_string_pretty(config)?);
        out.push('\n');
    } else {
        let _ = writeln!(out, "Current Configuration");
        let _ = writeln!(out, "=====================");
        let _ = writeln!(out);
        let _ = writeln!(out, "[Input]");
        let _ = writeln!(out, "  Format:       {:?}", config.input.format);
        let _ = writeln!(out, "  Delimiter:    {:?}", config.input.delimiter);
        let _ = writeln!(out, "  Max records:  {}", config.input.max_records);
        let _ = writeln!(out);
        let _ = writeln!(out, "[Output]");
        let _ = writeln!(out, "  Format:       {:?}", config.output.format);
        let _ = writeln!(out, "  Order:        {:?}", config.output.order);
    }
    write_stdout(&out)?;
    Ok(())
}

fn handle_config_file(global: Option<PathBuf>, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Path => {
            let path = global.unwrap_or_else(Config::default_config_path);
            write_stdout(&format!("{}\n", path.display()))?;
        }
        ConfigCommand::Validate { file } => {
            let path = file.or(global).unwrap_or_else(Config::default_config_path);
            Config::validate_file(&path)
                .with_context(|| format!("validating configuration {}", path.display()))?;
            write_stdout(&format!("Configuration is valid: {}\n", path.display()))?;
        }
        ConfigCommand::Show { .. } => {
            anyhow::bail!("`config show` needs the loaded configuration");
        }
    }
    Ok(())
}
