//! # Option Hub CLI
//!
//! Host for the option registry: loads the options file, builds the default
//! table from the compiled-in declarants and reads or writes options by name.

pub mod args;

pub use crate::args::{Cli, Command};

use anyhow::{Context, Result, bail};
use ophub_bindings::HostOptions;
use ophub_kernel::config::load_config;
use ophub_kernel::domain::config::OptionsConfig;
use serde_json::{Map, Value};
use std::io::Write;
use tracing::{info, warn};

/// Loads the options config named on the command line (or the optional default file).
///
/// # Errors
/// Fails when an explicit file is missing or any source does not deserialize.
pub fn load(cli: &Cli) -> Result<OptionsConfig> {
    load_config::<OptionsConfig>(cli.config.as_deref())
        .context("Critical: Configuration is malformed")
}

/// Executes `cli.command` against `config`, writing results to `out`.
///
/// # Errors
/// Declaration conflicts, rejected overrides and write failures.
pub fn run(cli: &Cli, config: &OptionsConfig, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Command::List { json } => {
            let host = HostOptions::new(ophub::response_options()?);
            print_options(out, &host.snapshot()?, *json)
        },
        Command::Get { names } => {
            let host = configured(config)?;
            for name in names {
                let value = host.get(name).with_context(|| format!("Cannot read '{name}'"))?;
                writeln!(out, "{name}\t{value}")?;
            }
            Ok(())
        },
        Command::Set { assignments, json } => {
            let mut host = configured(config)?;
            let mut written = Map::new();
            for assignment in assignments {
                let (name, value) = parse_assignment(assignment)?;
                host.set(name, value).with_context(|| format!("Cannot set '{name}'"))?;
                written.insert(name.to_owned(), host.get(name)?);
            }
            info!(count = written.len(), "assignments applied");

            if *json {
                print_options(out, &host.snapshot()?, true)
            } else {
                print_options(out, &written, false)
            }
        },
    }
}

/// Splits `name=value`. The value parses as JSON when it can, else stays a string,
/// so `limit=3` is an integer and `strategy=space` a string.
///
/// # Errors
/// Fails without `=` or with an empty name.
pub fn parse_assignment(raw: &str) -> Result<(&str, Value)> {
    let Some((name, value)) = raw.split_once('=') else {
        bail!("Expected NAME=VALUE, got '{raw}'");
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("Missing option name in '{raw}'");
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_owned()));
    Ok((name, value))
}

fn configured(config: &OptionsConfig) -> Result<HostOptions> {
    let mut options = ophub::response_options()?;
    if let Err(e) = options.apply_config(config) {
        warn!(flag = e.name(), error = %e, "config override rejected");
        return Err(e).context("Failed to apply options config");
    }
    Ok(HostOptions::new(options))
}

fn print_options(out: &mut impl Write, options: &Map<String, Value>, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, options)?;
        writeln!(out)?;
    } else {
        for (name, value) in options {
            writeln!(out, "{name}\t{value}")?;
        }
    }
    Ok(())
}
