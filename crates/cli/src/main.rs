//! solsnap CLI: inspect and convert solution snapshots.
//!
//! ```text
//! solsnap detect bosinit.dat
//! solsnap inspect bosinit.dat --json
//! solsnap convert old.dat new.dat --lambda 0.0
//! solsnap init
//! ```

mod actions;
mod commands;
mod format;
mod parse;

use std::process;

use anyhow::{Context, Result};
use solsnap_durability::SnapshotConfig;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_convert, format_detect, format_error, format_init, format_inspect};
use parse::{global_options, matches_to_action, CliAction, GlobalOptions};

fn main() {
    let matches = build_cli().get_matches();
    let options = global_options(&matches);
    init_tracing(options.verbosity);

    match run(&matches, &options) {
        Ok(out) => {
            if !out.is_empty() {
                println!("{}", out);
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, options.mode));
            process::exit(1);
        }
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(matches: &clap::ArgMatches, options: &GlobalOptions) -> Result<String> {
    let action = matches_to_action(matches).map_err(anyhow::Error::msg)?;
    let mode = options.mode;

    let config = || {
        SnapshotConfig::discover(options.config.as_deref())
            .context("Failed to load configuration")
    };

    match action {
        CliAction::Detect { file } => Ok(format_detect(&actions::detect(&config()?, &file)?, mode)),
        CliAction::Inspect { file } => Ok(format_inspect(
            &actions::inspect(&config()?, &file)?,
            mode,
        )),
        CliAction::Convert {
            input,
            output,
            lambda,
        } => Ok(format_convert(
            &actions::convert(&config()?, &input, &output, lambda)?,
            mode,
        )),
        CliAction::Init { path } => Ok(format_init(&actions::init(path.as_deref())?, mode)),
    }
}
