//! ArgMatches → CliAction conversion.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::format::OutputMode;

/// Flags shared by every subcommand.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub verbosity: u8,
    pub mode: OutputMode,
}

/// Result of parsing a command line.
#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    Detect {
        file: PathBuf,
    },
    Inspect {
        file: PathBuf,
    },
    Convert {
        input: PathBuf,
        output: PathBuf,
        lambda: Option<f64>,
    },
    Init {
        path: Option<PathBuf>,
    },
}

pub fn global_options(matches: &ArgMatches) -> GlobalOptions {
    GlobalOptions {
        config: matches.get_one::<PathBuf>("config").cloned(),
        verbosity: matches.get_count("verbose"),
        mode: if matches.get_flag("json") {
            OutputMode::Json
        } else {
            OutputMode::Human
        },
    }
}

/// Convert clap matches into an action.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (name, sub) = matches
        .subcommand()
        .ok_or_else(|| "No command given".to_string())?;

    match name {
        "detect" => Ok(CliAction::Detect {
            file: required_path(sub, "file")?,
        }),
        "inspect" => Ok(CliAction::Inspect {
            file: required_path(sub, "file")?,
        }),
        "convert" => Ok(CliAction::Convert {
            input: required_path(sub, "input")?,
            output: required_path(sub, "output")?,
            lambda: sub.get_one::<f64>("lambda").copied(),
        }),
        "init" => Ok(CliAction::Init {
            path: sub.get_one::<PathBuf>("path").cloned(),
        }),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn required_path(matches: &ArgMatches, name: &str) -> Result<PathBuf, String> {
    matches
        .get_one::<PathBuf>(name)
        .cloned()
        .ok_or_else(|| format!("Missing argument: {}", name))
}
