//! Clap command tree definition.

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("solsnap")
        .about("Inspect and convert boson star solution snapshots")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Config file (default: ./solsnap.toml when present)")
                .value_parser(value_parser!(std::path::PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log decode steps to stderr (-v debug, -vv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build_detect())
        .subcommand(build_inspect())
        .subcommand(build_convert())
        .subcommand(build_init())
}

fn snapshot_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .required(true)
        .help(help)
        .value_parser(value_parser!(std::path::PathBuf))
}

fn build_detect() -> Command {
    Command::new("detect")
        .about("Report which record layout a snapshot holds")
        .arg(snapshot_arg("file", "Snapshot file"))
}

fn build_inspect() -> Command {
    Command::new("inspect")
        .about("Decode a snapshot and summarize its contents")
        .arg(snapshot_arg("file", "Snapshot file"))
}

fn build_convert() -> Command {
    Command::new("convert")
        .about("Rewrite a snapshot in the current layout (λ stored after ω)")
        .arg(snapshot_arg("input", "Snapshot to read (either layout)"))
        .arg(snapshot_arg("output", "Destination (may equal the input)"))
        .arg(
            Arg::new("lambda")
                .long("lambda")
                .help("Self-interaction coefficient to store (default: the file's, else lambda_default)")
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true),
        )
}

fn build_init() -> Command {
    Command::new("init")
        .about("Write a commented default config file if none exists")
        .arg(
            Arg::new("path")
                .help("Config path (default: ./solsnap.toml)")
                .value_parser(value_parser!(std::path::PathBuf)),
        )
}
