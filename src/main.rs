use clap::Parser;
use std::process::ExitCode;

use defutil::cli::Cli;
use defutil::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    ExitCode::from(commands::run(cli.command))
}
