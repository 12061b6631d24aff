//! `verdict`: validate address records and form input from the command line.
//!
//! Exit status: 0 when the outcome is a success, 1 when it is a failure,
//! 2 on a usage or configuration error.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use verdict_cli::cli::Cli;
use verdict_cli::config::Settings;
use verdict_cli::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let settings = Settings::load(cli.config.as_deref(), &cli.overrides())
        .context("failed to load configuration")?;
    logging::init(&settings.log)?;

    let report = cli
        .command
        .execute(&settings)
        .context("failed to render outcome")?;
    println!("{}", report.text);
    Ok(report.passed)
}
