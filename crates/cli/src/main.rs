// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! include-to-ignore CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use include_to_ignore::cli::Cli;
use include_to_ignore::convert::{ConvertOptions, Outcome, convert};
use include_to_ignore::env::names;
use include_to_ignore::error::ExitCode;

fn init_logging() {
    let filter = EnvFilter::try_from_env(names::INCLUDE_TO_IGNORE_LOG)
        .unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("include-to-ignore: {}", e);
            match e.downcast_ref::<include_to_ignore::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let options = ConvertOptions {
        strict: cli.strict,
        check: cli.check,
    };

    tracing::trace!("converting {} -> {}", cli.input.display(), cli.output.display());

    match convert(&cli.input, &cli.output, &options)? {
        Outcome::Written { .. } => println!(
            "Successfully converted include patterns to ignore patterns in '{}'",
            cli.output.display()
        ),
        Outcome::UpToDate => println!("'{}' is up to date", cli.output.display()),
    }

    Ok(ExitCode::Success)
}
