// SPDX-License-Identifier: MIT
// Copyright (c) 2026 groblegark

//! Trawl CLI entry point.

use std::io::Write;

use clap::Parser;
use termcolor::StandardStream;
use tracing_subscriber::{EnvFilter, fmt};

use trawl::cli::Cli;
use trawl::error::ExitCode;
use trawl::scan::Scanner;

fn init_logging() {
    let filter = EnvFilter::try_from_env("TRAWL_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

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
            // The error line goes to stdout, after any output already
            // printed for earlier files.
            println!("Error: {}", e);
            match e.downcast_ref::<trawl::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::ScanError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    print_preamble(&cli);

    let scanner = Scanner::new(&cli.mask, &cli.patterns)?;
    let mut out = StandardStream::stdout(cli.color_choice());
    let stats = scanner.scan(&cli.directory, &mut out)?;
    out.flush()?;

    if cli.verbose {
        eprintln!(
            "scanned {} files, {} matched",
            stats.files_scanned, stats.files_matched
        );
    }

    Ok(ExitCode::Success)
}

/// Echo the resolved inputs before scanning begins.
fn print_preamble(cli: &Cli) {
    println!("Directory: {}", cli.directory.display());
    println!("File mask: {}", cli.mask);
    println!("Regex patterns:");
    for pattern in &cli.patterns {
        println!("\t{}", pattern);
    }
    println!();
}
