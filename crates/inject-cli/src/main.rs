//! Dotfile block injector CLI
//!
//! Keeps a managed block inside a target file in sync with a source file.

mod cli;
mod error;

use std::io::{self, Write};

use clap::Parser;
use colored::Colorize;
use inject_blocks::{InjectRequest, inject};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let request = InjectRequest::new(&cli.target, &cli.source, &cli.begin, &cli.end)?;
    let report = inject(&request)?;

    let stdout = io::stdout();
    echo_lines(&mut stdout.lock(), &report.lines)?;
    Ok(())
}

/// Log to stderr so stdout carries only the echoed file content.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(verbose)
        .with_writer(io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        tracing::debug!("Verbose mode enabled");
    }
}

fn echo_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
