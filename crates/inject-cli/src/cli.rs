//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Inject code into a file between a pair of delimiter lines.
///
/// The block framed by the begin and end lines in the target is replaced by
/// the contents of the source file. If the target has no such block yet, one
/// is appended. The target is backed up next to itself before it is written.
#[derive(Parser, Debug)]
#[command(name = "code-injector")]
#[command(author, version, about)]
pub struct Cli {
    /// The begin delimiter line
    #[arg(short, long)]
    pub begin: String,

    /// The end delimiter line
    #[arg(short, long)]
    pub end: String,

    /// The target file to be modified
    #[arg(short, long)]
    pub target: PathBuf,

    /// The source file containing replacement content
    #[arg(short, long)]
    pub source: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
