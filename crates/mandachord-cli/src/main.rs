//! Mandachord - recover shared songs from a game log
//!
//! This binary scans a game log for songs posted to chat and prints each one
//! as tablature laid out like the in-game Mandachord editor.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use mandachord_cli::{commands, logging};

/// Mandachord - print songs shared in chat as tablature
#[derive(Parser)]
#[command(name = "mandachord")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the game log (e.g. EE.log)
    log: PathBuf,

    /// Log decoding details to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match commands::scan::run(&cli.log) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
