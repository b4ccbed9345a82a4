//! Reference do-nothing bot: parses every frame, issues no commands.
//!
//! Stdout is the wire back to the engine, so it carries exactly two things:
//! the identification line at startup and one blank acknowledgment line per
//! turn. Diagnostics go to stderr via tracing.

// Allow print in the bot binary; stdout is the protocol channel
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::{self, BufReader, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hlt3::{Game, ProtocolError, TokenReader, TurnOutcome};

/// hlt3 - reference client for the Halite III protocol
#[derive(Parser, Debug)]
#[command(name = "hlt3")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bot name announced to the engine
    #[arg(short, long, default_value = "DoNothingBot")]
    name: String,

    /// Log filter directive for stderr diagnostics
    #[arg(long, default_value = "info")]
    log: String,
}

fn run(args: &Args) -> Result<(), ProtocolError> {
    let stdin = io::stdin();
    let mut reader = TokenReader::new(BufReader::new(stdin.lock()));

    let mut game = Game::pre_parse(&mut reader)?;

    // Identification line: tells the engine setup is done and we are ready.
    println!("{}", args.name);
    io::stdout().flush()?;

    loop {
        match game.parse(&mut reader)? {
            TurnOutcome::MatchOver => {
                tracing::info!(turn = game.turn(), "match over");
                return Ok(());
            }
            TurnOutcome::Parsed => {
                // No commands this turn; the blank line is the acknowledgment.
                println!();
                io::stdout().flush()?;
            }
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
