use clap::Parser;

/// Guess the hidden word one letter at a time.
///
/// Set RUST_LOG=debug to trace each turn on stderr.
#[derive(Debug, Parser)]
#[command(name = "hangman", version, about)]
pub struct Args {}

pub fn parse() -> Args {
    Args::parse()
}
