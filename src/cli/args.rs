use clap::Parser;
use std::path::PathBuf;

/// Clue deduction assistant.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// JSON card catalog ({"suspects": [..], "weapons": [..], "rooms": [..]}),
    /// defaults to the classic board
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// session file: resumed when it exists, rewritten after every move
    #[arg(long)]
    pub transcript: Option<PathBuf>,
}
