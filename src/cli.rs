//! Command-line interface for rewind_tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Rewind Tic-Tac-Toe - terminal tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind_tictactoe")]
#[command(about = "Terminal tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start the move list in descending order (newest move first)
    #[arg(long)]
    pub descending: bool,

    /// Log file path (logs go to a file so they don't clobber the TUI)
    #[arg(long, default_value = "rewind_tictactoe.log")]
    pub log_file: PathBuf,
}
