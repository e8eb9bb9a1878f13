//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

/// Interactive dynamic integer stack.
///
/// Runs a push/pop/display menu over a contiguous integer buffer whose
/// capacity only grows when you approve it.
#[derive(Debug, Parser)]
#[command(name = "lifo", version, about)]
pub struct Args {
    /// Initial stack capacity; answers the startup prompt when given
    #[arg(short, long, env = "LIFO_CAPACITY")]
    pub capacity: Option<usize>,

    /// Path to a lifo.toml configuration file
    #[arg(long, env = "LIFO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Tracing filter for diagnostics on stderr (e.g. "debug")
    #[arg(long, env = "LIFO_LOG")]
    pub log_level: Option<String>,
}
