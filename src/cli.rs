use clap::{Parser, Subcommand};
use genie::stream::Platform;

/// AI Live Genie (Rust)
#[derive(Debug, Parser)]
#[command(name = "genie")]
#[command(version)]
#[command(about = "AI Live Genie (Rust)", long_about = None)]
pub struct Args {
    /// Model name
    #[arg(short = 'm', long = "model")]
    pub model: Option<String>,

    #[command(subcommand)]
    pub cmd: Option<Command>,

    /// Prompt text (positional) (used when no subcommand is given)
    #[arg(value_name = "PROMPT")]
    pub prompt: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List supported streaming platforms
    Platforms,

    /// Publish a live stream to a platform until Ctrl-C
    Stream {
        /// Target platform
        #[arg(value_enum)]
        platform: Platform,

        /// Stream key or token for the publish session
        #[arg(long = "key", value_name = "KEY")]
        stream_key: Option<String>,
    },

    /// Run the interactive platform picker
    #[cfg(feature = "tui")]
    Tui,
}
