//! Command-line argument definitions for the Pinbox CLI.

use clap::Parser;

/// Command-line arguments for the Pinbox symbol renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output file; the extension selects the format
    #[arg(short, long, default_value = "symbol.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Page width, overriding the configuration
    #[arg(long)]
    pub width: Option<f32>,

    /// Page height, overriding the configuration
    #[arg(long)]
    pub height: Option<f32>,
}
