//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "ambient")]
#[command(about = "Quiet generative ambience that starts on your first key press, click or scroll", long_about = None)]
pub struct Args {
    /// TOML file overriding the default sound
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (the UI owns the terminal)
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the ambience to a WAV file instead of playing it
    Bounce {
        /// Length of the render
        #[arg(long, value_name = "SECONDS", default_value = "30")]
        seconds: f32,

        /// Output WAV path
        #[arg(long, short, value_name = "FILE")]
        output: PathBuf,

        #[arg(long, value_name = "HZ", default_value = "48000")]
        sample_rate: u32,
    },
}
