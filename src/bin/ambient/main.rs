//! ambient - quiet generative ambience in the terminal
//!
//! Run with: cargo run --bin ambient
//! Bounce to disk: cargo run --bin ambient -- bounce --seconds 60 --output ambient.wav

mod app;
mod cli;
mod ui;

use std::fs::File;

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};

use ambient_drone::{io::bounce, SynthConfig};
use cli::{Args, Command};

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(&args)?;

    let config = match &args.config {
        Some(path) => SynthConfig::load(path)
            .wrap_err_with(|| format!("failed to load config {}", path.display()))?,
        None => SynthConfig::default(),
    };

    match args.command {
        Some(Command::Bounce {
            seconds,
            output,
            sample_rate,
        }) => {
            let frames = bounce(&config, sample_rate, seconds, &output)
                .wrap_err_with(|| format!("failed to bounce to {}", output.display()))?;
            println!("Wrote {} frames ({:.1}s) to {}", frames, seconds, output.display());
            Ok(())
        }
        None => app::run(config),
    }
}

/// Log to `--log-file` if given. Without one the TUI owns the terminal, so
/// logging stays off unless we are bouncing.
fn init_logging(args: &Args) -> EyreResult<()> {
    let env = env_logger::Env::default().default_filter_or("info");
    match (&args.log_file, &args.command) {
        (Some(path), _) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
            env_logger::Builder::from_env(env)
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        (None, Some(_)) => env_logger::Builder::from_env(env).init(),
        (None, None) => {}
    }
    Ok(())
}
