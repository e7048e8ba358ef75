//! Watch Organizer CLI
//!
//! A command-line tool for sorting a viewing-history export into movies and
//! series, and rendering it as a browsable report.

use clap::Parser;
use colored::Colorize;
use watch_organizer::cli::{
    args::{Cli, Commands},
    commands::{export, organize, stats},
};
use watch_organizer::models::config::{self, Config};

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config = config::load_config();

    match run(cli.command, &config) {
        Ok(()) => Ok(()),
        Err(e) if e.is_input_not_found() => {
            // Missing input is a clean stop, not a failure.
            eprintln!("{} {}.", "Error:".red().bold(), e);
            Ok(())
        }
        Err(e) => Err(anyhow::Error::new(e).context("watch-organizer failed")),
    }
}

/// Run the selected command, defaulting to `organize`.
fn run(command: Option<Commands>, config: &Config) -> watch_organizer::Result<()> {
    let command = command.unwrap_or(Commands::Organize {
        input: None,
        output: None,
    });

    match command {
        Commands::Organize { input, output } => {
            let input = input.unwrap_or_else(|| config.input.clone());
            let output = output.unwrap_or_else(|| config.output.clone());
            organize::organize(&input, &output, config)
        }

        Commands::Export {
            input,
            output,
            pretty,
        } => {
            let input = input.unwrap_or_else(|| config.input.clone());
            export::export(&input, output.as_deref(), pretty, config)
        }

        Commands::Stats { input, top } => {
            let input = input.unwrap_or_else(|| config.input.clone());
            stats::stats(&input, top, config)
        }
    }
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("watch_organizer=debug")
    } else {
        EnvFilter::new("watch_organizer=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
