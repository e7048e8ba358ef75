//! Organize command implementation.
//!
//! Loads the viewing history, classifies it, and writes the HTML report.

use crate::core::{aggregator, loader};
use crate::generators::html;
use crate::models::config::Config;
use crate::models::history::History;
use crate::utils::fs::write_output;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Load and aggregate the history at `input`.
///
/// Shared by every command that reads a viewing history.
pub fn load_history(input: &Path, config: &Config) -> Result<History> {
    let report = loader::load_records(input)?;
    aggregator::aggregate(&report.records, &config.vocabulary)
}

/// Execute the organize command.
pub fn organize(input: &Path, output: &Path, config: &Config) -> Result<()> {
    println!("{}", "Reading viewing history...".bold().cyan());

    let history = load_history(input, config)?;

    println!(
        "Found {} movies and {} series.",
        history.movies.len().to_string().bold(),
        history.series.len().to_string().bold()
    );
    println!("Generating HTML...");

    let document = html::render_report(&history);
    write_output(output, &document)?;

    tracing::debug!("Wrote {} bytes to {}", document.len(), output.display());
    println!(
        "{} Open '{}' to see your list.",
        "Success!".green().bold(),
        output.display()
    );

    Ok(())
}
