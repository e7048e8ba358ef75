//! Export command implementation.

use super::organize::load_history;
use crate::generators::json;
use crate::models::config::Config;
use crate::utils::fs::write_output;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Execute the export command.
///
/// Writes to `output` when given, otherwise prints the JSON to stdout.
pub fn export(input: &Path, output: Option<&Path>, pretty: bool, config: &Config) -> Result<()> {
    let history = load_history(input, config)?;
    let document = json::render_json(&history, pretty)?;

    match output {
        Some(path) => {
            write_output(path, &document)?;
            eprintln!(
                "{} Exported {} movies and {} series to {}",
                "✓".green(),
                history.movies.len(),
                history.series.len(),
                path.display()
            );
        }
        None => println!("{}", document),
    }

    Ok(())
}
