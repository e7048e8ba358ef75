//! Stats command implementation.

use crate::core::{aggregator, loader};
use crate::models::config::Config;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Print counts for the viewing history at `input`.
pub fn stats(input: &Path, top: usize, config: &Config) -> Result<()> {
    let report = loader::load_records(input)?;
    let history = aggregator::aggregate(&report.records, &config.vocabulary)?;

    println!("{}", "Viewing History Statistics".bold().cyan());
    println!("{}", "=".repeat(50));
    println!();

    println!(
        "  Rows:           {} ({} skipped)",
        report.total_rows(),
        report.skipped_rows
    );
    println!("  Viewings:       {}", history.viewing_events());
    println!("  Movies:         {}", history.movies.len());
    println!("  Series:         {}", history.series.len());
    println!("  Seasons:        {}", history.total_seasons());
    println!("  Episodes:       {}", history.total_episodes());
    println!();

    if top == 0 || history.series.is_empty() {
        return Ok(());
    }

    println!("{}", "Most Watched Series:".bold());
    let mut shows = history.sorted_shows();
    // Stable sort keeps names alphabetical within equal counts.
    shows.sort_by(|a, b| b.1.unique_episodes().cmp(&a.1.unique_episodes()));
    let width = shows
        .iter()
        .take(top)
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);

    for (name, show) in shows.iter().take(top) {
        println!(
            "  {:<width$}  {:>4} eps  {} seasons",
            name,
            show.unique_episodes(),
            show.seasons.len(),
            width = width
        );
    }
    println!();

    Ok(())
}
