//! JSON export of the aggregated history.
//!
//! Carries the same data the HTML report is built from, in the order the
//! report displays it.

use crate::core::resolver::episode_display;
use crate::models::history::History;
use crate::Result;
use serde::Serialize;

/// Exported document.
#[derive(Debug, Serialize)]
pub struct HistoryExport<'a> {
    pub movies: Vec<MovieEntry<'a>>,
    pub series: Vec<ShowEntry<'a>>,
}

/// One movie with its viewings.
#[derive(Debug, Serialize)]
pub struct MovieEntry<'a> {
    pub title: &'a str,
    pub dates: Vec<&'a str>,
    /// Most recent watch as a Unix timestamp, zero if no date parsed.
    pub last_watched: i64,
}

/// One show with its seasons.
#[derive(Debug, Serialize)]
pub struct ShowEntry<'a> {
    pub name: &'a str,
    pub last_watched: i64,
    pub unique_episodes: usize,
    pub seasons: Vec<SeasonEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct SeasonEntry<'a> {
    pub label: &'a str,
    pub episodes: Vec<EpisodeEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct EpisodeEntry<'a> {
    pub title: &'a str,
    pub display: String,
    pub dates: Vec<&'a str>,
}

impl<'a> HistoryExport<'a> {
    /// Build the export view of `history`.
    pub fn from_history(history: &'a History) -> Self {
        let movies = history
            .sorted_movies()
            .into_iter()
            .map(|(title, dates)| MovieEntry {
                title,
                dates: dates.iter().collect(),
                last_watched: dates.latest_timestamp(),
            })
            .collect();

        let series = history
            .sorted_shows()
            .into_iter()
            .map(|(name, show)| ShowEntry {
                name,
                last_watched: show.latest_timestamp(),
                unique_episodes: show.unique_episodes(),
                seasons: show
                    .sorted_seasons()
                    .into_iter()
                    .map(|(label, season)| SeasonEntry {
                        label,
                        episodes: season
                            .episodes
                            .iter()
                            .map(|(title, dates)| EpisodeEntry {
                                title,
                                display: episode_display(name, label, title),
                                dates: dates.iter().collect(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self { movies, series }
    }
}

/// Serialize `history` to JSON.
pub fn render_json(history: &History, pretty: bool) -> Result<String> {
    let export = HistoryExport::from_history(history);
    let json = if pretty {
        serde_json::to_string_pretty(&export)?
    } else {
        serde_json::to_string(&export)?
    };
    Ok(json)
}
