//! Aggregated viewing history.
//!
//! Movies map straight to their watch dates. Series nest three levels deep:
//! show -> season -> episode -> watch dates. Every level keeps insertion
//! order and is created on first access.

use crate::core::dates;
use crate::core::resolver::season_sort_key;
use indexmap::IndexMap;
use serde::Serialize;

/// Every recorded viewing of one movie or episode, in source row order.
///
/// Repeat viewings on the same day are kept as separate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WatchDates(Vec<String>);

impl WatchDates {
    /// Record one viewing.
    pub fn push(&mut self, date: impl Into<String>) {
        self.0.push(date.into());
    }

    /// Number of viewings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw date strings.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Dates joined for display.
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }

    /// Most recent parsed timestamp, zero if none parse.
    pub fn latest_timestamp(&self) -> i64 {
        dates::latest_timestamp(self.iter())
    }
}

impl From<Vec<String>> for WatchDates {
    fn from(dates: Vec<String>) -> Self {
        Self(dates)
    }
}

/// Episodes of one season, keyed by full title.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Season {
    pub episodes: IndexMap<String, WatchDates>,
}

impl Season {
    /// Dates for `title`, creating the episode on first use.
    pub fn episode_mut(&mut self, title: &str) -> &mut WatchDates {
        self.episodes.entry(title.to_string()).or_default()
    }

    /// Number of distinct episodes.
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}

/// One series, keyed by season label.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Show {
    pub seasons: IndexMap<String, Season>,
}

impl Show {
    /// Season for `label`, creating it on first use.
    pub fn season_mut(&mut self, label: &str) -> &mut Season {
        self.seasons.entry(label.to_string()).or_default()
    }

    /// Distinct episodes across all seasons.
    pub fn unique_episodes(&self) -> usize {
        self.seasons.values().map(Season::len).sum()
    }

    /// Most recent watch across every episode of the show.
    pub fn latest_timestamp(&self) -> i64 {
        dates::latest_timestamp(
            self.seasons
                .values()
                .flat_map(|s| s.episodes.values())
                .flat_map(WatchDates::iter),
        )
    }

    /// Seasons in display order: numbered seasons ascending, then the rest.
    pub fn sorted_seasons(&self) -> Vec<(&str, &Season)> {
        let mut seasons: Vec<_> = self
            .seasons
            .iter()
            .map(|(label, season)| (label.as_str(), season))
            .collect();
        seasons.sort_by(|(a, _), (b, _)| season_sort_key(a).cmp(&season_sort_key(b)));
        seasons
    }
}

/// The full aggregate handed to the renderers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct History {
    /// Movie title -> watch dates.
    pub movies: IndexMap<String, WatchDates>,
    /// Show name -> seasons.
    pub series: IndexMap<String, Show>,
}

impl History {
    /// Dates for a movie, creating it on first use.
    pub fn movie_mut(&mut self, title: &str) -> &mut WatchDates {
        self.movies.entry(title.to_string()).or_default()
    }

    /// Show for `name`, creating it on first use.
    pub fn show_mut(&mut self, name: &str) -> &mut Show {
        self.series.entry(name.to_string()).or_default()
    }

    /// Dates for one episode, creating every missing level.
    pub fn episode_mut(&mut self, show: &str, season: &str, title: &str) -> &mut WatchDates {
        self.show_mut(show).season_mut(season).episode_mut(title)
    }

    /// Movies sorted by title.
    pub fn sorted_movies(&self) -> Vec<(&str, &WatchDates)> {
        let mut movies: Vec<_> = self
            .movies
            .iter()
            .map(|(title, dates)| (title.as_str(), dates))
            .collect();
        movies.sort_by(|(a, _), (b, _)| a.cmp(b));
        movies
    }

    /// Shows sorted by name.
    pub fn sorted_shows(&self) -> Vec<(&str, &Show)> {
        let mut shows: Vec<_> = self
            .series
            .iter()
            .map(|(name, show)| (name.as_str(), show))
            .collect();
        shows.sort_by(|(a, _), (b, _)| a.cmp(b));
        shows
    }

    /// Number of distinct episodes across all shows.
    pub fn total_episodes(&self) -> usize {
        self.series.values().map(Show::unique_episodes).sum()
    }

    /// Number of seasons across all shows.
    pub fn total_seasons(&self) -> usize {
        self.series.values().map(|s| s.seasons.len()).sum()
    }

    /// Every viewing event recorded, movies and episodes alike.
    pub fn viewing_events(&self) -> usize {
        let movie_events: usize = self.movies.values().map(WatchDates::len).sum();
        let episode_events: usize = self
            .series
            .values()
            .flat_map(|s| s.seasons.values())
            .flat_map(|s| s.episodes.values())
            .map(WatchDates::len)
            .sum();
        movie_events + episode_events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_levels() {
        let mut history = History::default();
        history.episode_mut("Show", "Season 1", "Show: Season 1: Pilot").push("1/1/20");
        history.episode_mut("Show", "Season 1", "Show: Season 1: Pilot").push("1/2/20");
        history.episode_mut("Show", "Season 2", "Show: Season 2: Return").push("2/1/20");

        let show = &history.series["Show"];
        assert_eq!(show.seasons.len(), 2);
        assert_eq!(show.unique_episodes(), 2);
        assert_eq!(history.viewing_events(), 3);
        assert_eq!(show.latest_timestamp(), dates::latest_timestamp(["2/1/20"]));
    }

    #[test]
    fn test_sorted_seasons() {
        let mut show = Show::default();
        for label in ["Other", "Season 10", "Limited Series", "Season 2"] {
            show.season_mut(label);
        }
        let labels: Vec<_> = show.sorted_seasons().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, ["Season 2", "Season 10", "Limited Series", "Other"]);
    }

    #[test]
    fn test_joined_dates() {
        let dates = WatchDates::from(vec!["1/2/23".to_string(), "1/2/23".to_string()]);
        assert_eq!(dates.joined(), "1/2/23, 1/2/23");
        assert_eq!(dates.len(), 2);
    }
}
