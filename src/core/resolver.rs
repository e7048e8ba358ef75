//! Season and episode resolver.
//!
//! Given a show name and a full title, works out which season the episode
//! belongs to and what text to show for it. Resolution never fails: text
//! that matches no pattern lands in the fallback season.

use crate::models::config::Vocabulary;
use crate::utils::text::{title_case, trim_separators};
use crate::{Error, Result};
use regex::Regex;

/// Sort key for labels without a number; sorts after every real season.
const UNNUMBERED: u64 = u64::MAX;

/// Shortest episode text worth displaying instead of the full title.
const MIN_DISPLAY_CHARS: usize = 2;

/// Resolves season labels using a compiled vocabulary.
#[derive(Debug, Clone)]
pub struct SeasonResolver {
    numbered: Option<Regex>,
    limited_series: String,
    fallback: String,
}

impl SeasonResolver {
    /// Compile the season pattern from `vocabulary`.
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let prefixes: Vec<String> = vocabulary
            .season_prefixes
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| regex::escape(p))
            .collect();

        let numbered = if prefixes.is_empty() {
            None
        } else {
            // ASCII digits only, so every label number is one the sort key can read.
            let pattern = format!(r"(?i)^((?:{})\s+[0-9]+)", prefixes.join("|"));
            let re = Regex::new(&pattern)
                .map_err(|e| Error::other(format!("Invalid season pattern: {}", e)))?;
            Some(re)
        };

        Ok(Self {
            numbered,
            limited_series: vocabulary.limited_series.clone(),
            fallback: vocabulary.fallback_season.clone(),
        })
    }

    /// Season label for `title` within `show`.
    pub fn season_label(&self, show: &str, title: &str) -> String {
        let remainder = match title.strip_prefix(show) {
            Some(rest) => rest,
            None => title,
        };
        let remainder = trim_separators(remainder);

        if let Some(caps) = self.numbered.as_ref().and_then(|re| re.captures(remainder)) {
            return title_case(&caps[1]);
        }

        if !self.limited_series.is_empty() && remainder.contains(self.limited_series.as_str()) {
            return self.limited_series.clone();
        }

        self.fallback.clone()
    }
}

/// Display text for an episode.
///
/// Strips the show name and season label from the title. When that leaves
/// fewer than two characters the full title is shown instead.
pub fn episode_display(show: &str, season: &str, title: &str) -> String {
    let mut display = match title.strip_prefix(show) {
        Some(rest) => trim_separators(rest).to_string(),
        None => title.to_string(),
    };

    if !season.is_empty() && display.contains(season) {
        display = trim_separators(&display.replace(season, "")).to_string();
    }

    if display.chars().count() < MIN_DISPLAY_CHARS {
        return title.to_string();
    }

    display
}

/// Sort key for a season label.
///
/// Orders by the first number in the label; labels without one sort last.
/// The label itself breaks ties.
pub fn season_sort_key(label: &str) -> (u64, &str) {
    let digits: String = label
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    let number = if digits.is_empty() {
        UNNUMBERED
    } else {
        digits.parse().unwrap_or(UNNUMBERED - 1)
    };

    (number, label)
}
