//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default input file name.
pub const DEFAULT_INPUT: &str = "NetflixViewingHistory.csv";

/// Default report file name.
pub const DEFAULT_OUTPUT: &str = "Netflix_History_Organized.html";

/// Substrings that mark a title as episodic.
pub const EPISODIC_KEYWORDS: &[&str] = &[
    "Season",
    "Chapter",
    "Volume",
    "Part",
    "Limited Series",
    "Series",
];

/// Words that start a numbered season label (`"Season 2"`, `"Part 1"`, ...).
pub const SEASON_PREFIXES: &[&str] = &["Season", "Part", "Volume", "Series", "Chapter"];

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Viewing-history CSV to read.
    pub input: PathBuf,
    /// Report file to write.
    pub output: PathBuf,
    /// Keyword tables used by the classifier and resolver.
    pub vocabulary: Vocabulary,
}

/// Fixed vocabulary for series detection and season labelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Case-sensitive substrings marking a title as part of a series.
    pub episodic_keywords: Vec<String>,
    /// Words that, followed by a number, form a season label.
    pub season_prefixes: Vec<String>,
    /// Label used when a title mentions a limited series.
    pub limited_series: String,
    /// Label for episodes no pattern matched.
    pub fallback_season: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            vocabulary: Vocabulary::default(),
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            episodic_keywords: EPISODIC_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            season_prefixes: SEASON_PREFIXES.iter().map(|k| k.to_string()).collect(),
            limited_series: "Limited Series".to_string(),
            fallback_season: "Other".to_string(),
        }
    }
}

impl Vocabulary {
    /// Whether `title` contains any episodic keyword.
    pub fn has_episodic_keyword(&self, title: &str) -> bool {
        self.episodic_keywords
            .iter()
            .any(|k| !k.is_empty() && title.contains(k.as_str()))
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("watch_organizer")
}

/// Path of the optional configuration file.
pub fn config_file_path() -> PathBuf {
    dirs_config_path().join("config.toml")
}

/// Load configuration from file.
pub fn load_config() -> Config {
    let config_path = config_file_path();

    if config_path.exists() {
        if let Ok(content) = std::fs::read_to_string(&config_path) {
            match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("Ignoring {}: {}", config_path.display(), e),
            }
        }
    }

    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_is_case_sensitive() {
        let vocab = Vocabulary::default();
        assert!(vocab.has_episodic_keyword("Dark: Season 1"));
        assert!(vocab.has_episodic_keyword("Unsolved Mysteries: Volume 2"));
        assert!(!vocab.has_episodic_keyword("dark: season 1"));
        assert!(!vocab.has_episodic_keyword("Inception"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str(r#"output = "report.html""#).unwrap();
        assert_eq!(config.output, PathBuf::from("report.html"));
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.vocabulary, Vocabulary::default());
    }

    #[test]
    fn test_custom_vocabulary() {
        let config: Config = toml::from_str(
            r#"
            [vocabulary]
            episodic_keywords = ["Staffel"]
            season_prefixes = ["Staffel"]
            "#,
        )
        .unwrap();
        assert!(config.vocabulary.has_episodic_keyword("Dark: Staffel 1"));
        assert!(!config.vocabulary.has_episodic_keyword("Dark: Season 1"));
        assert_eq!(config.vocabulary.fallback_season, "Other");
    }
}
