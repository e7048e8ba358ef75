//! Series classifier.
//!
//! A root is a series when several distinct titles share it, or when its
//! only title contains an episodic keyword. Records are then classified
//! one by one: a record is an episode if its root is a series root, or if
//! its own title contains a keyword.
//!
//! Keyword matching is a case-sensitive, unanchored substring test, so a
//! movie with "Part" or "Series" anywhere in its title is treated as
//! episodic. That false positive is accepted.

use crate::core::grouper::{root, RootGroups};
use crate::models::config::Vocabulary;
use indexmap::IndexSet;

/// Outcome of classifying one title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    Movie,
    Episode {
        /// Show the episode belongs to.
        show: &'a str,
    },
}

impl Classification<'_> {
    pub fn is_episode(&self) -> bool {
        matches!(self, Classification::Episode { .. })
    }
}

/// Classifies titles against a precomputed set of series roots.
#[derive(Debug)]
pub struct Classifier<'a> {
    series_roots: IndexSet<&'a str>,
    vocabulary: &'a Vocabulary,
}

impl<'a> Classifier<'a> {
    /// Decide which roots are series.
    pub fn new(groups: &RootGroups<'a>, vocabulary: &'a Vocabulary) -> Self {
        let series_roots: IndexSet<&'a str> = groups
            .iter()
            .filter(|(_, titles)| {
                titles.len() > 1 || titles.iter().any(|t| vocabulary.has_episodic_keyword(t))
            })
            .map(|(root, _)| root)
            .collect();

        tracing::debug!(
            "{} of {} roots classified as series",
            series_roots.len(),
            groups.len()
        );

        Self {
            series_roots,
            vocabulary,
        }
    }

    /// Number of roots flagged as series.
    pub fn series_root_count(&self) -> usize {
        self.series_roots.len()
    }

    /// Classify a single title.
    pub fn classify<'t>(&self, title: &'t str) -> Classification<'t> {
        let root = root(title);

        if self.series_roots.contains(root) {
            return Classification::Episode { show: root };
        }

        // A lone special such as "Show: Chapter 1" still counts.
        if self.vocabulary.has_episodic_keyword(title) {
            let show = match title.split_once(':') {
                Some((before, _)) => before.trim(),
                None => title,
            };
            return Classification::Episode { show };
        }

        Classification::Movie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_all<'a>(titles: &[&'a str], vocab: &Vocabulary) -> Vec<Classification<'a>> {
        let groups = RootGroups::build(titles.iter().copied());
        let classifier = Classifier::new(&groups, vocab);
        titles.iter().map(|t| classifier.classify(t)).collect()
    }

    #[test]
    fn test_shared_root_is_series() {
        let vocab = Vocabulary::default();
        let groups = RootGroups::build(["X: Season 1", "X: Season 2"]);
        let classifier = Classifier::new(&groups, &vocab);
        assert_eq!(classifier.series_root_count(), 1);
        assert_eq!(
            classifier.classify("X: Season 2"),
            Classification::Episode { show: "X" }
        );
    }

    #[test]
    fn test_single_title_with_keyword_is_series() {
        let vocab = Vocabulary::default();
        let groups = RootGroups::build(["Y: Chapter 1"]);
        let classifier = Classifier::new(&groups, &vocab);
        assert_eq!(classifier.series_root_count(), 1);
        assert!(classifier.classify("Y: Chapter 1").is_episode());
    }

    #[test]
    fn test_plain_movie() {
        let vocab = Vocabulary::default();
        let result = classify_all(&["Plain Movie"], &vocab);
        assert_eq!(result, vec![Classification::Movie]);
    }

    #[test]
    fn test_keyword_without_colon_names_itself() {
        let vocab = Vocabulary::default();
        let result = classify_all(&["Limited Series Special"], &vocab);
        assert_eq!(
            result,
            vec![Classification::Episode {
                show: "Limited Series Special"
            }]
        );
    }

    #[test]
    fn test_incidental_keyword_is_episodic() {
        let vocab = Vocabulary::default();
        let result = classify_all(&["Jurassic Park: Part of History"], &vocab);
        assert!(result[0].is_episode());
    }

    #[test]
    fn test_keyword_is_case_sensitive() {
        let vocab = Vocabulary::default();
        let result = classify_all(&["The season of the witch"], &vocab);
        assert_eq!(result, vec![Classification::Movie]);
    }

    #[test]
    fn test_keyword_on_unflagged_root() {
        let vocab = Vocabulary::default();
        let groups = RootGroups::build(["Movie"]);
        let classifier = Classifier::new(&groups, &vocab);
        assert_eq!(
            classifier.classify("Other Show : Season 3"),
            Classification::Episode { show: "Other Show" }
        );
    }
}
