//! Aggregator.
//!
//! Runs the full pipeline over loaded records and builds the [`History`]
//! consumed by the generators.

use crate::core::classifier::{Classification, Classifier};
use crate::core::grouper::RootGroups;
use crate::core::resolver::SeasonResolver;
use crate::models::config::Vocabulary;
use crate::models::history::History;
use crate::models::record::RawRecord;
use crate::Result;

/// Classify every record and aggregate watch dates.
///
/// Each record lands in exactly one place: under its movie title, or under
/// its (show, season, episode) path. Dates are appended in record order.
pub fn aggregate(records: &[RawRecord], vocabulary: &Vocabulary) -> Result<History> {
    let groups = RootGroups::build(records.iter().map(|r| r.title.as_str()));
    let classifier = Classifier::new(&groups, vocabulary);
    let resolver = SeasonResolver::new(vocabulary)?;

    tracing::info!(
        "Grouped {} records under {} roots ({} series roots)",
        records.len(),
        groups.len(),
        classifier.series_root_count()
    );

    let mut history = History::default();

    for record in records {
        match classifier.classify(&record.title) {
            Classification::Episode { show } => {
                let season = resolver.season_label(show, &record.title);
                history
                    .episode_mut(show, &season, &record.title)
                    .push(record.date.as_str());
            }
            Classification::Movie => {
                history.movie_mut(&record.title).push(record.date.as_str());
            }
        }
    }

    tracing::debug!(
        "Found {} movies and {} series",
        history.movies.len(),
        history.series.len()
    );

    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_record_lands_once() {
        let records = vec![
            RawRecord::new("Inception", "1/1/20"),
            RawRecord::new("Show: Season 1: Pilot", "2/2/20"),
            RawRecord::new("Show: Season 1: Pilot", "2/3/20"),
            RawRecord::new("Lone: Chapter 1", "2/4/20"),
        ];
        let history = aggregate(&records, &Vocabulary::default()).unwrap();
        assert_eq!(history.viewing_events(), records.len());
        assert_eq!(history.movies.len(), 1);
        assert_eq!(history.series.len(), 2);
    }
}
