//! Root grouper.
//!
//! Buckets titles by their root, the text before the first colon. Roots
//! shared by several distinct titles are the first hint of a series.

use indexmap::{IndexMap, IndexSet};

/// Root of a title: the trimmed text before the first colon, or the whole
/// title when there is no colon.
pub fn root(title: &str) -> &str {
    match title.split_once(':') {
        Some((before, _)) => before.trim(),
        None => title,
    }
}

/// Distinct titles grouped by root, in first-seen order.
#[derive(Debug, Default)]
pub struct RootGroups<'a> {
    groups: IndexMap<&'a str, IndexSet<&'a str>>,
}

impl<'a> RootGroups<'a> {
    /// Group every title under its root.
    pub fn build<I>(titles: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut groups: IndexMap<&'a str, IndexSet<&'a str>> = IndexMap::new();
        for title in titles {
            groups.entry(root(title)).or_default().insert(title);
        }
        Self { groups }
    }

    /// Iterate roots with their distinct titles.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &IndexSet<&'a str>)> {
        self.groups.iter().map(|(root, titles)| (*root, titles))
    }

    /// Number of distinct roots.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
