//! Artist directory filtering
//!
//! The directory page recomputes its visible list from the full catalog and
//! the current [`DirectoryFilter`] on every selection change. Filtering is a
//! pure function: the catalog is never modified and the result keeps the
//! catalog's order.

use std::collections::BTreeSet;

use tracing::debug;

use crate::models::{Artist, CategoryId, FeeRange, Location};
use crate::{Result, Selection};

/// Current selections on the directory page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryFilter {
    /// Free-text search over name and bio (case-insensitive)
    pub query: String,
    /// Empty means no category restriction; otherwise any overlap matches
    pub categories: BTreeSet<CategoryId>,
    pub location: Selection<Location>,
    pub fee_range: Selection<FeeRange>,
}

impl DirectoryFilter {
    /// Seed a filter from the `?category=` link used by the home page cards
    pub fn from_category_param(param: Option<&str>) -> Result<Self> {
        let mut filter = Self::default();
        if let Some(raw) = param.filter(|raw| !raw.is_empty()) {
            filter.categories.insert(raw.parse()?);
        }
        Ok(filter)
    }

    /// Check or uncheck one category box
    pub fn toggle_category(&mut self, id: CategoryId, checked: bool) {
        if checked {
            self.categories.insert(id);
        } else {
            self.categories.remove(&id);
        }
    }

    /// Reset every selection ("Clear All Filters")
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Badge count on the mobile "Filters (n)" button
    ///
    /// Each checked category counts once; location and fee range count when
    /// they restrict. The text query is not counted.
    pub fn active_filter_count(&self) -> usize {
        self.categories.len()
            + usize::from(!self.location.is_all())
            + usize::from(!self.fee_range.is_all())
    }

    pub fn matches(&self, artist: &Artist) -> bool {
        self.matches_folded(artist, &self.query.to_lowercase())
    }

    /// `folded_query` is `self.query` lowercased
    fn matches_folded(&self, artist: &Artist, folded_query: &str) -> bool {
        (contains_folded(&artist.name, folded_query) || contains_folded(&artist.bio, folded_query))
            && self.matches_category(artist)
            && self.location.admits(|loc| artist.location == loc.label())
            && self.fee_range.admits(|fee| artist.fee_range == fee.label())
    }

    fn matches_category(&self, artist: &Artist) -> bool {
        self.categories.is_empty() || self.categories.iter().any(|id| artist.has_category(*id))
    }
}

/// Case-insensitive substring test; `folded_needle` must already be lowercase
pub(crate) fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    folded_needle.is_empty() || haystack.to_lowercase().contains(folded_needle)
}

/// Visible artists for a selection, in source order
pub fn filter_artists<'a, I>(artists: I, filter: &DirectoryFilter) -> Vec<&'a Artist>
where
    I: IntoIterator<Item = &'a Artist>,
{
    let folded_query = filter.query.to_lowercase();
    let visible: Vec<&Artist> = artists
        .into_iter()
        .filter(|a| filter.matches_folded(a, &folded_query))
        .collect();
    debug!(
        query = %filter.query,
        active_filters = filter.active_filter_count(),
        results = visible.len(),
        "Filtered artist directory"
    );
    visible
}

/// Result line above the grid, e.g. "3 artists found"
pub fn results_summary(count: usize) -> String {
    format!("{} artist{} found", count, if count == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn ids(artists: &[&Artist]) -> Vec<String> {
        artists.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn test_mixed_case_query_agrees_with_matches() {
        let artists = catalog::artists();
        let filter = DirectoryFilter {
            query: "BoLLyWood".to_string(),
            ..DirectoryFilter::default()
        };

        let visible = filter_artists(&artists, &filter);
        let expected: Vec<&Artist> = artists.iter().filter(|a| filter.matches(a)).collect();

        assert!(!visible.is_empty());
        assert_eq!(ids(&visible), ids(&expected));
    }

    #[test]
    fn test_default_filter_returns_everything() {
        let artists = catalog::artists();
        let visible = filter_artists(&artists, &DirectoryFilter::default());
        assert_eq!(visible.len(), artists.len());
    }

    #[test]
    fn test_query_is_case_insensitive_on_name_and_bio() {
        let artists = catalog::artists();

        let filter = DirectoryFilter {
            query: "PRIYA".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_artists(&artists, &filter)), vec!["1"]);

        // "carnatic" only appears in a bio
        let filter = DirectoryFilter {
            query: "carnatic".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_artists(&artists, &filter)), vec!["5"]);
    }

    #[test]
    fn test_category_selection_uses_or() {
        let artists = catalog::artists();
        let mut filter = DirectoryFilter::default();
        filter.toggle_category(CategoryId::Singers, true);
        filter.toggle_category(CategoryId::Dancers, true);

        // 8 is tagged only "dancers"
        assert_eq!(
            ids(&filter_artists(&artists, &filter)),
            vec!["1", "2", "5", "7", "8"]
        );
    }

    #[test]
    fn test_location_requires_exact_label() {
        let artists = catalog::artists();
        let filter = DirectoryFilter {
            location: Selection::Only(Location::Chennai),
            ..Default::default()
        };
        assert_eq!(ids(&filter_artists(&artists, &filter)), vec!["5"]);
    }

    #[test]
    fn test_fee_range_is_label_identity() {
        let artists = catalog::artists();
        let filter = DirectoryFilter {
            fee_range: Selection::Only(FeeRange::From15kTo30k),
            ..Default::default()
        };
        assert_eq!(ids(&filter_artists(&artists, &filter)), vec!["3", "6"]);

        // No artist carries the top bracket label
        let filter = DirectoryFilter {
            fee_range: Selection::Only(FeeRange::Above1Lakh),
            ..Default::default()
        };
        assert!(filter_artists(&artists, &filter).is_empty());
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let artists = catalog::artists();
        let filter = DirectoryFilter {
            query: "corporate".to_string(),
            categories: [CategoryId::Speakers].into_iter().collect(),
            location: Selection::Only(Location::Pune),
            fee_range: Selection::Only(FeeRange::From15kTo30k),
        };
        assert_eq!(ids(&filter_artists(&artists, &filter)), vec!["6"]);
    }

    #[test]
    fn test_active_filter_count() {
        let mut filter = DirectoryFilter {
            query: "ignored".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.active_filter_count(), 0);

        filter.toggle_category(CategoryId::Djs, true);
        filter.toggle_category(CategoryId::Speakers, true);
        filter.location = Selection::Only(Location::Delhi);
        assert_eq!(filter.active_filter_count(), 3);

        filter.toggle_category(CategoryId::Djs, false);
        assert_eq!(filter.active_filter_count(), 2);

        filter.clear();
        assert_eq!(filter, DirectoryFilter::default());
    }

    #[test]
    fn test_from_category_param() {
        let filter = DirectoryFilter::from_category_param(Some("djs")).unwrap();
        assert_eq!(filter.categories.len(), 1);
        assert!(filter.categories.contains(&CategoryId::Djs));

        assert_eq!(
            DirectoryFilter::from_category_param(None).unwrap(),
            DirectoryFilter::default()
        );
        assert!(DirectoryFilter::from_category_param(Some("jugglers")).is_err());
    }

    #[test]
    fn test_results_summary() {
        assert_eq!(results_summary(0), "0 artists found");
        assert_eq!(results_summary(1), "1 artist found");
        assert_eq!(results_summary(3), "3 artists found");
    }
}
