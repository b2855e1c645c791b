//! The record filter: free-text search combined with categorical dimensions.
//!
//! Filtering is a pure pass over the collection. Every active dimension must
//! match (logical AND) in addition to the search predicate; the sentinel
//! [`ALL`] leaves a dimension unconstrained. The predicate is total: unknown
//! dimension keys match everything rather than erroring.

/// Sentinel filter value meaning "no constraint on this dimension".
pub const ALL: &str = "all";

/// A record that can be searched and filtered.
pub trait Filterable {
    /// Text fields the free-text search runs over.
    fn search_fields(&self) -> Vec<&str>;

    /// Categorical value for a filter dimension, or `None` if the record
    /// has no such dimension.
    fn dimension(&self, key: &str) -> Option<&str>;
}

/// Selected values per filter dimension.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    selections: Vec<(String, String)>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: set a dimension to a value (or [`ALL`]).
    pub fn with(mut self, dimension: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(dimension, value);
        self
    }

    /// Set a dimension, replacing any earlier selection for it.
    pub fn set(&mut self, dimension: impl Into<String>, value: impl Into<String>) {
        let dimension = dimension.into();
        self.selections.retain(|(d, _)| *d != dimension);
        self.selections.push((dimension, value.into()));
    }

    pub fn selections(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selections.iter().map(|(d, v)| (d.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

/// Records matching the search term and every active dimension, in their
/// original relative order. The input is not mutated.
pub fn filter_records<'a, T: Filterable>(
    records: &'a [T],
    search_term: &str,
    filters: &FilterSet,
) -> Vec<&'a T> {
    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|r| matches_search(*r, &needle) && matches_filters(*r, filters))
        .collect()
}

/// How many records carry the given status value. Pure, O(n).
pub fn status_tally<T: Filterable>(records: &[T], status: &str) -> usize {
    records
        .iter()
        .filter(|r| r.dimension("status") == Some(status))
        .count()
}

fn matches_search<T: Filterable>(record: &T, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle_lower))
}

fn matches_filters<T: Filterable>(record: &T, filters: &FilterSet) -> bool {
    filters.selections().all(|(dimension, value)| {
        if value == ALL {
            return true;
        }
        match record.dimension(dimension) {
            Some(actual) => actual == value,
            // Unknown dimension keys are a no-op filter.
            None => true,
        }
    })
}
