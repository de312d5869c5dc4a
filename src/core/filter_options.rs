use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Dimension, FilterOptionsResponse};

/// Selectable values per dimension, fetched once per page load.
///
/// Values stay in source order and are distinct. Empty strings are dropped
/// because they collide with the "All" sentinel option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptionSet {
    values: IndexMap<Dimension, Vec<String>>,
}

impl FilterOptionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the values of `dimension`, keeping the first occurrence of duplicates.
    pub fn set_values<I, S>(&mut self, dimension: Dimension, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut distinct = Vec::new();
        let mut dropped = 0_usize;
        for value in values {
            let value = value.into();
            if value.is_empty() || !seen.insert(value.clone()) {
                dropped += 1;
                continue;
            }
            distinct.push(value);
        }
        if dropped > 0 {
            debug!(%dimension, dropped, "dropped empty or duplicate filter options");
        }
        self.values.insert(dimension, distinct);
    }

    #[must_use]
    pub fn values(&self, dimension: Dimension) -> &[String] {
        self.values
            .get(&dimension)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.values().all(Vec::is_empty)
    }
}

impl From<FilterOptionsResponse> for FilterOptionSet {
    fn from(response: FilterOptionsResponse) -> Self {
        let mut set = Self::new();
        set.set_values(Dimension::Location, response.locations);
        set.set_values(Dimension::Job, response.jobs);
        set
    }
}
