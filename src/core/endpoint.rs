use std::fmt;

use serde::{Deserialize, Serialize};

/// JSON data sources the dashboard reads from.
///
/// Paths are root-relative and get joined onto the data source origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Salary,
    Skills,
    Trends,
    Filters,
    CpiData,
}

impl Endpoint {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Salary => "/api/salary",
            Self::Skills => "/api/skills",
            Self::Trends => "/api/trends",
            Self::Filters => "/api/filters",
            Self::CpiData => "/api/cpi_data",
        }
    }

    /// Whether the endpoint understands `location`/`job` query filters.
    #[must_use]
    pub fn accepts_filters(self) -> bool {
        matches!(self, Self::Salary | Self::Skills | Self::Trends)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
