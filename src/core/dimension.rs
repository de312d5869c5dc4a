use std::fmt;

use serde::{Deserialize, Serialize};

/// Named axis a filter control narrows the data on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Location,
    Job,
}

impl Dimension {
    pub const ALL: [Self; 2] = [Self::Location, Self::Job];

    /// Query-string key sent to the data endpoints.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Job => "job",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
