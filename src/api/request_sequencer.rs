use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ChartKind;

/// How responses to overlapping loads of the same chart are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOrdering {
    /// Every response is rendered when it arrives; the last arrival wins.
    #[default]
    LastArrivalWins,
    /// Only the response to the most recently issued request is rendered.
    LatestIssuedOnly,
}

/// Per-chart monotonically increasing request tokens.
#[derive(Debug, Default)]
pub(crate) struct RequestSequencer {
    issued: RefCell<HashMap<ChartKind, u64>>,
}

impl RequestSequencer {
    pub(crate) fn issue(&self, kind: ChartKind) -> u64 {
        let mut issued = self.issued.borrow_mut();
        let token = issued.entry(kind).or_insert(0);
        *token += 1;
        *token
    }

    pub(crate) fn is_latest(&self, kind: ChartKind, token: u64) -> bool {
        self.issued.borrow().get(&kind).copied() == Some(token)
    }
}
