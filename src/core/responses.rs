//! Per-endpoint response schemas.
//!
//! Every field is optional on the wire: a missing or `null` field decodes as
//! an empty sequence. Array elements may be `null` (missing cells in the
//! backing table). Single series drop them on decode; parallel arrays keep
//! them as `None` until `aligned_pairs` drops the whole pair. Anything else
//! that does not match the schema is a decode error.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::error::{DashError, DashResult};

use super::Endpoint;

/// `GET /api/salary` body: raw salary samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryResponse {
    #[serde(deserialize_with = "nulls_dropped")]
    pub salary: Vec<f64>,
}

/// `GET /api/skills` body: parallel skill/count arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsResponse {
    #[serde(deserialize_with = "null_as_empty")]
    pub skill: Vec<Option<String>>,
    #[serde(deserialize_with = "null_as_empty")]
    pub count: Vec<Option<f64>>,
}

/// `GET /api/trends` body: parallel date/postings arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendsResponse {
    #[serde(deserialize_with = "null_as_empty")]
    pub date: Vec<Option<String>>,
    #[serde(deserialize_with = "null_as_empty")]
    pub postings: Vec<Option<f64>>,
}

/// `GET /api/filters` body: the filter-option universe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptionsResponse {
    #[serde(deserialize_with = "nulls_dropped")]
    pub locations: Vec<String>,
    #[serde(deserialize_with = "nulls_dropped")]
    pub jobs: Vec<String>,
}

/// `GET /api/cpi_data` body: parallel date/index arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpiResponse {
    #[serde(deserialize_with = "null_as_empty")]
    pub dates: Vec<Option<String>>,
    #[serde(deserialize_with = "null_as_empty")]
    pub values: Vec<Option<f64>>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn nulls_dropped<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items: Vec<Option<T>> = null_as_empty(deserializer)?;
    Ok(items.into_iter().flatten().collect())
}

/// Decodes an already-parsed JSON body into the schema of `endpoint`.
pub fn decode_response<T>(endpoint: Endpoint, body: serde_json::Value) -> DashResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(body).map_err(|e| {
        DashError::InvalidData(format!(
            "response from `{endpoint}` does not match its schema: {e}"
        ))
    })
}

/// Zips parallel arrays into two series of complete points.
///
/// Arrays of different length are truncated to the shorter one with a
/// warning naming `series`. Pairs where either side is `None` are dropped.
#[must_use]
pub fn aligned_pairs<X: Clone, Y: Clone>(
    series: &str,
    xs: &[Option<X>],
    ys: &[Option<Y>],
) -> (Vec<X>, Vec<Y>) {
    if xs.len() != ys.len() {
        warn!(
            series,
            x_len = xs.len(),
            y_len = ys.len(),
            "parallel arrays differ in length; truncating"
        );
    }
    let (kept_x, kept_y): (Vec<X>, Vec<Y>) = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some((x.clone()?, y.clone()?)))
        .unzip();
    let incomplete = xs.len().min(ys.len()) - kept_x.len();
    if incomplete > 0 {
        debug!(series, incomplete, "dropping points with null coordinates");
    }
    (kept_x, kept_y)
}
