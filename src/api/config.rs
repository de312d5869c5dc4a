use std::collections::{HashMap, HashSet};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Dimension;
use crate::error::{DashError, DashResult};
use crate::interaction::{ControlBinding, DEFAULT_QUIESCENCE};
use crate::render::SurfaceTarget;

use super::{ChartKind, ResponseOrdering};

pub const DASHBOARD_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// A chart placed on the page and the surface it draws into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPlacement {
    pub kind: ChartKind,
    pub surface: SurfaceTarget,
}

impl ChartPlacement {
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            surface: kind.default_surface(),
        }
    }

    #[must_use]
    pub fn with_surface(mut self, surface: SurfaceTarget) -> Self {
        self.surface = surface;
        self
    }
}

/// Filter controls that re-load one chart, debounced as a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterTopic {
    pub chart: ChartKind,
    pub controls: Vec<ControlBinding>,
}

impl FilterTopic {
    #[must_use]
    pub fn new(chart: ChartKind, location_control: &str, job_control: &str) -> Self {
        Self {
            chart,
            controls: vec![
                ControlBinding::new(Dimension::Location, location_control),
                ControlBinding::new(Dimension::Job, job_control),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub debounce_ms: u64,
    #[serde(default)]
    pub response_ordering: ResponseOrdering,
    pub charts: Vec<ChartPlacement>,
    #[serde(default)]
    pub topics: Vec<FilterTopic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct DashboardConfigJsonContractV1 {
    schema_version: u32,
    config: DashboardConfig,
}

impl Default for DashboardConfig {
    /// Salary, skills, trends and CPI charts with the standard filter controls.
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_QUIESCENCE.as_millis() as u64,
            response_ordering: ResponseOrdering::default(),
            charts: ChartKind::ALL.into_iter().map(ChartPlacement::new).collect(),
            topics: vec![
                FilterTopic::new(ChartKind::Salary, "locationFilter", "jobFilter"),
                FilterTopic::new(ChartKind::Trends, "trendsLocationFilter", "trendsJobFilter"),
                FilterTopic::new(ChartKind::Skills, "skillsLocationFilter", "skillsJobFilter"),
            ],
        }
    }
}

impl DashboardConfig {
    /// Config with no charts and no topics.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            debounce_ms: DEFAULT_QUIESCENCE.as_millis() as u64,
            response_ordering: ResponseOrdering::default(),
            charts: Vec::new(),
            topics: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_debounce(mut self, window: Duration) -> Self {
        self.debounce_ms = window.as_millis() as u64;
        self
    }

    #[must_use]
    pub fn with_response_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.response_ordering = ordering;
        self
    }

    #[must_use]
    pub fn with_chart(mut self, placement: ChartPlacement) -> Self {
        self.charts.push(placement);
        self
    }

    #[must_use]
    pub fn with_topic(mut self, topic: FilterTopic) -> Self {
        self.topics.push(topic);
        self
    }

    #[must_use]
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[must_use]
    pub fn placement(&self, kind: ChartKind) -> Option<&ChartPlacement> {
        self.charts.iter().find(|placement| placement.kind == kind)
    }

    /// Distinct control ids bound to `dimension` across all topics, in config order.
    #[must_use]
    pub fn control_ids(&self, dimension: Dimension) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.topics
            .iter()
            .flat_map(|topic| topic.controls.iter())
            .filter(|binding| binding.dimension == dimension)
            .map(|binding| binding.control_id.as_str())
            .filter(|id| seen.insert(*id))
            .collect()
    }

    pub fn validate(&self) -> DashResult<()> {
        let mut charts = HashSet::new();
        for placement in &self.charts {
            if !charts.insert(placement.kind) {
                return Err(DashError::InvalidConfig(format!(
                    "chart `{}` is placed more than once",
                    placement.kind
                )));
            }
            if placement.surface.ids().any(str::is_empty) {
                return Err(DashError::InvalidConfig(format!(
                    "chart `{}` has an empty surface id",
                    placement.kind
                )));
            }
        }

        let mut topics = HashSet::new();
        let mut control_dimensions: HashMap<&str, Dimension> = HashMap::new();
        for topic in &self.topics {
            if !charts.contains(&topic.chart) {
                return Err(DashError::InvalidConfig(format!(
                    "filter topic targets chart `{}` which is not placed",
                    topic.chart
                )));
            }
            if !topic.chart.is_filterable() {
                return Err(DashError::InvalidConfig(format!(
                    "chart `{}` does not accept filters",
                    topic.chart
                )));
            }
            if !topics.insert(topic.chart) {
                return Err(DashError::InvalidConfig(format!(
                    "chart `{}` has more than one filter topic",
                    topic.chart
                )));
            }
            for binding in &topic.controls {
                if binding.control_id.is_empty() {
                    return Err(DashError::InvalidConfig(format!(
                        "filter topic `{}` has an empty control id",
                        topic.chart
                    )));
                }
                let bound = control_dimensions
                    .entry(binding.control_id.as_str())
                    .or_insert(binding.dimension);
                if *bound != binding.dimension {
                    return Err(DashError::InvalidConfig(format!(
                        "control `{}` is bound to both `{}` and `{}`",
                        binding.control_id, bound, binding.dimension
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> DashResult<String> {
        let payload = DashboardConfigJsonContractV1 {
            schema_version: DASHBOARD_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload)
            .map_err(|e| DashError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Parses either a bare config or a versioned config payload, then validates it.
    ///
    /// Input with a top-level `schema_version` key is read as a versioned payload.
    pub fn from_json_str(input: &str) -> DashResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| DashError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        let config = if value.get("schema_version").is_some() {
            let payload: DashboardConfigJsonContractV1 = serde_json::from_value(value)
                .map_err(|e| {
                    DashError::InvalidConfig(format!("failed to parse config payload: {e}"))
                })?;
            if payload.schema_version != DASHBOARD_CONFIG_JSON_SCHEMA_V1 {
                return Err(DashError::InvalidConfig(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value(value)
                .map_err(|e| DashError::InvalidConfig(format!("failed to parse config: {e}")))?
        };
        config.validate()?;
        Ok(config)
    }
}
