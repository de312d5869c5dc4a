//! Declarative chart specification handed to a surface.
//!
//! Field names follow the plotly.js figure schema so a host can forward the
//! serialized figure to the charting library unchanged.

use serde::{Deserialize, Serialize};

use crate::error::{DashError, DashResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceType {
    Histogram,
    Bar,
    Scatter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceMode {
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "markers")]
    Markers,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

/// Sample coordinates: numeric for value axes, text for category/date axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisValues {
    Numbers(Vec<f64>),
    Labels(Vec<String>),
}

impl AxisValues {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Numbers(values) => values.len(),
            Self::Labels(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
}

/// One series descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: TraceType,
    pub x: AxisValues,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<TraceMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

impl Trace {
    #[must_use]
    pub fn new(trace_type: TraceType, x: AxisValues) -> Self {
        Self {
            trace_type,
            x,
            y: None,
            mode: None,
            marker: None,
            line: None,
            hovertemplate: None,
        }
    }

    #[must_use]
    pub fn with_y(mut self, y: Vec<f64>) -> Self {
        self.y = Some(y);
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: TraceMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    #[must_use]
    pub fn with_line(mut self, color: impl Into<String>, width: f64) -> Self {
        self.line = Some(LineStyle {
            color: color.into(),
            width,
        });
        self
    }

    #[must_use]
    pub fn with_hovertemplate(mut self, template: impl Into<String>) -> Self {
        self.hovertemplate = Some(template.into());
        self
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.x.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub t: u32,
    pub l: u32,
    pub r: u32,
    pub b: u32,
}

impl Margin {
    #[must_use]
    pub fn new(t: u32, l: u32, r: u32, b: u32) -> Self {
        Self { t, l, r, b }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontLayout {
    pub family: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<AxisLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<AxisLayout>,
    pub margin: Margin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontLayout>,
}

impl Layout {
    #[must_use]
    pub fn new(title: impl Into<String>, margin: Margin) -> Self {
        Self {
            title: title.into(),
            xaxis: None,
            yaxis: None,
            margin,
            paper_bgcolor: None,
            plot_bgcolor: None,
            font: None,
        }
    }

    #[must_use]
    pub fn with_axis_titles(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.xaxis = Some(AxisLayout { title: x.into() });
        self.yaxis = Some(AxisLayout { title: y.into() });
        self
    }

    /// Paints both paper and plot area with `color`.
    #[must_use]
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        let color = color.into();
        self.paper_bgcolor = Some(color.clone());
        self.plot_bgcolor = Some(color);
        self
    }

    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font = Some(FontLayout {
            family: family.into(),
        });
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub responsive: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self { responsive: true }
    }
}

/// Complete draw request: series, layout and plot options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    #[serde(default)]
    pub config: PlotConfig,
}

impl Figure {
    #[must_use]
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self {
            data,
            layout,
            config: PlotConfig::default(),
        }
    }

    /// Checks that every trace with `y` values has as many `y` as `x` samples.
    pub fn validate(&self) -> DashResult<()> {
        for (index, trace) in self.data.iter().enumerate() {
            if let Some(y) = &trace.y {
                if y.len() != trace.x.len() {
                    return Err(DashError::InvalidData(format!(
                        "trace {index} has {} x samples but {} y samples",
                        trace.x.len(),
                        y.len()
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> DashResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DashError::InvalidData(format!("failed to serialize figure: {e}")))
    }

    pub fn from_json_str(input: &str) -> DashResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| DashError::InvalidData(format!("failed to parse figure json: {e}")))
    }
}
