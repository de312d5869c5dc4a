//! Charts the dashboard knows how to load, and how each one is drawn.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{
    CpiResponse, Endpoint, SalaryResponse, SkillsResponse, TrendsResponse, aligned_pairs,
    decode_response,
};
use crate::error::DashResult;
use crate::render::{
    AxisValues, Figure, Layout, Margin, Marker, SurfaceTarget, Trace, TraceMode, TraceType,
};

const SALARY_COLOR: &str = "#4f46e5";
const SKILLS_COLOR: &str = "#10b981";
const TRENDS_COLOR: &str = "#f97316";
const CPI_COLOR: &str = "#007bff";
const TRANSPARENT: &str = "rgba(0,0,0,0)";
const DASHBOARD_FONT: &str = "Inter, sans-serif";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Salary,
    Skills,
    Trends,
    Cpi,
}

impl ChartKind {
    pub const ALL: [Self; 4] = [Self::Salary, Self::Skills, Self::Trends, Self::Cpi];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::Skills => "skills",
            Self::Trends => "trends",
            Self::Cpi => "cpi",
        }
    }

    #[must_use]
    pub fn endpoint(self) -> Endpoint {
        match self {
            Self::Salary => Endpoint::Salary,
            Self::Skills => Endpoint::Skills,
            Self::Trends => Endpoint::Trends,
            Self::Cpi => Endpoint::CpiData,
        }
    }

    #[must_use]
    pub fn is_filterable(self) -> bool {
        self.endpoint().accepts_filters()
    }

    /// Critical charts log load failures as errors; the rest only warn.
    #[must_use]
    pub fn is_critical(self) -> bool {
        !matches!(self, Self::Cpi)
    }

    #[must_use]
    pub fn default_surface(self) -> SurfaceTarget {
        match self {
            Self::Salary => SurfaceTarget::new("chart-salary").with_detail("salary-detail-chart"),
            Self::Skills => SurfaceTarget::new("chart-skills").with_detail("skills-detail-chart"),
            Self::Trends => SurfaceTarget::new("chart-trends").with_detail("trends-detail-chart"),
            Self::Cpi => SurfaceTarget::new("faostat-chart"),
        }
    }

    /// Decodes `body` with this chart's response schema and assembles its figure.
    pub fn build_figure(self, body: Value) -> DashResult<Figure> {
        let endpoint = self.endpoint();
        Ok(match self {
            Self::Salary => salary_figure(&decode_response(endpoint, body)?),
            Self::Skills => skills_figure(&decode_response(endpoint, body)?),
            Self::Trends => trends_figure(&decode_response(endpoint, body)?),
            Self::Cpi => cpi_figure(&decode_response(endpoint, body)?),
        })
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn dashboard_layout(title: &str, x_title: &str, y_title: &str, margin: Margin) -> Layout {
    Layout::new(title, margin)
        .with_axis_titles(x_title, y_title)
        .with_background(TRANSPARENT)
        .with_font_family(DASHBOARD_FONT)
}

#[must_use]
pub fn salary_figure(response: &SalaryResponse) -> Figure {
    let trace = Trace::new(
        TraceType::Histogram,
        AxisValues::Numbers(response.salary.clone()),
    )
    .with_marker(Marker {
        color: Some(SALARY_COLOR.to_owned()),
        size: None,
    })
    .with_hovertemplate("Salary: $%{x}<br>Count: %{y} jobs<extra></extra>");

    Figure::new(
        vec![trace],
        dashboard_layout(
            "Salary Distribution",
            "Salary (USD)",
            "Count",
            Margin::new(40, 40, 20, 40),
        ),
    )
}

#[must_use]
pub fn skills_figure(response: &SkillsResponse) -> Figure {
    let (skills, counts) = aligned_pairs("skills", &response.skill, &response.count);
    let trace = Trace::new(TraceType::Bar, AxisValues::Labels(skills))
        .with_y(counts)
        .with_marker(Marker {
            color: Some(SKILLS_COLOR.to_owned()),
            size: None,
        })
        .with_hovertemplate("Skill: %{x}<br>Count: %{y}<extra></extra>");

    // long skill names need the extra bottom margin
    Figure::new(
        vec![trace],
        dashboard_layout("Top Skills", "Skill", "Count", Margin::new(40, 40, 20, 120)),
    )
}

#[must_use]
pub fn trends_figure(response: &TrendsResponse) -> Figure {
    let (dates, postings) = aligned_pairs("trends", &response.date, &response.postings);
    let trace = Trace::new(TraceType::Scatter, AxisValues::Labels(dates))
        .with_y(postings)
        .with_mode(TraceMode::LinesMarkers)
        .with_line(TRENDS_COLOR, 3.0)
        .with_marker(Marker {
            color: None,
            size: Some(6.0),
        })
        .with_hovertemplate("Date: %{x}<br>Postings: %{y}<extra></extra>");

    Figure::new(
        vec![trace],
        dashboard_layout(
            "Job Posting Trends",
            "Date",
            "Count",
            Margin::new(40, 40, 20, 40),
        ),
    )
}

#[must_use]
pub fn cpi_figure(response: &CpiResponse) -> Figure {
    let (dates, values) = aligned_pairs("cpi", &response.dates, &response.values);
    let trace = Trace::new(TraceType::Scatter, AxisValues::Labels(dates))
        .with_y(values)
        .with_mode(TraceMode::LinesMarkers)
        .with_marker(Marker {
            color: Some(CPI_COLOR.to_owned()),
            size: None,
        });

    Figure::new(
        vec![trace],
        Layout::new("FAOSTAT — Food CPI (2015 = 100)", Margin::new(50, 60, 30, 50))
            .with_axis_titles("Date", "Index (2015 = 100)"),
    )
}
