use chart_dash::ChartKind;
use chart_dash::api::{salary_figure, skills_figure};
use chart_dash::core::{Endpoint, SalaryResponse, SkillsResponse};
use chart_dash::render::{AxisValues, TraceMode, TraceType};
use serde_json::json;

#[test]
fn salary_response_becomes_histogram_of_raw_samples() {
    let figure = ChartKind::Salary
        .build_figure(json!({ "salary": [100, 200, 200] }))
        .expect("salary figure");

    assert_eq!(figure.data.len(), 1);
    let trace = &figure.data[0];
    assert_eq!(trace.trace_type, TraceType::Histogram);
    assert_eq!(trace.x, AxisValues::Numbers(vec![100.0, 200.0, 200.0]));
    assert!(trace.y.is_none());
    assert_eq!(figure.layout.title, "Salary Distribution");
}

#[test]
fn salary_figure_serializes_as_plotly_figure() {
    let figure = salary_figure(&SalaryResponse {
        salary: vec![100.0],
    });
    let value = serde_json::to_value(&figure).expect("serialize");
    assert_eq!(
        value,
        json!({
            "data": [{
                "type": "histogram",
                "x": [100.0],
                "marker": { "color": "#4f46e5" },
                "hovertemplate": "Salary: $%{x}<br>Count: %{y} jobs<extra></extra>"
            }],
            "layout": {
                "title": "Salary Distribution",
                "xaxis": { "title": "Salary (USD)" },
                "yaxis": { "title": "Count" },
                "margin": { "t": 40, "l": 40, "r": 20, "b": 40 },
                "paper_bgcolor": "rgba(0,0,0,0)",
                "plot_bgcolor": "rgba(0,0,0,0)",
                "font": { "family": "Inter, sans-serif" }
            },
            "config": { "responsive": true }
        })
    );
}

#[test]
fn skills_figure_truncates_misaligned_arrays() {
    let figure = skills_figure(&SkillsResponse {
        skill: vec![Some("Rust".into()), Some("SQL".into()), Some("Go".into())],
        count: vec![Some(12.0), Some(7.0)],
    });
    let trace = &figure.data[0];
    assert_eq!(trace.trace_type, TraceType::Bar);
    assert_eq!(
        trace.x,
        AxisValues::Labels(vec!["Rust".into(), "SQL".into()])
    );
    assert_eq!(trace.y.as_deref(), Some(&[12.0, 7.0][..]));
    assert_eq!(figure.layout.margin.b, 120);
    figure.validate().expect("aligned figure");
}

#[test]
fn null_cells_are_skipped_instead_of_failing_the_chart() {
    let figure = ChartKind::Skills
        .build_figure(json!({ "skill": ["Rust", null, "Go"], "count": [3, 1, null] }))
        .expect("skills with null cells");
    let trace = &figure.data[0];
    assert_eq!(trace.x, AxisValues::Labels(vec!["Rust".into()]));
    assert_eq!(trace.y, Some(vec![3.0]));
    figure.validate().expect("aligned figure");

    let figure = ChartKind::Salary
        .build_figure(json!({ "salary": [90000, null, 120000] }))
        .expect("salary with null samples");
    assert_eq!(
        figure.data[0].x,
        AxisValues::Numbers(vec![90000.0, 120000.0])
    );
}

#[test]
fn trends_figure_draws_lines_and_markers() {
    let figure = ChartKind::Trends
        .build_figure(json!({ "date": ["2025-01-01", "2025-01-02"], "postings": [4, 9] }))
        .expect("trends figure");
    let trace = &figure.data[0];
    assert_eq!(trace.trace_type, TraceType::Scatter);
    assert_eq!(trace.mode, Some(TraceMode::LinesMarkers));
    assert_eq!(trace.line.as_ref().map(|line| line.width), Some(3.0));
    assert_eq!(trace.y, Some(vec![4.0, 9.0]));
}

#[test]
fn cpi_figure_uses_plain_layout() {
    let figure = ChartKind::Cpi
        .build_figure(json!({ "dates": ["2015-01-01"], "values": [100.0] }))
        .expect("cpi figure");
    assert!(figure.layout.paper_bgcolor.is_none());
    assert_eq!(figure.layout.title, "FAOSTAT — Food CPI (2015 = 100)");
    assert_eq!(
        figure.layout.yaxis.as_ref().map(|axis| axis.title.as_str()),
        Some("Index (2015 = 100)")
    );
}

#[test]
fn missing_fields_render_as_empty_series() {
    for kind in ChartKind::ALL {
        let figure = kind.build_figure(json!({})).expect("empty body decodes");
        assert_eq!(figure.data[0].point_count(), 0, "{kind}");
    }
}

#[test]
fn schema_mismatch_is_invalid_data() {
    let err = ChartKind::Skills
        .build_figure(json!({ "skill": [1, 2], "count": [1, 2] }))
        .expect_err("numeric skills must not decode");
    assert!(!err.is_fetch_failure());
    assert!(err.to_string().contains(Endpoint::Skills.path()));
}

#[test]
fn catalog_maps_charts_to_endpoints_and_surfaces() {
    assert_eq!(ChartKind::Salary.endpoint(), Endpoint::Salary);
    assert_eq!(ChartKind::Cpi.endpoint(), Endpoint::CpiData);
    assert!(!ChartKind::Cpi.is_filterable());
    assert!(!ChartKind::Cpi.is_critical());

    let surface = ChartKind::Trends.default_surface();
    assert_eq!(surface.primary, "chart-trends");
    assert_eq!(surface.detail.as_deref(), Some("trends-detail-chart"));
}
