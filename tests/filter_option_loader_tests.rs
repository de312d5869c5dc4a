mod common;

use chart_dash::DashboardConfig;
use chart_dash::api::{apply_filter_options, load_filter_options};
use chart_dash::core::{Dimension, Endpoint, FilterOptionSet};
use chart_dash::interaction::{MemorySelect, SelectControl};
use chart_dash::page::MemoryPage;
use common::{JOB_CONTROLS, LOCATION_CONTROLS, ScriptedSource, add_filter_controls};
use serde_json::json;

fn option_values(page: &MemoryPage, id: &str) -> Vec<String> {
    page.memory_select(id)
        .expect("control on page")
        .borrow()
        .options()
        .into_iter()
        .map(|option| option.value)
        .collect()
}

#[tokio::test]
async fn every_bound_control_gets_sentinel_plus_fetched_values() {
    let source = ScriptedSource::new();
    source.respond(
        Endpoint::Filters,
        json!({ "locations": ["Remote", "NYC"], "jobs": ["Engineer"] }),
    );
    let mut page = MemoryPage::new();
    for id in LOCATION_CONTROLS.into_iter().chain(JOB_CONTROLS) {
        page.add_select(id, MemorySelect::new("All"));
    }

    let options = load_filter_options(&*source, &page, &DashboardConfig::default())
        .await
        .expect("filters load");

    assert_eq!(options.values(Dimension::Location), ["Remote", "NYC"]);
    assert_eq!(source.requests(), ["/api/filters"]);
    for id in LOCATION_CONTROLS {
        assert_eq!(option_values(&page, id), ["", "Remote", "NYC"], "{id}");
    }
    for id in JOB_CONTROLS {
        assert_eq!(option_values(&page, id), ["", "Engineer"], "{id}");
    }
}

#[tokio::test]
async fn reloading_replaces_options_without_duplicates() {
    let source = ScriptedSource::new();
    source.respond(
        Endpoint::Filters,
        json!({ "locations": ["Remote", "NYC", "Remote"], "jobs": ["Engineer"] }),
    );
    let mut page = MemoryPage::new();
    add_filter_controls(&mut page);
    let config = DashboardConfig::default();

    for _ in 0..3 {
        load_filter_options(&*source, &page, &config)
            .await
            .expect("filters load");
    }

    let select = page.memory_select("locationFilter").expect("control");
    let options = select.borrow().options();
    assert_eq!(options.len(), 3);
    assert_eq!(options[0].label, "All Locations");
    assert_eq!(option_values(&page, "jobFilter"), ["", "Engineer"]);
}

#[test]
fn controls_absent_from_page_are_skipped() {
    let mut page = MemoryPage::new();
    page.add_select("jobFilter", MemorySelect::new("All Jobs"));

    let mut options = FilterOptionSet::new();
    options.set_values(Dimension::Location, ["Remote"]);
    options.set_values(Dimension::Job, ["Engineer", "Analyst"]);

    let populated = apply_filter_options(&page, &DashboardConfig::default(), &options);
    assert_eq!(populated, 1);
    assert_eq!(option_values(&page, "jobFilter"), ["", "Engineer", "Analyst"]);
}

#[tokio::test]
async fn failed_filter_fetch_leaves_controls_untouched() {
    let source = ScriptedSource::new();
    source.fail(Endpoint::Filters, "connection refused");
    let mut page = MemoryPage::new();
    add_filter_controls(&mut page);

    let err = load_filter_options(&*source, &page, &DashboardConfig::default())
        .await
        .expect_err("fetch fails");
    assert!(err.is_fetch_failure());
    assert_eq!(option_values(&page, "locationFilter"), ["", "Remote", "NYC"]);
}
