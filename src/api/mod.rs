mod chart_catalog;
mod config;
mod dashboard;
mod filter_option_loader;
mod request_sequencer;

pub use chart_catalog::{ChartKind, cpi_figure, salary_figure, skills_figure, trends_figure};
pub use config::{ChartPlacement, DASHBOARD_CONFIG_JSON_SCHEMA_V1, DashboardConfig, FilterTopic};
pub use dashboard::Dashboard;
pub use filter_option_loader::{apply_filter_options, load_filter_options};
pub use request_sequencer::ResponseOrdering;
