//! chart-dash: filtered chart controller for dashboard pages.
//!
//! Fetches JSON from a small set of data endpoints, turns each response into
//! a declarative figure and draws it into a named surface. Dropdown filters
//! re-fetch their chart after a debounce window. Pages, surfaces and controls
//! are capabilities, so everything runs headless in tests.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod page;
pub mod render;
pub mod telemetry;

pub use api::{ChartKind, Dashboard, DashboardConfig};
pub use error::{DashError, DashResult};
