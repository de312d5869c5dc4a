use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::DashResult;
use crate::page::Page;

use super::Figure;

/// Output target a chart library draws into.
///
/// A surface that already carries series data must only be redrawn through
/// `update_in_place`, so library-side state such as zoom and pan survives.
pub trait ChartSurface {
    /// Whether the surface currently holds rendered series data.
    fn has_rendered_series(&self) -> bool;

    /// Draws `figure` into an empty surface.
    fn create(&mut self, figure: &Figure) -> DashResult<()>;

    /// Replaces the drawn figure while keeping the existing chart instance.
    fn update_in_place(&mut self, figure: &Figure) -> DashResult<()>;
}

pub type SharedSurface = Rc<RefCell<dyn ChartSurface>>;

/// Stable identifiers a chart's surface is looked up by.
///
/// The primary id is the dashboard container; the detail id is the
/// container on the chart's own detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceTarget {
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl SurfaceTarget {
    #[must_use]
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Resolves the primary id first, then the detail id.
    pub fn resolve(&self, page: &dyn Page) -> Option<SharedSurface> {
        page.surface(&self.primary).or_else(|| {
            self.detail
                .as_deref()
                .and_then(|detail| page.surface(detail))
        })
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.detail.as_deref())
    }
}
