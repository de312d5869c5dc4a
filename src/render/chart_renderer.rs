use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DashResult;
use crate::page::Page;

use super::{Figure, SurfaceTarget};

/// What a render or load cycle did to its surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderOutcome {
    /// The surface was empty and a fresh chart was created.
    Created,
    /// The surface already held a chart and was updated in place.
    UpdatedInPlace,
    /// Neither surface id exists on the page; nothing was drawn.
    MissingSurface,
    /// A newer request for the same chart was issued; the response was dropped.
    DiscardedStale,
}

/// Draws `figure` into the surface `target` resolves to.
///
/// A missing surface is a silent skip. An occupied surface is always updated
/// in place, an empty one is created fresh.
pub fn render_figure(
    page: &dyn Page,
    target: &SurfaceTarget,
    figure: &Figure,
) -> DashResult<RenderOutcome> {
    let Some(surface) = target.resolve(page) else {
        debug!(surface = %target.primary, "surface not on page; skipping render");
        return Ok(RenderOutcome::MissingSurface);
    };

    figure.validate()?;
    let mut surface = surface.borrow_mut();
    if surface.has_rendered_series() {
        surface.update_in_place(figure)?;
        debug!(surface = %target.primary, "updated chart in place");
        Ok(RenderOutcome::UpdatedInPlace)
    } else {
        surface.create(figure)?;
        debug!(surface = %target.primary, "created chart");
        Ok(RenderOutcome::Created)
    }
}

#[cfg(test)]
mod tests {
    use super::{RenderOutcome, render_figure};
    use crate::page::MemoryPage;
    use crate::render::{AxisValues, Figure, Layout, Margin, SurfaceTarget, Trace, TraceType};

    fn figure(samples: Vec<f64>) -> Figure {
        Figure::new(
            vec![Trace::new(TraceType::Histogram, AxisValues::Numbers(samples))],
            Layout::new("Salary Distribution", Margin::new(40, 40, 20, 40)),
        )
    }

    #[test]
    fn second_render_updates_in_place() {
        let mut page = MemoryPage::new();
        let surface = page.add_surface("chart-salary");
        let target = SurfaceTarget::new("chart-salary");

        let first = render_figure(&page, &target, &figure(vec![1.0])).expect("first render");
        let second = render_figure(&page, &target, &figure(vec![2.0])).expect("second render");

        assert_eq!(first, RenderOutcome::Created);
        assert_eq!(second, RenderOutcome::UpdatedInPlace);
        assert_eq!(surface.borrow().create_count(), 1);
        assert_eq!(surface.borrow().update_count(), 1);
    }

    #[test]
    fn missing_surface_is_silent_skip() {
        let page = MemoryPage::new();
        let target = SurfaceTarget::new("chart-salary").with_detail("salary-detail-chart");
        let outcome = render_figure(&page, &target, &figure(vec![1.0])).expect("no error");
        assert_eq!(outcome, RenderOutcome::MissingSurface);
    }
}
