use crate::error::{DashError, DashResult};
use crate::render::{ChartSurface, Figure};

/// Headless surface used by tests and non-browser hosts.
///
/// It keeps the last drawn figure and counts create/update calls, and it
/// enforces the create-once contract: creating over an occupied surface or
/// updating an empty one is an error.
#[derive(Debug, Default)]
pub struct MemorySurface {
    id: String,
    figure: Option<Figure>,
    create_count: usize,
    update_count: usize,
}

impl MemorySurface {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }

    #[must_use]
    pub fn create_count(&self) -> usize {
        self.create_count
    }

    #[must_use]
    pub fn update_count(&self) -> usize {
        self.update_count
    }

    #[must_use]
    pub fn render_count(&self) -> usize {
        self.create_count + self.update_count
    }
}

impl ChartSurface for MemorySurface {
    fn has_rendered_series(&self) -> bool {
        self.figure
            .as_ref()
            .is_some_and(|figure| !figure.data.is_empty())
    }

    fn create(&mut self, figure: &Figure) -> DashResult<()> {
        if self.has_rendered_series() {
            return Err(DashError::InvalidData(format!(
                "surface `{}` already holds a chart",
                self.id
            )));
        }
        figure.validate()?;
        self.figure = Some(figure.clone());
        self.create_count += 1;
        Ok(())
    }

    fn update_in_place(&mut self, figure: &Figure) -> DashResult<()> {
        if !self.has_rendered_series() {
            return Err(DashError::InvalidData(format!(
                "surface `{}` has no chart to update",
                self.id
            )));
        }
        figure.validate()?;
        self.figure = Some(figure.clone());
        self.update_count += 1;
        Ok(())
    }
}
