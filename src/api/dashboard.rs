use std::cell::RefCell;
use std::rc::Rc;

use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::core::{FilterOptionSet, ParameterSet};
use crate::data::DataSource;
use crate::error::{DashError, DashResult};
use crate::interaction::{FilterBinding, ParametersHandler};
use crate::page::Page;
use crate::render::{RenderOutcome, render_figure};

use super::filter_option_loader::load_filter_options;
use super::request_sequencer::RequestSequencer;
use super::{ChartKind, DashboardConfig, ResponseOrdering};

struct Shared<S> {
    source: S,
    page: Rc<dyn Page>,
    config: DashboardConfig,
    sequencer: RequestSequencer,
}

/// Filtered chart controller for one page.
///
/// All work runs as local tasks on the current thread: call `start` and the
/// load functions from inside a `tokio::task::LocalSet`. Each load is
/// independent, so one chart failing never stops another.
pub struct Dashboard<S: DataSource + 'static> {
    shared: Rc<Shared<S>>,
    bindings: RefCell<Vec<FilterBinding>>,
}

impl<S: DataSource + 'static> Dashboard<S> {
    pub fn new(source: S, page: Rc<dyn Page>, config: DashboardConfig) -> DashResult<Self> {
        config.validate()?;
        Ok(Self {
            shared: Rc::new(Shared {
                source,
                page,
                config,
                sequencer: RequestSequencer::default(),
            }),
            bindings: RefCell::new(Vec::new()),
        })
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.shared.config
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.shared.source
    }

    /// Page-load entry point.
    ///
    /// Spawns an unfiltered load for every chart whose surface is on the
    /// page, binds the filter controls, then spawns the filter option load.
    /// Returns the spawned load tasks; dropping them leaves the tasks running.
    pub fn start(&self) -> Vec<JoinHandle<()>> {
        let mut handles = Vec::new();
        for placement in &self.shared.config.charts {
            if placement.surface.resolve(&*self.shared.page).is_some() {
                handles.push(spawn_load(
                    &self.shared,
                    placement.kind,
                    ParameterSet::new(),
                ));
            }
        }
        let initial_loads = handles.len();

        self.attach_filter_bindings();

        let shared = Rc::clone(&self.shared);
        handles.push(tokio::task::spawn_local(async move {
            if let Err(err) =
                load_filter_options(&shared.source, &*shared.page, &shared.config).await
            {
                warn!(error = %err, "filter option load failed");
            }
        }));

        info!(
            initial_loads,
            topics = self.bindings.borrow().len(),
            "dashboard started"
        );
        handles
    }

    /// Binds every configured filter topic, replacing bindings from a previous call.
    ///
    /// Replaced bindings unregister their control handlers when dropped.
    pub fn attach_filter_bindings(&self) {
        let window = self.shared.config.debounce_window();
        let bindings = self
            .shared
            .config
            .topics
            .iter()
            .map(|topic| {
                let shared = Rc::clone(&self.shared);
                let kind = topic.chart;
                let on_parameters: ParametersHandler = Rc::new(move |params| {
                    spawn_load(&shared, kind, params);
                });
                FilterBinding::attach(
                    kind.name(),
                    &*self.shared.page,
                    &topic.controls,
                    window,
                    on_parameters,
                )
            })
            .collect();
        *self.bindings.borrow_mut() = bindings;
    }

    /// Number of attached filter topics.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.bindings.borrow().len()
    }

    /// Current parameter set of the topic bound to `kind`, if any.
    #[must_use]
    pub fn current_parameters(&self, kind: ChartKind) -> Option<ParameterSet> {
        self.bindings
            .borrow()
            .iter()
            .find(|binding| binding.topic() == kind.name())
            .map(FilterBinding::current_parameters)
    }

    /// Runs one fetch and render cycle for `kind`.
    ///
    /// Returns `MissingSurface` without fetching when the chart is not on the page.
    pub async fn load_chart(
        &self,
        kind: ChartKind,
        params: &ParameterSet,
    ) -> DashResult<RenderOutcome> {
        self.shared.load_chart(kind, params).await
    }

    /// Spawns a load cycle as its own local task; failures are logged.
    pub fn spawn_load(&self, kind: ChartKind, params: ParameterSet) -> JoinHandle<()> {
        spawn_load(&self.shared, kind, params)
    }

    pub async fn load_filters(&self) -> DashResult<FilterOptionSet> {
        load_filter_options(&self.shared.source, &*self.shared.page, &self.shared.config).await
    }
}

impl<S: DataSource> Shared<S> {
    async fn load_chart(
        &self,
        kind: ChartKind,
        params: &ParameterSet,
    ) -> DashResult<RenderOutcome> {
        let placement = self.config.placement(kind).ok_or_else(|| {
            DashError::InvalidConfig(format!("chart `{kind}` is not placed on this dashboard"))
        })?;
        if placement.surface.resolve(&*self.page).is_none() {
            debug!(chart = %kind, "chart surface not on page; skipping load");
            return Ok(RenderOutcome::MissingSurface);
        }

        let token = self.sequencer.issue(kind);
        let params = (kind.is_filterable() && !params.is_empty()).then_some(params);
        let body = self.source.fetch(kind.endpoint(), params).await?;

        if self.config.response_ordering == ResponseOrdering::LatestIssuedOnly
            && !self.sequencer.is_latest(kind, token)
        {
            debug!(chart = %kind, token, "newer request issued; dropping response");
            return Ok(RenderOutcome::DiscardedStale);
        }

        let figure = kind.build_figure(body)?;
        let outcome = render_figure(&*self.page, &placement.surface, &figure)?;
        debug!(chart = %kind, token, ?outcome, "chart load finished");
        Ok(outcome)
    }
}

fn spawn_load<S: DataSource + 'static>(
    shared: &Rc<Shared<S>>,
    kind: ChartKind,
    params: ParameterSet,
) -> JoinHandle<()> {
    let shared = Rc::clone(shared);
    tokio::task::spawn_local(async move {
        if let Err(err) = shared.load_chart(kind, &params).await {
            report_load_failure(kind, &err);
        }
    })
}

fn report_load_failure(kind: ChartKind, err: &DashError) {
    if kind.is_critical() {
        error!(chart = %kind, error = %err, "chart load failed");
    } else {
        warn!(chart = %kind, error = %err, "chart load failed");
    }
}
