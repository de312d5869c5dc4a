#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use chart_dash::DashResult;
use chart_dash::core::{Endpoint, ParameterSet};
use chart_dash::data::{DataSource, request_path};
use chart_dash::error::DashError;
use chart_dash::interaction::MemorySelect;
use chart_dash::page::MemoryPage;
use serde_json::Value;

#[derive(Debug, Clone)]
enum Reply {
    Json(Value),
    Fail(String),
}

#[derive(Debug, Clone)]
struct Scripted {
    delay: Duration,
    reply: Reply,
}

/// In-process data source with per-endpoint canned replies and optional delays.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    defaults: RefCell<HashMap<Endpoint, Scripted>>,
    queued: RefCell<HashMap<Endpoint, VecDeque<Scripted>>>,
    requests: RefCell<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Answers every request to `endpoint` with `body`.
    pub fn respond(&self, endpoint: Endpoint, body: Value) {
        self.defaults.borrow_mut().insert(
            endpoint,
            Scripted {
                delay: Duration::ZERO,
                reply: Reply::Json(body),
            },
        );
    }

    /// Fails every request to `endpoint` with a network error.
    pub fn fail(&self, endpoint: Endpoint, message: &str) {
        self.defaults.borrow_mut().insert(
            endpoint,
            Scripted {
                delay: Duration::ZERO,
                reply: Reply::Fail(message.to_owned()),
            },
        );
    }

    /// Answers the next request to `endpoint` with `body` after `delay`.
    pub fn queue(&self, endpoint: Endpoint, delay: Duration, body: Value) {
        self.queued
            .borrow_mut()
            .entry(endpoint)
            .or_default()
            .push_back(Scripted {
                delay,
                reply: Reply::Json(body),
            });
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self, endpoint: Endpoint) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|path| path.split('?').next() == Some(endpoint.path()))
            .count()
    }
}

#[async_trait(?Send)]
impl DataSource for ScriptedSource {
    async fn fetch(&self, endpoint: Endpoint, params: Option<&ParameterSet>) -> DashResult<Value> {
        let path = request_path(endpoint, params);
        self.requests.borrow_mut().push(path.clone());

        let scripted = self
            .queued
            .borrow_mut()
            .get_mut(&endpoint)
            .and_then(VecDeque::pop_front)
            .or_else(|| self.defaults.borrow().get(&endpoint).cloned());
        let Some(scripted) = scripted else {
            return Err(DashError::Network {
                url: path,
                message: "no scripted reply".to_owned(),
            });
        };

        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        match scripted.reply {
            Reply::Json(body) => Ok(body),
            Reply::Fail(message) => Err(DashError::Network { url: path, message }),
        }
    }
}

pub const LOCATION_CONTROLS: [&str; 3] =
    ["locationFilter", "trendsLocationFilter", "skillsLocationFilter"];
pub const JOB_CONTROLS: [&str; 3] = ["jobFilter", "trendsJobFilter", "skillsJobFilter"];

/// Dashboard page with all three filtered charts, the CPI chart and every filter control.
pub fn dashboard_page() -> MemoryPage {
    let mut page = MemoryPage::new();
    for id in ["chart-salary", "chart-skills", "chart-trends", "faostat-chart"] {
        page.add_surface(id);
    }
    add_filter_controls(&mut page);
    page
}

pub fn add_filter_controls(page: &mut MemoryPage) {
    for id in LOCATION_CONTROLS {
        page.add_select(
            id,
            MemorySelect::new("All Locations").with_options(["Remote", "NYC"]),
        );
    }
    for id in JOB_CONTROLS {
        page.add_select(id, MemorySelect::new("All Jobs").with_options(["Engineer"]));
    }
}
