//! Data fetching: one parameterized read per call, no retries.

mod http_source;
mod request;

pub use http_source::HttpDataSource;
pub use request::request_path;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::{Endpoint, ParameterSet};
use crate::error::DashResult;

/// Capability to read a JSON document from an endpoint.
///
/// Implementations issue exactly one read per call. A `None` or empty
/// parameter set means the endpoint is queried without a query string.
#[async_trait(?Send)]
pub trait DataSource {
    async fn fetch(&self, endpoint: Endpoint, params: Option<&ParameterSet>) -> DashResult<Value>;
}

#[async_trait(?Send)]
impl<T: DataSource + ?Sized> DataSource for std::rc::Rc<T> {
    async fn fetch(&self, endpoint: Endpoint, params: Option<&ParameterSet>) -> DashResult<Value> {
        (**self).fetch(endpoint, params).await
    }
}
