use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use crate::core::{Endpoint, ParameterSet};
use crate::error::{DashError, DashResult};

use super::{DataSource, request_path};

/// `DataSource` backed by an async `reqwest` client.
///
/// Requests carry no timeout and are never retried; a hung request simply
/// never completes.
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    client: Client,
    origin: Url,
}

impl HttpDataSource {
    /// Creates a source that joins endpoint paths onto `origin`.
    pub fn new(origin: &str) -> DashResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| DashError::InvalidConfig(format!("http client init failed: {e}")))?;
        Self::with_client(client, origin)
    }

    pub fn with_client(client: Client, origin: &str) -> DashResult<Self> {
        let origin = Url::parse(origin)
            .map_err(|e| DashError::InvalidConfig(format!("invalid origin `{origin}`: {e}")))?;
        if origin.cannot_be_a_base() {
            return Err(DashError::InvalidConfig(format!(
                "origin `{origin}` cannot carry endpoint paths"
            )));
        }
        Ok(Self { client, origin })
    }

    #[must_use]
    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// Absolute URL a fetch of `endpoint` with `params` would hit.
    pub fn request_url(&self, endpoint: Endpoint, params: Option<&ParameterSet>) -> DashResult<Url> {
        let target = request_path(endpoint, params);
        self.origin.join(&target).map_err(|e| {
            DashError::InvalidConfig(format!("cannot join `{target}` onto `{}`: {e}", self.origin))
        })
    }
}

#[async_trait(?Send)]
impl DataSource for HttpDataSource {
    async fn fetch(&self, endpoint: Endpoint, params: Option<&ParameterSet>) -> DashResult<Value> {
        let url = self.request_url(endpoint, params)?;
        debug!(%url, "fetching chart data");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| DashError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| DashError::Network {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&body).map_err(|e| DashError::Parse {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
