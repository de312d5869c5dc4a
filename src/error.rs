use thiserror::Error;

pub type DashResult<T> = Result<T, DashError>;

#[derive(Debug, Error)]
pub enum DashError {
    #[error("request to `{url}` failed: {message}")]
    Network { url: String, message: String },

    #[error("request to `{url}` returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("response from `{url}` is not valid json: {message}")]
    Parse { url: String, message: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl DashError {
    /// Returns `true` for failures raised while talking to a data source.
    #[must_use]
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::HttpStatus { .. } | Self::Parse { .. }
        )
    }
}
