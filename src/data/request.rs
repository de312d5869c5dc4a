use crate::core::{Endpoint, ParameterSet};

/// Builds the root-relative request target for `endpoint`.
///
/// A non-empty parameter set is appended as a query string; otherwise the
/// bare endpoint path is returned.
#[must_use]
pub fn request_path(endpoint: Endpoint, params: Option<&ParameterSet>) -> String {
    match params.filter(|params| !params.is_empty()) {
        Some(params) => format!("{}?{}", endpoint.path(), params.to_query_string()),
        None => endpoint.path().to_owned(),
    }
}
