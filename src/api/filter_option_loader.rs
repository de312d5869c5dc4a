use tracing::debug;

use crate::core::{Dimension, Endpoint, FilterOptionSet, FilterOptionsResponse, decode_response};
use crate::data::DataSource;
use crate::error::DashResult;
use crate::page::Page;

use super::DashboardConfig;

/// Fetches the filter-option universe and fans it out to every bound control.
///
/// Safe to call repeatedly: each control keeps its first option and gets
/// the rest replaced, so no duplicates accumulate.
pub async fn load_filter_options(
    source: &dyn DataSource,
    page: &dyn Page,
    config: &DashboardConfig,
) -> DashResult<FilterOptionSet> {
    let body = source.fetch(Endpoint::Filters, None).await?;
    let response: FilterOptionsResponse = decode_response(Endpoint::Filters, body)?;
    let options = FilterOptionSet::from(response);
    let populated = apply_filter_options(page, config, &options);
    debug!(populated, "filter options loaded");
    Ok(options)
}

/// Repopulates every control bound to each dimension. Returns how many
/// controls were found and updated.
pub fn apply_filter_options(
    page: &dyn Page,
    config: &DashboardConfig,
    options: &FilterOptionSet,
) -> usize {
    let mut populated = 0;
    for dimension in Dimension::ALL {
        let values = options.values(dimension);
        for id in config.control_ids(dimension) {
            let Some(control) = page.control(id) else {
                continue;
            };
            control.borrow_mut().replace_options_after_first(values);
            populated += 1;
        }
    }
    populated
}
