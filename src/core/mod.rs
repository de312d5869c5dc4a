pub mod dimension;
pub mod endpoint;
pub mod filter_options;
pub mod parameter_set;
pub mod responses;

pub use dimension::Dimension;
pub use endpoint::Endpoint;
pub use filter_options::FilterOptionSet;
pub use parameter_set::ParameterSet;
pub use responses::{
    CpiResponse, FilterOptionsResponse, SalaryResponse, SkillsResponse, TrendsResponse,
    aligned_pairs, decode_response,
};
