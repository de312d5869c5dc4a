mod control;
mod debounce;
mod filter_binding;

pub use control::{
    ChangeHandler, HandlerId, MemorySelect, SelectControl, SelectOption, SharedControl,
};
pub use debounce::{DEFAULT_QUIESCENCE, Debouncer};
pub use filter_binding::{ControlBinding, FilterBinding, ParametersHandler, collect_parameters};
