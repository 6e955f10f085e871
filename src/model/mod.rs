// Re-export all model types from submodules so callers can use `crate::model::*`.

pub use app::{Action, Effect, InputFocus, SearchMode, SearchState, ViewState};
pub use event::{Event, EventSource};
pub use fetch::{FetchOutcome, FetchRequest};

mod app;
mod event;
mod fetch;
