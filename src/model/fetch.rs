use crate::error::FetchError;

use super::{Event, EventSource};

/// One call against the remote event API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchRequest {
    ListAll,
    GetById { id: String, source: EventSource },
    GetByLocation(String),
    RefreshById(String),
}

impl FetchRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchRequest::ListAll => "list-all",
            FetchRequest::GetById { .. } => "get-by-id",
            FetchRequest::GetByLocation(_) => "get-by-location",
            FetchRequest::RefreshById(_) => "refresh-by-id",
        }
    }
}

/// Completion of a [`FetchRequest`], delivered back to the input loop.
#[derive(Debug)]
pub enum FetchOutcome {
    Listed(Result<Vec<Event>, FetchError>),
    Detail(Result<Event, FetchError>),
    Located(Result<Event, FetchError>),
    Refreshed(Result<Event, FetchError>),
}

impl FetchOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchOutcome::Listed(_) => "list-all",
            FetchOutcome::Detail(_) => "get-by-id",
            FetchOutcome::Located(_) => "get-by-location",
            FetchOutcome::Refreshed(_) => "refresh-by-id",
        }
    }
}
