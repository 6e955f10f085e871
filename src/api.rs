use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::FetchError;
use crate::model::{Event, EventSource, FetchOutcome, FetchRequest};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Thin wrapper around reqwest for the meetup aggregation backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL a request is sent to, without the query string.
    pub fn endpoint(&self, request: &FetchRequest) -> String {
        let base = &self.base_url;
        match request {
            FetchRequest::ListAll => format!("{base}/events"),
            FetchRequest::GetById { id, source: EventSource::Meetup } => format!("{base}/meetup/{id}"),
            FetchRequest::GetById { id, source: EventSource::Luma } => format!("{base}/luma/{id}"),
            FetchRequest::GetByLocation(_) => format!("{base}/fetch"),
            FetchRequest::RefreshById(id) => format!("{base}/fetch/luma/{id}"),
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Event>, FetchError> {
        self.get_json(self.endpoint(&FetchRequest::ListAll), &[]).await
    }

    pub async fn get_by_id(&self, id: &str, source: EventSource) -> Result<Event, FetchError> {
        let request = FetchRequest::GetById { id: id.to_string(), source };
        self.get_json(self.endpoint(&request), &[]).await
    }

    pub async fn get_by_location(&self, location: &str) -> Result<Event, FetchError> {
        let request = FetchRequest::GetByLocation(location.to_string());
        self.get_json(self.endpoint(&request), &[("location", location)]).await
    }

    pub async fn refresh_by_id(&self, id: &str) -> Result<Event, FetchError> {
        let request = FetchRequest::RefreshById(id.to_string());
        self.get_json(self.endpoint(&request), &[]).await
    }

    /// Run a request and wrap the result as the matching completion.
    pub async fn execute(&self, request: FetchRequest) -> FetchOutcome {
        match request {
            FetchRequest::ListAll => FetchOutcome::Listed(self.list_all().await),
            FetchRequest::GetById { id, source } => {
                FetchOutcome::Detail(self.get_by_id(&id, source).await)
            }
            FetchRequest::GetByLocation(location) => {
                FetchOutcome::Located(self.get_by_location(&location).await)
            }
            FetchRequest::RefreshById(id) => FetchOutcome::Refreshed(self.refresh_by_id(&id).await),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| FetchError::Request { url: url.clone(), source })?;

        let status = response.status();
        debug!(%url, %status, "response");
        if !status.is_success() {
            return Err(FetchError::Status { url, status: status.as_u16() });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| FetchError::Decode { url, source })
    }
}
