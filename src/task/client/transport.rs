//! Transport port used by the client controller, and its HTTP adapter.

use super::form::{GENERIC_FAILURE_MESSAGE, NETWORK_FAILURE_MESSAGE};
use crate::task::{
    api::TaskEnvelope,
    domain::Task,
    services::{CreateTaskRequest, UpdateTaskRequest},
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised when a request cannot reach the service or its response
/// cannot be read.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request failed before a usable response arrived.
    #[error("task service unreachable: {0}")]
    Network(#[from] reqwest::Error),
    /// A response arrived but its body is not a task envelope.
    #[error("unexpected response with status {status}: {source}")]
    UnexpectedResponse {
        /// HTTP status of the response.
        status: u16,
        /// Why the body could not be decoded.
        source: serde_json::Error,
    },
}

impl TransportError {
    /// Returns the notification text shown for this failure.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) => NETWORK_FAILURE_MESSAGE,
            Self::UnexpectedResponse { .. } => GENERIC_FAILURE_MESSAGE,
        }
    }
}

/// Result type for transport calls.
pub type TransportResult<T> = Result<T, TransportError>;

/// Client-side view of the task API.
///
/// Failure envelopes are returned as `Ok`; only transport failures are
/// errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskTransport: Send + Sync {
    /// Submits a create request.
    async fn create(&self, request: &CreateTaskRequest) -> TransportResult<TaskEnvelope<Task>>;

    /// Fetches every task.
    async fn list(&self) -> TransportResult<TaskEnvelope<Vec<Task>>>;

    /// Fetches a single task.
    async fn show(&self, id: &str) -> TransportResult<TaskEnvelope<Task>>;

    /// Submits an update request.
    async fn update(
        &self,
        id: &str,
        request: &UpdateTaskRequest,
    ) -> TransportResult<TaskEnvelope<Task>>;

    /// Deletes a task.
    async fn delete(&self, id: &str) -> TransportResult<TaskEnvelope<()>>;
}

/// `reqwest`-backed transport talking to the task routes.
#[derive(Debug, Clone)]
pub struct HttpTaskTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTaskTransport {
    /// Creates a transport for an API rooted at `base_url`, e.g.
    /// `http://localhost:3000/api`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a transport reusing an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/task/{path}", self.base_url)
    }
}

async fn read_envelope<T>(response: reqwest::Response) -> TransportResult<TaskEnvelope<T>>
where
    T: DeserializeOwned,
{
    let status = response.status().as_u16();
    let body = response.bytes().await?;
    serde_json::from_slice(&body)
        .map_err(|source| TransportError::UnexpectedResponse { status, source })
}

#[async_trait]
impl TaskTransport for HttpTaskTransport {
    async fn create(&self, request: &CreateTaskRequest) -> TransportResult<TaskEnvelope<Task>> {
        let response = self
            .client
            .post(self.url("create-task"))
            .json(request)
            .send()
            .await?;
        read_envelope(response).await
    }

    async fn list(&self) -> TransportResult<TaskEnvelope<Vec<Task>>> {
        let response = self.client.get(self.url("get-all-task")).send().await?;
        read_envelope(response).await
    }

    async fn show(&self, id: &str) -> TransportResult<TaskEnvelope<Task>> {
        let response = self
            .client
            .get(self.url(&format!("show-task/{id}")))
            .send()
            .await?;
        read_envelope(response).await
    }

    async fn update(
        &self,
        id: &str,
        request: &UpdateTaskRequest,
    ) -> TransportResult<TaskEnvelope<Task>> {
        let response = self
            .client
            .put(self.url(&format!("update-task/{id}")))
            .json(request)
            .send()
            .await?;
        read_envelope(response).await
    }

    async fn delete(&self, id: &str) -> TransportResult<TaskEnvelope<()>> {
        let response = self
            .client
            .delete(self.url(&format!("delete-task/{id}")))
            .send()
            .await?;
        read_envelope(response).await
    }
}
