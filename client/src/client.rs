//! JSONPlaceholder API client implementation

use crate::{
    error::ApiError,
    model::{Post, PostId, PostPatch, Todo, TodoId, TodoPatch, User, UserId, UserPatch},
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default base URL of the remote service
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Fixed per-request timeout applied to every call
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// JSONPlaceholder API client
///
/// One `reqwest::Client` with a fixed 10-second per-request timeout. The
/// adapter performs no retries, no deduplication, and no cancellation; the
/// store's command runtime decides what to do with a failure.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the public JSONPlaceholder service
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the underlying HTTP client cannot be
    /// constructed (e.g. no TLS backend available).
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against an explicit base URL
    ///
    /// Used by tests to point the adapter at a mock server.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the underlying HTTP client cannot be
    /// constructed.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// The base URL requests are issued against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, path, "fetch failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn put<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .put(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, path, "update failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// List all users
    ///
    /// # Errors
    ///
    /// Returns an error for network failures, timeouts, non-2xx statuses,
    /// or a body that does not decode as a user list.
    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.get("/users").await
    }

    /// Fetch a single user
    ///
    /// # Errors
    ///
    /// Returns an error for network failures, timeouts, non-2xx statuses,
    /// or a body that does not decode as a user.
    pub async fn user(&self, id: UserId) -> Result<User, ApiError> {
        self.get(&format!("/users/{id}")).await
    }

    /// Update a user; the response is the server's partial echo
    ///
    /// # Errors
    ///
    /// Returns an error for network failures, timeouts, non-2xx statuses,
    /// or an echo that does not decode.
    pub async fn update_user(&self, id: UserId, patch: &UserPatch) -> Result<UserPatch, ApiError> {
        self.put(&format!("/users/{id}"), patch).await
    }

    /// List the posts authored by one user
    ///
    /// # Errors
    ///
    /// Returns an error for network failures, timeouts, non-2xx statuses,
    /// or a body that does not decode as a post list.
    pub async fn user_posts(&self, user_id: UserId) -> Result<Vec<Post>, ApiError> {
        self.get(&format!("/posts?userId={user_id}")).await
    }

    /// Update a post; the response is the server's partial echo
    ///
    /// # Errors
    ///
    /// Returns an error for network failures, timeouts, non-2xx statuses,
    /// or an echo that does not decode.
    pub async fn update_post(&self, id: PostId, patch: &PostPatch) -> Result<PostPatch, ApiError> {
        self.put(&format!("/posts/{id}"), patch).await
    }

    /// Delete a post; the server answers with an empty body
    ///
    /// # Errors
    ///
    /// Returns an error for network failures, timeouts, or non-2xx statuses.
    pub async fn delete_post(&self, id: PostId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/posts/{id}", self.base_url))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, id, "delete failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        Ok(())
    }

    /// List all todos
    ///
    /// # Errors
    ///
    /// Returns an error for network failures, timeouts, non-2xx statuses,
    /// or a body that does not decode as a todo list.
    pub async fn todos(&self) -> Result<Vec<Todo>, ApiError> {
        self.get("/todos").await
    }

    /// Update a todo; the response is the server's partial echo
    ///
    /// # Errors
    ///
    /// Returns an error for network failures, timeouts, non-2xx statuses,
    /// or an echo that does not decode.
    pub async fn update_todo(&self, id: TodoId, patch: &TodoPatch) -> Result<TodoPatch, ApiError> {
        self.put(&format!("/todos/{id}"), patch).await
    }
}
