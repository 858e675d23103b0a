//! Typed client for the remote content service.

use std::sync::Arc;

use serde::Deserialize;

use crate::error::{ApiError, ApiErrorKind, ApiResult};
use crate::posts::{Post, PostDraft};
use crate::session::SessionStore;

/// Envelope for list responses: `{"data": [Post]}`.
#[derive(Debug, Deserialize)]
struct ListEnvelope {
    data: Vec<Post>,
}

/// Envelope for single-item responses: `{"data": Post|null}`.
#[derive(Debug, Deserialize)]
struct ItemEnvelope {
    data: Option<Post>,
}

/// Authenticated CRUD wrapper over the remote posts API.
///
/// The credential is read from the shared [`SessionStore`] at call time,
/// not at construction time, so token rotation is honored. No retries
/// happen at this layer; every error propagates to the caller.
pub struct RemoteContentClient {
    base_url: String,
    http: reqwest::Client,
    session: Arc<SessionStore>,
}

impl RemoteContentClient {
    pub fn new(base_url: impl Into<String>, session: Arc<SessionStore>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            session,
        }
    }

    /// Returns the current credential, failing before any request is
    /// dispatched when none is present.
    fn credential(&self) -> ApiResult<String> {
        self.session.get().ok_or_else(ApiError::unauthenticated)
    }

    /// Fetches every post, in server-returned order.
    pub async fn list_all(&self) -> ApiResult<Vec<Post>> {
        let token = self.credential()?;
        let url = format!("{}/posts", self.base_url);
        tracing::debug!(%url, "listing posts");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http_status(
                ApiErrorKind::Server,
                status.as_u16(),
                &body,
            ));
        }

        let envelope: ListEnvelope = response.json().await.map_err(decode_error)?;
        Ok(envelope.data)
    }

    /// Fetches a single post. A remote not-found is `Ok(None)`, not an error.
    pub async fn get_by_id(&self, id: u64) -> ApiResult<Option<Post>> {
        let token = self.credential()?;
        let url = format!("{}/posts/{id}", self.base_url);
        tracing::debug!(%url, "fetching post");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http_status(
                ApiErrorKind::Server,
                status.as_u16(),
                &body,
            ));
        }

        let envelope: ItemEnvelope = response.json().await.map_err(decode_error)?;
        Ok(envelope.data)
    }

    /// Creates a post; the server assigns the id and returns the full record.
    pub async fn create(&self, draft: &PostDraft) -> ApiResult<Post> {
        let token = self.credential()?;
        let url = format!("{}/posts", self.base_url);
        tracing::debug!(%url, title = %draft.title, "creating post");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&token)
            .json(draft)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http_status(
                ApiErrorKind::Server,
                status.as_u16(),
                &body,
            ));
        }

        let envelope: ItemEnvelope = response.json().await.map_err(decode_error)?;
        envelope.data.ok_or_else(|| {
            ApiError::new(
                ApiErrorKind::Server,
                "create response carried no post record",
            )
        })
    }

    /// Replaces the full record for `id` on the remote.
    pub async fn update(&self, id: u64, post: &Post) -> ApiResult<()> {
        let token = self.credential()?;
        let url = format!("{}/posts/{id}", self.base_url);
        tracing::debug!(%url, "updating post");

        let response = self
            .http
            .put(&url)
            .bearer_auth(&token)
            .json(post)
            .send()
            .await
            .map_err(classify_transport_error)?;

        check_mutation_status(id, response).await
    }

    /// Deletes the record for `id` on the remote.
    pub async fn delete(&self, id: u64) -> ApiResult<()> {
        let token = self.credential()?;
        let url = format!("{}/posts/{id}", self.base_url);
        tracing::debug!(%url, "deleting post");

        let response = self
            .http
            .delete(&url)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(classify_transport_error)?;

        check_mutation_status(id, response).await
    }
}

/// Maps the status of an update/delete response: 404 means the id does not
/// exist on the remote, any other non-2xx is a server error.
async fn check_mutation_status(id: u64, response: reqwest::Response) -> ApiResult<()> {
    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ApiError::not_found(id));
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::http_status(
            ApiErrorKind::Server,
            status.as_u16(),
            &body,
        ));
    }
    Ok(())
}

/// Classifies a reqwest transport failure (no usable response arrived).
fn classify_transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::network(format!("request timed out: {e}"))
    } else if e.is_connect() {
        ApiError::network(format!("connection failed: {e}"))
    } else {
        ApiError::network(format!("transport error: {e}"))
    }
}

/// Maps a response-body decode failure.
fn decode_error(e: reqwest::Error) -> ApiError {
    ApiError::new(
        ApiErrorKind::Server,
        format!("failed to decode response: {e}"),
    )
}
