//! Login, signup, and logout against the remote auth endpoints.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiErrorKind};
use crate::session::SessionStore;

#[derive(Debug, Serialize)]
struct CredentialsBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenEnvelope {
    token: String,
}

/// Drives the authentication flow and hands issued tokens to the
/// [`SessionStore`].
pub struct AuthController {
    base_url: String,
    http: reqwest::Client,
    session: Arc<SessionStore>,
}

impl AuthController {
    pub fn new(base_url: impl Into<String>, session: Arc<SessionStore>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            session,
        }
    }

    /// Logs in and persists the issued token.
    ///
    /// Any failure — rejected credentials or transport — reports
    /// `AuthenticationFailed` and leaves the session store untouched.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let url = format!("{}/login", self.base_url);
        tracing::debug!(%url, username, "logging in");

        let response = self
            .http
            .post(&url)
            .json(&CredentialsBody { username, password })
            .send()
            .await
            .map_err(|e| {
                ApiError::new(
                    ApiErrorKind::AuthenticationFailed,
                    format!("login request failed: {e}"),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http_status(
                ApiErrorKind::AuthenticationFailed,
                status.as_u16(),
                &body,
            )
            .into());
        }

        let envelope: TokenEnvelope = response.json().await.map_err(|e| {
            ApiError::new(
                ApiErrorKind::AuthenticationFailed,
                format!("failed to decode login response: {e}"),
            )
        })?;

        if envelope.token.trim().is_empty() {
            return Err(ApiError::new(
                ApiErrorKind::AuthenticationFailed,
                "login response carried an empty token",
            )
            .into());
        }

        self.session
            .set(&envelope.token)
            .context("persist session credential")
    }

    /// Creates an account. Success does NOT authenticate the new account;
    /// signup and login are independent actions.
    pub async fn signup(&self, username: &str, password: &str) -> Result<()> {
        let url = format!("{}/signup", self.base_url);
        tracing::debug!(%url, username, "signing up");

        let response = self
            .http
            .post(&url)
            .json(&CredentialsBody { username, password })
            .send()
            .await
            .map_err(|e| {
                ApiError::new(
                    ApiErrorKind::SignupFailed,
                    format!("signup request failed: {e}"),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(
                ApiError::http_status(ApiErrorKind::SignupFailed, status.as_u16(), &body).into(),
            );
        }

        Ok(())
    }

    /// Discards the local credential. Local-only; no remote call is made
    /// and in-flight requests are not cancelled.
    pub fn logout(&self) -> Result<()> {
        self.session.clear()
    }
}
