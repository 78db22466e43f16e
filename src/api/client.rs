//! API client for communicating with the Hover REST API.
//!
//! `authenticate` guarantees a valid cached token (reusing an unexpired one
//! when possible), and `request` performs a single authenticated HTTP call
//! against the configured API root. Callers run `authenticate` first;
//! `request` never refreshes the token itself.

use anyhow::{Context, Result};
use reqwest::{header, Client, Method};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::auth::CachedToken;
use crate::config::Config;

use super::ApiError;

/// Authentication endpoint, relative to the API root
const AUTH_ENDPOINT: &str = "authenticate";

#[derive(Debug, Serialize)]
struct AuthRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Flat response body of the authenticate endpoint; extra fields ignored.
#[derive(Debug, Deserialize)]
struct AuthResponse {
    #[serde(default)]
    auth_token: String,
}

/// Hover API client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    /// Create a new API client with the transport's default timeouts.
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Ensure the config store holds a token valid for subsequent requests.
    ///
    /// Reuses the cached token when it is non-empty and unexpired; otherwise
    /// posts the stored credentials to the authenticate endpoint, caches the
    /// returned token with a fresh client-side expiry, and persists the
    /// config. Stored state is only mutated after a successful response, so
    /// transport failures leave the previous token intact. A persistence
    /// failure is returned to the caller even though the in-memory token has
    /// already been updated.
    pub async fn authenticate(&self, config: &mut Config) -> Result<()> {
        if let Some(token) = config.cached_token() {
            if token.is_valid() {
                debug!("Reusing cached auth token");
                return Ok(());
            }
        }

        let url = format!("{}{}", config.base_url(), AUTH_ENDPOINT);
        info!(url = %url, "Requesting new auth token");

        let response = self
            .client
            .post(&url)
            .json(&AuthRequest {
                email: config.email(),
                password: config.password(),
            })
            .send()
            .await
            .context("Failed to send authentication request")?;

        let response = Self::check_response(response).await?;

        let auth: AuthResponse = response
            .json()
            .await
            .context("Failed to parse authentication response")?;

        if auth.auth_token.is_empty() {
            return Err(
                ApiError::InvalidResponse("authenticate response missing auth_token".into()).into(),
            );
        }

        config.set_token(CachedToken::fresh(auth.auth_token));
        config.save()
    }

    /// Perform one HTTP call against `<base-url><endpoint>`.
    ///
    /// The cached token is attached verbatim as the `Authorization` header
    /// (the Hover API expects the raw token, no "Bearer " prefix). A single
    /// attempt is made; the raw response is returned without inspecting its
    /// status or body, which is the caller's job.
    pub async fn request(
        &self,
        config: &Config,
        method: Method,
        endpoint: &str,
        payload: Vec<u8>,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", config.base_url(), endpoint);
        let token = header::HeaderValue::from_str(config.auth_token())
            .context("Cached auth token is not a valid header value")?;

        debug!(method = %method, url = %url, "Sending API request");

        self.client
            .request(method.clone(), &url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, token)
            .body(payload)
            .send()
            .await
            .with_context(|| format!("Failed to send {} request to {}", method, url))
    }

    /// Check if a response is successful, returning an error with the body
    /// text if not.
    pub async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
