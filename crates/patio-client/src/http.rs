//! HTTP plumbing shared by the auth and vehicle endpoints.

use std::sync::RwLock;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Client for the parking service REST API.
///
/// Holds the base URL and the bearer token attached to authenticated
/// requests. The token slot is interior-mutable so the session layer can
/// rotate it while vehicle calls share the same client.
pub struct ApiClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    auth_token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
            auth_token: RwLock::new(None),
        }
    }

    /// Update the bearer token at runtime (login, restore, logout).
    pub fn set_auth_token(&self, token: Option<String>) {
        let token = token
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        *self.auth_token.write().expect("auth token lock poisoned") = token;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_header(&self) -> Option<String> {
        self.auth_token
            .read()
            .expect("auth token lock poisoned")
            .as_deref()
            .map(|token| format!("Bearer {}", token))
    }

    /// Attach the stored bearer token, if any.
    pub(crate) fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match self.auth_header() {
            Some(value) => request.header(reqwest::header::AUTHORIZATION, value),
            None => request,
        }
    }

    /// Decode a success body, mapping failures into the error taxonomy.
    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.status().is_success() {
            return Err(Self::service_failure(response).await);
        }
        response
            .json()
            .await
            .map_err(|err| ApiError::Unexpected(err.to_string()))
    }

    /// Failure mapping for the auth endpoints: any rejection is an auth
    /// error, with the server's detail passed through verbatim.
    pub(crate) async fn auth_failure(response: Response) -> ApiError {
        let (_, detail) = Self::status_and_detail(response).await;
        ApiError::Auth(detail.unwrap_or_else(|| "invalid credentials or expired session".to_string()))
    }

    /// Failure mapping for everything else: 401/403 mean the session went
    /// stale, anything else is unexpected.
    pub(crate) async fn service_failure(response: Response) -> ApiError {
        let (status, detail) = Self::status_and_detail(response).await;
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Auth(
                detail.unwrap_or_else(|| "session rejected by the server".to_string()),
            ),
            _ => ApiError::Unexpected(detail.unwrap_or_else(|| status.to_string())),
        }
    }

    async fn status_and_detail(response: Response) -> (StatusCode, Option<String>) {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| {
                value
                    .get("mensagem")
                    .or_else(|| value.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            });
        (status, detail)
    }
}
