//! Authentication collaborator.

use async_trait::async_trait;
use serde_json::Value;

use patio_core::models::{Credentials, LoginResponse, RegisterRequest, RegisterResponse, UserProfile};

use crate::error::ApiError;
use crate::http::ApiClient;

/// Remote authentication operations.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a bearer token.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// Create an account. Does not log the user in.
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError>;

    /// Fetch the profile the token belongs to.
    async fn who_am_i(&self, token: &str) -> Result<UserProfile, ApiError>;
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/auth/login", self.base_url);
        let response = self.client.post(&url).json(credentials).send().await?;

        if !response.status().is_success() {
            return Err(Self::auth_failure(response).await);
        }

        response
            .json()
            .await
            .map_err(|err| ApiError::Unexpected(err.to_string()))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let url = format!("{}/auth/register", self.base_url);
        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(Self::auth_failure(response).await);
        }

        response
            .json()
            .await
            .map_err(|err| ApiError::Unexpected(err.to_string()))
    }

    async fn who_am_i(&self, token: &str) -> Result<UserProfile, ApiError> {
        let url = format!("{}/auth/me", self.base_url);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::auth_failure(response).await);
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| ApiError::Unexpected(err.to_string()))?;

        // The backend sometimes wraps the profile in a one-element array.
        let profile = match payload {
            Value::Array(mut entries) if !entries.is_empty() => entries.remove(0),
            Value::Array(_) => {
                return Err(ApiError::Unexpected("empty profile response".to_string()))
            }
            other => other,
        };

        serde_json::from_value(profile).map_err(|err| ApiError::Unexpected(err.to_string()))
    }
}
