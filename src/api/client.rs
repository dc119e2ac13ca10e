//! HTTP client for the GoBarber API.
//!
//! | Method | Path        | Operation              |
//! |--------|-------------|------------------------|
//! | POST   | `/users`    | Create user (sign-up)  |
//! | POST   | `/sessions` | Create session (login) |

use std::time::Duration;

use async_trait::async_trait;

use super::config::ApiConfig;
use super::error::ApiError;
use super::{Authenticator, Credentials, NewUser, Session, UserDirectory};

/// Typed client for the GoBarber API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a new client from configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self { http, config })
    }

    /// Create a client configured from the environment.
    ///
    /// See [`ApiConfig::from_env`].
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ApiConfig::from_env()?)
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Register a new user.
    ///
    /// Calls `POST {base_url}/users`. Any 2xx status is success; the
    /// response body is not read.
    pub async fn create_user(&self, user: &NewUser) -> Result<(), ApiError> {
        let endpoint = "POST /users";
        let url = self.config.endpoint("users");

        let resp = self
            .http
            .post(&url)
            .json(user)
            .send()
            .await
            .map_err(|e| ApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        tracing::info!(endpoint, "user created");
        Ok(())
    }

    /// Open an authenticated session.
    ///
    /// Calls `POST {base_url}/sessions` and decodes the `{token, user}` body.
    pub async fn create_session(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let endpoint = "POST /sessions";
        let url = self.config.endpoint("sessions");

        let resp = self
            .http
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| ApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        resp.json().await.map_err(|e| ApiError::Decode {
            endpoint: endpoint.into(),
            source: e,
        })
    }
}

#[async_trait]
impl UserDirectory for ApiClient {
    async fn create_user(&self, user: &NewUser) -> Result<(), ApiError> {
        ApiClient::create_user(self, user).await
    }
}

#[async_trait]
impl Authenticator for ApiClient {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        self.create_session(credentials).await
    }
}
