//! Remote GoBarber API: request types, the calls the screens depend on, and
//! an HTTP implementation of them.
//!
//! The screens only talk to the [`Authenticator`] and [`UserDirectory`]
//! traits; [`ApiClient`] implements both over HTTP/JSON.

mod client;
mod config;
mod error;

pub use client::ApiClient;
pub use config::{ApiConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::ApiError;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Body of `POST /users`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /sessions`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// Passwords stay out of log output.
impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// An authenticated session returned by `POST /sessions`.
///
/// Sign-in screens hand it to a `flow::SessionStore`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub user: serde_json::Value,
}

/// Opens sessions for existing users.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, ApiError>;
}

/// Registers new users.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn create_user(&self, user: &NewUser) -> Result<(), ApiError>;
}

#[async_trait]
impl<T: Authenticator + ?Sized> Authenticator for Arc<T> {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        (**self).sign_in(credentials).await
    }
}

#[async_trait]
impl<T: UserDirectory + ?Sized> UserDirectory for Arc<T> {
    async fn create_user(&self, user: &NewUser) -> Result<(), ApiError> {
        (**self).create_user(user).await
    }
}
