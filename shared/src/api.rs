//! API client types and trait definitions
//!
//! This module defines the auth API contract the frontend consumes. The
//! trait is implemented by the WASM (gloo-net) client; tests can provide
//! their own.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use crate::auth::{
    HealthResponse, LoginRequest, MessageResponse, SignUpRequest, UserResponse,
};

/// API error types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApiError {
    /// Network or connection error
    Network(String),
    /// Server returned an error status
    Server { status: u16, message: String },
    /// Failed to parse response
    Parse(String),
    /// Authentication required or failed
    Auth(String),
    /// Resource not found
    NotFound(String),
    /// Request body failed server-side validation, keyed by field
    Validation(BTreeMap<String, String>),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ApiError::Auth(msg) => write!(f, "Auth error: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                let joined = errors
                    .iter()
                    .map(|(field, msg)| format!("{}: {}", field, msg))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{}", joined)
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Error payload returned by the auth service.
///
/// Business errors carry `message`; bean validation failures carry
/// `errors` keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, String>>,
}

impl ApiError {
    /// Build an error from a non-success status and its raw body.
    ///
    /// Bodies that are not JSON fall back to the raw text (or a generic
    /// message when empty).
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

        if let Some(errors) = parsed.errors.filter(|e| !e.is_empty()) {
            return ApiError::Validation(errors);
        }

        let message = parsed
            .message
            .or(parsed.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() || trimmed.starts_with('{') {
                    format!("request failed with status {}", status)
                } else {
                    trimmed.to_string()
                }
            });

        match status {
            401 | 403 => ApiError::Auth(message),
            404 => ApiError::NotFound(message),
            _ => ApiError::Server { status, message },
        }
    }

    /// Text suitable for showing next to a form.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Could not reach the server. Try again.".to_string(),
            ApiError::Parse(_) => "The server sent an unexpected response.".to_string(),
            ApiError::Server { message, .. }
            | ApiError::Auth(message)
            | ApiError::NotFound(message) => message.clone(),
            ApiError::Validation(errors) => errors
                .values()
                .cloned()
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// API endpoint definitions
pub mod endpoints {
    pub const HEALTH: &str = "/api/health";
    pub const AUTH_LOGIN: &str = "/api/auth/login";
    pub const AUTH_JOIN: &str = "/api/auth/join";
    pub const AUTH_LOGOUT: &str = "/api/auth/logout";
    pub const AUTH_WITHDRAW: &str = "/api/auth/withdraw";
    pub const USER_ME: &str = "/api/user/me";
}

/// Trait defining the auth API
///
/// All methods are async and return Result<T, ApiError>. Calls that need a
/// session use the token from the client's [`ApiClientConfig`].
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Check if the server is healthy
    async fn health(&self) -> Result<HealthResponse, ApiError>;

    /// Exchange credentials for a profile carrying an access token
    async fn login(&self, req: &LoginRequest) -> Result<UserResponse, ApiError>;

    /// Create an account. No token is issued; the user logs in afterwards.
    async fn join(&self, req: &SignUpRequest) -> Result<UserResponse, ApiError>;

    /// Tell the server the session ended (stateless tokens, informational)
    async fn logout(&self) -> Result<MessageResponse, ApiError>;

    /// Soft-delete the current account
    async fn withdraw(&self) -> Result<MessageResponse, ApiError>;

    /// Get the current authenticated user
    async fn get_me(&self) -> Result<UserResponse, ApiError>;
}

/// Configuration for creating an API client
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClientConfig {
    /// Base URL of the server (e.g., "http://localhost:8080")
    pub base_url: String,
    /// Optional auth token for authenticated requests
    pub auth_token: Option<String>,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// `Authorization` header value, when a token is configured.
    pub fn authorization(&self) -> Option<String> {
        self.auth_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(crate::protocol::bearer)
    }
}
