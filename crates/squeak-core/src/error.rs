//! Error types for the Squeak client.
//!
//! This module provides a unified error type with explicit variants for
//! authentication, transport, backend and input validation failures, plus the
//! `{error, code}` payload shape that every failure can be flattened into.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Message carried by the payload of an unauthenticated call.
pub const MISSING_AUTHENTICATION: &str = "Missing authentication";

/// The unified error type for Squeak client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No session token was present; nothing reached the network.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The backend answered with a non-success status.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// Input validation errors (bad base URL, unusable token).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Flatten this error into the backend's `{error, code}` shape.
    pub fn payload(&self) -> ErrorPayload {
        match self {
            Error::Auth(AuthError::Required) => ErrorPayload::auth_required(),
            Error::Api(api) => api.payload.clone(),
            Error::Transport(err) => ErrorPayload::new(err.to_string(), None),
            Error::InvalidInput(err) => ErrorPayload::new(err.to_string(), None),
        }
    }

    /// Returns the error code, if this error carries one.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Error::Auth(AuthError::Required) => Some(ErrorCode::AuthRequired),
            Error::Api(api) => api.payload.code.clone(),
            _ => None,
        }
    }

    /// Check whether the call was refused for lack of a session.
    pub fn is_auth_required(&self) -> bool {
        self.code() == Some(ErrorCode::AuthRequired)
    }
}

impl From<Error> for ErrorPayload {
    fn from(err: Error) -> Self {
        match err {
            Error::Api(api) => api.payload,
            other => other.payload(),
        }
    }
}

/// Authentication-related errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The session holder has no bearer token.
    #[error("missing authentication")]
    Required,
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Response body could not be decoded.
    #[error("failed to decode response: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-success response from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// The parsed error body, or a generic one when the body was unusable.
    pub payload: ErrorPayload,
}

impl ApiError {
    /// Create a new backend error.
    pub fn new(status: u16, payload: ErrorPayload) -> Self {
        Self { status, payload }
    }

    /// Build the error used when the response body is not a backend error object.
    pub fn generic(status: u16) -> Self {
        Self::new(
            status,
            ErrorPayload::new(format!("request failed with HTTP {status}"), None),
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref code) = self.payload.code {
            write!(f, " [{}]", code)?;
        }
        write!(f, ": {}", self.payload.error)
    }
}

impl std::error::Error for ApiError {}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// The token cannot be used as an HTTP header value.
    #[error("access token is not a valid header value")]
    Token,

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

/// The `{error, code}` body the backend returns on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Human-readable description.
    pub error: String,
    /// Machine-readable code, when the backend supplied one.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_code"
    )]
    pub code: Option<ErrorCode>,
}

/// The backend always sends `code`; an empty string or `null` means none.
fn deserialize_code<'de, D>(deserializer: D) -> Result<Option<ErrorCode>, D::Error>
where
    D: Deserializer<'de>,
{
    let code = Option::<String>::deserialize(deserializer)?;
    Ok(code
        .filter(|c| !c.is_empty())
        .map(|c| ErrorCode::from(c.as_str())))
}

impl ErrorPayload {
    pub fn new(error: impl Into<String>, code: Option<ErrorCode>) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }

    /// The payload returned for calls made without a session.
    pub fn auth_required() -> Self {
        Self::new(MISSING_AUTHENTICATION, Some(ErrorCode::AuthRequired))
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({})", self.error, code),
            None => f.write_str(&self.error),
        }
    }
}

impl std::error::Error for ErrorPayload {}

/// Error codes the backend is known to emit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    AuthRequired,
    ProfileNotFound,
    NoTranscript,
    UsageLimitReached,
    UsageRestricted,
    /// Any code this client does not know about.
    Other(String),
}

impl ErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::AuthRequired => "AUTH_REQUIRED",
            ErrorCode::ProfileNotFound => "PROFILE_NOT_FOUND",
            ErrorCode::NoTranscript => "NO_TRANSCRIPT",
            ErrorCode::UsageLimitReached => "USAGE_LIMIT_REACHED",
            ErrorCode::UsageRestricted => "USAGE_RESTRICTED",
            ErrorCode::Other(code) => code,
        }
    }
}

impl From<&str> for ErrorCode {
    fn from(s: &str) -> Self {
        match s {
            "AUTH_REQUIRED" => ErrorCode::AuthRequired,
            "PROFILE_NOT_FOUND" => ErrorCode::ProfileNotFound,
            "NO_TRANSCRIPT" => ErrorCode::NoTranscript,
            "USAGE_LIMIT_REACHED" => ErrorCode::UsageLimitReached,
            "USAGE_RESTRICTED" => ErrorCode::UsageRestricted,
            other => ErrorCode::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ErrorCode::from(s.as_str()))
    }
}
