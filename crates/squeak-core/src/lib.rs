//! squeak-core - Core types for the Squeak API client.
//!
//! This crate holds everything the HTTP layer builds on: the bearer
//! [`AccessToken`], the validated [`ApiBaseUrl`], the error taxonomy with its
//! uniform [`ErrorPayload`] view, the [`ApiResult`] envelope returned by
//! error-returning calls, the backend request/response models, and the
//! [`SessionHolder`] that tracks the identity provider's current token.

pub mod error;
pub mod models;
pub mod result;
pub mod session;
pub mod tokens;
pub mod types;

pub use error::{AuthError, Error, ErrorCode, ErrorPayload, InvalidInputError, TransportError};
pub use result::ApiResult;
pub use session::{
    IdentityProvider, ListenerId, MemoryIdentityProvider, ProviderSession, SessionEvent,
    SessionEventKind, SessionEvents, SessionHolder, SessionState,
};
pub use tokens::AccessToken;
pub use types::ApiBaseUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
