//! Stored-session identity provider.

pub mod storage;

use std::path::PathBuf;

use async_trait::async_trait;
use futures_util::stream;

use squeak_core::{
    AccessToken, IdentityProvider, InvalidInputError, ProviderSession, Result, SessionEvent,
    SessionEvents,
};

/// Environment variable that overrides the stored token.
pub const TOKEN_ENV: &str = "SQUEAK_TOKEN";

/// Identity provider backed by the session file written by `squeak login`.
///
/// A one-shot process sees no session changes, so the event stream is empty.
#[derive(Debug, Clone)]
pub struct FileIdentityProvider {
    path: PathBuf,
    token_override: Option<String>,
}

impl FileIdentityProvider {
    pub fn new(path: PathBuf) -> Self {
        let token_override = std::env::var(TOKEN_ENV).ok().filter(|t| !t.is_empty());
        Self {
            path,
            token_override,
        }
    }

    /// Where the current token comes from.
    pub fn source(&self) -> &'static str {
        if self.token_override.is_some() {
            TOKEN_ENV
        } else {
            "session file"
        }
    }
}

#[async_trait]
impl IdentityProvider for FileIdentityProvider {
    async fn current_session(&self) -> Result<Option<ProviderSession>> {
        if let Some(token) = &self.token_override {
            return Ok(Some(ProviderSession::new(AccessToken::new(token.clone()))));
        }

        let stored = storage::load_session(&self.path).map_err(|e| InvalidInputError::Other {
            message: format!("{:#}", e),
        })?;
        Ok(stored.map(|s| ProviderSession::new(AccessToken::new(s.access_token))))
    }

    fn session_events(&self) -> SessionEvents {
        Box::pin(stream::empty::<SessionEvent>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use squeak_core::SessionHolder;
    use tempfile::TempDir;

    fn provider(path: PathBuf) -> FileIdentityProvider {
        FileIdentityProvider {
            path,
            token_override: None,
        }
    }

    #[tokio::test]
    async fn reads_stored_token() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        storage::save_session(
            &path,
            &storage::StoredSession {
                access_token: "abc".to_string(),
                api_base: "http://localhost:8080".to_string(),
            },
        )
        .unwrap();

        let holder = SessionHolder::connect(&provider(path)).await;
        assert_eq!(holder.token(), Some(AccessToken::new("abc")));
    }

    #[tokio::test]
    async fn corrupt_file_means_signed_out() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{").unwrap();

        let provider = provider(path);
        assert!(provider.current_session().await.is_err());

        let holder = SessionHolder::connect(&provider).await;
        assert!(!holder.is_authenticated());
        assert!(!holder.is_loading());
    }

    #[tokio::test]
    async fn override_wins_over_file() {
        let dir = TempDir::new().unwrap();
        let provider = FileIdentityProvider {
            path: dir.path().join("session.json"),
            token_override: Some("env-token".to_string()),
        };

        let session = provider.current_session().await.unwrap().unwrap();
        assert_eq!(session.access_token, AccessToken::new("env-token"));
        assert_eq!(provider.source(), TOKEN_ENV);
    }
}
