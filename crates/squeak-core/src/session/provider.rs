//! Identity provider seam.

use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use futures_core::Stream;
use tokio::sync::mpsc;

use crate::error::TransportError;
use crate::{AccessToken, Result};

/// Stream of session changes reported by a provider.
pub type SessionEvents = Pin<Box<dyn Stream<Item = SessionEvent> + Send>>;

/// A session issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSession {
    /// The bearer token presented to the backend.
    pub access_token: AccessToken,
}

impl ProviderSession {
    pub fn new(access_token: AccessToken) -> Self {
        Self { access_token }
    }
}

/// What caused a session change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEventKind {
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
}

/// A session change: the event kind and the session after it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEvent {
    pub kind: SessionEventKind,
    pub session: Option<ProviderSession>,
}

impl SessionEvent {
    pub fn signed_in(token: AccessToken) -> Self {
        Self {
            kind: SessionEventKind::SignedIn,
            session: Some(ProviderSession::new(token)),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            kind: SessionEventKind::SignedOut,
            session: None,
        }
    }

    pub fn token_refreshed(token: AccessToken) -> Self {
        Self {
            kind: SessionEventKind::TokenRefreshed,
            session: Some(ProviderSession::new(token)),
        }
    }

    /// The token carried by this event, if the session survives it.
    pub fn token(&self) -> Option<&AccessToken> {
        self.session.as_ref().map(|s| &s.access_token)
    }
}

/// Source of sessions and session-change notifications.
///
/// Dropping the stream returned by [`IdentityProvider::session_events`]
/// unsubscribes from the provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Fetch the current session, if any.
    async fn current_session(&self) -> Result<Option<ProviderSession>>;

    /// Subscribe to session changes. Events are yielded in emission order.
    fn session_events(&self) -> SessionEvents;
}

/// An in-process identity provider.
///
/// Sessions are set and changed by calling [`sign_in`](Self::sign_in),
/// [`sign_out`](Self::sign_out) and [`refresh`](Self::refresh); every
/// subscriber receives every change. Cloning shares the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryIdentityProvider {
    inner: Arc<Mutex<ProviderState>>,
}

#[derive(Debug, Default)]
struct ProviderState {
    session: Option<ProviderSession>,
    fail_initial_fetch: bool,
    subscribers: Vec<mpsc::UnboundedSender<SessionEvent>>,
}

impl MemoryIdentityProvider {
    /// Create a provider with no session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider that already holds a session for `token`.
    pub fn with_token(token: AccessToken) -> Self {
        let provider = Self::new();
        provider.state().session = Some(ProviderSession::new(token));
        provider
    }

    /// Make [`IdentityProvider::current_session`] fail.
    pub fn fail_initial_fetch(&self) {
        self.state().fail_initial_fetch = true;
    }

    pub fn sign_in(&self, token: AccessToken) {
        self.emit(SessionEvent::signed_in(token));
    }

    pub fn sign_out(&self) {
        self.emit(SessionEvent::signed_out());
    }

    pub fn refresh(&self, token: AccessToken) {
        self.emit(SessionEvent::token_refreshed(token));
    }

    /// Record the event's session and deliver the event to every subscriber.
    pub fn emit(&self, event: SessionEvent) {
        let mut state = self.state();
        state.session = event.session.clone();
        state
            .subscribers
            .retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        let mut state = self.state();
        state.subscribers.retain(|tx| !tx.is_closed());
        state.subscribers.len()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, ProviderState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    async fn current_session(&self) -> Result<Option<ProviderSession>> {
        let (fail, session) = {
            let state = self.state();
            (state.fail_initial_fetch, state.session.clone())
        };
        if fail {
            return Err(TransportError::Connection {
                message: "identity provider unavailable".to_string(),
            }
            .into());
        }
        Ok(session)
    }

    fn session_events(&self) -> SessionEvents {
        let (tx, mut rx) = mpsc::unbounded_channel();
        self.state().subscribers.push(tx);

        Box::pin(async_stream::stream! {
            while let Some(event) = rx.recv().await {
                yield event;
            }
        })
    }
}
