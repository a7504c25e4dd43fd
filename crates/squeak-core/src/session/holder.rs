//! The session holder.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

use futures_util::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::AccessToken;

use super::provider::{IdentityProvider, SessionEvent, SessionEventKind};

type Listener = Arc<dyn Fn(Option<&AccessToken>) + Send + Sync>;

/// Handle returned by [`SessionHolder::on_change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Snapshot of the holder's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<AccessToken>,
    pub is_loading: bool,
}

/// Tracks the current bearer token.
///
/// The holder is connected to an [`IdentityProvider`] once, and from then on
/// applies every session event the provider emits, in order. Readers call
/// [`token`](Self::token) at the moment they need it; the only writer is
/// [`apply`](Self::apply).
///
/// Handles are cheap to clone and share one state. Dropping the last handle,
/// or calling [`close`](Self::close), unsubscribes from the provider.
///
/// # Example
///
/// ```
/// use squeak_core::{AccessToken, MemoryIdentityProvider, SessionHolder};
///
/// # async fn example() {
/// let provider = MemoryIdentityProvider::with_token(AccessToken::new("abc"));
/// let holder = SessionHolder::connect(&provider).await;
/// assert_eq!(holder.token().map(|t| t.as_str().to_string()), Some("abc".into()));
///
/// provider.sign_out();
/// # }
/// ```
#[derive(Clone)]
pub struct SessionHolder {
    inner: Arc<HolderInner>,
}

struct HolderInner {
    state: RwLock<SessionState>,
    listeners: Mutex<Vec<(ListenerId, Listener)>>,
    next_listener: AtomicU64,
    events_task: Mutex<Option<JoinHandle<()>>>,
    closed: AtomicBool,
}

impl SessionHolder {
    /// Create a holder that is still loading and has no token.
    pub fn new() -> Self {
        Self::from_state(SessionState {
            token: None,
            is_loading: true,
        })
    }

    /// Create a holder with a fixed token and no provider.
    pub fn with_token(token: AccessToken) -> Self {
        Self::from_state(SessionState {
            token: Some(token),
            is_loading: false,
        })
    }

    fn from_state(state: SessionState) -> Self {
        Self {
            inner: Arc::new(HolderInner {
                state: RwLock::new(state),
                listeners: Mutex::new(Vec::new()),
                next_listener: AtomicU64::new(0),
                events_task: Mutex::new(None),
                closed: AtomicBool::new(false),
            }),
        }
    }

    /// Connect to an identity provider.
    ///
    /// Subscribes to session events, then fetches the initial session. A
    /// failed lookup is treated as "no session". Events emitted while the
    /// lookup is in flight are applied after it, in order.
    #[instrument(skip_all)]
    pub async fn connect<P>(provider: &P) -> Self
    where
        P: IdentityProvider + ?Sized,
    {
        let holder = Self::new();
        let mut events = provider.session_events();

        let token = match provider.current_session().await {
            Ok(session) => session.map(|s| s.access_token),
            Err(e) => {
                warn!(error = %e, "Initial session lookup failed, continuing signed out");
                None
            }
        };
        debug!(authenticated = token.is_some(), "Initial session resolved");
        holder.replace_state(SessionState {
            token,
            is_loading: false,
        });

        let weak: Weak<HolderInner> = Arc::downgrade(&holder.inner);
        let task = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                let Some(inner) = weak.upgrade() else {
                    break;
                };
                SessionHolder { inner }.apply(event);
            }
        });
        *lock(&holder.inner.events_task) = Some(task);

        holder
    }

    /// Returns the current token, if signed in.
    pub fn token(&self) -> Option<AccessToken> {
        self.read_state().token.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.read_state().is_loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_state().token.is_some()
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.read_state().clone()
    }

    /// Register a callback invoked with the new token after every event.
    pub fn on_change<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(Option<&AccessToken>) + Send + Sync + 'static,
    {
        let id = ListenerId(self.inner.next_listener.fetch_add(1, Ordering::Relaxed));
        lock(&self.inner.listeners).push((id, Arc::new(listener)));
        id
    }

    /// Deregister a callback. Returns whether it was registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = lock(&self.inner.listeners);
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    /// Apply one session event and notify listeners.
    ///
    /// Events are ignored once the holder is closed.
    pub fn apply(&self, event: SessionEvent) {
        if self.inner.closed.load(Ordering::Acquire) {
            return;
        }

        match event.kind {
            SessionEventKind::SignedIn => info!("Signed in"),
            SessionEventKind::SignedOut => info!("Signed out"),
            SessionEventKind::TokenRefreshed => debug!("Token refreshed"),
            SessionEventKind::UserUpdated => debug!("User updated"),
        }

        let token = event.session.map(|s| s.access_token);
        self.replace_state(SessionState {
            token: token.clone(),
            is_loading: false,
        });

        let listeners: Vec<Listener> = lock(&self.inner.listeners)
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener(token.as_ref());
        }
    }

    /// Unsubscribe from the provider and drop all listeners.
    pub fn close(&self) {
        self.inner.closed.store(true, Ordering::Release);
        if let Some(task) = lock(&self.inner.events_task).take() {
            task.abort();
        }
        lock(&self.inner.listeners).clear();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    fn replace_state(&self, state: SessionState) {
        *self
            .inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner) = state;
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SessionHolder {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HolderInner {
    fn drop(&mut self) {
        if let Some(task) = lock(&self.events_task).take() {
            task.abort();
        }
    }
}

impl std::fmt::Debug for SessionHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read_state();
        f.debug_struct("SessionHolder")
            .field("authenticated", &state.token.is_some())
            .field("is_loading", &state.is_loading)
            .finish()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
