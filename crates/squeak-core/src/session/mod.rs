//! Session tracking.
//!
//! An [`IdentityProvider`] issues sessions and reports changes to them. The
//! [`SessionHolder`] is the single source of truth for the current bearer
//! token; everything that talks to the backend reads the token from it.

mod holder;
mod provider;

pub use holder::{ListenerId, SessionHolder, SessionState};
pub use provider::{
    IdentityProvider, MemoryIdentityProvider, ProviderSession, SessionEvent, SessionEventKind,
    SessionEvents,
};
