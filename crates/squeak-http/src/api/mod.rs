//! Feature accessors.
//!
//! Each accessor group names the backend operations of one resource area.
//! Read-mostly areas (profile, student, content, progress, questions) return
//! `Result` and leave error display to the caller's error boundary. Billing,
//! organization and classroom mutations return
//! [`ApiResult`](squeak_core::ApiResult) so a form can show the failure
//! inline. Audio mixes the two: health and translation return `Result`,
//! speech synthesis and recognition return the envelope.
//!
//! Every operation issues exactly one request and nothing is cached between
//! calls.

mod audio;
mod billing;
mod content;
mod organization;
mod profile;
mod progress;
mod qna;
mod student;
mod teacher;

use squeak_core::{ApiBaseUrl, IdentityProvider, Result, SessionHolder};

use crate::client::ClientFactory;
use crate::gate::AccessGate;

pub use audio::AudioApi;
pub use billing::BillingApi;
pub use content::{NewsApi, StoryApi};
pub use organization::OrganizationApi;
pub use profile::ProfileApi;
pub use progress::ProgressApi;
pub use qna::QnaApi;
pub use student::StudentApi;
pub use teacher::TeacherApi;

/// Entry point for calling the Squeak backend.
#[derive(Debug)]
pub struct SqueakClient {
    gate: AccessGate,
}

impl SqueakClient {
    pub fn new(session: SessionHolder, factory: ClientFactory) -> Self {
        Self {
            gate: AccessGate::new(session, factory),
        }
    }

    /// Connect a session holder to `provider` and build a client for `base`.
    pub async fn connect<P>(base: ApiBaseUrl, provider: &P) -> Result<Self>
    where
        P: IdentityProvider + ?Sized,
    {
        let factory = ClientFactory::new(base)?;
        let session = SessionHolder::connect(provider).await;
        Ok(Self::new(session, factory))
    }

    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    pub fn session(&self) -> &SessionHolder {
        self.gate.session()
    }

    pub fn is_authenticated(&self) -> bool {
        self.gate.is_authenticated()
    }

    pub fn profile(&self) -> ProfileApi<'_> {
        ProfileApi::new(&self.gate)
    }

    pub fn organization(&self) -> OrganizationApi<'_> {
        OrganizationApi::new(&self.gate)
    }

    pub fn teacher(&self) -> TeacherApi<'_> {
        TeacherApi::new(&self.gate)
    }

    pub fn billing(&self) -> BillingApi<'_> {
        BillingApi::new(&self.gate)
    }

    pub fn student(&self) -> StudentApi<'_> {
        StudentApi::new(&self.gate)
    }

    pub fn stories(&self) -> StoryApi<'_> {
        StoryApi::new(&self.gate)
    }

    pub fn news(&self) -> NewsApi<'_> {
        NewsApi::new(&self.gate)
    }

    pub fn progress(&self) -> ProgressApi<'_> {
        ProgressApi::new(&self.gate)
    }

    pub fn qna(&self) -> QnaApi<'_> {
        QnaApi::new(&self.gate)
    }

    pub fn audio(&self) -> AudioApi<'_> {
        AudioApi::new(&self.gate)
    }
}
