//! The authenticated access gate.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use squeak_core::{
    AccessToken, ApiBaseUrl, ApiResult, AuthError, ErrorPayload, Result, SessionHolder,
};

use crate::client::{ApiClient, ClientFactory};
use crate::endpoints::Endpoint;

/// Decides whether a backend call may proceed.
///
/// The gate reads the token from its [`SessionHolder`] on every call. While
/// there is no token nothing is dispatched. Otherwise the operation receives
/// an [`ApiClient`] bound to the current token; the client is cached per
/// token and replaced, never mutated, when the token changes. A call that
/// started under an old token keeps its own client until it finishes.
///
/// Two call styles are offered:
///
/// - [`require_auth`](Self::require_auth) returns `Result` and propagates the
///   operation's error unchanged;
/// - [`require_auth_with_errors`](Self::require_auth_with_errors) returns an
///   [`ApiResult`] and never fails.
///
/// No retry, timeout or backoff happens here.
pub struct AccessGate {
    session: SessionHolder,
    factory: ClientFactory,
    held: Mutex<Option<HeldClient>>,
}

struct HeldClient {
    token: AccessToken,
    client: Arc<ApiClient>,
}

impl AccessGate {
    pub fn new(session: SessionHolder, factory: ClientFactory) -> Self {
        Self {
            session,
            factory,
            held: Mutex::new(None),
        }
    }

    pub fn session(&self) -> &SessionHolder {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn base_url(&self) -> &ApiBaseUrl {
        self.factory.base_url()
    }

    /// Run `op` if signed in, failing with [`AuthError::Required`] otherwise.
    ///
    /// `op` is not invoked when there is no token.
    pub async fn require_auth<T, F, Fut>(&self, op: F) -> Result<T>
    where
        F: FnOnce(Arc<ApiClient>) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let client = self.current_client()?.ok_or_else(|| {
            debug!("Refusing call without a session");
            AuthError::Required
        })?;
        op(client).await
    }

    /// Run `op` if signed in, returning an `AUTH_REQUIRED` payload otherwise.
    ///
    /// The result of `op` is returned as-is; `op` is responsible for mapping
    /// its own failures into the `error` field.
    pub async fn require_auth_with_errors<T, F, Fut>(&self, op: F) -> ApiResult<T>
    where
        F: FnOnce(Arc<ApiClient>) -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        match self.current_client() {
            Ok(Some(client)) => op(client).await,
            Ok(None) => {
                debug!("Refusing call without a session");
                ApiResult::failure(ErrorPayload::auth_required())
            }
            Err(e) => ApiResult::failure(e.into()),
        }
    }

    /// Call `endpoint` in the throwing style.
    pub async fn call<Req, Resp>(&self, endpoint: &Endpoint<Req, Resp>, request: &Req) -> Result<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        self.require_auth(|client| async move { client.send(endpoint, request).await })
            .await
    }

    /// Call `endpoint` in the error-returning style.
    pub async fn call_with_errors<Req, Resp>(
        &self,
        endpoint: &Endpoint<Req, Resp>,
        request: &Req,
    ) -> ApiResult<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        self.require_auth_with_errors(|client| async move {
            ApiResult::from(client.send(endpoint, request).await)
        })
        .await
    }

    /// Returns the client for the current token, building it if the token changed.
    fn current_client(&self) -> Result<Option<Arc<ApiClient>>> {
        let mut held = self.held.lock().unwrap_or_else(PoisonError::into_inner);

        let Some(token) = self.session.token() else {
            *held = None;
            return Ok(None);
        };

        if let Some(current) = held.as_ref().filter(|h| h.token == token) {
            return Ok(Some(Arc::clone(&current.client)));
        }

        debug!("Building API client for new token");
        let client = Arc::new(self.factory.build(&token)?);
        *held = Some(HeldClient {
            token,
            client: Arc::clone(&client),
        });
        Ok(Some(client))
    }
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate")
            .field("session", &self.session)
            .field("base", self.base_url())
            .finish()
    }
}
