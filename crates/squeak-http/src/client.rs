//! Token-bound HTTP client and its factory.

use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use squeak_core::error::{ApiError, InvalidInputError, TransportError};
use squeak_core::{AccessToken, ApiBaseUrl, Error, ErrorPayload, Result};

use crate::endpoints::{Endpoint, HttpMethod};

/// Builds [`ApiClient`]s for one backend.
///
/// The underlying `reqwest::Client` (and its connection pool) is shared by
/// every client the factory builds; only the bearer credential differs.
#[derive(Debug, Clone)]
pub struct ClientFactory {
    http: reqwest::Client,
    base: ApiBaseUrl,
}

impl ClientFactory {
    /// Create a factory with a default transport.
    pub fn new(base: ApiBaseUrl) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("squeak/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(transport_error)?;

        Ok(Self::with_http(base, http))
    }

    /// Create a factory over a caller-configured transport.
    ///
    /// Timeouts, proxies and TLS settings belong on `http`.
    pub fn with_http(base: ApiBaseUrl, http: reqwest::Client) -> Self {
        Self { http, base }
    }

    pub fn base_url(&self) -> &ApiBaseUrl {
        &self.base
    }

    /// Build a client whose every request carries `Authorization: Bearer <token>`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::Token`] if the token contains characters
    /// that cannot appear in a header.
    pub fn build(&self, token: &AccessToken) -> Result<ApiClient> {
        let mut auth =
            HeaderValue::from_str(&token.bearer()).map_err(|_| InvalidInputError::Token)?;
        auth.set_sensitive(true);

        Ok(ApiClient {
            http: self.http.clone(),
            base: self.base.clone(),
            auth,
        })
    }
}

/// HTTP client pinned to one base URL and one bearer token.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: ApiBaseUrl,
    auth: HeaderValue,
}

impl ApiClient {
    pub fn base_url(&self) -> &ApiBaseUrl {
        &self.base
    }

    /// The `Authorization` header value sent with every request.
    pub fn auth_header(&self) -> &HeaderValue {
        &self.auth
    }

    /// Dispatch one request to `endpoint`.
    ///
    /// GET endpoints encode `request` as the query string, POST endpoints
    /// send it as a JSON body. A non-success status becomes [`Error::Api`]
    /// carrying the backend's `{error, code}` body when it has one.
    #[instrument(skip(self, endpoint, request), fields(method = %endpoint.method, path = endpoint.path))]
    pub async fn send<Req, Resp>(&self, endpoint: &Endpoint<Req, Resp>, request: &Req) -> Result<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let url = self.base.endpoint_url(endpoint.path);
        debug!(%url, "API request");

        let builder = match endpoint.method {
            HttpMethod::Get => self.http.get(&url).query(request),
            HttpMethod::Post => self.http.post(&url).json(request),
        };

        let response = builder
            .header(AUTHORIZATION, self.auth.clone())
            .send()
            .await
            .map_err(transport_error)?;

        handle_response(response).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.base)
            .field("auth", &"[REDACTED]")
            .finish()
    }
}

/// Handle a response, parsing the body or the error.
async fn handle_response<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
    let status = response.status();
    trace!(status = %status, "API response");

    if status.is_success() {
        let body = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&body).map_err(|e| {
            TransportError::Decode {
                message: e.to_string(),
            }
            .into()
        })
    } else {
        Err(parse_error_response(response).await.into())
    }
}

/// Parse a backend error response.
async fn parse_error_response(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();

    match response.json::<ErrorPayload>().await {
        Ok(payload) => ApiError::new(status, payload),
        Err(_) => ApiError::generic(status),
    }
}

pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        TransportError::Decode {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}
