//! squeak-http - Authenticated HTTP access to the Squeak backend.
//!
//! Every backend call flows through one [`AccessGate`]: it reads the bearer
//! token from a [`SessionHolder`](squeak_core::SessionHolder), refuses to
//! dispatch anything while signed out, and hands a token-bound [`ApiClient`]
//! to the operation otherwise. The feature accessors in [`api`] are thin,
//! declarative wrappers over the gate.
//!
//! # Example
//!
//! ```no_run
//! use squeak_core::{AccessToken, ApiBaseUrl, MemoryIdentityProvider};
//! use squeak_http::SqueakClient;
//!
//! # async fn example() -> Result<(), squeak_core::Error> {
//! let base = ApiBaseUrl::new("https://api.squeak.app")?;
//! let provider = MemoryIdentityProvider::with_token(AccessToken::new("jwt"));
//! let client = SqueakClient::connect(base, &provider).await?;
//!
//! let profile = client.profile().get_profile().await?;
//! println!("{}", profile.username);
//!
//! let billing = client.billing().get_billing_account().await;
//! if let Some(error) = billing.error() {
//!     eprintln!("billing unavailable: {error}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
mod client;
pub mod endpoints;
mod gate;

pub use api::SqueakClient;
pub use client::{ApiClient, ClientFactory};
pub use endpoints::{Endpoint, HttpMethod};
pub use gate::AccessGate;
