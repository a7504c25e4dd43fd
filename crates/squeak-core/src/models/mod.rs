//! Request and response bodies of the Squeak backend.
//!
//! Field names follow the backend's JSON (snake_case). Query parameter
//! structs are serialized into the URL query string of GET endpoints.

mod audio;
mod billing;
mod content;
mod organization;
mod profile;
mod progress;
mod qna;
mod student;
mod teacher;

use serde::{Deserialize, Serialize};

pub use audio::*;
pub use billing::*;
pub use content::*;
pub use organization::*;
pub use profile::*;
pub use progress::*;
pub use qna::*;
pub use student::*;
pub use teacher::*;

/// An empty request: no query parameters for GET, `{}` for POST.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

/// A `{message}` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
