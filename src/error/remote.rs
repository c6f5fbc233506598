//! Error payload returned by the platform on non-2xx responses.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A decoded `{ "id", "type", "description" }` error body.
///
/// The HTTP status is not part of the body; the transport attaches it.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[error("API error (status {status}): {kind}: {description}")]
pub struct RemoteError {
    #[serde(skip)]
    pub status: u16,
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
}

impl RemoteError {
    /// Build a remote error from a status code and a raw response body.
    ///
    /// Bodies that are not the documented JSON shape are kept verbatim as the
    /// description.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<RemoteError>(body) {
            Ok(parsed) => Self { status, ..parsed },
            Err(_) => Self {
                status,
                description: String::from_utf8_lossy(body).trim().to_string(),
                ..Default::default()
            },
        }
    }
}
