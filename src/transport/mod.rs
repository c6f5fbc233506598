//! The HTTP primitive every facade is built on.

pub mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{BandwidthError, Result};

/// Body attached to an [`ApiRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(serde_json::Value),
    Xml(String),
}

/// One call against an account-scoped API.
///
/// `segments` are appended to the account base URL one path segment at a
/// time, so identifiers never need manual escaping.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl ApiRequest {
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::GET, segments)
    }

    pub fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::POST, segments)
    }

    pub fn put<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::PUT, segments)
    }

    pub fn delete<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::DELETE, segments)
    }

    /// Append a query parameter when `value` is set.
    pub fn query_opt(mut self, key: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.query.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(RequestBody::Json(serde_json::to_value(body)?));
        Ok(self)
    }

    pub fn xml(mut self, document: String) -> Self {
        self.body = Some(RequestBody::Xml(document));
        self
    }

    /// Path relative to the account base URL, for logs and error context.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// Authenticated request/response exchange against one API base URL.
///
/// Implementations return the raw response body for 2xx responses and
/// [`BandwidthError::Remote`] otherwise. They never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Vec<u8>>;
}

/// Decode a response body into `T`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(body)?)
}

/// Send `request` and decode the JSON response. Any failure, including
/// building the request body, is labelled with `context`.
pub(crate) async fn fetch<T: DeserializeOwned>(
    transport: &dyn Transport,
    request: Result<ApiRequest>,
    context: String,
) -> Result<T> {
    send_and_decode(transport, request)
        .await
        .map_err(|e| e.context(context))
}

/// [`fetch`] for operations whose response body carries nothing.
pub(crate) async fn execute(
    transport: &dyn Transport,
    request: Result<ApiRequest>,
    context: String,
) -> Result<()> {
    send(transport, request)
        .await
        .map(drop)
        .map_err(|e| e.context(context))
}

async fn send(transport: &dyn Transport, request: Result<ApiRequest>) -> Result<Vec<u8>> {
    transport.send(request?).await
}

async fn send_and_decode<T: DeserializeOwned>(
    transport: &dyn Transport,
    request: Result<ApiRequest>,
) -> Result<T> {
    let body = send(transport, request).await?;
    decode(&body)
}

/// Fail fast on identifiers that would produce a different URL than intended.
///
/// URL path handling drops `.` and `..` segments, so those would address a
/// parent resource instead of the named one.
pub(crate) fn require_id<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(BandwidthError::InvalidArgument(format!("{name} is required")));
    }
    if matches!(value, "." | "..") {
        return Err(BandwidthError::InvalidArgument(format!(
            "{name} must not be {value:?}"
        )));
    }
    Ok(value)
}
