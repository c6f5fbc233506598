//! reqwest-backed transport with Basic authentication.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Url;
use tracing::{debug, warn};

use super::{ApiRequest, RequestBody, Transport};
use crate::error::{BandwidthError, RemoteError, Result};

/// Transport for one account-scoped API base URL.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base: Url,
    username: String,
    password: String,
    timeout: Duration,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base", &self.base.as_str())
            .field("username", &self.username)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HttpTransport {
    /// `base_url` is the accounts collection (e.g.
    /// `https://voice.bandwidth.com/api/v2/accounts`); `account_id` is appended
    /// as the next path segment.
    pub fn new(
        base_url: &str,
        account_id: &str,
        username: impl Into<String>,
        password: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BandwidthError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Self::with_client(client, base_url, account_id, username, password, timeout)
    }

    /// Use a caller-provided reqwest client (proxies, custom TLS, ...).
    pub fn with_client(
        client: reqwest::Client,
        base_url: &str,
        account_id: &str,
        username: impl Into<String>,
        password: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        if account_id.trim().is_empty() {
            return Err(BandwidthError::Configuration("account_id is empty".to_string()));
        }
        let mut base = Url::parse(base_url)
            .map_err(|e| BandwidthError::Configuration(format!("invalid base URL {base_url:?}: {e}")))?;
        base.path_segments_mut()
            .map_err(|_| {
                BandwidthError::Configuration(format!("base URL {base_url:?} cannot have a path"))
            })?
            .pop_if_empty()
            .push(account_id);

        Ok(Self {
            client,
            base,
            username: username.into(),
            password: password.into(),
            timeout,
        })
    }

    /// The account-scoped base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub(crate) fn url_for(&self, request: &ApiRequest) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.extend(request.segments.iter().map(String::as_str));
        }
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Vec<u8>> {
        let url = self.url_for(&request);

        debug!(method = %request.method, url = %url, "Bandwidth request");

        let mut builder = self
            .client
            .request(request.method.clone(), url.clone())
            .basic_auth(&self.username, Some(&self.password))
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        builder = match request.body {
            Some(RequestBody::Json(body)) => builder.json(&body),
            Some(RequestBody::Xml(document)) => builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/xml; charset=utf-8"))
                .body(document),
            None => builder,
        };

        let resp = builder.send().await.map_err(|e| self.map_send_error(e))?;
        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            let remote = RemoteError::from_response(status.as_u16(), &body);
            warn!(
                method = %request.method,
                url = %url,
                status = status.as_u16(),
                error_id = %remote.id,
                error_type = %remote.kind,
                "Bandwidth request failed"
            );
            return Err(BandwidthError::Remote(remote));
        }

        Ok(body.to_vec())
    }
}

impl HttpTransport {
    fn map_send_error(&self, error: reqwest::Error) -> BandwidthError {
        if error.is_timeout() {
            BandwidthError::Timeout(self.timeout.as_millis() as u64)
        } else {
            BandwidthError::Transport(error)
        }
    }
}
