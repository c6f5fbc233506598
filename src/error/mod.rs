//! Error types for the Bandwidth client.

pub mod remote;

pub use remote::RemoteError;

use thiserror::Error;

/// Primary error type for all client, dispatcher and BXML operations.
#[derive(Error, Debug)]
pub enum BandwidthError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown event type: {0:?}")]
    UnknownEventType(String),

    #[error("Malformed {event_type} event payload: {source}")]
    MalformedPayload {
        event_type: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("BXML serialization error: {0}")]
    Markup(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Request cancelled")]
    Cancelled,

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<BandwidthError>,
    },
}

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    NotFound,
    RateLimit,
    Network,
    Timeout,
    Cancelled,
    Server,
    Api,
    Configuration,
    Payload,
}

impl BandwidthError {
    /// Wrap this error with the name of the operation (and identifiers) that produced it.
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with all `Context` layers removed.
    pub fn root_cause(&self) -> &BandwidthError {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source;
        }
        current
    }

    /// The decoded platform error, if this failure came from a non-2xx response.
    pub fn remote(&self) -> Option<&RemoteError> {
        match self.root_cause() {
            Self::Remote(remote) => Some(remote),
            _ => None,
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Context { source, .. } => source.category(),
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Transport(_) => ErrorCategory::Network,
            Self::Timeout(_) => ErrorCategory::Timeout,
            Self::Cancelled => ErrorCategory::Cancelled,
            Self::Remote(remote) => match remote.status {
                401 | 403 => ErrorCategory::Authentication,
                404 => ErrorCategory::NotFound,
                429 => ErrorCategory::RateLimit,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Api,
            },
            Self::InvalidArgument(_)
            | Self::UnknownEventType(_)
            | Self::MalformedPayload { .. }
            | Self::Markup(_)
            | Self::Json(_) => ErrorCategory::Payload,
        }
    }

    /// Whether a caller-side retry could plausibly succeed.
    ///
    /// The client never retries on its own; see [`crate::util::retry::RetryPolicy`].
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::RateLimit
                | ErrorCategory::Network
                | ErrorCategory::Timeout
                | ErrorCategory::Server
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, BandwidthError>;
