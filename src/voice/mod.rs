//! Voice API: calls, conferences, recordings and transcriptions.
//!
//! ```no_run
//! use bandwidth::config::BandwidthConfig;
//! use bandwidth::voice::{CreateCallInput, Voice};
//!
//! # async fn example() -> bandwidth::error::Result<()> {
//! let voice = Voice::new(&BandwidthConfig::from_env()?)?;
//! let call = voice
//!     .create_call(
//!         CreateCallInput::builder()
//!             .application_id("app-1".to_string())
//!             .from("+15555551212".to_string())
//!             .to("+15555551313".to_string())
//!             .answer_url("https://example.com/answer".to_string())
//!             .build(),
//!     )
//!     .await?;
//! println!("{:?}", call.call_id);
//! # Ok(())
//! # }
//! ```

mod call;
mod conference;
mod recording;
mod transcription;

pub use call::{
    Call, CallState, CreateCallInput, PauseRecordingInput, RecordingState, UpdateCallInput,
};
pub use conference::{
    Conference, ConferenceMember, FindAllConferencesInput, UpdateConferenceInput,
    UpdateConferenceMemberInput,
};
pub use recording::{FindAllRecordingsInput, Recording};
pub use transcription::{RequestTranscriptionInput, Transcript};

use std::sync::Arc;

use crate::config::BandwidthConfig;
use crate::error::Result;
use crate::transport::{HttpTransport, Transport};

/// Client for the Voice API of one account.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct Voice {
    transport: Arc<dyn Transport>,
}

impl Voice {
    pub fn new(config: &BandwidthConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(
            &config.voice_base_url,
            &config.account_id,
            config.username.clone(),
            config.password.clone(),
            config.timeout,
        )?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Build on any [`Transport`], e.g. a recording fake in tests.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

impl std::fmt::Debug for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Voice").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use reqwest::Method;

    use super::*;
    use crate::error::BandwidthError;
    use crate::transport::{ApiRequest, RequestBody};

    /// Records every request and answers with a canned body.
    struct RecordingTransport {
        seen: Mutex<Vec<ApiRequest>>,
        body: &'static str,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(&self, request: ApiRequest) -> Result<Vec<u8>> {
            self.seen.lock().unwrap().push(request);
            Ok(self.body.as_bytes().to_vec())
        }
    }

    fn voice_with(body: &'static str) -> (Voice, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport {
            seen: Mutex::new(Vec::new()),
            body,
        });
        (Voice::with_transport(transport.clone()), transport)
    }

    #[tokio::test]
    async fn find_call_issues_get_for_call_path() {
        let (voice, transport) = voice_with(r#"{"callId":"c-1"}"#);
        let call = voice.find_call("c-1").await.unwrap();
        assert_eq!(call.call_id.as_deref(), Some("c-1"));

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].method, Method::GET);
        assert_eq!(seen[0].path(), "/calls/c-1");
        assert_eq!(seen[0].body, None);
    }

    #[tokio::test]
    async fn update_call_bxml_sends_rendered_document() {
        let (voice, transport) = voice_with("");
        voice
            .update_call_bxml("c-1", &[crate::bxml::Hangup {}.into()])
            .await
            .unwrap();

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].method, Method::PUT);
        assert_eq!(seen[0].path(), "/calls/c-1/bxml");
        assert_eq!(
            seen[0].body,
            Some(RequestBody::Xml(
                r#"<?xml version="1.0" encoding="UTF-8"?><Response><Hangup></Hangup></Response>"#
                    .to_string()
            ))
        );
    }

    #[test]
    fn new_rejects_incomplete_config() {
        let err = Voice::new(&BandwidthConfig::new("", "user", "pass")).unwrap_err();
        assert!(matches!(err, BandwidthError::Configuration(_)));
    }
}
