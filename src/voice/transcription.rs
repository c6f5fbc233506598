use bon::Builder;
use serde::{Deserialize, Serialize};

use super::Voice;
use crate::error::Result;
use crate::transport::{execute, fetch, require_id, ApiRequest};

/// One transcript of a recording.
///
/// Multi-channel recordings produce two: the caller/called party first, then
/// the `<PlayAudio>`/`<SpeakSentence>` side (or the B-leg of a transfer).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    pub text: Option<String>,
    pub confidence: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct TranscriptionContent {
    #[serde(default)]
    transcripts: Vec<Transcript>,
}

/// Parameters for [`Voice::request_transcription`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestTranscriptionInput {
    #[serde(skip)]
    #[builder(into)]
    pub call_id: String,
    #[serde(skip)]
    #[builder(into)]
    pub recording_id: String,
    /// Receives the `transcriptionAvailable` event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Seconds, 1-25.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_timeout: Option<u32>,
}

fn transcription_path<'a>(call_id: &'a str, recording_id: &'a str) -> [&'a str; 5] {
    ["calls", call_id, "recordings", recording_id, "transcription"]
}

impl Voice {
    /// Ask for a recording to be transcribed. Only recordings between 500 ms
    /// and 4 hours long can be transcribed.
    pub async fn request_transcription(&self, input: RequestTranscriptionInput) -> Result<()> {
        let call_id = require_id("call_id", &input.call_id)?;
        let recording_id = require_id("recording_id", &input.recording_id)?;
        execute(
            self.transport.as_ref(),
            ApiRequest::post(transcription_path(call_id, recording_id)).json(&input),
            format!("failed to request transcription for call, {call_id}, and recording, {recording_id}"),
        )
        .await
    }

    pub async fn download_transcription(
        &self,
        call_id: &str,
        recording_id: &str,
    ) -> Result<Vec<Transcript>> {
        let call_id = require_id("call_id", call_id)?;
        let recording_id = require_id("recording_id", recording_id)?;
        let content: TranscriptionContent = fetch(
            self.transport.as_ref(),
            Ok(ApiRequest::get(transcription_path(call_id, recording_id))),
            format!("unable to download transcription for call, {call_id}, and recording, {recording_id}"),
        )
        .await?;
        Ok(content.transcripts)
    }

    pub async fn delete_transcription(&self, call_id: &str, recording_id: &str) -> Result<()> {
        let call_id = require_id("call_id", call_id)?;
        let recording_id = require_id("recording_id", recording_id)?;
        execute(
            self.transport.as_ref(),
            Ok(ApiRequest::delete(transcription_path(call_id, recording_id))),
            format!("unable to delete transcription for call, {call_id}, and recording, {recording_id}"),
        )
        .await
    }
}
