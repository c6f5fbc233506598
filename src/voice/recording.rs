use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Voice;
use crate::error::Result;
use crate::events::Transcription;
use crate::transport::{execute, fetch, require_id, ApiRequest};

/// Metadata of one call recording.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recording {
    pub account_id: Option<String>,
    pub application_id: Option<String>,
    pub call_id: Option<String>,
    pub parent_call_id: Option<String>,
    pub recording_id: Option<String>,
    pub to: Option<String>,
    pub from: Option<String>,
    pub transfer_caller_id: Option<String>,
    pub transfer_to: Option<String>,
    /// ISO-8601 duration, e.g. `PT13.67S`.
    pub duration: Option<String>,
    pub direction: Option<String>,
    pub channels: Option<u32>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub file_format: Option<String>,
    pub status: Option<String>,
    pub media_url: Option<String>,
    pub transcription: Option<Transcription>,
}

/// Filters for [`Voice::find_all_recordings`]; unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct FindAllRecordingsInput {
    pub from: Option<String>,
    pub to: Option<String>,
    pub min_start_time: Option<DateTime<Utc>>,
    pub max_start_time: Option<DateTime<Utc>>,
}

impl FindAllRecordingsInput {
    fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .query_opt("from", self.from.as_deref())
            .query_opt("to", self.to.as_deref())
            .query_opt("minStartTime", self.min_start_time.map(|t| t.to_rfc3339()))
            .query_opt("maxStartTime", self.max_start_time.map(|t| t.to_rfc3339()))
    }
}

impl Voice {
    /// List recordings across the whole account.
    pub async fn find_all_recordings(&self, input: FindAllRecordingsInput) -> Result<Vec<Recording>> {
        fetch(
            self.transport.as_ref(),
            Ok(input.apply(ApiRequest::get(["recordings"]))),
            "failed to fetch recordings".to_string(),
        )
        .await
    }

    pub async fn find_all_call_recordings(&self, call_id: &str) -> Result<Vec<Recording>> {
        let call_id = require_id("call_id", call_id)?;
        fetch(
            self.transport.as_ref(),
            Ok(ApiRequest::get(["calls", call_id, "recordings"])),
            format!("failed to fetch recordings of call, {call_id}"),
        )
        .await
    }

    pub async fn find_recording(&self, call_id: &str, recording_id: &str) -> Result<Recording> {
        let call_id = require_id("call_id", call_id)?;
        let recording_id = require_id("recording_id", recording_id)?;
        fetch(
            self.transport.as_ref(),
            Ok(ApiRequest::get(["calls", call_id, "recordings", recording_id])),
            format!("unable to find recording, {recording_id}, of call, {call_id}"),
        )
        .await
    }

    /// Delete a recording along with its media and transcription.
    pub async fn delete_recording(&self, call_id: &str, recording_id: &str) -> Result<()> {
        let call_id = require_id("call_id", call_id)?;
        let recording_id = require_id("recording_id", recording_id)?;
        execute(
            self.transport.as_ref(),
            Ok(ApiRequest::delete(["calls", call_id, "recordings", recording_id])),
            format!("unable to delete recording, {recording_id}, of call, {call_id}"),
        )
        .await
    }
}
