use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::debug;

use super::Voice;
use crate::bxml::{self, Verb};
use crate::error::Result;
use crate::transport::{execute, fetch, require_id, ApiRequest};

/// A phone call as reported by the Voice API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub account_id: Option<String>,
    pub answer_fallback_method: Option<String>,
    pub answer_fallback_url: Option<String>,
    pub answer_method: Option<String>,
    pub answer_time: Option<DateTime<Utc>>,
    pub answer_url: Option<String>,
    pub application_id: Option<String>,
    pub callback_timeout: Option<f64>,
    pub call_id: Option<String>,
    pub call_timeout: Option<f64>,
    pub call_url: Option<String>,
    pub direction: Option<String>,
    pub disconnect_cause: Option<String>,
    pub disconnect_method: Option<String>,
    pub disconnect_url: Option<String>,
    pub end_time: Option<DateTime<Utc>>,
    pub error_message: Option<String>,
    pub error_id: Option<String>,
    pub fallback_password: Option<String>,
    pub fallback_username: Option<String>,
    pub from: Option<String>,
    pub password: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub tag: Option<String>,
    pub to: Option<String>,
    pub username: Option<String>,
}

/// Parameters for [`Voice::create_call`].
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCallInput {
    /// E.164 number on the account the call comes from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// E.164 number (or SIP URI) to call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    /// Receives the `answer` event; must return the first BXML document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_fallback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_fallback_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disconnect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disconnect_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_password: Option<String>,
    /// Seconds, 1-300. Server default is 30.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_timeout: Option<f64>,
    /// Seconds, 1-25. Server default is 15.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_timeout: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Target state for [`UpdateCallInput::state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CallState {
    /// Redirect the call.
    Active,
    /// Hang up.
    Completed,
}

/// Parameters for [`Voice::update_call`]. `call_id` selects the call and is
/// never sent in the body.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCallInput {
    #[serde(skip)]
    #[builder(into)]
    pub call_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CallState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_fallback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_fallback_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RecordingState {
    Paused,
    Recording,
}

/// Parameters for [`Voice::pause_recording`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PauseRecordingInput {
    #[serde(skip)]
    pub call_id: String,
    pub state: RecordingState,
}

impl PauseRecordingInput {
    pub fn pause(call_id: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            state: RecordingState::Paused,
        }
    }

    pub fn resume(call_id: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            state: RecordingState::Recording,
        }
    }
}

impl Voice {
    /// Place a new outbound call.
    pub async fn create_call(&self, input: CreateCallInput) -> Result<Call> {
        let call: Call = fetch(
            self.transport.as_ref(),
            ApiRequest::post(["calls"]).json(&input),
            "failed to create call".to_string(),
        )
        .await?;
        debug!(call_id = ?call.call_id, "created call");
        Ok(call)
    }

    /// Fetch the current state of a call.
    pub async fn find_call(&self, call_id: &str) -> Result<Call> {
        let call_id = require_id("call_id", call_id)?;
        fetch(
            self.transport.as_ref(),
            Ok(ApiRequest::get(["calls", call_id])),
            format!("unable to find call, {call_id}"),
        )
        .await
    }

    /// Redirect or hang up an active call.
    pub async fn update_call(&self, input: UpdateCallInput) -> Result<()> {
        let call_id = require_id("call_id", &input.call_id)?;
        execute(
            self.transport.as_ref(),
            ApiRequest::post(["calls", call_id]).json(&input),
            format!("failed to update call, {call_id}"),
        )
        .await
    }

    /// Replace the BXML executing on an active call.
    pub async fn update_call_bxml(&self, call_id: &str, verbs: &[Verb]) -> Result<()> {
        let call_id = require_id("call_id", call_id)?;
        let request = bxml::to_string(verbs)
            .map(|document| ApiRequest::put(["calls", call_id, "bxml"]).xml(document));
        execute(
            self.transport.as_ref(),
            request,
            format!("failed to update BXML of call, {call_id}"),
        )
        .await
    }

    /// Pause or resume the recording running on a call.
    pub async fn pause_recording(&self, input: PauseRecordingInput) -> Result<()> {
        let call_id = require_id("call_id", &input.call_id)?;
        execute(
            self.transport.as_ref(),
            ApiRequest::put(["calls", call_id, "recording"]).json(&input),
            format!("failed to set recording state of call, {call_id}"),
        )
        .await
    }
}
