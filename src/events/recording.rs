//! Recording and transcription callbacks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sent when a `<Record>` verb finishes capturing audio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCompleteEvent {
    pub account_id: Option<String>,
    pub application_id: Option<String>,
    pub to: Option<String>,
    pub from: Option<String>,
    pub direction: Option<String>,
    pub call_id: Option<String>,
    pub parent_call_id: Option<String>,
    pub recording_id: Option<String>,
    pub call_url: Option<String>,
    pub media_url: Option<String>,
    pub answer_time: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration: Option<String>,
    pub channels: Option<u32>,
    pub file_format: Option<String>,
    pub tag: Option<String>,
    pub transfer_caller_id: Option<String>,
    pub transfer_to: Option<String>,
}

/// Sent once a recording has been processed and its media can be downloaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingAvailableEvent {
    pub account_id: Option<String>,
    pub application_id: Option<String>,
    pub to: Option<String>,
    pub from: Option<String>,
    pub direction: Option<String>,
    pub call_id: Option<String>,
    pub parent_call_id: Option<String>,
    pub recording_id: Option<String>,
    pub channels: Option<u32>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration: Option<String>,
    pub file_format: Option<String>,
    pub call_url: Option<String>,
    pub media_url: Option<String>,
    pub tag: Option<String>,
    /// `complete`, `partial` or `error`.
    pub status: Option<String>,
    pub transfer_caller_id: Option<String>,
    pub transfer_to: Option<String>,
}

/// Transcription metadata attached to recordings and transcription callbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_time: Option<DateTime<Utc>>,
}

/// Sent when a requested transcription is ready.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptionAvailableEvent {
    pub account_id: Option<String>,
    pub application_id: Option<String>,
    pub call_id: Option<String>,
    pub parent_call_id: Option<String>,
    pub recording_id: Option<String>,
    pub to: Option<String>,
    pub from: Option<String>,
    pub direction: Option<String>,
    pub tag: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration: Option<String>,
    pub file_format: Option<String>,
    pub call_url: Option<String>,
    pub media_url: Option<String>,
    pub transcription: Option<Transcription>,
    pub transfer_caller_id: Option<String>,
    pub transfer_to: Option<String>,
}
