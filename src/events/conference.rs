//! Conference callbacks, delivered to the `conferenceEventUrl` of the
//! `<Conference>` verb that created the conference.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceCreatedEvent {
    pub conference_id: Option<String>,
    pub name: Option<String>,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceMemberJoinEvent {
    pub conference_id: Option<String>,
    pub name: Option<String>,
    pub call_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceMemberExitEvent {
    pub conference_id: Option<String>,
    pub name: Option<String>,
    pub call_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceCompletedEvent {
    pub conference_id: Option<String>,
    pub name: Option<String>,
    pub tag: Option<String>,
}

/// Sent after a conference update with a `redirectUrl`; the response may be BXML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceRedirectEvent {
    pub conference_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceRecordingAvailableEvent {
    pub conference_id: Option<String>,
    pub name: Option<String>,
    pub account_id: Option<String>,
    pub recording_id: Option<String>,
    pub channels: Option<u32>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    /// ISO-8601 duration, e.g. `PT13.67S`.
    pub duration: Option<String>,
    pub file_format: Option<String>,
    pub media_url: Option<String>,
    pub tag: Option<String>,
    pub status: Option<String>,
}
