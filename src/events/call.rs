//! Call lifecycle callbacks.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Sent when an outbound call is answered. The response may be BXML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEvent {
    pub account_id: Option<String>,
    pub application_id: Option<String>,
    pub to: Option<String>,
    pub from: Option<String>,
    pub direction: Option<String>,
    pub call_id: Option<String>,
    pub call_url: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub answer_time: Option<DateTime<Utc>>,
    pub tag: Option<String>,
}

/// Sent when a call ends, whatever the reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisconnectEvent {
    pub account_id: Option<String>,
    pub application_id: Option<String>,
    pub to: Option<String>,
    pub from: Option<String>,
    pub direction: Option<String>,
    pub call_id: Option<String>,
    pub call_url: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub answer_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    /// `hangup`, `busy`, `timeout`, `cancel`, `rejected`, `callback-error`, ...
    pub cause: Option<String>,
    pub error_message: Option<String>,
    pub error_id: Option<String>,
    pub tag: Option<String>,
}

/// Sent when an inbound call arrives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateEvent {
    pub account_id: Option<String>,
    pub application_id: Option<String>,
    pub to: Option<String>,
    pub from: Option<String>,
    pub direction: Option<String>,
    pub call_id: Option<String>,
    pub call_url: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    /// Raw SIP Diversion header, when present.
    pub diversion: Option<String>,
}

/// Sent when the `<Gather>` verb completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatherEvent {
    pub account_id: Option<String>,
    pub application_id: Option<String>,
    pub to: Option<String>,
    pub from: Option<String>,
    pub direction: Option<String>,
    pub call_id: Option<String>,
    pub parent_call_id: Option<String>,
    pub call_url: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub answer_time: Option<DateTime<Utc>>,
    pub tag: Option<String>,
    pub digits: Option<String>,
    pub terminating_digit: Option<String>,
    pub transfer_caller_id: Option<String>,
    pub transfer_to: Option<String>,
}

/// Sent to the redirect URL after a `<Redirect>` verb or a call update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectEvent {
    pub account_id: Option<String>,
    pub application_id: Option<String>,
    pub to: Option<String>,
    pub from: Option<String>,
    pub direction: Option<String>,
    pub call_id: Option<String>,
    pub parent_call_id: Option<String>,
    pub call_url: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub answer_time: Option<DateTime<Utc>>,
    pub tag: Option<String>,
    pub transfer_caller_id: Option<String>,
    pub transfer_to: Option<String>,
}

/// Sent to the A-leg when a `<Bridge>` ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeCompleteEvent {
    pub account_id: Option<String>,
    pub application_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub direction: Option<String>,
    pub call_id: Option<String>,
    pub call_url: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub answer_time: Option<DateTime<Utc>>,
    pub tag: Option<String>,
    pub cause: Option<String>,
    pub error_message: Option<String>,
    pub error_id: Option<String>,
}

/// Sent to the B-leg when the A-leg leaves a `<Bridge>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeTargetCompleteEvent {
    pub account_id: Option<String>,
    pub application_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub direction: Option<String>,
    pub call_id: Option<String>,
    pub call_url: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub answer_time: Option<DateTime<Utc>>,
    pub tag: Option<String>,
}

/// Sent when the transferred leg of a `<Transfer>` answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferAnswerEvent {
    pub account_id: Option<String>,
    pub application_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub direction: Option<String>,
    pub call_id: Option<String>,
    pub parent_call_id: Option<String>,
    pub call_url: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub answer_time: Option<DateTime<Utc>>,
    pub tag: Option<String>,
    pub transfer_caller_id: Option<String>,
    pub transfer_to: Option<String>,
}

/// Sent to the original leg when a `<Transfer>` ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferCompleteEvent {
    pub account_id: Option<String>,
    pub application_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub direction: Option<String>,
    pub call_id: Option<String>,
    pub call_url: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub answer_time: Option<DateTime<Utc>>,
    pub tag: Option<String>,
    pub transfer_caller_id: Option<String>,
    pub transfer_to: Option<String>,
    pub cause: Option<String>,
    pub error_message: Option<String>,
    pub error_id: Option<String>,
}

/// Sent when the transferred leg hangs up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferDisconnectEvent {
    pub from: Option<String>,
    pub to: Option<String>,
    pub direction: Option<String>,
    pub call_id: Option<String>,
    pub parent_call_id: Option<String>,
    pub call_url: Option<String>,
    pub tag: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub answer_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub transfer_caller_id: Option<String>,
    pub transfer_to: Option<String>,
    pub cause: Option<String>,
    pub error_message: Option<String>,
    pub error_id: Option<String>,
}
