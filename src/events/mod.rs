//! Inbound callback events and the dispatcher that decodes them.
//!
//! The platform POSTs a JSON document to an application-hosted URL whenever
//! something happens on a call or conference. Hand the raw body to
//! [`parse`] and match on the returned [`Event`]:
//!
//! ```
//! use bandwidth::events::{self, Event};
//!
//! let body = br#"{"eventType":"answer","callId":"c-1","tag":"greeting"}"#;
//! match events::parse(body)? {
//!     Event::Answer(answer) => assert_eq!(answer.call_id.as_deref(), Some("c-1")),
//!     other => panic!("unexpected {:?}", other.kind()),
//! }
//! # Ok::<(), bandwidth::error::BandwidthError>(())
//! ```

pub mod call;
pub mod conference;
pub mod recording;

pub use call::*;
pub use conference::*;
pub use recording::*;

use std::str::FromStr;
use std::sync::OnceLock;

use regex::bytes::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::debug;

use crate::error::{BandwidthError, Result};

/// Every `eventType` the platform sends, and the only place the wire strings
/// are defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum EventKind {
    Answer,
    Disconnect,
    Gather,
    Initiate,
    BridgeComplete,
    BridgeTargetComplete,
    ConferenceCreated,
    ConferenceMemberJoin,
    ConferenceMemberExit,
    ConferenceCompleted,
    ConferenceRedirect,
    ConferenceRecordingAvailable,
    RecordComplete,
    RecordingAvailable,
    TranscriptionAvailable,
    Redirect,
    TransferAnswer,
    TransferComplete,
    TransferDisconnect,
}

impl EventKind {
    /// The `eventType` value on the wire.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A decoded callback event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Answer(AnswerEvent),
    Disconnect(DisconnectEvent),
    Gather(GatherEvent),
    Initiate(InitiateEvent),
    BridgeComplete(BridgeCompleteEvent),
    BridgeTargetComplete(BridgeTargetCompleteEvent),
    ConferenceCreated(ConferenceCreatedEvent),
    ConferenceMemberJoin(ConferenceMemberJoinEvent),
    ConferenceMemberExit(ConferenceMemberExitEvent),
    ConferenceCompleted(ConferenceCompletedEvent),
    ConferenceRedirect(ConferenceRedirectEvent),
    ConferenceRecordingAvailable(ConferenceRecordingAvailableEvent),
    RecordComplete(RecordCompleteEvent),
    RecordingAvailable(RecordingAvailableEvent),
    TranscriptionAvailable(TranscriptionAvailableEvent),
    Redirect(RedirectEvent),
    TransferAnswer(TransferAnswerEvent),
    TransferComplete(TransferCompleteEvent),
    TransferDisconnect(TransferDisconnectEvent),
}

impl Event {
    /// The discriminant this event was decoded from.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Answer(_) => EventKind::Answer,
            Self::Disconnect(_) => EventKind::Disconnect,
            Self::Gather(_) => EventKind::Gather,
            Self::Initiate(_) => EventKind::Initiate,
            Self::BridgeComplete(_) => EventKind::BridgeComplete,
            Self::BridgeTargetComplete(_) => EventKind::BridgeTargetComplete,
            Self::ConferenceCreated(_) => EventKind::ConferenceCreated,
            Self::ConferenceMemberJoin(_) => EventKind::ConferenceMemberJoin,
            Self::ConferenceMemberExit(_) => EventKind::ConferenceMemberExit,
            Self::ConferenceCompleted(_) => EventKind::ConferenceCompleted,
            Self::ConferenceRedirect(_) => EventKind::ConferenceRedirect,
            Self::ConferenceRecordingAvailable(_) => EventKind::ConferenceRecordingAvailable,
            Self::RecordComplete(_) => EventKind::RecordComplete,
            Self::RecordingAvailable(_) => EventKind::RecordingAvailable,
            Self::TranscriptionAvailable(_) => EventKind::TranscriptionAvailable,
            Self::Redirect(_) => EventKind::Redirect,
            Self::TransferAnswer(_) => EventKind::TransferAnswer,
            Self::TransferComplete(_) => EventKind::TransferComplete,
            Self::TransferDisconnect(_) => EventKind::TransferDisconnect,
        }
    }

    /// The call the event refers to. Conference lifecycle events that are not
    /// about a specific member have none.
    pub fn call_id(&self) -> Option<&str> {
        match self {
            Self::Answer(e) => e.call_id.as_deref(),
            Self::Disconnect(e) => e.call_id.as_deref(),
            Self::Gather(e) => e.call_id.as_deref(),
            Self::Initiate(e) => e.call_id.as_deref(),
            Self::BridgeComplete(e) => e.call_id.as_deref(),
            Self::BridgeTargetComplete(e) => e.call_id.as_deref(),
            Self::ConferenceMemberJoin(e) => e.call_id.as_deref(),
            Self::ConferenceMemberExit(e) => e.call_id.as_deref(),
            Self::RecordComplete(e) => e.call_id.as_deref(),
            Self::RecordingAvailable(e) => e.call_id.as_deref(),
            Self::TranscriptionAvailable(e) => e.call_id.as_deref(),
            Self::Redirect(e) => e.call_id.as_deref(),
            Self::TransferAnswer(e) => e.call_id.as_deref(),
            Self::TransferComplete(e) => e.call_id.as_deref(),
            Self::TransferDisconnect(e) => e.call_id.as_deref(),
            Self::ConferenceCreated(_)
            | Self::ConferenceCompleted(_)
            | Self::ConferenceRedirect(_)
            | Self::ConferenceRecordingAvailable(_) => None,
        }
    }

    /// The application tag carried by the event, if any.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Answer(e) => e.tag.as_deref(),
            Self::Disconnect(e) => e.tag.as_deref(),
            Self::Gather(e) => e.tag.as_deref(),
            Self::BridgeComplete(e) => e.tag.as_deref(),
            Self::BridgeTargetComplete(e) => e.tag.as_deref(),
            Self::ConferenceCreated(e) => e.tag.as_deref(),
            Self::ConferenceMemberJoin(e) => e.tag.as_deref(),
            Self::ConferenceMemberExit(e) => e.tag.as_deref(),
            Self::ConferenceCompleted(e) => e.tag.as_deref(),
            Self::ConferenceRecordingAvailable(e) => e.tag.as_deref(),
            Self::RecordComplete(e) => e.tag.as_deref(),
            Self::RecordingAvailable(e) => e.tag.as_deref(),
            Self::TranscriptionAvailable(e) => e.tag.as_deref(),
            Self::Redirect(e) => e.tag.as_deref(),
            Self::TransferAnswer(e) => e.tag.as_deref(),
            Self::TransferComplete(e) => e.tag.as_deref(),
            Self::TransferDisconnect(e) => e.tag.as_deref(),
            Self::Initiate(_) | Self::ConferenceRedirect(_) => None,
        }
    }
}

impl FromStr for Event {
    type Err = BandwidthError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s.as_bytes())
    }
}

/// Decode one callback payload.
///
/// The `eventType` discriminant is read first, without assuming anything else
/// about the document; the full payload is then decoded into the matching
/// variant. Fields the variant does not model are ignored.
///
/// # Errors
///
/// * [`BandwidthError::UnknownEventType`] when `eventType` is missing, empty or
///   not one of [`EventKind`] (missing is reported as an empty string).
/// * [`BandwidthError::MalformedPayload`] when the discriminant is known but
///   the payload does not decode into that variant.
pub fn parse(payload: &[u8]) -> Result<Event> {
    let discriminant = discriminant(payload);
    let kind = EventKind::from_str(&discriminant)
        .map_err(|_| BandwidthError::UnknownEventType(discriminant.clone()))?;

    debug!(event_type = kind.as_str(), "Decoding Bandwidth callback");

    Ok(match kind {
        EventKind::Answer => Event::Answer(decode(kind, payload)?),
        EventKind::Disconnect => Event::Disconnect(decode(kind, payload)?),
        EventKind::Gather => Event::Gather(decode(kind, payload)?),
        EventKind::Initiate => Event::Initiate(decode(kind, payload)?),
        EventKind::BridgeComplete => Event::BridgeComplete(decode(kind, payload)?),
        EventKind::BridgeTargetComplete => Event::BridgeTargetComplete(decode(kind, payload)?),
        EventKind::ConferenceCreated => Event::ConferenceCreated(decode(kind, payload)?),
        EventKind::ConferenceMemberJoin => Event::ConferenceMemberJoin(decode(kind, payload)?),
        EventKind::ConferenceMemberExit => Event::ConferenceMemberExit(decode(kind, payload)?),
        EventKind::ConferenceCompleted => Event::ConferenceCompleted(decode(kind, payload)?),
        EventKind::ConferenceRedirect => Event::ConferenceRedirect(decode(kind, payload)?),
        EventKind::ConferenceRecordingAvailable => {
            Event::ConferenceRecordingAvailable(decode(kind, payload)?)
        }
        EventKind::RecordComplete => Event::RecordComplete(decode(kind, payload)?),
        EventKind::RecordingAvailable => Event::RecordingAvailable(decode(kind, payload)?),
        EventKind::TranscriptionAvailable => Event::TranscriptionAvailable(decode(kind, payload)?),
        EventKind::Redirect => Event::Redirect(decode(kind, payload)?),
        EventKind::TransferAnswer => Event::TransferAnswer(decode(kind, payload)?),
        EventKind::TransferComplete => Event::TransferComplete(decode(kind, payload)?),
        EventKind::TransferDisconnect => Event::TransferDisconnect(decode(kind, payload)?),
    })
}

fn decode<T: DeserializeOwned>(kind: EventKind, payload: &[u8]) -> Result<T> {
    serde_json::from_slice(payload).map_err(|source| BandwidthError::MalformedPayload {
        event_type: kind.as_str().to_string(),
        source,
    })
}

/// Top-level `eventType` of a JSON object, or an empty string when there is
/// none. Valid JSON that is not an object has no discriminant.
///
/// Payloads that are not valid JSON fall back to a textual scan so that a
/// recognisable but broken event is reported as malformed rather than unknown.
fn discriminant(payload: &[u8]) -> String {
    match serde_json::from_slice::<Value>(payload) {
        Ok(Value::Object(fields)) => fields
            .get("eventType")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        Ok(_) => String::new(),
        Err(_) => event_type_pattern()
            .captures(payload)
            .and_then(|caps| caps.get(1))
            .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
            .unwrap_or_default(),
    }
}

fn event_type_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#""eventType"\s*:\s*"([^"]*)""#).expect("eventType pattern is valid")
    })
}
