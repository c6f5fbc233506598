use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::debug;

use super::WebRtc;
use crate::error::Result;
use crate::transport::{execute, fetch, require_id, ApiRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum PublishPermission {
    Audio,
    Video,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: Option<String>,
    pub callback_url: Option<String>,
    pub publish_permissions: Option<Vec<PublishPermission>>,
    /// Sessions this participant belongs to.
    pub sessions: Option<Vec<String>>,
    pub subscriptions: Option<Subscriptions>,
    pub tag: Option<String>,
}

/// Whose media a participant receives inside a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriptions {
    /// Subscribe to every participant of this session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<ParticipantSubscription>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantSubscription {
    pub participant_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParticipantInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_permissions: Option<Vec<PublishPermission>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<Subscriptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// A new participant plus the device token it connects with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParticipantOutput {
    pub participant: Option<Participant>,
    pub token: Option<String>,
}

impl WebRtc {
    pub async fn create_participant(
        &self,
        input: CreateParticipantInput,
    ) -> Result<CreateParticipantOutput> {
        let output: CreateParticipantOutput = fetch(
            self.transport.as_ref(),
            ApiRequest::post(["participants"]).json(&input),
            "failed to create participant".to_string(),
        )
        .await?;
        debug!(
            participant_id = ?output.participant.as_ref().and_then(|p| p.id.as_deref()),
            "created participant"
        );
        Ok(output)
    }

    pub async fn find_participant(&self, participant_id: &str) -> Result<Participant> {
        let participant_id = require_id("participant_id", participant_id)?;
        fetch(
            self.transport.as_ref(),
            Ok(ApiRequest::get(["participants", participant_id])),
            format!("unable to find participant, {participant_id}"),
        )
        .await
    }

    /// Delete a participant, removing it from every session it is in.
    pub async fn delete_participant(&self, participant_id: &str) -> Result<()> {
        let participant_id = require_id("participant_id", participant_id)?;
        execute(
            self.transport.as_ref(),
            Ok(ApiRequest::delete(["participants", participant_id])),
            format!("unable to delete participant, {participant_id}"),
        )
        .await
    }
}
