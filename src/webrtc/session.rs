use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Subscriptions, WebRtc};
use crate::error::Result;
use crate::transport::{execute, fetch, require_id, ApiRequest};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Option<String>,
    pub tag: Option<String>,
    /// Ids of the participants currently in the session.
    pub participants: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Parameters for [`WebRtc::add_participant`]. Only `subscriptions` is sent
/// as the body; without it the participant subscribes to everyone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddParticipantInput {
    pub session_id: String,
    pub participant_id: String,
    pub subscriptions: Option<Subscriptions>,
}

impl WebRtc {
    /// Create a session. Set everything needed up front; sessions cannot be updated.
    pub async fn create_session(&self, input: CreateSessionInput) -> Result<Session> {
        let session: Session = fetch(
            self.transport.as_ref(),
            ApiRequest::post(["sessions"]).json(&input),
            "unable to create session".to_string(),
        )
        .await?;
        debug!(session_id = ?session.id, "created session");
        Ok(session)
    }

    pub async fn find_session(&self, session_id: &str) -> Result<Session> {
        let session_id = require_id("session_id", session_id)?;
        fetch(
            self.transport.as_ref(),
            Ok(ApiRequest::get(["sessions", session_id])),
            format!("unable to find session, {session_id}"),
        )
        .await
    }

    pub async fn delete_session(&self, session_id: &str) -> Result<()> {
        let session_id = require_id("session_id", session_id)?;
        execute(
            self.transport.as_ref(),
            Ok(ApiRequest::delete(["sessions", session_id])),
            format!("unable to delete session, {session_id}"),
        )
        .await
    }

    pub async fn add_participant(&self, input: AddParticipantInput) -> Result<()> {
        let session_id = require_id("session_id", &input.session_id)?;
        let participant_id = require_id("participant_id", &input.participant_id)?;
        let request = ApiRequest::put(["sessions", session_id, "participants", participant_id]);
        let request = match &input.subscriptions {
            Some(subscriptions) => request.json(subscriptions),
            None => Ok(request),
        };
        execute(
            self.transport.as_ref(),
            request,
            format!("unable to add participant, {participant_id}, to session, {session_id}"),
        )
        .await
    }

    pub async fn remove_participant(&self, session_id: &str, participant_id: &str) -> Result<()> {
        let session_id = require_id("session_id", session_id)?;
        let participant_id = require_id("participant_id", participant_id)?;
        execute(
            self.transport.as_ref(),
            Ok(ApiRequest::delete(["sessions", session_id, "participants", participant_id])),
            format!("unable to remove participant, {participant_id}, from session, {session_id}"),
        )
        .await
    }
}
