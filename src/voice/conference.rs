use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Voice;
use crate::error::Result;
use crate::transport::{execute, fetch, require_id, ApiRequest};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    pub id: Option<String>,
    pub name: Option<String>,
    pub created_time: Option<DateTime<Utc>>,
    pub completed_time: Option<DateTime<Utc>>,
    pub conference_event_url: Option<String>,
    pub conference_event_method: Option<String>,
    pub tag: Option<String>,
    /// Only populated by [`Voice::find_conference`].
    pub active_members: Option<Vec<ConferenceMember>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceMember {
    pub call_id: Option<String>,
    pub conference_id: Option<String>,
    pub member_url: Option<String>,
    pub mute: Option<bool>,
    pub hold: Option<bool>,
    pub call_ids_to_coach: Option<Vec<String>>,
}

/// Filters for [`Voice::find_all_conferences`]; unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct FindAllConferencesInput {
    /// 1-1000, server default 1000.
    pub page_size: Option<u32>,
    pub name: Option<String>,
    pub min_created_time: Option<DateTime<Utc>>,
    pub max_created_time: Option<DateTime<Utc>>,
}

impl FindAllConferencesInput {
    fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .query_opt("pageSize", self.page_size)
            .query_opt("name", self.name.as_deref())
            .query_opt("minCreatedTime", self.min_created_time.map(|t| t.to_rfc3339()))
            .query_opt("maxCreatedTime", self.max_created_time.map(|t| t.to_rfc3339()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConferenceInput {
    #[serde(skip)]
    #[builder(into)]
    pub conference_id: String,
    /// `completed` ends the conference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Receives the `conferenceRedirect` event. Required when status is `active`.
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
}

/// Unset fields leave the member's current setting untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConferenceMemberInput {
    #[serde(skip)]
    #[builder(into)]
    pub conference_id: String,
    #[serde(skip)]
    #[builder(into)]
    pub member_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mute: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_ids_to_coach: Option<Vec<String>>,
}

impl Voice {
    /// List conferences, oldest first. At most 1000 are returned.
    pub async fn find_all_conferences(
        &self,
        input: FindAllConferencesInput,
    ) -> Result<Vec<Conference>> {
        fetch(
            self.transport.as_ref(),
            Ok(input.apply(ApiRequest::get(["conferences"]))),
            "failed to retrieve conferences".to_string(),
        )
        .await
    }

    pub async fn find_conference(&self, conference_id: &str) -> Result<Conference> {
        let conference_id = require_id("conference_id", conference_id)?;
        fetch(
            self.transport.as_ref(),
            Ok(ApiRequest::get(["conferences", conference_id])),
            format!("failed to get conference, {conference_id}"),
        )
        .await
    }

    /// End an active conference or redirect it to new BXML.
    pub async fn update_conference(&self, input: UpdateConferenceInput) -> Result<()> {
        let conference_id = require_id("conference_id", &input.conference_id)?;
        execute(
            self.transport.as_ref(),
            ApiRequest::post(["conferences", conference_id]).json(&input),
            format!("unable to update conference, {conference_id}"),
        )
        .await
    }

    pub async fn find_conference_member(
        &self,
        conference_id: &str,
        member_id: &str,
    ) -> Result<ConferenceMember> {
        let conference_id = require_id("conference_id", conference_id)?;
        let member_id = require_id("member_id", member_id)?;
        fetch(
            self.transport.as_ref(),
            Ok(ApiRequest::get(["conferences", conference_id, "members", member_id])),
            format!("unable to find member, {member_id}, in conference, {conference_id}"),
        )
        .await
    }

    pub async fn update_conference_member(&self, input: UpdateConferenceMemberInput) -> Result<()> {
        let conference_id = require_id("conference_id", &input.conference_id)?;
        let member_id = require_id("member_id", &input.member_id)?;
        execute(
            self.transport.as_ref(),
            ApiRequest::put(["conferences", conference_id, "members", member_id]).json(&input),
            format!("unable to update member, {member_id}, of conference, {conference_id}"),
        )
        .await
    }
}
