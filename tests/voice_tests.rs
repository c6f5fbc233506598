//! Voice facade against a mock HTTP server.

mod common;

use bandwidth::bxml::{Forward, Pause, Verb};
use bandwidth::error::{BandwidthError, ErrorCategory};
use bandwidth::voice::{
    CallState, CreateCallInput, FindAllConferencesInput, FindAllRecordingsInput,
    PauseRecordingInput, RequestTranscriptionInput, UpdateCallInput, UpdateConferenceInput,
    UpdateConferenceMemberInput,
};
use common::{account_path, voice, BASIC_AUTH};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn create_call_posts_input_and_decodes_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(account_path("/calls")))
        .and(header("authorization", BASIC_AUTH))
        .and(body_json(json!({
            "from": "+15555551212",
            "to": "+15555551313",
            "applicationId": "app-1",
            "answerUrl": "https://example.com/answer"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "callId": "c-15ac29a2",
            "applicationId": "app-1",
            "from": "+15555551212",
            "to": "+15555551313",
            "startTime": "2019-06-20T15:54:22.000Z",
            "callTimeout": 30.0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let call = voice(&server)
        .create_call(
            CreateCallInput::builder()
                .from("+15555551212".to_string())
                .to("+15555551313".to_string())
                .application_id("app-1".to_string())
                .answer_url("https://example.com/answer".to_string())
                .build(),
        )
        .await
        .expect("create call");

    assert_eq!(call.call_id.as_deref(), Some("c-15ac29a2"));
    assert_eq!(call.call_timeout, Some(30.0));
    assert!(call.start_time.is_some());
    assert_eq!(call.answer_time, None);
}

#[tokio::test]
async fn find_call_returns_decoded_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(account_path("/calls/c-1")))
        .and(header("authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "callId": "c-1",
            "direction": "outbound",
            "disconnectCause": "hangup"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let call = voice(&server).find_call("c-1").await.expect("find call");
    assert_eq!(call.call_id.as_deref(), Some("c-1"));
    assert_eq!(call.direction.as_deref(), Some("outbound"));
    assert_eq!(call.disconnect_cause.as_deref(), Some("hangup"));
}

#[tokio::test]
async fn find_call_surfaces_remote_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(account_path("/calls/missing")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "id": "x",
            "type": "not-found",
            "description": "no such call"
        })))
        .mount(&server)
        .await;

    let err = voice(&server).find_call("missing").await.unwrap_err();

    assert!(matches!(err, BandwidthError::Context { .. }));
    assert!(err.to_string().starts_with("unable to find call, missing: "));
    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert!(!err.is_retryable());
    let remote = err.remote().expect("remote error");
    assert_eq!(remote.status, 404);
    assert_eq!(remote.id, "x");
    assert_eq!(remote.kind, "not-found");
    assert_eq!(remote.description, "no such call");
}

#[tokio::test]
async fn server_errors_are_retryable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(account_path("/calls/c-1")))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = voice(&server).find_call("c-1").await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Server);
    assert!(err.is_retryable());
    assert_eq!(err.remote().unwrap().description, "upstream unavailable");
}

#[tokio::test]
async fn empty_identifiers_fail_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = voice(&server);
    let err = client.find_call("").await.unwrap_err();
    assert!(matches!(err, BandwidthError::InvalidArgument(msg) if msg == "call_id is required"));

    let err = client.find_recording("c-1", "").await.unwrap_err();
    assert!(matches!(err, BandwidthError::InvalidArgument(msg) if msg == "recording_id is required"));
}

#[tokio::test]
async fn dot_segment_identifiers_never_reach_a_parent_resource() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let client = voice(&server);
    let err = client.delete_recording("c-1", "..").await.unwrap_err();
    assert!(matches!(err, BandwidthError::InvalidArgument(msg) if msg.starts_with("recording_id")));

    let err = client.delete_transcription(".", "r-1").await.unwrap_err();
    assert!(matches!(err, BandwidthError::InvalidArgument(msg) if msg.starts_with("call_id")));

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty(), "{received:?}");
}

#[tokio::test]
async fn wrong_shaped_response_keeps_operation_context() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(account_path("/calls/c-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2])))
        .mount(&server)
        .await;

    let err = voice(&server).find_call("c-1").await.unwrap_err();

    assert!(matches!(err, BandwidthError::Context { .. }), "{err:?}");
    assert!(err.to_string().starts_with("unable to find call, c-1: "));
    assert!(matches!(err.root_cause(), BandwidthError::Json(_)));
}

#[tokio::test]
async fn identifiers_are_percent_encoded_as_path_segments() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(account_path("/calls/a%2Fb%20c")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"callId": "a/b c"})))
        .expect(1)
        .mount(&server)
        .await;

    let call = voice(&server).find_call("a/b c").await.expect("find call");
    assert_eq!(call.call_id.as_deref(), Some("a/b c"));
}

#[tokio::test]
async fn update_call_keeps_call_id_in_path_only() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(account_path("/calls/c-1")))
        .and(body_json(json!({
            "state": "active",
            "redirectUrl": "https://example.com/next"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    voice(&server)
        .update_call(
            UpdateCallInput::builder()
                .call_id("c-1")
                .state(CallState::Active)
                .redirect_url("https://example.com/next".to_string())
                .build(),
        )
        .await
        .expect("update call");
}

#[tokio::test]
async fn update_call_bxml_puts_xml_document() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(account_path("/calls/c-1/bxml")))
        .and(header("content-type", "application/xml; charset=utf-8"))
        .and(body_string(
            r#"<?xml version="1.0" encoding="UTF-8"?><Response><Forward from="+18005551212" to="+18885551212"></Forward><Pause duration="12"></Pause></Response>"#,
        ))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let verbs: Vec<Verb> = vec![
        Forward {
            from: Some("+18005551212".into()),
            to: Some("+18885551212".into()),
            ..Default::default()
        }
        .into(),
        Pause { duration: Some(12) }.into(),
    ];
    voice(&server)
        .update_call_bxml("c-1", &verbs)
        .await
        .expect("update bxml");
}

#[tokio::test]
async fn pause_recording_puts_state() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(account_path("/calls/c-1/recording")))
        .and(body_json(json!({"state": "paused"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    voice(&server)
        .pause_recording(PauseRecordingInput::pause("c-1"))
        .await
        .expect("pause recording");
}

#[tokio::test]
async fn find_all_conferences_sends_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(account_path("/conferences")))
        .and(query_param("name", "standup"))
        .and(query_param("pageSize", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "conf-1", "name": "standup", "createdTime": "2024-01-02T03:04:05Z"},
            {"id": "conf-2", "name": "standup"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let conferences = voice(&server)
        .find_all_conferences(
            FindAllConferencesInput::builder()
                .name("standup".to_string())
                .page_size(5)
                .build(),
        )
        .await
        .expect("conferences");

    assert_eq!(conferences.len(), 2);
    assert_eq!(conferences[0].id.as_deref(), Some("conf-1"));
    assert!(conferences[0].created_time.is_some());
    assert_eq!(conferences[1].created_time, None);
}

#[tokio::test]
async fn conference_and_member_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(account_path("/conferences/conf-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "conf-1",
            "activeMembers": [{"callId": "c-1", "mute": false, "hold": true}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(account_path("/conferences/conf-1")))
        .and(body_json(json!({"status": "completed"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(account_path("/conferences/conf-1/members/c-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "callId": "c-1",
            "conferenceId": "conf-1",
            "callIdsToCoach": ["c-2"]
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(account_path("/conferences/conf-1/members/c-1")))
        .and(body_json(json!({"mute": true})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = voice(&server);

    let conference = client.find_conference("conf-1").await.expect("conference");
    let members = conference.active_members.expect("members");
    assert_eq!(members[0].hold, Some(true));

    client
        .update_conference(
            UpdateConferenceInput::builder()
                .conference_id("conf-1")
                .status("completed".to_string())
                .build(),
        )
        .await
        .expect("update conference");

    let member = client
        .find_conference_member("conf-1", "c-1")
        .await
        .expect("member");
    assert_eq!(member.call_ids_to_coach, Some(vec!["c-2".to_string()]));

    client
        .update_conference_member(
            UpdateConferenceMemberInput::builder()
                .conference_id("conf-1")
                .member_id("c-1")
                .mute(true)
                .build(),
        )
        .await
        .expect("update member");
}

#[tokio::test]
async fn recordings_are_listed_found_and_deleted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(account_path("/recordings")))
        .and(query_param("from", "+15555551212"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"recordingId": "r-1", "callId": "c-1", "fileFormat": "wav"}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(account_path("/calls/c-1/recordings")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"recordingId": "r-1"},
            {"recordingId": "r-2"}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(account_path("/calls/c-1/recordings/r-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recordingId": "r-1",
            "duration": "PT13.67S",
            "status": "complete"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(account_path("/calls/c-1/recordings/r-1")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = voice(&server);

    let all = client
        .find_all_recordings(
            FindAllRecordingsInput::builder()
                .from("+15555551212".to_string())
                .build(),
        )
        .await
        .expect("all recordings");
    assert_eq!(all[0].file_format.as_deref(), Some("wav"));

    let for_call = client.find_all_call_recordings("c-1").await.expect("call recordings");
    assert_eq!(for_call.len(), 2);

    let recording = client.find_recording("c-1", "r-1").await.expect("recording");
    assert_eq!(recording.duration.as_deref(), Some("PT13.67S"));

    client.delete_recording("c-1", "r-1").await.expect("delete");
}

#[tokio::test]
async fn transcription_lifecycle() {
    let server = MockServer::start().await;
    let transcription_path = account_path("/calls/c-1/recordings/r-1/transcription");

    Mock::given(method("POST"))
        .and(path(transcription_path.clone()))
        .and(body_json(json!({"callbackUrl": "https://example.com/transcribed"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(transcription_path.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transcripts": [
                {"text": "Nice talking to you, friend!", "confidence": 0.9},
                {"text": "Thanks for calling.", "confidence": 0.75}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(transcription_path))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = voice(&server);

    client
        .request_transcription(
            RequestTranscriptionInput::builder()
                .call_id("c-1")
                .recording_id("r-1")
                .callback_url("https://example.com/transcribed".to_string())
                .build(),
        )
        .await
        .expect("request transcription");

    let transcripts = client
        .download_transcription("c-1", "r-1")
        .await
        .expect("download transcription");
    assert_eq!(transcripts.len(), 2);
    assert_eq!(transcripts[0].text.as_deref(), Some("Nice talking to you, friend!"));
    assert_eq!(transcripts[1].confidence, Some(0.75));

    client
        .delete_transcription("c-1", "r-1")
        .await
        .expect("delete transcription");
}

#[tokio::test]
async fn slow_responses_hit_the_configured_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(account_path("/calls/c-1")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"callId": "c-1"}))
                .set_delay(std::time::Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = common::test_config(&server).with_timeout(std::time::Duration::from_millis(50));
    let err = bandwidth::voice::Voice::new(&config)
        .unwrap()
        .find_call("c-1")
        .await
        .unwrap_err();

    assert!(matches!(err.root_cause(), BandwidthError::Timeout(50)), "{err:?}");
    assert!(err.is_retryable());
}
